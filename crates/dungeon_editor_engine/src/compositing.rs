//! Decides which single layer of a cell is shown for a viewport z-index.

use serde::{Deserialize, Serialize};

use crate::{Cell, Layer};

/// How the layers below the viewport z-index are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Everything up to and including the viewport z-index is visible,
    /// the topmost real tile wins.
    #[default]
    UpToCurrent,
    /// Only tiles exactly on the viewport z-index are visible.
    OnlyCurrent,
}

impl ViewMode {
    pub fn toggle(self) -> ViewMode {
        match self {
            ViewMode::UpToCurrent => ViewMode::OnlyCurrent,
            ViewMode::OnlyCurrent => ViewMode::UpToCurrent,
        }
    }
}

/// Result of compositing a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility<'a> {
    Tile(&'a Layer),
    /// Nothing to show, the cell renders as a blank placeholder at this z-index.
    Blank { z_index: i32 },
}

impl<'a> Visibility<'a> {
    pub fn layer(self) -> Option<&'a Layer> {
        match self {
            Visibility::Tile(layer) => Some(layer),
            Visibility::Blank { .. } => None,
        }
    }

    pub fn z_index(self) -> i32 {
        match self {
            Visibility::Tile(layer) => layer.z_index,
            Visibility::Blank { z_index } => z_index,
        }
    }
}

/// Picks the visible layer of `cell`.
///
/// In [`ViewMode::UpToCurrent`] non-deleted layers at or below `viewport_z` are
/// ranked first by "real tile before placeholder", then by highest z-index. A
/// real tile at a lower z therefore beats a placeholder sitting on the viewport.
pub fn visible_layer(cell: &Cell, viewport_z: i32, mode: ViewMode) -> Visibility<'_> {
    let candidate = match mode {
        ViewMode::OnlyCurrent => cell.layer(viewport_z).filter(|layer| !layer.is_deleted()),
        ViewMode::UpToCurrent => cell
            .layers()
            .filter(|layer| !layer.is_deleted() && layer.z_index <= viewport_z)
            .max_by_key(|layer| (!layer.is_placeholder(), layer.z_index)),
    };

    match candidate {
        Some(layer) if !layer.is_placeholder() => Visibility::Tile(layer),
        Some(layer) => Visibility::Blank { z_index: layer.z_index },
        None => Visibility::Blank { z_index: viewport_z },
    }
}
