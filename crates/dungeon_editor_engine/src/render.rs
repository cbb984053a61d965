//! Projection of a session into what a front end draws.
//!
//! Nothing here mutates the session. Front ends either redraw everything from
//! [`render_cells`] or only the cells an input handler returned via [`cell_view`].

use crate::{compositing::Visibility, tools::Tool, Coord, EditSession};

/// Everything needed to draw one cell of the level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellView {
    pub coord: Coord,
    /// z-index of the shown layer or of the blank placeholder
    pub z_index: i32,
    pub character: String,
    pub color: String,
    pub background_color: String,
    pub blank: bool,
    pub highlighted: bool,
    /// Spawn marker, shown only while the spawn tool is active
    pub spawn: bool,
    /// Text cursor, shown only while the text tool is active
    pub cursor: bool,
    pub animated: bool,
    pub animate_random: bool,
}

impl CellView {
    pub fn style(&self) -> String {
        style(&self.color, &self.background_color)
    }
}

/// Inline style for a color pair. Empty colors are left out.
pub fn style(color: &str, background_color: &str) -> String {
    let mut parts = Vec::new();
    if !color.is_empty() {
        parts.push(format!("color:{color}"));
    }
    if !background_color.is_empty() {
        parts.push(format!("background-color:{background_color}"));
    }
    parts.join(";")
}

pub fn cell_view(session: &EditSession, coord: Coord) -> CellView {
    let tool = session.tool();
    let mut view = CellView {
        coord,
        spawn: tool == Tool::SpawnLocation && session.spawns().is_spawn(coord),
        cursor: tool == Tool::Text && session.tools().text_cursor() == Some(coord),
        ..Default::default()
    };
    match session.visible_layer(coord) {
        Visibility::Tile(layer) => {
            let a = &layer.attributes;
            view.z_index = layer.z_index;
            view.character.clone_from(&a.character);
            view.color.clone_from(&a.color);
            view.background_color.clone_from(&a.background_color);
            view.highlighted = session.is_highlighted(coord, layer.z_index);
            view.animated = a.is_animated();
            view.animate_random = a.animate_random;
        }
        Visibility::Blank { z_index } => {
            view.z_index = z_index;
            view.character = " ".to_string();
            view.blank = true;
        }
    }
    view
}

/// Views of every cell, row by row.
pub fn render_cells(session: &EditSession) -> Vec<Vec<CellView>> {
    let grid = session.grid();
    (0..grid.height())
        .map(|row| (0..grid.width()).map(|col| cell_view(session, Coord::new(row, col))).collect())
        .collect()
}

/// Plain text picture of the level, one line per row. With `edges` the
/// border tiles of neighbouring levels are drawn around it.
pub fn render_text(session: &EditSession, edges: bool) -> String {
    let grid = session.grid();
    let margin = i32::from(edges);
    let mut text = String::new();
    for row in -margin..grid.height() + margin {
        for col in -margin..grid.width() + margin {
            let coord = Coord::new(row, col);
            if grid.contains(coord) {
                let view = cell_view(session, coord);
                text.push(view.character.chars().next().unwrap_or(' '));
            } else {
                let ch = session.edge_tiles().tile_at(coord).and_then(|t| t.character.chars().next());
                text.push(ch.unwrap_or(' '));
            }
        }
        text.push('\n');
    }
    text
}
