//! Grid model: per cell stacks of z-indexed layers.

use std::collections::BTreeMap;

use crate::{
    compositing::{self, ViewMode, Visibility},
    Coord, EditorError, EditorResult, Layer, TileAttributes,
};

/// Observed range of z-indices. Only ever grows during a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZBounds {
    pub lower: i32,
    pub upper: i32,
}

impl ZBounds {
    pub fn new(lower: i32, upper: i32) -> Self {
        Self {
            lower: lower.min(upper),
            upper: lower.max(upper),
        }
    }

    pub fn include(&mut self, z: i32) {
        self.lower = self.lower.min(z);
        self.upper = self.upper.max(z);
    }

    pub fn contains(&self, z: i32) -> bool {
        (self.lower..=self.upper).contains(&z)
    }
}

/// All layers of one map location, at most one per z-index.
#[derive(Clone, Debug, Default)]
pub struct Cell {
    layers: BTreeMap<i32, Layer>,
}

impl Cell {
    pub fn layer(&self, z: i32) -> Option<&Layer> {
        self.layers.get(&z)
    }

    /// Layers ordered by ascending z-index.
    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.values()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    fn layer_mut(&mut self, z: i32) -> Option<&mut Layer> {
        self.layers.get_mut(&z)
    }
}

#[derive(Clone, Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    bounds: ZBounds,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> EditorResult<Self> {
        let size = match width.checked_mul(height) {
            Some(size) if width > 0 && height > 0 => size,
            _ => return Err(EditorError::InvalidLevelSize { width, height }),
        };
        Ok(Self {
            width,
            height,
            cells: vec![Cell::default(); size as usize],
            bounds: ZBounds::default(),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn bounds(&self) -> ZBounds {
        self.bounds
    }

    pub(crate) fn set_bounds(&mut self, bounds: ZBounds) {
        self.bounds = bounds;
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row >= 0 && coord.col >= 0 && coord.row < self.height && coord.col < self.width
    }

    pub fn check_bounds(&self, coord: Coord) -> EditorResult<()> {
        if self.contains(coord) {
            Ok(())
        } else {
            Err(EditorError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                width: self.width,
                height: self.height,
            })
        }
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| (coord.row * self.width + coord.col) as usize)
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.index(coord).map(|i| &self.cells[i])
    }

    fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.index(coord).map(|i| &mut self.cells[i])
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Coord::new(row, col)))
    }

    /// Every stored layer with its coordinate, row-major then by z-index.
    pub fn layers(&self) -> impl Iterator<Item = (Coord, &Layer)> + '_ {
        self.coords().zip(self.cells.iter()).flat_map(|(coord, cell)| cell.layers().map(move |layer| (coord, layer)))
    }

    pub fn get_layer(&self, coord: Coord, z: i32) -> Option<&Layer> {
        self.cell(coord)?.layer(z)
    }

    /// Returns the layer at the slot, inserting a placeholder if the slot is empty.
    /// Deleted layers are returned as they are so repainting can revive them.
    pub fn get_or_create_layer(&mut self, coord: Coord, z: i32) -> Option<&mut Layer> {
        let idx = self.index(coord)?;
        let cell = &mut self.cells[idx];
        if !cell.layers.contains_key(&z) {
            cell.layers.insert(z, Layer::placeholder(z));
            self.bounds.include(z);
        }
        self.cells[idx].layer_mut(z)
    }

    pub(crate) fn insert_loaded(&mut self, coord: Coord, z: i32, attributes: TileAttributes) -> EditorResult<()> {
        self.check_bounds(coord)?;
        self.bounds.include(z);
        if let Some(cell) = self.cell_mut(coord) {
            cell.layers.insert(z, Layer::loaded(z, attributes));
        }
        Ok(())
    }

    /// Replaces the attributes at the slot, creating the layer if needed.
    /// Returns false for coordinates outside the grid.
    pub fn set_layer_attributes(&mut self, coord: Coord, z: i32, attributes: TileAttributes) -> bool {
        let Some(layer) = self.get_or_create_layer(coord, z) else {
            return false;
        };
        layer.attributes = attributes;
        layer.touch();
        self.bounds.include(z);
        true
    }

    /// Modifies an existing live layer in place. Empty, placeholder and
    /// deleted slots are left alone.
    pub fn update_layer(&mut self, coord: Coord, z: i32, f: impl FnOnce(&mut TileAttributes)) -> bool {
        let Some(layer) = self.cell_mut(coord).and_then(|cell| cell.layer_mut(z)) else {
            return false;
        };
        if !layer.is_live() {
            return false;
        }
        f(&mut layer.attributes);
        layer.touch();
        true
    }

    /// Changes only the colors of the layer at the slot.
    pub fn recolor_layer(&mut self, coord: Coord, z: i32, color: &str, background_color: &str) -> bool {
        self.update_layer(coord, z, |attributes| {
            attributes.color = color.to_string();
            attributes.background_color = background_color.to_string();
        })
    }

    /// Erases the live layer at exactly `z`. Returns whether something was erased.
    pub fn erase_layer_at(&mut self, coord: Coord, z: i32) -> bool {
        let Some(cell) = self.cell_mut(coord) else {
            return false;
        };
        match cell.layers.get(&z) {
            Some(layer) if layer.is_live() => {
                erase_from_cell(cell, z);
                true
            }
            _ => false,
        }
    }

    /// Erases whatever layer is currently visible at the cell and returns its z-index.
    pub fn erase_visible_layer(&mut self, coord: Coord, viewport_z: i32, mode: ViewMode) -> Option<i32> {
        let z = match self.visible_layer(coord, viewport_z, mode) {
            Visibility::Tile(layer) => layer.z_index,
            Visibility::Blank { .. } => return None,
        };
        self.erase_layer_at(coord, z).then_some(z)
    }

    pub fn visible_layer(&self, coord: Coord, viewport_z: i32, mode: ViewMode) -> Visibility<'_> {
        match self.cell(coord) {
            Some(cell) => compositing::visible_layer(cell, viewport_z, mode),
            None => Visibility::Blank { z_index: viewport_z },
        }
    }

    /// Invariant maintenance run after every batch of mutations: drops the
    /// placeholders synthesized while painting and widens the z bounds to
    /// every live layer.
    pub fn maintain(&mut self) {
        let mut bounds = self.bounds;
        for cell in &mut self.cells {
            cell.layers.retain(|_, layer| !layer.is_placeholder());
            for layer in cell.layers.values().filter(|l| l.is_live()) {
                bounds.include(layer.z_index);
            }
        }
        self.bounds = bounds;
    }
}

/// Level layers are kept as deleted records, layers painted during the
/// session never reached the server and are dropped.
fn erase_from_cell(cell: &mut Cell, z: i32) {
    let from_level = cell.layers.get(&z).is_some_and(Layer::is_from_level);
    if from_level {
        if let Some(layer) = cell.layer_mut(z) {
            layer.mark_deleted();
        }
    } else {
        cell.layers.remove(&z);
    }
}
