use crate::{
    brushes::{coords_between, flood_fill, junction_glyph, junction_score, next_cursor, previous_cursor},
    tools::Tool,
    Coord, EditorError, EditorResult, Layer, TileAttributes, LINE_POINT_NAME,
};

use super::EditSession;

/// Character of a line point before its junction glyph is known
const LINE_POINT_CHAR: &str = "⋅";
const LINE_POINT_STATE: &str = "blocking: true";

impl EditSession {
    /// Tile painting is blocked while a historic template is active.
    pub fn check_paintable(&self) -> EditorResult<()> {
        if self.tools.tool() == Tool::TilePainting && self.active.historic {
            let id = self.active.attributes.tile_template_id.unwrap_or_default();
            return Err(EditorError::HistoricTemplate { id });
        }
        Ok(())
    }

    /// Cells a brush stroke ending at `target` covers.
    pub(crate) fn brush_coords(&self, target: Coord, shift: bool, ctrl: bool) -> Vec<Coord> {
        if shift && ctrl {
            self.fill_coords(target)
        } else if shift {
            coords_between(self.tools.last_coord, target)
        } else {
            coords_between(self.tools.last_dragged_coord, target)
        }
    }

    /// Connected region around `origin` whose viewport slot shows the same tile.
    pub fn fill_coords(&self, origin: Coord) -> Vec<Coord> {
        let origin_key = self.slot_key(origin);
        flood_fill(origin, self.grid.width(), self.grid.height(), |coord| self.slot_key(coord) == origin_key)
    }

    /// Template id and colors of the live layer at the viewport slot. Empty slots
    /// compare equal to each other.
    fn slot_key(&self, coord: Coord) -> Option<(Option<i64>, &str, &str)> {
        self.grid
            .get_layer(coord, self.viewport_z)
            .filter(|layer| layer.is_live())
            .map(|layer| layer.attributes.fill_key())
    }

    /// Applies the active brush to every coordinate and returns the cells to
    /// refresh.
    pub(crate) fn paint_coords(&mut self, coords: &[Coord]) -> Vec<Coord> {
        let tool = self.tools.tool();
        if !tool.is_brush() {
            return Vec::new();
        }
        let mut touched = Vec::with_capacity(coords.len());
        for &coord in coords {
            if !self.grid.contains(coord) {
                continue;
            }
            match tool {
                Tool::TilePainting => {
                    self.paint_tile(coord, self.active.attributes.clone());
                }
                Tool::ColorPainting => {
                    self.color_tile(coord);
                }
                _ => {
                    touched.extend(self.draw_line_point(coord));
                }
            }
            touched.push(coord);
        }
        self.grid.maintain();
        touched.sort_unstable();
        touched.dedup();
        log::debug!("{tool} touched {} cells at z-index {}", touched.len(), self.viewport_z);
        touched
    }

    /// Writes `attributes` into the viewport slot of `coord`.
    pub fn paint_tile(&mut self, coord: Coord, attributes: TileAttributes) -> bool {
        self.grid.set_layer_attributes(coord, self.viewport_z, attributes)
    }

    /// Recolors the layer at the viewport slot with the current colors.
    /// Empty slots stay empty.
    pub fn color_tile(&mut self, coord: Coord) -> bool {
        let colors = self.tools.colors().clone();
        self.grid.recolor_layer(coord, self.viewport_z, &colors.color, &colors.background_color)
    }

    /// Places a line point and reshapes it and its neighbours into junction
    /// glyphs. Returns the neighbours that changed.
    pub fn draw_line_point(&mut self, coord: Coord) -> Vec<Coord> {
        let colors = self.tools.colors();
        let attributes = TileAttributes {
            character: LINE_POINT_CHAR.to_string(),
            color: colors.color.clone(),
            background_color: colors.background_color.clone(),
            name: LINE_POINT_NAME.to_string(),
            state: LINE_POINT_STATE.to_string(),
            ..Default::default()
        };
        if !self.paint_tile(coord, attributes) {
            return Vec::new();
        }
        self.refresh_line_points_around(coord)
    }

    fn is_line_point_at(&self, coord: Coord) -> bool {
        self.grid.get_layer(coord, self.viewport_z).is_some_and(Layer::is_line_point)
    }

    /// Recomputes the glyph of the line point at `coord`, if there is one.
    /// Only a changed glyph marks the layer as changed.
    fn refresh_line_point(&mut self, coord: Coord) -> bool {
        if !self.is_line_point_at(coord) {
            return false;
        }
        let glyph = junction_glyph(junction_score(coord, |c| self.is_line_point_at(c))).to_string();
        let unchanged = self.grid.get_layer(coord, self.viewport_z).is_some_and(|layer| layer.attributes.character == glyph);
        if unchanged {
            return false;
        }
        self.grid.update_layer(coord, self.viewport_z, |attributes| attributes.character = glyph)
    }

    /// Refreshes `coord` and its four neighbours, returns the cells that changed.
    fn refresh_line_points_around(&mut self, coord: Coord) -> Vec<Coord> {
        let mut touched = Vec::new();
        for c in std::iter::once(coord).chain(coord.adjacent()) {
            if self.grid.contains(c) && self.refresh_line_point(c) {
                touched.push(c);
            }
        }
        touched
    }

    /// Erases the visible layer of `coord` unless it is the layer revealed by
    /// the previous erase of this drag.
    pub fn erase_at(&mut self, coord: Coord) -> Vec<Coord> {
        let Some(top) = self.visible_layer(coord).layer() else {
            return Vec::new();
        };
        let z = top.z_index;
        if self.tools.erased == Some((coord, z)) {
            return Vec::new();
        }
        let was_line_point = top.is_line_point();
        if !self.grid.erase_layer_at(coord, z) {
            return Vec::new();
        }
        log::trace!("erased {coord} at z-index {z}");

        let mut touched = vec![coord];
        if was_line_point {
            touched.extend(self.refresh_line_points_around(coord));
        }
        if let Some(revealed) = self.visible_layer(coord).layer() {
            self.tools.erased = Some((coord, revealed.z_index));
        }
        self.grid.maintain();
        touched
    }

    /// Flips the spawn flag of `coord`.
    pub fn toggle_spawn(&mut self, coord: Coord) -> bool {
        let enabled = self.spawns.toggle(coord);
        log::debug!("spawn {coord} {}", if enabled { "on" } else { "off" });
        enabled
    }

    pub fn set_text_cursor(&mut self, coord: Coord) -> Vec<Coord> {
        let previous = self.tools.text_cursor.replace(coord);
        previous.into_iter().chain(std::iter::once(coord)).collect()
    }

    /// Paints `ch` at the text cursor and advances it.
    pub fn type_character(&mut self, ch: char) -> Vec<Coord> {
        if self.tools.tool() != Tool::Text || ch.is_control() {
            return Vec::new();
        }
        let Some(cursor) = self.tools.text_cursor else {
            return Vec::new();
        };
        let colors = self.tools.colors();
        let attributes = TileAttributes::custom(ch.to_string(), colors.color.clone(), colors.background_color.clone());
        self.paint_tile(cursor, attributes);
        self.grid.maintain();

        let next = next_cursor(cursor, self.grid.width(), self.grid.height());
        self.tools.text_cursor = Some(next);
        vec![cursor, next]
    }

    /// Steps the text cursor back and erases the viewport slot it lands on.
    pub fn backspace(&mut self) -> Vec<Coord> {
        if self.tools.tool() != Tool::Text {
            return Vec::new();
        }
        let Some(cursor) = self.tools.text_cursor else {
            return Vec::new();
        };
        let previous = previous_cursor(cursor, self.grid.width(), self.grid.height());
        self.grid.erase_layer_at(previous, self.viewport_z);
        self.grid.maintain();
        self.tools.text_cursor = Some(previous);
        vec![cursor, previous]
    }
}
