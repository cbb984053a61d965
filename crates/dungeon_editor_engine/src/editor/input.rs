use crate::{tools::Tool, ActiveTile, ColorPair, Coord};

use super::EditSession;

/// Modifier keys held during a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { shift: false, ctrl: false };
    pub const SHIFT: Modifiers = Modifiers { shift: true, ctrl: false };
    pub const CTRL_SHIFT: Modifiers = Modifiers { shift: true, ctrl: true };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    /// Picks the tile or colors under the pointer
    Secondary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Character(char),
    Backspace,
    Shift,
    Other,
}

impl EditSession {
    /// Button pressed over a cell. Returns the cells to refresh.
    pub fn pointer_down(&mut self, coord: Coord, button: PointerButton, modifiers: Modifiers) -> Vec<Coord> {
        match button {
            PointerButton::Primary => {
                self.tools.start_painting();
                self.tools.enter(coord);
                self.handle_paint(coord, modifiers)
            }
            PointerButton::Secondary => {
                self.pick(coord);
                Vec::new()
            }
        }
    }

    /// Pointer entered a cell.
    pub fn pointer_move(&mut self, coord: Coord, modifiers: Modifiers) -> Vec<Coord> {
        self.tools.enter(coord);
        self.handle_paint(coord, modifiers)
    }

    /// Button released anywhere, ends the drag.
    pub fn pointer_up(&mut self) {
        self.tools.stop_painting();
    }

    /// Pointer left the grid.
    pub fn pointer_leave(&mut self) {
        self.tools.leave();
    }

    pub fn key_down(&mut self, key: Key) -> Vec<Coord> {
        match key {
            Key::Character(ch) => self.type_character(ch),
            Key::Backspace => self.backspace(),
            Key::Shift => {
                let attributes = self.active.attributes.clone();
                self.highlight_tiles_like(&attributes);
                Vec::new()
            }
            Key::Other => Vec::new(),
        }
    }

    pub fn key_up(&mut self, key: Key) {
        if key == Key::Shift {
            self.clear_highlights();
        }
    }

    fn handle_paint(&mut self, coord: Coord, modifiers: Modifiers) -> Vec<Coord> {
        if !self.tools.painting || self.tools.painted || !self.grid.contains(coord) {
            return Vec::new();
        }
        if let Err(err) = self.check_paintable() {
            log::debug!("{err}");
            return Vec::new();
        }

        match self.tools.tool() {
            Tool::TileErase => self.erase_at(coord),
            Tool::SpawnLocation => {
                self.tools.painted = true;
                self.toggle_spawn(coord);
                vec![coord]
            }
            Tool::Text => self.set_text_cursor(coord),
            Tool::TileEdit => {
                self.tools.painted = true;
                self.open_tile_edit(coord);
                self.set_anchor(coord);
                Vec::new()
            }
            Tool::TilePainting | Tool::ColorPainting | Tool::LineDraw => {
                self.tools.painted = true;
                let coords = self.brush_coords(coord, modifiers.shift, modifiers.ctrl);
                let touched = self.paint_coords(&coords);
                self.set_anchor(coord);
                touched
            }
        }
    }

    fn set_anchor(&mut self, coord: Coord) {
        self.tools.last_coord = Some(coord);
        self.tools.last_dragged_coord = Some(coord);
    }

    /// Right click: takes over the tile or the colors of the visible layer.
    pub fn pick(&mut self, coord: Coord) {
        let tool = self.tools.tool();
        if !tool.can_pick() {
            return;
        }
        self.tools.painting = false;
        self.tools.last_coord = None;
        let Some(layer) = self.visible_layer(coord).layer() else {
            return;
        };
        let attributes = layer.attributes.clone();
        if tool == Tool::TilePainting {
            let mut active = ActiveTile::from_attributes(attributes);
            active.historic = self.is_historic(&active.attributes);
            self.activate(active);
        } else {
            self.set_colors(ColorPair::new(attributes.color, attributes.background_color));
        }
    }
}
