//! Tool definitions for level editing
//!
//! Exactly one tool is active at a time. Tools that paint with colors remember
//! their own color pair, so switching from the text tool to the line tool and
//! back brings the text colors back.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Coord, EditorError};

/// Available editing tools
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Paint the active tile
    #[default]
    TilePainting,
    /// Change only the colors of existing tiles
    ColorPainting,
    /// Open the attribute editor for a single tile
    TileEdit,
    /// Remove the topmost visible tile
    TileErase,
    /// Toggle player spawn locations
    SpawnLocation,
    /// Type characters at a text cursor
    Text,
    /// Draw box-drawing lines that join with their neighbours
    LineDraw,
}

impl Tool {
    pub const ALL: [Tool; 7] = [
        Tool::TilePainting,
        Tool::ColorPainting,
        Tool::TileEdit,
        Tool::TileErase,
        Tool::SpawnLocation,
        Tool::Text,
        Tool::LineDraw,
    ];

    /// Identifier used in scripts and session files
    pub fn id(&self) -> &'static str {
        match self {
            Tool::TilePainting => "tile_painting",
            Tool::ColorPainting => "color_painting",
            Tool::TileEdit => "tile_edit",
            Tool::TileErase => "tile_erase",
            Tool::SpawnLocation => "spawn_location",
            Tool::Text => "text",
            Tool::LineDraw => "line_draw",
        }
    }

    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            Tool::TilePainting => "Tile",
            Tool::ColorPainting => "Color",
            Tool::TileEdit => "Edit Tile",
            Tool::TileErase => "Erase",
            Tool::SpawnLocation => "Spawn Location",
            Tool::Text => "Text",
            Tool::LineDraw => "Line Draw",
        }
    }

    /// Whether the tool shows and remembers a color pair
    pub fn uses_colors(&self) -> bool {
        matches!(self, Tool::TilePainting | Tool::ColorPainting | Tool::Text | Tool::LineDraw)
    }

    /// Whether the tool paints through the shared paint path (drag, shift line, fill)
    pub fn is_brush(&self) -> bool {
        matches!(self, Tool::TilePainting | Tool::ColorPainting | Tool::LineDraw)
    }

    /// Whether a right click picks from the map while this tool is active
    pub fn can_pick(&self) -> bool {
        self.uses_colors()
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Tool {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .iter()
            .copied()
            .find(|tool| tool.id() == s)
            .ok_or_else(|| EditorError::UnknownTool { name: s.to_string() })
    }
}

/// Foreground and background color. Empty strings mean "none".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub color: String,
    pub background_color: String,
}

impl ColorPair {
    pub fn new(color: impl Into<String>, background_color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            background_color: background_color.into(),
        }
    }
}

/// Last used colors, one pair per color using tool.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorMemory {
    tile_painting: ColorPair,
    color_painting: ColorPair,
    text: ColorPair,
    line_draw: ColorPair,
}

impl ColorMemory {
    pub fn get(&self, tool: Tool) -> Option<&ColorPair> {
        match tool {
            Tool::TilePainting => Some(&self.tile_painting),
            Tool::ColorPainting => Some(&self.color_painting),
            Tool::Text => Some(&self.text),
            Tool::LineDraw => Some(&self.line_draw),
            Tool::TileEdit | Tool::TileErase | Tool::SpawnLocation => None,
        }
    }

    fn get_mut(&mut self, tool: Tool) -> Option<&mut ColorPair> {
        match tool {
            Tool::TilePainting => Some(&mut self.tile_painting),
            Tool::ColorPainting => Some(&mut self.color_painting),
            Tool::Text => Some(&mut self.text),
            Tool::LineDraw => Some(&mut self.line_draw),
            Tool::TileEdit | Tool::TileErase | Tool::SpawnLocation => None,
        }
    }
}

/// State machine behind pointer and keyboard input.
#[derive(Clone, Debug, Default)]
pub struct ToolState {
    tool: Tool,
    /// Current color inputs. Follows the active tool's memory when switching.
    colors: ColorPair,
    memory: ColorMemory,

    /// Primary button is held over the level
    pub(crate) painting: bool,
    /// The hovered cell was already painted since the pointer entered it
    pub(crate) painted: bool,
    pub(crate) hovered: Option<Coord>,

    /// Anchor for shift-click straight lines
    pub(crate) last_coord: Option<Coord>,
    /// Previous cell of the current drag
    pub(crate) last_dragged_coord: Option<Coord>,
    /// Top layer revealed by the last erase of this drag
    pub(crate) erased: Option<(Coord, i32)>,
    pub(crate) text_cursor: Option<Coord>,
}

impl ToolState {
    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn colors(&self) -> &ColorPair {
        &self.colors
    }

    pub fn memory(&self) -> &ColorMemory {
        &self.memory
    }

    pub fn is_painting(&self) -> bool {
        self.painting
    }

    pub fn last_coord(&self) -> Option<Coord> {
        self.last_coord
    }

    pub fn last_dragged_coord(&self) -> Option<Coord> {
        self.last_dragged_coord
    }

    pub fn text_cursor(&self) -> Option<Coord> {
        self.text_cursor
    }

    /// Switches the active tool. Transient state of the previous tool is
    /// dropped, the colors of the new tool are restored from memory.
    pub fn select(&mut self, tool: Tool) {
        self.tool = tool;
        self.painting = false;
        self.painted = false;
        self.last_coord = None;
        self.last_dragged_coord = None;
        self.erased = None;
        self.text_cursor = None;
        if let Some(colors) = self.memory.get(tool) {
            self.colors = colors.clone();
        }
    }

    /// Sets the current color inputs and remembers them for the active tool.
    pub fn set_colors(&mut self, colors: ColorPair) {
        if let Some(slot) = self.memory.get_mut(self.tool) {
            *slot = colors.clone();
        }
        self.colors = colors;
    }

    /// Stores colors for `tool` without switching to it.
    pub fn remember(&mut self, tool: Tool, colors: ColorPair) {
        if tool == self.tool {
            self.colors = colors.clone();
        }
        if let Some(slot) = self.memory.get_mut(tool) {
            *slot = colors;
        }
    }

    pub fn set_foreground(&mut self, color: impl Into<String>) {
        let colors = ColorPair::new(color, self.colors.background_color.clone());
        self.set_colors(colors);
    }

    pub fn set_background(&mut self, background_color: impl Into<String>) {
        let colors = ColorPair::new(self.colors.color.clone(), background_color);
        self.set_colors(colors);
    }

    /// A new press may act on the hovered cell again.
    pub(crate) fn start_painting(&mut self) {
        self.painting = true;
        self.painted = false;
    }

    pub(crate) fn stop_painting(&mut self) {
        self.painting = false;
        self.last_dragged_coord = None;
        self.erased = None;
    }

    /// Tracks the hovered cell, a new cell may be painted again.
    pub(crate) fn enter(&mut self, coord: Coord) {
        if self.hovered != Some(coord) {
            self.hovered = Some(coord);
            self.painted = false;
        }
    }

    pub(crate) fn leave(&mut self) {
        self.hovered = None;
        self.painted = false;
    }
}
