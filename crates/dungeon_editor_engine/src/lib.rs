#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::too_many_lines,
    clippy::must_use_candidate,
    clippy::struct_excessive_bools,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]
//! Editing core of the dungeon level editor.
//!
//! The crate owns everything the level editor needs that is not tied to a
//! particular front end:
//! - `Grid` - per cell stacks of z-indexed tile layers
//! - `ToolState` - the active tool and its transient drag/cursor state
//! - `brushes` - line interpolation, flood fill, junction glyphs, text cursor
//! - `compositing` - which layer of a cell is visible for a viewport z-index
//! - `MapDiff` / `FormPayload` - the additions/changes/deletions submitted at the end of a session
//!
//! `EditSession` ties these together and is driven by pointer and keyboard events.

mod error;
pub use error::*;

mod coord;
pub use coord::*;

mod layer;
pub use layer::*;

mod grid;
pub use grid::*;

pub mod compositing;
pub use compositing::{ViewMode, Visibility};

pub mod tools;
pub use tools::{ColorPair, Tool, ToolState};

mod palette;
pub use palette::*;

mod spawn;
pub use spawn::SpawnSet;

pub mod state_vars;

pub mod brushes;

mod editor;
pub use editor::*;

pub mod remote;

mod shortlist;
pub use shortlist::*;

mod edges;
pub use edges::*;

mod diff;
pub use diff::*;

mod level;
pub use level::*;

pub mod render;
