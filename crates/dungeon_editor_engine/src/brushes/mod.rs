//! Brush library for level editing operations
//!
//! GUI-independent algorithms behind the painting tools. They only compute
//! coordinates and glyphs, the edit session applies them to the grid.
//!
//! # Features
//! - Straight lines and drag paths (rounded linear interpolation)
//! - Flood fill (4-connected, stack based)
//! - Box-drawing junction glyphs for the line tool
//! - Text cursor movement with wrap-around

pub mod fill;
pub mod junction;
pub mod line;
pub mod text_cursor;

pub use fill::flood_fill;
pub use junction::{junction_glyph, junction_score, LINE_SCORE_MAP};
pub use line::{coords_between, line_between};
pub use text_cursor::{next_cursor, previous_cursor};
