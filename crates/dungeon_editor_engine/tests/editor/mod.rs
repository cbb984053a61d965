//! Tests for the edit session
//!
//! These tests drive `EditSession` through pointer and keyboard events the way
//! a front end would and check the grid, the tool state and the submission
//! payload.

mod helpers;

mod compositing_tests;
mod diff_tests;
mod erase_tests;
mod tile_edit_tests;
