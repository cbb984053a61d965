//! Unified error types for the level editor core

use thiserror::Error;

use crate::remote::FieldError;

/// Main error type for editor operations
#[derive(Debug, Error)]
pub enum EditorError {
    // === Coordinate Errors ===
    #[error("Invalid coordinate '{value}', expected 'row_col'")]
    InvalidCoordinate { value: String },

    #[error("Coordinate {row}_{col} is outside the {width}x{height} level")]
    OutOfBounds { row: i32, col: i32, width: i32, height: i32 },

    #[error("Invalid level size {width}x{height}")]
    InvalidLevelSize { width: i32, height: i32 },

    #[error("Unknown level edge: {name}")]
    UnknownEdge { name: String },

    // === Tool Errors ===
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Unknown tile template: {id}")]
    UnknownTemplate { id: i64 },

    #[error("Unknown shortlist entry: {id}")]
    UnknownShortlistEntry { id: i64 },

    #[error("Tile template {id} is historic and can't be painted")]
    HistoricTemplate { id: i64 },

    #[error("No tile is being edited")]
    NoPendingTileEdit,

    // === Collaborator Errors ===
    #[error("Errors exist with the tile: {}", format_field_errors(.0))]
    ValidationFailed(Vec<FieldError>),

    #[error("Remote call failed: {0}")]
    Remote(String),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors.iter().map(|e| format!("{} - {}", e.field, e.detail)).collect::<Vec<_>>().join(", ")
}

pub type EditorResult<T> = std::result::Result<T, EditorError>;
