//! Collaborators on the server side of the editor.
//!
//! The editor never talks to the network itself. Front ends implement these
//! traits on top of whatever transport they have; a failed call is reported as
//! [`EditorError::Remote`](crate::EditorError::Remote) and leaves the session untouched.

use serde::{Deserialize, Serialize};

use crate::{Edge, EdgeTile, EditorResult, TileAttributes};

/// Field level problem reported by the server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub detail: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            detail: detail.into(),
        }
    }
}

/// Body of the validate-tile call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRequest {
    pub row: i32,
    pub col: i32,
    pub z_index: i32,
    pub character: String,
    pub color: String,
    pub background_color: String,
    pub tile_name: String,
    pub state_variables: Vec<String>,
    pub state_values: Vec<String>,
    pub state: String,
    pub script: String,
    pub name: String,
    pub animate_random: bool,
    pub animate_period: Option<i32>,
    pub animate_characters: String,
    pub animate_colors: String,
    pub animate_background_colors: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedTile {
    #[serde(default)]
    pub state: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    #[serde(default)]
    pub errors: Vec<FieldError>,
    #[serde(default)]
    pub tile: ValidatedTile,
}

impl ValidationResponse {
    pub fn accepted(state: impl Into<String>) -> Self {
        Self {
            errors: Vec::new(),
            tile: ValidatedTile { state: state.into() },
        }
    }

    pub fn rejected(errors: Vec<FieldError>) -> Self {
        Self {
            errors,
            tile: ValidatedTile::default(),
        }
    }
}

/// Server side check of a tile edit. The returned state is the normalized
/// state string built from the state variable rows.
pub trait TileValidator {
    fn validate(&self, request: &ValidationRequest) -> EditorResult<ValidationResponse>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortlistRecord {
    pub id: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortlistResponse {
    #[serde(default)]
    pub errors: Vec<FieldError>,
    pub tile_shortlist: Option<ShortlistRecord>,
    /// Rendered palette entry for the front end
    #[serde(default)]
    pub tile_pre: String,
    /// Hash of the tile attributes, equal hashes are duplicates
    #[serde(default)]
    pub attr_hash: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortlistRemoval {
    pub error: Option<String>,
}

/// Personal quick access list kept on the server.
pub trait ShortlistService {
    fn add(&self, attributes: &TileAttributes) -> EditorResult<ShortlistResponse>;

    fn remove(&self, shortlist_id: i64) -> EditorResult<ShortlistRemoval>;
}

/// Border tiles of neighbouring levels, used to line maps up.
pub trait EdgeTileSource {
    fn fetch(&self, edge: Edge, level_number: i32) -> EditorResult<Vec<EdgeTile>>;
}
