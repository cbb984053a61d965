use serde::{Deserialize, Serialize};

use crate::{
    remote::{FieldError, ShortlistService, TileValidator, ValidationRequest},
    state_vars::{self, StateVariable},
    Coord, EditorError, EditorResult, TileAttributes,
};

use super::EditSession;

/// Contents of the tile edit dialog for one slot of the map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileEditForm {
    pub row: i32,
    pub col: i32,
    pub z_index: i32,

    pub name: String,
    pub character: String,
    pub color: String,
    pub background_color: String,
    pub state_variables: Vec<StateVariable>,
    pub script: String,
    pub animate_random: bool,
    pub animate_period: Option<i32>,
    pub animate_characters: String,
    pub animate_colors: String,
    pub animate_background_colors: String,

    /// Problems reported by the last save attempt
    #[serde(skip)]
    pub errors: Vec<FieldError>,
}

impl TileEditForm {
    pub fn new(coord: Coord, z_index: i32, attributes: &TileAttributes) -> Self {
        Self {
            row: coord.row,
            col: coord.col,
            z_index,
            name: attributes.name.clone(),
            character: attributes.character.clone(),
            color: attributes.color.clone(),
            background_color: attributes.background_color.clone(),
            state_variables: state_vars::parse(&attributes.state),
            script: attributes.script.clone(),
            animate_random: attributes.animate_random,
            animate_period: attributes.animate_period,
            animate_characters: attributes.animate_characters.clone(),
            animate_colors: attributes.animate_colors.clone(),
            animate_background_colors: attributes.animate_background_colors.clone(),
            errors: Vec::new(),
        }
    }

    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }

    pub fn add_state_variable(&mut self) {
        self.state_variables.push(StateVariable::default());
    }

    pub fn remove_state_variable(&mut self, index: usize) {
        if index < self.state_variables.len() {
            self.state_variables.remove(index);
        }
    }

    /// Only the first character of the character field counts, an empty field is a space.
    pub fn first_character(&self) -> String {
        self.character.chars().next().unwrap_or(' ').to_string()
    }

    pub fn to_request(&self) -> ValidationRequest {
        let (state_variables, state_values) = self.state_variables.iter().map(|row| (row.name.clone(), row.value.clone())).unzip();
        ValidationRequest {
            row: self.row,
            col: self.col,
            z_index: self.z_index,
            character: self.first_character(),
            color: self.color.clone(),
            background_color: self.background_color.clone(),
            tile_name: self.name.clone(),
            state_variables,
            state_values,
            state: state_vars::format(&self.state_variables),
            script: self.script.clone(),
            name: self.name.clone(),
            animate_random: self.animate_random,
            animate_period: self.animate_period,
            animate_characters: self.animate_characters.clone(),
            animate_colors: self.animate_colors.clone(),
            animate_background_colors: self.animate_background_colors.clone(),
        }
    }

    /// The custom tile the form describes, with the state the server normalized.
    pub fn to_attributes(&self, state: String) -> TileAttributes {
        TileAttributes {
            tile_template_id: None,
            character: self.first_character(),
            color: self.color.clone(),
            background_color: self.background_color.clone(),
            name: self.name.clone(),
            state,
            script: self.script.clone(),
            animate_random: self.animate_random,
            animate_period: self.animate_period,
            animate_characters: self.animate_characters.clone(),
            animate_colors: self.animate_colors.clone(),
            animate_background_colors: self.animate_background_colors.clone(),
            ..Default::default()
        }
    }
}

impl EditSession {
    /// Opens the edit dialog for the viewport slot of `coord`. Empty and erased
    /// slots open an empty form.
    pub fn open_tile_edit(&mut self, coord: Coord) -> Option<&TileEditForm> {
        let z = self.viewport_z();
        let layer = self.grid.get_or_create_layer(coord, z)?;
        let attributes = if layer.is_live() { layer.attributes.clone() } else { TileAttributes::default() };
        self.grid.maintain();
        self.pending_edit = Some(TileEditForm::new(coord, z, &attributes));
        self.pending_edit.as_ref()
    }

    pub fn pending_tile_edit(&self) -> Option<&TileEditForm> {
        self.pending_edit.as_ref()
    }

    pub fn pending_tile_edit_mut(&mut self) -> Option<&mut TileEditForm> {
        self.pending_edit.as_mut()
    }

    pub fn cancel_tile_edit(&mut self) {
        self.pending_edit = None;
    }

    /// Validates the pending edit and paints the result as a custom tile.
    ///
    /// A rejected edit keeps the dialog open with the reported errors and
    /// leaves the map untouched.
    pub fn save_tile_edit(&mut self, validator: &dyn TileValidator) -> EditorResult<Coord> {
        let form = self.pending_edit.as_mut().ok_or(EditorError::NoPendingTileEdit)?;
        let response = validator
            .validate(&form.to_request())
            .inspect_err(|err| log::warn!("tile validation failed: {err}"))?;
        if !response.errors.is_empty() {
            log::warn!("tile edit at {} rejected", form.coord());
            form.errors.clone_from(&response.errors);
            return Err(EditorError::ValidationFailed(response.errors));
        }

        let coord = form.coord();
        let z = form.z_index;
        let attributes = form.to_attributes(response.tile.state);
        self.pending_edit = None;
        self.grid.set_layer_attributes(coord, z, attributes);
        self.grid.maintain();
        log::debug!("saved tile edit at {coord} z-index {z}");
        Ok(coord)
    }

    /// Saves the pending edit and adds the resulting tile to the shortlist.
    pub fn save_tile_edit_and_shortlist(&mut self, validator: &dyn TileValidator, shortlist: &dyn ShortlistService) -> EditorResult<i64> {
        let z = self.pending_edit.as_ref().map(|form| form.z_index).ok_or(EditorError::NoPendingTileEdit)?;
        let coord = self.save_tile_edit(validator)?;
        let attributes = self.grid.get_layer(coord, z).map(|layer| layer.attributes.clone()).unwrap_or_default();
        self.add_to_shortlist(attributes, shortlist)
    }
}
