//! Tests for the tile edit dialog

use std::cell::RefCell;

use dungeon_editor_engine::{
    remote::{FieldError, TileValidator, ValidationRequest, ValidationResponse},
    state_vars::{self, StateVariable},
    Coord, EditorError, EditorResult, LayerStatus, Tool,
};
use pretty_assertions::assert_eq;

use super::helpers::*;

/// Accepts every edit and normalizes the state rows like the server does
#[derive(Default)]
struct AcceptingValidator {
    requests: RefCell<Vec<ValidationRequest>>,
}

impl TileValidator for AcceptingValidator {
    fn validate(&self, request: &ValidationRequest) -> EditorResult<ValidationResponse> {
        self.requests.borrow_mut().push(request.clone());
        let rows: Vec<StateVariable> = request
            .state_variables
            .iter()
            .zip(&request.state_values)
            .map(|(name, value)| StateVariable::new(name.as_str(), value.as_str()))
            .collect();
        Ok(ValidationResponse::accepted(state_vars::format(&rows)))
    }
}

struct RejectingValidator;

impl TileValidator for RejectingValidator {
    fn validate(&self, _request: &ValidationRequest) -> EditorResult<ValidationResponse> {
        Ok(ValidationResponse::rejected(vec![FieldError::new("script", "unknown script")]))
    }
}

struct OfflineValidator;

impl TileValidator for OfflineValidator {
    fn validate(&self, _request: &ValidationRequest) -> EditorResult<ValidationResponse> {
        Err(EditorError::Remote("connection refused".to_string()))
    }
}

fn open_edit(session: &mut dungeon_editor_engine::EditSession, row: i32, col: i32) {
    session.select_tool(Tool::TileEdit);
    click(session, row, col);
}

#[test]
fn test_open_fills_form_from_layer() {
    let mut door = wall();
    door.state = "blocking: true, open: false".to_string();
    let mut session = create_level_session(3, 3, vec![tile(1, 2, 0, &door)]);
    open_edit(&mut session, 1, 2);

    let form = session.pending_tile_edit().unwrap();
    assert_eq!(form.coord(), Coord::new(1, 2));
    assert_eq!(form.character, "#");
    assert_eq!(form.state_variables, vec![StateVariable::new("blocking", "true"), StateVariable::new("open", "false")]);
}

#[test]
fn test_open_on_empty_slot() {
    let mut session = create_test_session(3, 3);
    open_edit(&mut session, 0, 0);

    let form = session.pending_tile_edit().unwrap();
    assert!(form.character.is_empty());
    assert!(form.state_variables.is_empty());
}

#[test]
fn test_open_on_erased_slot() {
    let mut session = create_level_session(3, 3, vec![tile(0, 0, 0, &wall())]);
    session.select_tool(Tool::TileErase);
    click(&mut session, 0, 0);
    open_edit(&mut session, 0, 0);

    let form = session.pending_tile_edit().unwrap();
    assert!(form.character.is_empty());
    assert!(form.script.is_empty());
    assert!(form.state_variables.is_empty());
}

#[test]
fn test_save_paints_custom_tile() {
    let mut session = create_level_session(3, 3, vec![tile(1, 1, 0, &wall())]);
    open_edit(&mut session, 1, 1);
    {
        let form = session.pending_tile_edit_mut().unwrap();
        form.character = "Dd".to_string();
        form.name = "Door".to_string();
        form.add_state_variable();
        form.state_variables[0] = StateVariable::new("open", "false");
    }

    let validator = AcceptingValidator::default();
    let coord = session.save_tile_edit(&validator).unwrap();
    assert_eq!(coord, Coord::new(1, 1));
    assert!(session.pending_tile_edit().is_none());

    let request = validator.requests.borrow()[0].clone();
    assert_eq!(request.character, "D");
    assert_eq!(request.tile_name, "Door");
    assert_eq!(request.state_variables, vec!["open".to_string()]);
    assert_eq!(request.state_values, vec!["false".to_string()]);

    let attributes = attributes_at(&session, 1, 1, 0);
    assert_eq!(attributes.tile_template_id, None);
    assert_eq!(attributes.character, "D");
    assert_eq!(attributes.state, "open: false");
    assert_eq!(status_at(&session, 1, 1, 0), Some(LayerStatus::Changed));
}

#[test]
fn test_empty_character_becomes_space() {
    let mut session = create_test_session(3, 3);
    open_edit(&mut session, 0, 0);
    session.save_tile_edit(&AcceptingValidator::default()).unwrap();

    assert_eq!(attributes_at(&session, 0, 0, 0).character, " ");
    assert_eq!(status_at(&session, 0, 0, 0), Some(LayerStatus::New));
}

#[test]
fn test_rejected_edit_keeps_form_open() {
    let mut session = create_level_session(3, 3, vec![tile(1, 1, 0, &wall())]);
    open_edit(&mut session, 1, 1);
    session.pending_tile_edit_mut().unwrap().character = "X".to_string();

    let err = session.save_tile_edit(&RejectingValidator).unwrap_err();
    assert!(matches!(err, EditorError::ValidationFailed(ref errors) if errors.len() == 1));
    assert_eq!(err.to_string(), "Errors exist with the tile: script - unknown script");

    let form = session.pending_tile_edit().unwrap();
    assert_eq!(form.errors.len(), 1);
    assert_eq!(attributes_at(&session, 1, 1, 0).character, "#");
    assert!(session.diff().is_empty());
}

#[test]
fn test_failed_validation_call_leaves_map_untouched() {
    let mut session = create_test_session(3, 3);
    open_edit(&mut session, 0, 0);

    assert!(matches!(session.save_tile_edit(&OfflineValidator), Err(EditorError::Remote(_))));
    assert!(session.pending_tile_edit().is_some());
    assert!(session.diff().is_empty());
}

#[test]
fn test_save_without_pending_edit() {
    let mut session = create_test_session(3, 3);
    assert!(matches!(
        session.save_tile_edit(&AcceptingValidator::default()),
        Err(EditorError::NoPendingTileEdit)
    ));
}

#[test]
fn test_state_rows_are_sanitized() {
    let mut session = create_test_session(3, 3);
    open_edit(&mut session, 0, 0);
    {
        let form = session.pending_tile_edit_mut().unwrap();
        form.state_variables.push(StateVariable::new("a:b", "1,2"));
        form.add_state_variable();
        form.remove_state_variable(1);
    }
    session.save_tile_edit(&AcceptingValidator::default()).unwrap();

    assert_eq!(attributes_at(&session, 0, 0, 0).state, "ab: 12");
}
