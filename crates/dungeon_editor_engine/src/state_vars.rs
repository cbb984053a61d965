//! Rows of the state variable sub form.
//!
//! A tile's `state` is free text of the form `"blocking: true, open: false"`.
//! The editor only splits it into variable/value rows and joins them back, the
//! meaning of the variables belongs to the game server.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateVariable {
    pub name: String,
    pub value: String,
}

impl StateVariable {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: sanitize(&name.into()),
            value: sanitize(&value.into()),
        }
    }
}

/// Splits a state string into rows. Pairs without a `:` get an empty value.
pub fn parse(state: &str) -> Vec<StateVariable> {
    if state.trim().is_empty() {
        return Vec::new();
    }
    state
        .split(',')
        .map(|pair| match pair.split_once(':') {
            Some((name, value)) => StateVariable::new(name.trim(), value.trim()),
            None => StateVariable::new(pair.trim(), ""),
        })
        .collect()
}

/// Joins rows back into a state string, rows without a name are dropped.
pub fn format(rows: &[StateVariable]) -> String {
    rows.iter()
        .filter(|row| !row.name.is_empty())
        .map(|row| format!("{}: {}", row.name, row.value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `,` and `:` are separators and can't appear in names or values.
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|c| *c != ',' && *c != ':').collect()
}
