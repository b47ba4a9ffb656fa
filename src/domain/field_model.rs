//! Field model and per-field test states.
//!
//! A scenario is expanded into text fields (three states each) and binary
//! fields (two states each). A [`StateAssignment`] is one concrete pick of a
//! state for every field, kept in declaration order.

use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// State a single field is driven into for one combination.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldState {
    Valid,
    Invalid,
    Empty,
    Checked,
    Unchecked,
}

/// Enumeration order for text fields.
pub const TEXT_STATES: [FieldState; 3] =
    [FieldState::Valid, FieldState::Invalid, FieldState::Empty];

/// Enumeration order for binary fields.
pub const BINARY_STATES: [FieldState; 2] = [FieldState::Checked, FieldState::Unchecked];

impl FieldState {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldState::Valid => "Valid",
            FieldState::Invalid => "Invalid",
            FieldState::Empty => "Empty",
            FieldState::Checked => "Checked",
            FieldState::Unchecked => "Unchecked",
        }
    }

    /// True for the three text-field states.
    pub fn is_text(&self) -> bool {
        matches!(self, FieldState::Valid | FieldState::Invalid | FieldState::Empty)
    }
}

impl std::fmt::Display for FieldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolved text and binary fields for one request.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct FieldModel {
    pub text_fields: Vec<String>,
    pub binary_fields: Vec<String>,
}

impl FieldModel {
    pub fn new(text_fields: Vec<String>, binary_fields: Vec<String>) -> Self {
        Self {
            text_fields,
            binary_fields,
        }
    }

    pub fn from_static(text_fields: &[&str], binary_fields: &[&str]) -> Self {
        Self {
            text_fields: text_fields.iter().map(|f| f.to_string()).collect(),
            binary_fields: binary_fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text_fields.is_empty() && self.binary_fields.is_empty()
    }
}

/// Ordered field name -> state mapping.
///
/// Inserting a name that is already present keeps its original position and
/// replaces the state, so every name appears exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateAssignment {
    entries: Vec<(String, FieldState)>,
    /// Field name -> position in `entries`.
    positions: HashMap<String, usize>,
}

impl StateAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, state: FieldState) {
        let field = field.into();
        match self.positions.get(&field) {
            Some(&position) => self.entries[position].1 = state,
            None => {
                self.positions.insert(field.clone(), self.entries.len());
                self.entries.push((field, state));
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<FieldState> {
        self.positions
            .get(field)
            .map(|&position| self.entries[position].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldState)> {
        self.entries.iter().map(|(name, state)| (name.as_str(), *state))
    }

    /// States that belong to text fields, in field order.
    pub fn text_states(&self) -> impl Iterator<Item = FieldState> + '_ {
        self.entries
            .iter()
            .map(|(_, state)| *state)
            .filter(FieldState::is_text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, FieldState)> for StateAssignment {
    fn from_iter<I: IntoIterator<Item = (S, FieldState)>>(iter: I) -> Self {
        let mut assignment = StateAssignment::new();
        for (field, state) in iter {
            assignment.insert(field, state);
        }
        assignment
    }
}

impl Serialize for StateAssignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, state) in &self.entries {
            map.serialize_entry(name, state)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_declaration_order() {
        let assignment: StateAssignment = [
            ("username", FieldState::Valid),
            ("password", FieldState::Empty),
            ("remember_me", FieldState::Checked),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = assignment.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["username", "password", "remember_me"]);
    }

    #[test]
    fn test_duplicate_name_replaces_state_in_place() {
        let mut assignment = StateAssignment::new();
        assignment.insert("consent", FieldState::Invalid);
        assignment.insert("email", FieldState::Valid);
        assignment.insert("consent", FieldState::Checked);

        assert_eq!(assignment.len(), 2);
        assert_eq!(assignment.get("consent"), Some(FieldState::Checked));
        assert_eq!(assignment.iter().next(), Some(("consent", FieldState::Checked)));
    }

    #[test]
    fn test_large_assignment_inserts_in_linear_time() {
        let count = 50_000;
        let started = std::time::Instant::now();
        let mut assignment: StateAssignment = (0..count)
            .map(|i| (format!("field_{}", i), FieldState::Valid))
            .collect();
        assignment.insert("field_0", FieldState::Empty);

        assert_eq!(assignment.len(), count);
        assert_eq!(assignment.iter().next(), Some(("field_0", FieldState::Empty)));
        assert_eq!(assignment.get("field_49999"), Some(FieldState::Valid));
        assert!(started.elapsed() < std::time::Duration::from_secs(5));
    }

    #[test]
    fn test_text_states_skip_binary_fields() {
        let assignment: StateAssignment = [
            ("otp", FieldState::Invalid),
            ("show_password", FieldState::Unchecked),
        ]
        .into_iter()
        .collect();

        let states: Vec<FieldState> = assignment.text_states().collect();
        assert_eq!(states, vec![FieldState::Invalid]);
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let assignment: StateAssignment = [
            ("zipcode", FieldState::Empty),
            ("accept_terms", FieldState::Checked),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&assignment).unwrap();
        assert_eq!(json, r#"{"zipcode":"Empty","accept_terms":"Checked"}"#);
    }
}
