//! Field values and the per-form data map.
//!
//! One form instance's data is an opaque, versionless map of field name to
//! value -- the document store owns no schema, so the map round-trips
//! through plain JSON. Field *semantics* live in the requirement catalog
//! and alias table, keyed by the closed `FormType` enum.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single field's value on a form.
///
/// Untagged so persisted JSON stays the natural shape (`"Jane"`, `true`,
/// `3`, `[...]`) rather than an enum envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Whether this value counts as "filled in" for requirement checks.
    ///
    /// Empty text, `false`, and an empty list are all unfilled: a required
    /// checkbox must be checked, not merely present.
    pub fn is_filled(&self) -> bool {
        match self {
            FieldValue::Bool(b) => *b,
            FieldValue::Number(_) => true,
            FieldValue::Text(s) => !s.trim().is_empty(),
            FieldValue::List(items) => !items.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

/// One form instance's field values, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(pub BTreeMap<String, FieldValue>);

impl FormData {
    pub fn new() -> Self {
        FormData(BTreeMap::new())
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.0.get(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(field.into(), value.into());
    }

    /// Present AND filled per `FieldValue::is_filled`.
    pub fn is_filled(&self, field: &str) -> bool {
        self.0.get(field).is_some_and(FieldValue::is_filled)
    }

    /// The field's text content, if it is filled-in text.
    pub fn filled_text(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .filter(|v| v.is_filled())
            .and_then(FieldValue::as_text)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }

    /// Overlay `other` onto `self`: every entry of `other` overwrites any
    /// entry of the same name. Used by the autofill fold, where later
    /// sources outrank earlier ones.
    pub fn overlay(&mut self, other: FormData) {
        for (k, v) in other.0 {
            self.0.insert(k, v);
        }
    }
}

impl FromIterator<(String, FieldValue)> for FormData {
    fn from_iter<T: IntoIterator<Item = (String, FieldValue)>>(iter: T) -> Self {
        FormData(iter.into_iter().collect())
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_not_filled() {
        assert!(!FieldValue::Text(String::new()).is_filled());
        assert!(!FieldValue::Text("   ".to_string()).is_filled());
        assert!(FieldValue::Text("x".to_string()).is_filled());
    }

    #[test]
    fn false_bool_is_not_filled() {
        assert!(!FieldValue::Bool(false).is_filled());
        assert!(FieldValue::Bool(true).is_filled());
    }

    #[test]
    fn numbers_and_nonempty_lists_are_filled() {
        assert!(FieldValue::Number(0.0).is_filled());
        assert!(!FieldValue::List(vec![]).is_filled());
        assert!(FieldValue::List(vec![FieldValue::Bool(true)]).is_filled());
    }

    #[test]
    fn overlay_overwrites_on_collision() {
        let mut base = FormData::new();
        base.insert("county", "Orange");
        base.insert("email", "jane@example.org");
        let mut top = FormData::new();
        top.insert("county", "Los Angeles");
        base.overlay(top);
        assert_eq!(base.filled_text("county"), Some("Los Angeles"));
        assert_eq!(base.filled_text("email"), Some("jane@example.org"));
    }

    #[test]
    fn serde_is_a_plain_json_map() {
        let mut data = FormData::new();
        data.insert("protected_name", "Jane Smith");
        data.insert("order_stay_away", true);
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"protected_name": "Jane Smith", "order_stay_away": true})
        );
        let back: FormData = serde_json::from_value(json).unwrap();
        assert_eq!(back, data);
    }
}
