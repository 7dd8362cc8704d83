//! Form state management: current values and per-field error messages

use super::field::{FieldValue, FormField};
use crate::schema::{FieldKind, FormSpec};
use std::collections::HashMap;

/// Live in-memory values and error messages for one form instance.
///
/// Created from a [`FormSpec`] with default values, mutated on every
/// set, and reset after a successful submission navigates away. Setting
/// a value never validates by itself; validation runs at submit time.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: Vec<FormField>,
    errors: HashMap<String, String>,
}

impl FormState {
    /// Create form state with default values for every field in the spec
    pub fn from_spec(spec: &FormSpec) -> Self {
        let fields = spec
            .fields()
            .iter()
            .map(|f| match f.kind {
                FieldKind::Number => {
                    FormField::number(f.name, f.label, f.min_value.unwrap_or(1))
                }
                _ => FormField::text(f.name, f.label, f.normalize_whitespace),
            })
            .collect();
        Self {
            fields,
            errors: HashMap::new(),
        }
    }

    /// Get the current value of a field
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.field(name).map(|f| &f.value)
    }

    /// Set a field's value, applying its write transforms.
    ///
    /// Text written to a number field and vice versa is ignored; the
    /// typed setters on [`FormField`] own the transform rules.
    pub fn set(&mut self, name: &str, value: FieldValue) {
        if let Some(field) = self.field_mut(name) {
            match (&field.value, value) {
                (FieldValue::Text(_), FieldValue::Text(s)) => field.set_text(&s),
                (FieldValue::Number(_), FieldValue::Number(n)) => field.set_number(n),
                _ => {}
            }
        }
    }

    /// Convenience setter for text fields
    pub fn set_text(&mut self, name: &str, value: &str) {
        self.set(name, FieldValue::Text(value.to_string()));
    }

    /// Convenience setter for number fields
    pub fn set_number(&mut self, name: &str, value: i64) {
        self.set(name, FieldValue::Number(value));
    }

    /// Step a number field up
    pub fn increment(&mut self, name: &str) {
        if let Some(field) = self.field_mut(name) {
            field.increment();
        }
    }

    /// Step a number field down (clamps at its floor)
    pub fn decrement(&mut self, name: &str) {
        if let Some(field) = self.field_mut(name) {
            field.decrement();
        }
    }

    /// Current error message for a field, if any
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    /// All current per-field error messages
    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    pub fn set_error(&mut self, name: &str, message: String) {
        self.errors.insert(name.to_string(), message);
    }

    pub fn set_errors(&mut self, errors: HashMap<String, String>) {
        self.errors = errors;
    }

    pub fn clear_error(&mut self, name: &str) {
        self.errors.remove(name);
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Snapshot the current values for a submission attempt.
    ///
    /// Later mutations of the form do not affect the snapshot.
    pub fn snapshot(&self) -> HashMap<String, FieldValue> {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }

    /// Restore default values and clear all errors
    pub fn reset(&mut self, spec: &FormSpec) {
        *self = Self::from_spec(spec);
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldSpec;

    fn sample_spec() -> FormSpec {
        FormSpec::new(vec![
            FieldSpec::text("role", "Job Role").normalized(),
            FieldSpec::choice("level", "Level", &["beginner", "intermediate", "senior"]),
            FieldSpec::number("amount", "Amount", 1),
        ])
    }

    #[test]
    fn test_from_spec_uses_defaults() {
        let state = FormState::from_spec(&sample_spec());
        assert_eq!(state.get("role"), Some(&FieldValue::Text(String::new())));
        assert_eq!(state.get("amount"), Some(&FieldValue::Number(1)));
        assert!(state.errors().is_empty());
    }

    #[test]
    fn test_get_unknown_field_is_none() {
        let state = FormState::from_spec(&sample_spec());
        assert!(state.get("nope").is_none());
    }

    #[test]
    fn test_set_applies_normalization_transform() {
        let mut state = FormState::from_spec(&sample_spec());
        state.set_text("role", "Frontend   Developer");
        assert_eq!(state.get("role").unwrap().as_text(), "Frontend Developer");
    }

    #[test]
    fn test_set_number_clamps_to_floor() {
        let mut state = FormState::from_spec(&sample_spec());
        state.set_number("amount", 0);
        assert_eq!(state.get("amount").unwrap().as_number(), 1);
    }

    #[test]
    fn test_mismatched_value_kind_is_ignored() {
        let mut state = FormState::from_spec(&sample_spec());
        state.set("amount", FieldValue::Text("five".to_string()));
        assert_eq!(state.get("amount"), Some(&FieldValue::Number(1)));
    }

    #[test]
    fn test_set_never_touches_errors() {
        let mut state = FormState::from_spec(&sample_spec());
        state.set_error("role", "Job Role is required".to_string());
        state.set_text("role", "Backend Engineer");
        assert_eq!(state.error("role"), Some("Job Role is required"));
    }

    #[test]
    fn test_stepper_helpers() {
        let mut state = FormState::from_spec(&sample_spec());
        state.increment("amount");
        state.increment("amount");
        assert_eq!(state.get("amount").unwrap().as_number(), 3);
        state.decrement("amount");
        state.decrement("amount");
        state.decrement("amount");
        assert_eq!(state.get("amount").unwrap().as_number(), 1);
    }

    #[test]
    fn test_snapshot_is_detached_from_later_edits() {
        let mut state = FormState::from_spec(&sample_spec());
        state.set_text("role", "Backend Engineer");
        let snapshot = state.snapshot();
        state.set_text("role", "Changed Later");
        assert_eq!(
            snapshot.get("role"),
            Some(&FieldValue::Text("Backend Engineer".to_string()))
        );
    }

    #[test]
    fn test_reset_restores_defaults_and_clears_errors() {
        let spec = sample_spec();
        let mut state = FormState::from_spec(&spec);
        state.set_text("role", "Backend Engineer");
        state.set_number("amount", 7);
        state.set_error("level", "Level is required".to_string());
        state.reset(&spec);
        assert_eq!(state.get("role").unwrap().as_text(), "");
        assert_eq!(state.get("amount").unwrap().as_number(), 1);
        assert!(state.errors().is_empty());
    }
}
