//! Pure, synchronous validation of a value snapshot against a form spec

use super::spec::{FieldKind, FieldSpec, FormSpec};
use crate::state::FieldValue;
use std::collections::HashMap;

/// Typed, normalized values produced by a successful validation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidValues(HashMap<String, FieldValue>);

impl ValidValues {
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.0.get(name) {
            Some(FieldValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn number(&self, name: &str) -> Option<i64> {
        match self.0.get(name) {
            Some(FieldValue::Number(n)) => Some(*n),
            _ => None,
        }
    }
}

/// Outcome of one validation pass: a typed value set, or one message per
/// offending field. Produced fresh on every attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(ValidValues),
    Invalid(HashMap<String, String>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }
}

/// Validate a snapshot of field values against a spec.
///
/// Pure and idempotent: no side effects, identical input yields an
/// identical result. Fields are checked independently; a field missing
/// from the snapshot is treated as empty.
pub fn validate(spec: &FormSpec, values: &HashMap<String, FieldValue>) -> ValidationResult {
    let mut valid = HashMap::new();
    let mut errors = HashMap::new();
    for field in spec.fields() {
        match check_field(field, values.get(field.name)) {
            Ok(value) => {
                valid.insert(field.name.to_string(), value);
            }
            Err(message) => {
                errors.insert(field.name.to_string(), message);
            }
        }
    }
    if errors.is_empty() {
        ValidationResult::Valid(ValidValues(valid))
    } else {
        ValidationResult::Invalid(errors)
    }
}

/// Validate a single field out of a snapshot; `None` means it passed.
/// Used by the optional validate-on-change path.
pub fn validate_field(
    spec: &FormSpec,
    name: &str,
    values: &HashMap<String, FieldValue>,
) -> Option<String> {
    let field = spec.field(name)?;
    check_field(field, values.get(name)).err()
}

fn check_field(field: &FieldSpec, value: Option<&FieldValue>) -> Result<FieldValue, String> {
    match field.kind {
        FieldKind::Text | FieldKind::Email | FieldKind::Password => {
            let text = match value {
                None => "",
                Some(FieldValue::Text(s)) => s,
                Some(FieldValue::Number(_)) => {
                    return Err(format!("{} must be text", field.label));
                }
            };
            if text.is_empty() {
                if field.required {
                    return Err(format!("{} is required", field.label));
                }
                return Ok(FieldValue::Text(String::new()));
            }
            if let Some(min) = field.min_len {
                if text.chars().count() < min {
                    return Err(format!(
                        "{} must be at least {} characters",
                        field.label, min
                    ));
                }
            }
            if field.kind == FieldKind::Email && !is_valid_email(text) {
                return Err(format!("{} must be a valid email address", field.label));
            }
            Ok(FieldValue::Text(text.to_string()))
        }
        FieldKind::Choice(options) => {
            let text = match value {
                None => "",
                Some(FieldValue::Text(s)) => s,
                Some(FieldValue::Number(_)) => {
                    return Err(format!("{} must be text", field.label));
                }
            };
            if text.is_empty() {
                return Err(format!("{} is required", field.label));
            }
            if !options.contains(&text) {
                return Err(format!(
                    "{} must be one of: {}",
                    field.label,
                    options.join(", ")
                ));
            }
            Ok(FieldValue::Text(text.to_string()))
        }
        FieldKind::Number => {
            let number = match value {
                None => return Err(format!("{} is required", field.label)),
                Some(FieldValue::Number(n)) => *n,
                // Number fields accept digit strings the way a text input
                // delivers them; anything unparseable is a type error.
                Some(FieldValue::Text(s)) => {
                    if s.trim().is_empty() {
                        return Err(format!("{} is required", field.label));
                    }
                    s.trim()
                        .parse::<i64>()
                        .map_err(|_| format!("{} must be a number", field.label))?
                }
            };
            if let Some(min) = field.min_value {
                if number < min {
                    return Err(format!("{} must be at least {}", field.label, min));
                }
            }
            Ok(FieldValue::Number(number))
        }
    }
}

fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.chars().any(char::is_whitespace)
}
