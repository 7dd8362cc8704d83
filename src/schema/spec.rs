//! Declarative description of a form's fields and validation rules

/// Semantic kind of a form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    /// Value must be one of the listed options
    Choice(&'static [&'static str]),
    /// Integer with an optional lower bound
    Number,
}

/// Validation rules and write transforms for a single field
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub min_len: Option<usize>,
    pub min_value: Option<i64>,
    /// Collapse runs of whitespace and strip leading whitespace on write
    pub normalize_whitespace: bool,
}

impl FieldSpec {
    /// Create a free-text field
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            required: false,
            min_len: None,
            min_value: None,
            normalize_whitespace: false,
        }
    }

    /// Create an email address field
    pub fn email(name: &'static str, label: &'static str) -> Self {
        Self {
            kind: FieldKind::Email,
            ..Self::text(name, label)
        }
    }

    /// Create a password field
    pub fn password(name: &'static str, label: &'static str) -> Self {
        Self {
            kind: FieldKind::Password,
            ..Self::text(name, label)
        }
    }

    /// Create an enumeration field
    pub fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            kind: FieldKind::Choice(options),
            required: true,
            ..Self::text(name, label)
        }
    }

    /// Create a bounded integer field
    pub fn number(name: &'static str, label: &'static str, min: i64) -> Self {
        Self {
            kind: FieldKind::Number,
            required: true,
            min_value: Some(min),
            ..Self::text(name, label)
        }
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Require a minimum character count
    pub fn min_len(mut self, len: usize) -> Self {
        self.min_len = Some(len);
        self
    }

    /// Enable the whitespace normalization transform
    pub fn normalized(mut self) -> Self {
        self.normalize_whitespace = true;
        self
    }
}

/// Declarative description of a form: its fields and validation rules.
///
/// Built once per form mode; field names are unique within a spec.
#[derive(Debug, Clone)]
pub struct FormSpec {
    fields: Vec<FieldSpec>,
    validate_on_change: bool,
}

impl FormSpec {
    /// Create a spec from a list of fields.
    ///
    /// Panics if two fields share a name; specs are static configuration
    /// so a duplicate is a programming error.
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        let mut seen = std::collections::HashSet::new();
        for field in &fields {
            assert!(
                seen.insert(field.name),
                "duplicate field name in form spec: {}",
                field.name
            );
        }
        Self {
            fields,
            validate_on_change: false,
        }
    }

    /// Re-validate a field every time its value changes
    pub fn with_validate_on_change(mut self) -> Self {
        self.validate_on_change = true;
        self
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn validate_on_change(&self) -> bool {
        self.validate_on_change
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_defaults() {
        let field = FieldSpec::text("role", "Job Role");
        assert_eq!(field.kind, FieldKind::Text);
        assert!(!field.required);
        assert!(field.min_len.is_none());
        assert!(field.min_value.is_none());
        assert!(!field.normalize_whitespace);
    }

    #[test]
    fn test_choice_field_is_required_by_default() {
        let field = FieldSpec::choice("level", "Level", &["a", "b"]);
        assert!(field.required);
    }

    #[test]
    fn test_number_field_carries_lower_bound() {
        let field = FieldSpec::number("amount", "Amount", 1);
        assert_eq!(field.min_value, Some(1));
        assert!(field.required);
    }

    #[test]
    fn test_builder_flags() {
        let field = FieldSpec::text("name", "Name").required().min_len(3).normalized();
        assert!(field.required);
        assert_eq!(field.min_len, Some(3));
        assert!(field.normalize_whitespace);
    }

    #[test]
    fn test_spec_field_lookup() {
        let spec = FormSpec::new(vec![
            FieldSpec::text("role", "Job Role"),
            FieldSpec::number("amount", "Amount", 1),
        ]);
        assert_eq!(spec.fields().len(), 2);
        assert_eq!(spec.field("amount").unwrap().label, "Amount");
        assert!(spec.field("missing").is_none());
    }

    #[test]
    #[should_panic(expected = "duplicate field name")]
    fn test_duplicate_field_names_panic() {
        FormSpec::new(vec![
            FieldSpec::text("role", "Job Role"),
            FieldSpec::text("role", "Role Again"),
        ]);
    }

    #[test]
    fn test_validate_on_change_flag() {
        let spec = FormSpec::new(vec![FieldSpec::text("role", "Job Role")]);
        assert!(!spec.validate_on_change());
        let spec = spec.with_validate_on_change();
        assert!(spec.validate_on_change());
    }
}
