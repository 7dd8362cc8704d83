//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the text value (returns empty string for number fields)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Number(_) => "",
        }
    }

    /// Get the numeric value (returns 0 for text fields)
    pub fn as_number(&self) -> i64 {
        match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(_) => 0,
        }
    }
}

/// A single form field with its write transforms and current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    /// Collapse whitespace runs and strip leading whitespace on write
    pub normalize_whitespace: bool,
    /// Lower clamp for number fields; values never go below this on write
    pub floor: Option<i64>,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, normalize_whitespace: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            normalize_whitespace,
            floor: None,
        }
    }

    /// Create a new number field clamped to a floor, starting at the floor
    pub fn number(name: &str, label: &str, floor: i64) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Number(floor),
            normalize_whitespace: false,
            floor: Some(floor),
        }
    }

    pub fn as_text(&self) -> &str {
        self.value.as_text()
    }

    pub fn as_number(&self) -> i64 {
        self.value.as_number()
    }

    /// Set the text value, applying the normalization transform if enabled
    pub fn set_text(&mut self, value: &str) {
        let stored = if self.normalize_whitespace {
            normalize_whitespace(value)
        } else {
            value.to_string()
        };
        self.value = FieldValue::Text(stored);
    }

    /// Set the numeric value, clamping to the floor
    pub fn set_number(&mut self, value: i64) {
        let clamped = match self.floor {
            Some(floor) => value.max(floor),
            None => value,
        };
        self.value = FieldValue::Number(clamped);
    }

    /// Step the numeric value up; there is no upper bound
    pub fn increment(&mut self) {
        let current = self.as_number();
        self.set_number(current.saturating_add(1));
    }

    /// Step the numeric value down; clamps at the floor
    pub fn decrement(&mut self) {
        let current = self.as_number();
        self.set_number(current.saturating_sub(1));
    }
}

/// Collapse runs of two or more whitespace characters into a single space
/// and strip leading whitespace. A lone whitespace character is kept as-is
/// so values stay editable while typing.
fn normalize_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut run: Option<char> = None;
    let mut run_len = 0usize;
    for c in input.chars() {
        if c.is_whitespace() {
            run = Some(c);
            run_len += 1;
        } else {
            flush_run(&mut out, run, run_len);
            run = None;
            run_len = 0;
            out.push(c);
        }
    }
    flush_run(&mut out, run, run_len);
    out.trim_start().to_string()
}

fn flush_run(out: &mut String, run: Option<char>, run_len: usize) {
    match (run, run_len) {
        (Some(c), 1) => out.push(c),
        (Some(_), _) => out.push(' '),
        (None, _) => {}
    }
}
