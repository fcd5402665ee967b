//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    /// Numeric input buffer; only digits and a decimal point are accepted
    /// at capture time (exponent and sign characters are rejected).
    Numeric(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its wire name and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field with initial value
    pub fn text(name: &'static str, value: &str) -> Self {
        Self {
            name,
            value: FieldValue::Text(value.to_string()),
        }
    }

    /// Create a new numeric field with initial value
    pub fn numeric(name: &'static str, value: &str) -> Self {
        Self {
            name,
            value: FieldValue::Numeric(value.to_string()),
        }
    }

    /// Get the raw text of the field
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Numeric(s) => s,
        }
    }

    /// Replace the field contents
    pub fn set_text(&mut self, value: &str) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Numeric(s) => {
                s.clear();
                s.push_str(value);
            }
        }
    }

    /// Push a character to the field value.
    ///
    /// Numeric fields accept digits and at most one decimal point;
    /// `e`, `E`, `+`, `-` and any other character are dropped.
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Numeric(s) => {
                if c.is_ascii_digit() || (c == '.' && !s.contains('.')) {
                    s.push(c);
                }
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Numeric(s) => {
                s.pop();
            }
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Numeric(s) => s.clear(),
        }
    }

    /// True when the field holds no characters
    pub fn is_empty(&self) -> bool {
        self.as_text().is_empty()
    }
}
