//! Form field value objects

use crate::config::SelectOption;

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Select {
        options: &'static [SelectOption],
        selected: Option<usize>,
    },
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new select field over a fixed option list, initially unset
    pub fn select(
        name: &str,
        label: &str,
        placeholder: &str,
        options: &'static [SelectOption],
    ) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: FieldValue::Select {
                options,
                selected: None,
            },
        }
    }

    /// Get the value that would be submitted (empty string while unset)
    pub fn as_value(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Select { options, selected } => {
                selected.map(|i| options[i].value).unwrap_or("")
            }
        }
    }

    /// Whether the field still lacks a submittable value
    pub fn is_empty(&self) -> bool {
        self.as_value().is_empty()
    }

    pub fn is_select(&self) -> bool {
        matches!(self.value, FieldValue::Select { .. })
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Select { .. } => {
                // Select fields are driven by option cycling, not typed input
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Select { .. } => {}
        }
    }

    /// Move a select field to the next option (wraps; starts at the first)
    pub fn select_next(&mut self) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            *selected = match *selected {
                None => Some(0),
                Some(i) => Some((i + 1) % options.len()),
            };
        }
    }

    /// Move a select field to the previous option (wraps; starts at the last)
    pub fn select_prev(&mut self) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            *selected = match *selected {
                None => Some(options.len() - 1),
                Some(0) => Some(options.len() - 1),
                Some(i) => Some(i - 1),
            };
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Select { selected, .. } => *selected = None,
        }
    }

    /// Get the display value for rendering (empty while unset)
    pub fn display_value(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Select { options, selected } => {
                selected.map(|i| options[i].label).unwrap_or("")
            }
        }
    }
}
