//! Rendering of command results
//!
//! Every command produces one `CommandOutput`, printed either as plain text or
//! as a single-line JSON object.

use serde_json::{Map, Value};

use crate::config::settings::OutputFormat;

/// The result of a CLI command
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    text: String,
    fields: Map<String, Value>,
}

impl CommandOutput {
    /// Output whose text form is `text`
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fields: Map::new(),
        }
    }

    /// Add a field to the JSON form
    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Render for printing
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.text.clone(),
            OutputFormat::Json => Value::Object(self.fields.clone()).to_string(),
        }
    }
}
