//! Pure-data model of the query-builder expression text
//!
//! The original builder assembled expressions by inserting tokens into a
//! rich-text box on double-click: `[Field] `, an operator, or a value from
//! the unique-value list. The draft keeps that assembly logic free of any
//! widget so the state machine never holds a presentation reference.

use attrix_core_types::CellValue;

/// The expression text under construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionDraft {
    text: String,
}

impl ExpressionDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing expression (e.g. the layer's stored query)
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Append a bracketed column reference followed by a space
    pub fn insert_field(&mut self, name: &str) {
        self.text.push_str(&format!("[{}] ", name));
    }

    /// Append an operator token followed by a space
    pub fn insert_operator(&mut self, op: &str) {
        self.text.push_str(op);
        self.text.push(' ');
    }

    /// Append a value in its literal form followed by a space
    pub fn insert_value(&mut self, value: &CellValue) {
        self.text.push_str(&format!("{} ", value));
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}
