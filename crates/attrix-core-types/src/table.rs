//! Column schema model for the bound attribute table
//!
//! The schema is owned by the table collaborator and read-only to this core;
//! schema mutation happens through delegated modal operations, after which
//! the collaborator hands out a fresh snapshot.

use serde::{Deserialize, Serialize};

/// Declared value type of a table column or expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    Text,
    Integer,
    Double,
    Boolean,
    Date,
}

impl ValueType {
    /// True for Integer and Double
    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueType::Integer | ValueType::Double)
    }
}

/// A single (name, declared value type) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub value_type: ValueType,
}

impl Column {
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
        }
    }
}

/// Ordered sequence of columns
///
/// Column order is the host's display order and is significant. Name lookup
/// is case-insensitive, matching how the original query engine resolved
/// `[Field]` references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    columns: Vec<Column>,
}

impl ColumnSchema {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Get a column by display index
    pub fn get(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Resolve a column by name, case-insensitively
    pub fn find(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Display index of a column resolved by name, case-insensitively
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
    }
}
