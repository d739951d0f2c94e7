//! Identity handles assigned by the host application
//!
//! Layers and rows are owned by the host's map/document context; this core
//! only ever refers to them by handle. Both handles are plain integers in
//! the host, wrapped here so they cannot be confused with each other.

use serde::{Deserialize, Serialize};

/// Identity of a layer (the table under edit) within the host document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerHandle(u32);

impl LayerHandle {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw handle value
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for LayerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a single row within a table
///
/// Ordered so row sets can live in `BTreeSet` and iterate deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowId(u64);

impl RowId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw row identifier
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
