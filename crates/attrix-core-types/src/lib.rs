//! Core types shared across Attrix facilities
//!
//! This crate provides foundational types used by the dispatcher, the
//! editing session and the query validator:
//!
//! - **Handles**: LayerHandle, RowId
//! - **Table model**: ValueType, Column, ColumnSchema, CellValue
//! - **Schema constants**: Canonical field keys and event names for logging

pub mod handles;
pub mod schema;
pub mod table;
pub mod value;

pub use handles::{LayerHandle, RowId};
pub use table::{Column, ColumnSchema, ValueType};
pub use value::CellValue;
