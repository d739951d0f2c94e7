//! Attrix Core - command routing and table-session building blocks
//!
//! This crate provides the reusable pieces beneath the attribute-table
//! editing session:
//! - A generic command dispatcher with explicit unhandled-command reporting
//! - The boolean query-expression validator and the query-builder draft model
//! - The selection-based row filter controller
//! - The collaborator trait seams (table, selection, view, notifications,
//!   field dialogs)
//! - The error taxonomy and the logging facility
//!
//! The presentation layer, map engine and native table storage live behind
//! the collaborator traits and are out of scope here.

pub mod collaborators;
pub mod dispatch;
pub mod errors;
pub mod logging;
pub mod query;
pub mod row_filter;

// Re-export commonly used types
pub use collaborators::{
    AttributeTable, FeatureSelection, FieldDialogs, NotificationSink, ViewSink,
};
pub use dispatch::{Command, CommandDispatcher, DispatchOutcome, DispatcherBuilder};
pub use errors::{CollaboratorError, CoreError, ErrorKind, Result};
pub use query::{ValidationMode, ValidationOutcome};
pub use row_filter::{RowFilterController, RowFilterState};
