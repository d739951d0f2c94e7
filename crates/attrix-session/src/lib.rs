//! Attrix Session - the attribute-table editing state machine
//!
//! Composes the core dispatcher, row filter and collaborator seams into the
//! per-document `TableEditingSession`: a three-state machine (inactive,
//! bound, bound-and-editing) that routes every user-issued table command,
//! delegates modal field mutations, and emits refresh/redraw signals to the
//! excluded presentation layer.

pub mod command;
pub mod session;

pub use command::TableCommand;
pub use session::{SessionState, TableEditingSession};
