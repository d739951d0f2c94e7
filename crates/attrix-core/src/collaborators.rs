//! Collaborator trait seams
//!
//! Everything the core consumes from, or signals to, the host application
//! goes through these traits: the native table storage, the selection
//! engine, the presentation layer and the modal field-schema dialogs. All
//! calls are synchronous and treated as atomic by the core (single-threaded
//! model); cross-document exclusion is the collaborator's responsibility.

use std::collections::BTreeSet;

use attrix_core_types::{CellValue, ColumnSchema, LayerHandle, RowId, ValueType};

use crate::errors::CollaboratorError;

/// The native table storage behind the bound layer
pub trait AttributeTable {
    /// Snapshot of the current column schema, in display order
    fn column_schema(&self) -> ColumnSchema;

    /// Type-check `text` as an expression producing `expected`
    ///
    /// `Err` carries the checker's diagnostic verbatim; the validator
    /// propagates it unmodified.
    fn test_expression(&self, text: &str, expected: ValueType) -> std::result::Result<(), String>;

    /// Open an editing transaction on the table
    fn start_editing(&mut self) -> std::result::Result<(), CollaboratorError>;

    /// Commit the open editing transaction
    fn stop_editing(&mut self) -> std::result::Result<(), CollaboratorError>;

    /// True while an editing transaction is open
    ///
    /// This flag is the single source of truth for the session's editing
    /// state.
    fn is_editing(&self) -> bool;

    /// Distinct values of the column at `column_index`, for the query
    /// builder's value picker
    fn unique_values(&self, column_index: usize) -> Vec<CellValue>;
}

/// The host's feature-selection engine for the bound layer
pub trait FeatureSelection {
    fn select_all(&mut self);
    fn select_none(&mut self);
    fn invert_selection(&mut self);

    /// Identifiers of the currently selected rows
    ///
    /// An empty set is a valid answer, not an error.
    fn selected_row_ids(&self) -> BTreeSet<RowId>;
}

/// Signals emitted by the core, consumed by the excluded presentation layer
///
/// The core never holds a live reference to a widget; these are
/// fire-and-forget notifications the view reacts to on its own terms.
pub trait ViewSink {
    /// The visible row data should be re-read
    fn refresh_view(&self);

    /// Schema-derived projections (column lists etc.) should be rebuilt
    fn refresh_schema_projection(&self);

    /// The map surface should redraw
    fn request_map_redraw(&self);

    /// The map viewport should move to the selected features of `layer`
    fn zoom_to_selected(&self, layer: LayerHandle);
}

/// User-facing notification channel
///
/// Injected at construction so tests can substitute a recording sink; there
/// is no ambient/global message service in this core.
pub trait NotificationSink {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Modal field-schema mutation operations
///
/// Each call runs an independent modal operation against the table's schema.
/// `Ok(true)` means the mutation was applied, `Ok(false)` that the user
/// declined or the operation was a no-op; `Err` is a collaborator failure.
pub trait FieldDialogs {
    fn add_field(
        &mut self,
        table: &mut dyn AttributeTable,
    ) -> std::result::Result<bool, CollaboratorError>;

    fn remove_field(
        &mut self,
        table: &mut dyn AttributeTable,
    ) -> std::result::Result<bool, CollaboratorError>;

    fn rename_field(
        &mut self,
        table: &mut dyn AttributeTable,
    ) -> std::result::Result<bool, CollaboratorError>;

    fn calculate_field(
        &mut self,
        table: &mut dyn AttributeTable,
    ) -> std::result::Result<bool, CollaboratorError>;
}
