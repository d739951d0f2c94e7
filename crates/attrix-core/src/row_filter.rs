//! Selection-based row filtering
//!
//! The row filter restricts which rows the view shows without touching the
//! underlying data. It is a toggle: filtering captures the current selection
//! as the visible set, toggling again (or clearing) restores the
//! unrestricted view. Filtering by an empty selection is valid and yields a
//! visibly empty table.

use std::collections::BTreeSet;

use attrix_core_types::RowId;

use crate::collaborators::FeatureSelection;

/// Filter state of the bound table's row view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowFilterState {
    /// All rows visible
    #[default]
    Unfiltered,
    /// Visible rows restricted to the selection captured at toggle time
    FilteredBySelection,
}

/// Tracks the filter state and the captured restriction set
///
/// Owned by the editing session; single-threaded, no interior locking.
#[derive(Debug, Clone, Default)]
pub struct RowFilterController {
    state: RowFilterState,
    visible: Option<BTreeSet<RowId>>,
}

impl RowFilterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RowFilterState {
        self.state
    }

    pub fn is_filtered(&self) -> bool {
        self.state == RowFilterState::FilteredBySelection
    }

    /// The captured restriction set; `None` means all rows are visible
    pub fn visible_rows(&self) -> Option<&BTreeSet<RowId>> {
        self.visible.as_ref()
    }

    /// True when the row is visible under the current filter
    pub fn row_visible(&self, row: RowId) -> bool {
        match &self.visible {
            None => true,
            Some(set) => set.contains(&row),
        }
    }

    /// Number of visible rows given the table's total row count
    pub fn visible_count(&self, total_rows: usize) -> usize {
        match &self.visible {
            None => total_rows,
            Some(set) => set.len(),
        }
    }

    /// Toggle between the unrestricted view and the current selection
    ///
    /// From `Unfiltered`, captures the selected row ids (possibly empty) and
    /// restricts the view to them. From `FilteredBySelection`, clears the
    /// restriction. Toggling twice is the identity on the visible set.
    pub fn toggle_selection_filter(&mut self, selection: &dyn FeatureSelection) {
        match self.state {
            RowFilterState::Unfiltered => {
                let selected = selection.selected_row_ids();
                tracing::debug!(selected_count = selected.len(), "row filter engaged");
                self.visible = Some(selected);
                self.state = RowFilterState::FilteredBySelection;
            }
            RowFilterState::FilteredBySelection => self.clear_filter(),
        }
    }

    /// Return to the unrestricted view; idempotent
    pub fn clear_filter(&mut self) {
        self.visible = None;
        self.state = RowFilterState::Unfiltered;
    }
}
