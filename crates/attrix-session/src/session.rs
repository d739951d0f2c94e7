//! The per-document table editing session
//!
//! One session is alive per open attribute table. Commands flow through an
//! ordered chain: selection commands first, then field-schema mutations,
//! then the lifecycle dispatcher; a command no stage owns ends in an
//! informational not-found notice, never an error. The table collaborator's
//! transaction flag is the single source of truth for the editing state, so
//! cross-document transaction exclusion stays with the collaborator.

use attrix_core::collaborators::{
    AttributeTable, FeatureSelection, FieldDialogs, NotificationSink, ViewSink,
};
use attrix_core::dispatch::{Command, CommandDispatcher};
use attrix_core::errors::{CoreError, Result};
use attrix_core::row_filter::RowFilterController;
use attrix_core_types::schema;
use attrix_core_types::LayerHandle;

use crate::command::TableCommand;

/// Observable state of the session machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No table bound
    Inactive,
    /// Table bound, no editing transaction open
    BoundNotEditing,
    /// Table bound with an open editing transaction
    BoundEditing,
}

struct Binding {
    handle: LayerHandle,
    table: Box<dyn AttributeTable>,
    selection: Box<dyn FeatureSelection>,
}

/// The attribute-table editing session state machine
pub struct TableEditingSession {
    view: Box<dyn ViewSink>,
    notifications: Box<dyn NotificationSink>,
    dialogs: Box<dyn FieldDialogs>,
    binding: Option<Binding>,
    row_filter: RowFilterController,
    lifecycle: CommandDispatcher<TableCommand, TableEditingSession, Result<()>>,
    view_visible: bool,
    dirty: bool,
}

impl TableEditingSession {
    /// Create a session with its injected collaborator sinks
    ///
    /// The lifecycle command table is fixed here; there is no registration
    /// after construction.
    pub fn new(
        view: Box<dyn ViewSink>,
        notifications: Box<dyn NotificationSink>,
        dialogs: Box<dyn FieldDialogs>,
    ) -> Self {
        let lifecycle = CommandDispatcher::builder()
            .handle(TableCommand::StartEdit, Self::cmd_start_edit)
            .handle(TableCommand::SaveChanges, Self::cmd_save_changes)
            .handle(TableCommand::Close, Self::cmd_close)
            .build();

        Self {
            view,
            notifications,
            dialogs,
            binding: None,
            row_filter: RowFilterController::new(),
            lifecycle,
            view_visible: false,
            dirty: false,
        }
    }

    /// Bind a table and its selection engine, activating the session
    ///
    /// Resets the row filter and the dirty flag; the view becomes visible.
    /// Re-binding an already active session rebinds to the new table.
    pub fn init(
        &mut self,
        handle: LayerHandle,
        table: Box<dyn AttributeTable>,
        selection: Box<dyn FeatureSelection>,
    ) {
        tracing::info!(
            component = "table_session",
            op = "init",
            event = schema::EVENT_END,
            layer_handle = handle.as_u32(),
        );
        self.binding = Some(Binding {
            handle,
            table,
            selection,
        });
        self.row_filter.clear_filter();
        self.dirty = false;
        self.view_visible = true;
    }

    /// Current machine state, derived from the collaborator's transaction
    /// flag
    pub fn state(&self) -> SessionState {
        match &self.binding {
            None => SessionState::Inactive,
            Some(b) if b.table.is_editing() => SessionState::BoundEditing,
            Some(_) => SessionState::BoundNotEditing,
        }
    }

    /// True when this session owns `handle`: bound to it with a visible view
    ///
    /// The host uses this guard to decide whether to route further
    /// map-selection events into this session.
    pub fn has_layer(&self, handle: LayerHandle) -> bool {
        self.view_visible
            && self
                .binding
                .as_ref()
                .is_some_and(|b| b.handle == handle)
    }

    pub fn view_visible(&self) -> bool {
        self.view_visible
    }

    pub fn set_view_visible(&mut self, visible: bool) {
        self.view_visible = visible;
    }

    /// The session's row filter, read-only to callers
    pub fn row_filter(&self) -> &RowFilterController {
        &self.row_filter
    }

    /// True when the session holds uncommitted work
    ///
    /// Either a field mutation succeeded since the last init/save/close, or
    /// the table collaborator reports an open editing transaction.
    pub fn has_changes(&self) -> bool {
        self.dirty
            || self
                .binding
                .as_ref()
                .is_some_and(|b| b.table.is_editing())
    }

    /// Commit pending work before closing; false only on commit failure
    pub fn check_and_save_changes(&mut self) -> bool {
        if !self.has_changes() {
            return true;
        }
        let Some(binding) = self.binding.as_mut() else {
            return true;
        };
        if binding.table.is_editing() {
            if let Err(err) = binding.table.stop_editing() {
                self.report_collaborator_failure("save_changes", &CoreError::transaction(err));
                return false;
            }
        }
        self.dirty = false;
        true
    }

    /// The host's selection changed underneath the view
    pub fn selection_changed(&self) {
        self.view.request_map_redraw();
        self.view.refresh_view();
    }

    /// Force the view to re-read the visible rows
    pub fn update_selection(&self) {
        self.view.refresh_view();
    }

    /// Route one user-issued command through the session
    ///
    /// Stage order is significant and fixed: selection commands take
    /// precedence over field commands, which take precedence over the
    /// lifecycle dispatcher. A command no stage owns is reported through the
    /// notification sink and is not an error.
    ///
    /// # Errors
    ///
    /// `CoreError::NoBoundTable` when a command requiring a binding arrives
    /// while the session is inactive; that is a host wiring bug, not a
    /// reachable user condition.
    pub fn run_command(&mut self, cmd: TableCommand) -> Result<()> {
        tracing::debug!(
            component = "table_session",
            op = "run_command",
            event = schema::EVENT_START,
            cmd = cmd.name(),
        );

        let stages: [fn(&mut Self, TableCommand) -> Result<bool>; 2] =
            [Self::handle_selection, Self::handle_fields];
        for stage in stages {
            if stage(self, cmd)? {
                return Ok(());
            }
        }

        match self.lifecycle.handler(cmd) {
            Some(handler) => handler(self),
            None => {
                self.command_not_found(cmd.name());
                Ok(())
            }
        }
    }

    // ===== Chain stage 1: selection commands =====

    fn handle_selection(&mut self, cmd: TableCommand) -> Result<bool> {
        if !cmd.is_selection() {
            return Ok(false);
        }
        let Some(binding) = self.binding.as_mut() else {
            return Err(CoreError::NoBoundTable {
                command: cmd.name(),
            });
        };

        match cmd {
            TableCommand::SelectAll => {
                binding.selection.select_all();
                self.view.refresh_view();
                self.view.request_map_redraw();
            }
            TableCommand::ClearSelection => {
                binding.selection.select_none();
                self.view.refresh_view();
                self.view.request_map_redraw();
            }
            TableCommand::InvertSelection => {
                binding.selection.invert_selection();
                self.view.refresh_view();
                self.view.request_map_redraw();
            }
            TableCommand::ZoomToSelected => {
                self.view.zoom_to_selected(binding.handle);
                self.view.refresh_view();
                self.view.request_map_redraw();
            }
            TableCommand::ShowSelected => {
                self.row_filter
                    .toggle_selection_filter(binding.selection.as_ref());
                self.view.refresh_view();
            }
            _ => unreachable!("is_selection() covers the match"),
        }
        Ok(true)
    }

    // ===== Chain stage 2: field-schema mutations =====

    fn handle_fields(&mut self, cmd: TableCommand) -> Result<bool> {
        if !cmd.is_field_mutation() {
            return Ok(false);
        }
        let Some(binding) = self.binding.as_mut() else {
            return Err(CoreError::NoBoundTable {
                command: cmd.name(),
            });
        };

        let result = match cmd {
            TableCommand::AddField => self.dialogs.add_field(binding.table.as_mut()),
            TableCommand::RemoveField => self.dialogs.remove_field(binding.table.as_mut()),
            TableCommand::RenameField => self.dialogs.rename_field(binding.table.as_mut()),
            TableCommand::CalculateField => self.dialogs.calculate_field(binding.table.as_mut()),
            _ => unreachable!("is_field_mutation() covers the match"),
        };

        match result {
            Ok(true) => {
                tracing::info!(
                    component = "table_session",
                    op = "field_mutation",
                    event = schema::EVENT_END,
                    cmd = cmd.name(),
                );
                self.dirty = true;
                self.view.refresh_schema_projection();
            }
            Ok(false) => {
                // Declined or cancelled: no state change, no signal.
            }
            Err(err) => {
                let err = CoreError::field_mutation(cmd.name(), err);
                self.report_collaborator_failure(cmd.name(), &err);
            }
        }
        Ok(true)
    }

    // ===== Chain stage 3: lifecycle dispatcher handlers =====

    fn cmd_start_edit(&mut self) -> Result<()> {
        let Some(binding) = self.binding.as_mut() else {
            return Err(CoreError::NoBoundTable {
                command: "StartEdit",
            });
        };
        if binding.table.is_editing() {
            // Already in a transaction: idempotent no-op, no signal.
            return Ok(());
        }
        match binding.table.start_editing() {
            Ok(()) => {
                tracing::info!(
                    component = "table_session",
                    op = "start_edit",
                    event = schema::EVENT_END,
                    layer_handle = binding.handle.as_u32(),
                );
                self.view.refresh_view();
            }
            Err(err) => self.report_collaborator_failure("StartEdit", &CoreError::transaction(err)),
        }
        Ok(())
    }

    fn cmd_save_changes(&mut self) -> Result<()> {
        let Some(binding) = self.binding.as_mut() else {
            return Err(CoreError::NoBoundTable {
                command: "SaveChanges",
            });
        };
        if !binding.table.is_editing() {
            // Nothing to commit: idempotent no-op, no signal.
            return Ok(());
        }
        match binding.table.stop_editing() {
            Ok(()) => {
                tracing::info!(
                    component = "table_session",
                    op = "save_changes",
                    event = schema::EVENT_END,
                    layer_handle = binding.handle.as_u32(),
                );
                self.dirty = false;
                self.view.refresh_view();
            }
            Err(err) => {
                self.report_collaborator_failure("SaveChanges", &CoreError::transaction(err))
            }
        }
        Ok(())
    }

    /// Unbind without committing or discarding; callers run
    /// `check_and_save_changes` first. Closing an inactive session is a
    /// no-op.
    fn cmd_close(&mut self) -> Result<()> {
        if let Some(binding) = self.binding.take() {
            tracing::info!(
                component = "table_session",
                op = "close",
                event = schema::EVENT_END,
                layer_handle = binding.handle.as_u32(),
            );
        }
        self.row_filter.clear_filter();
        self.dirty = false;
        self.view_visible = false;
        Ok(())
    }

    // ===== Reporting =====

    fn command_not_found(&self, name: &str) {
        tracing::debug!(
            component = "table_session",
            op = "run_command",
            event = schema::EVENT_END,
            cmd = name,
            "no handler found"
        );
        self.notifications
            .info(&format!("No handler found for command: {}", name));
    }

    fn report_collaborator_failure(&self, operation: &str, err: &CoreError) {
        tracing::warn!(
            component = "table_session",
            op = operation,
            event = schema::EVENT_END_ERROR,
            err.kind = ?err.kind(),
            err.code = err.code(),
            reason = %err,
        );
        self.notifications.warn(&err.to_string());
    }
}
