use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use attrix_core::collaborators::{
    AttributeTable, FeatureSelection, FieldDialogs, NotificationSink, ViewSink,
};
use attrix_core::errors::CollaboratorError;
use attrix_core_types::{CellValue, Column, ColumnSchema, LayerHandle, RowId, ValueType};
use attrix_session::TableEditingSession;

/// Table collaborator fake with scriptable transaction failures
///
/// Cheap-clone handle: the test keeps a clone to inspect and script, the
/// session owns a boxed clone.
#[derive(Clone, Default)]
pub struct FakeTable {
    inner: Rc<RefCell<TableInner>>,
}

#[derive(Default)]
struct TableInner {
    schema: ColumnSchema,
    editing: bool,
    fail_start: Option<String>,
    fail_stop: Option<String>,
}

#[allow(dead_code)]
impl FakeTable {
    pub fn new() -> Self {
        let table = Self::default();
        table.inner.borrow_mut().schema = ColumnSchema::new(vec![
            Column::new("NAME", ValueType::Text),
            Column::new("POP", ValueType::Integer),
        ]);
        table
    }

    pub fn set_schema(&self, schema: ColumnSchema) {
        self.inner.borrow_mut().schema = schema;
    }

    pub fn fail_next_start(&self, reason: &str) {
        self.inner.borrow_mut().fail_start = Some(reason.to_string());
    }

    pub fn fail_next_stop(&self, reason: &str) {
        self.inner.borrow_mut().fail_stop = Some(reason.to_string());
    }

    pub fn editing(&self) -> bool {
        self.inner.borrow().editing
    }
}

impl AttributeTable for FakeTable {
    fn column_schema(&self) -> ColumnSchema {
        self.inner.borrow().schema.clone()
    }

    fn test_expression(&self, _text: &str, _expected: ValueType) -> Result<(), String> {
        Ok(())
    }

    fn start_editing(&mut self) -> Result<(), CollaboratorError> {
        let mut inner = self.inner.borrow_mut();
        if let Some(reason) = inner.fail_start.take() {
            return Err(CollaboratorError::new(reason));
        }
        inner.editing = true;
        Ok(())
    }

    fn stop_editing(&mut self) -> Result<(), CollaboratorError> {
        let mut inner = self.inner.borrow_mut();
        if let Some(reason) = inner.fail_stop.take() {
            return Err(CollaboratorError::new(reason));
        }
        inner.editing = false;
        Ok(())
    }

    fn is_editing(&self) -> bool {
        self.inner.borrow().editing
    }

    fn unique_values(&self, _column_index: usize) -> Vec<CellValue> {
        Vec::new()
    }
}

/// Selection collaborator fake over a fixed row universe
#[derive(Clone, Default)]
pub struct FakeSelection {
    inner: Rc<RefCell<SelectionInner>>,
}

#[derive(Default)]
struct SelectionInner {
    all_rows: BTreeSet<RowId>,
    selected: BTreeSet<RowId>,
}

#[allow(dead_code)]
impl FakeSelection {
    pub fn new(all: &[u64], selected: &[u64]) -> Self {
        let fake = Self::default();
        {
            let mut inner = fake.inner.borrow_mut();
            inner.all_rows = all.iter().map(|&i| RowId::new(i)).collect();
            inner.selected = selected.iter().map(|&i| RowId::new(i)).collect();
        }
        fake
    }

    pub fn selected(&self) -> BTreeSet<RowId> {
        self.inner.borrow().selected.clone()
    }
}

impl FeatureSelection for FakeSelection {
    fn select_all(&mut self) {
        let mut inner = self.inner.borrow_mut();
        inner.selected = inner.all_rows.clone();
    }

    fn select_none(&mut self) {
        self.inner.borrow_mut().selected.clear();
    }

    fn invert_selection(&mut self) {
        let mut inner = self.inner.borrow_mut();
        inner.selected = inner
            .all_rows
            .difference(&inner.selected)
            .copied()
            .collect();
    }

    fn selected_row_ids(&self) -> BTreeSet<RowId> {
        self.inner.borrow().selected.clone()
    }
}

/// View sink that counts every emitted signal
#[derive(Clone, Default)]
pub struct RecordingView {
    inner: Rc<RefCell<ViewInner>>,
}

#[derive(Default)]
struct ViewInner {
    refreshes: usize,
    schema_refreshes: usize,
    redraws: usize,
    zooms: Vec<LayerHandle>,
}

#[allow(dead_code)]
impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refreshes(&self) -> usize {
        self.inner.borrow().refreshes
    }

    pub fn schema_refreshes(&self) -> usize {
        self.inner.borrow().schema_refreshes
    }

    pub fn redraws(&self) -> usize {
        self.inner.borrow().redraws
    }

    pub fn zooms(&self) -> Vec<LayerHandle> {
        self.inner.borrow().zooms.clone()
    }
}

impl ViewSink for RecordingView {
    fn refresh_view(&self) {
        self.inner.borrow_mut().refreshes += 1;
    }

    fn refresh_schema_projection(&self) {
        self.inner.borrow_mut().schema_refreshes += 1;
    }

    fn request_map_redraw(&self) {
        self.inner.borrow_mut().redraws += 1;
    }

    fn zoom_to_selected(&self, layer: LayerHandle) {
        self.inner.borrow_mut().zooms.push(layer);
    }
}

/// Notification sink that records every message
#[derive(Clone, Default)]
pub struct RecordingNotifications {
    infos: Rc<RefCell<Vec<String>>>,
    warnings: Rc<RefCell<Vec<String>>>,
}

#[allow(dead_code)]
impl RecordingNotifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info_messages(&self) -> Vec<String> {
        self.infos.borrow().clone()
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }
}

impl NotificationSink for RecordingNotifications {
    fn info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
}

/// Field-dialog fake scripted with per-call outcomes
///
/// Outcomes are consumed front-to-back regardless of which operation runs;
/// an unscripted call reports `Ok(false)` (user declined).
#[derive(Clone, Default)]
pub struct ScriptedDialogs {
    inner: Rc<RefCell<DialogsInner>>,
}

#[derive(Default)]
struct DialogsInner {
    outcomes: Vec<Result<bool, CollaboratorError>>,
    calls: Vec<&'static str>,
}

#[allow(dead_code)]
impl ScriptedDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(&self, outcome: Result<bool, CollaboratorError>) {
        self.inner.borrow_mut().outcomes.push(outcome);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.inner.borrow().calls.clone()
    }

    fn next(&self, op: &'static str) -> Result<bool, CollaboratorError> {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(op);
        if inner.outcomes.is_empty() {
            Ok(false)
        } else {
            inner.outcomes.remove(0)
        }
    }
}

impl FieldDialogs for ScriptedDialogs {
    fn add_field(&mut self, _table: &mut dyn AttributeTable) -> Result<bool, CollaboratorError> {
        self.next("add_field")
    }

    fn remove_field(&mut self, _table: &mut dyn AttributeTable) -> Result<bool, CollaboratorError> {
        self.next("remove_field")
    }

    fn rename_field(&mut self, _table: &mut dyn AttributeTable) -> Result<bool, CollaboratorError> {
        self.next("rename_field")
    }

    fn calculate_field(
        &mut self,
        _table: &mut dyn AttributeTable,
    ) -> Result<bool, CollaboratorError> {
        self.next("calculate_field")
    }
}

/// A fully wired session plus the handles the test keeps for inspection
#[allow(dead_code)]
pub struct Harness {
    pub session: TableEditingSession,
    pub view: RecordingView,
    pub notifications: RecordingNotifications,
    pub dialogs: ScriptedDialogs,
    pub table: FakeTable,
    pub selection: FakeSelection,
    pub handle: LayerHandle,
}

/// Build a session and bind a default table on layer handle 1
#[allow(dead_code)]
pub fn bound_session() -> Harness {
    bound_session_with_selection(&[1, 2, 3, 4], &[])
}

/// Build a bound session over the given row universe and selection
#[allow(dead_code)]
pub fn bound_session_with_selection(all: &[u64], selected: &[u64]) -> Harness {
    let view = RecordingView::new();
    let notifications = RecordingNotifications::new();
    let dialogs = ScriptedDialogs::new();
    let table = FakeTable::new();
    let selection = FakeSelection::new(all, selected);
    let handle = LayerHandle::new(1);

    let mut session = TableEditingSession::new(
        Box::new(view.clone()),
        Box::new(notifications.clone()),
        Box::new(dialogs.clone()),
    );
    session.init(handle, Box::new(table.clone()), Box::new(selection.clone()));

    Harness {
        session,
        view,
        notifications,
        dialogs,
        table,
        selection,
        handle,
    }
}

/// Build an unbound session for precondition tests
#[allow(dead_code)]
pub fn inactive_session() -> Harness {
    let view = RecordingView::new();
    let notifications = RecordingNotifications::new();
    let dialogs = ScriptedDialogs::new();

    let session = TableEditingSession::new(
        Box::new(view.clone()),
        Box::new(notifications.clone()),
        Box::new(dialogs.clone()),
    );

    Harness {
        session,
        view,
        notifications,
        dialogs,
        table: FakeTable::new(),
        selection: FakeSelection::default(),
        handle: LayerHandle::new(1),
    }
}
