//! Command inventory of the attribute-table editor
//!
//! The shell defines more commands than this session owns; the unowned ones
//! (`Find`, `Join`) route to the informational not-found notice instead of
//! being silently ignored.

use attrix_core::dispatch::Command;

/// All commands the shell can issue against the table editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableCommand {
    // Session lifecycle
    StartEdit,
    SaveChanges,
    Close,

    // Field schema mutation (modal, delegated)
    AddField,
    RemoveField,
    RenameField,
    CalculateField,

    // Selection
    SelectAll,
    ClearSelection,
    InvertSelection,
    ZoomToSelected,
    ShowSelected,

    // Shell-level commands outside this session's remit
    Find,
    Join,
}

impl Command for TableCommand {
    fn name(&self) -> &'static str {
        match self {
            TableCommand::StartEdit => "StartEdit",
            TableCommand::SaveChanges => "SaveChanges",
            TableCommand::Close => "Close",
            TableCommand::AddField => "AddField",
            TableCommand::RemoveField => "RemoveField",
            TableCommand::RenameField => "RenameField",
            TableCommand::CalculateField => "CalculateField",
            TableCommand::SelectAll => "SelectAll",
            TableCommand::ClearSelection => "ClearSelection",
            TableCommand::InvertSelection => "InvertSelection",
            TableCommand::ZoomToSelected => "ZoomToSelected",
            TableCommand::ShowSelected => "ShowSelected",
            TableCommand::Find => "Find",
            TableCommand::Join => "Join",
        }
    }
}

impl TableCommand {
    /// True for the selection-group commands handled by the first chain stage
    pub fn is_selection(&self) -> bool {
        matches!(
            self,
            TableCommand::SelectAll
                | TableCommand::ClearSelection
                | TableCommand::InvertSelection
                | TableCommand::ZoomToSelected
                | TableCommand::ShowSelected
        )
    }

    /// True for the field-schema mutation commands
    pub fn is_field_mutation(&self) -> bool {
        matches!(
            self,
            TableCommand::AddField
                | TableCommand::RemoveField
                | TableCommand::RenameField
                | TableCommand::CalculateField
        )
    }
}
