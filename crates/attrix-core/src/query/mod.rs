//! Boolean query-expression validation and the query-builder draft model
//!
//! The validator type-checks a user-authored expression against the bound
//! table's schema as a boolean-producing expression. The check itself is the
//! table collaborator's capability (the native engine owned it in the
//! original system); this module owns the outcome contract and the two
//! validation modes.

pub mod draft;

pub use draft::ExpressionDraft;

use attrix_core_types::{CellValue, ValueType};

use crate::collaborators::{AttributeTable, NotificationSink};

/// Result of validating a query expression
///
/// The three cases are mutually exclusive and exhaustive; an expression is
/// never partially valid. `Empty` means "not yet attempted" and is distinct
/// from `Invalid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Blank or whitespace-only expression
    Empty,
    /// The expression type-checks to a boolean
    Valid,
    /// Type-checking failed; carries the checker's diagnostic verbatim
    Invalid(String),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// Human-readable status readout for the validation label
    pub fn status_line(&self) -> String {
        match self {
            ValidationOutcome::Empty => "Expression is empty".to_string(),
            ValidationOutcome::Valid => "Expression is valid".to_string(),
            ValidationOutcome::Invalid(msg) => format!("Error: {}", msg),
        }
    }
}

/// How a validation was triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Re-validation on every edit of the expression text; never interrupts
    /// the user, only the status readout changes
    OnTheFly,
    /// Explicit user action; additionally surfaces `Empty` and `Invalid`
    /// results as a notification. A valid expression only updates the
    /// status readout.
    Explicit,
}

/// Validate `expression` as a boolean query against the table's schema
///
/// Blank and whitespace-only input is `Empty`. Otherwise the expression is
/// handed to the table collaborator's type checker with an expected result
/// type of `Boolean`; its diagnostic is propagated unmodified on failure.
/// Stateless and deterministic: identical input yields identical outcomes.
pub fn validate(expression: &str, table: &dyn AttributeTable) -> ValidationOutcome {
    if expression.trim().is_empty() {
        return ValidationOutcome::Empty;
    }

    match table.test_expression(expression, ValueType::Boolean) {
        Ok(()) => ValidationOutcome::Valid,
        Err(diagnostic) => ValidationOutcome::Invalid(diagnostic),
    }
}

/// Validate and, in `Explicit` mode, surface a non-valid status as a
/// notification
///
/// The check is identical in both modes; on-the-fly validation must never
/// interrupt the user, and a valid expression never produces a notification
/// in either mode.
pub fn validate_with_mode(
    expression: &str,
    table: &dyn AttributeTable,
    mode: ValidationMode,
    notifications: &dyn NotificationSink,
) -> ValidationOutcome {
    let outcome = validate(expression, table);
    if mode == ValidationMode::Explicit && !outcome.is_valid() {
        notifications.info(&outcome.status_line());
    }
    outcome
}

/// Distinct values of a column, for the query builder's value picker
pub fn column_values(table: &dyn AttributeTable, column_index: usize) -> Vec<CellValue> {
    table.unique_values(column_index)
}
