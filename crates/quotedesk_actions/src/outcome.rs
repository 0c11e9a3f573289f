//! Per-action execution results.

/// Result of applying one [`ActionRequest`](crate::ActionRequest).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ActionOutcome {
    /// A row was appended
    #[display("Row added: {}", values.join(" | "))]
    Added {
        /// Values written
        values: Vec<String>,
    },
    /// One cell was changed
    #[display("Updated '{}' on row {}: '{}' -> '{}'", column, row_index, previous, value)]
    Updated {
        /// Store row index (header is row 1)
        row_index: usize,
        /// Column changed
        column: String,
        /// Cell value before the change
        previous: String,
        /// Cell value after the change
        value: String,
    },
    /// A row was removed
    #[display("Deleted row {}: {}", row_index, values.join(" | "))]
    Deleted {
        /// Store row index the row occupied
        row_index: usize,
        /// The removed row's cells
        values: Vec<String>,
    },
    /// A referenced column is not in the header; nothing changed
    #[display("Column not found: '{}'", column)]
    ColumnNotFound {
        /// The missing column
        column: String,
    },
    /// No row matched; nothing changed
    #[display("No row found where '{}' is '{}'", search_col, search_value)]
    NotFound {
        /// Column searched
        search_col: String,
        /// Value searched for
        search_value: String,
    },
    /// The action tag was not recognized
    #[display("Unknown action: '{}'", tag)]
    UnknownAction {
        /// The unrecognized tag
        tag: String,
    },
    /// The element could not be decoded into an action
    #[display("Malformed action: {}", reason)]
    Malformed {
        /// Decoding problem
        reason: String,
    },
    /// The row store failed while applying this action
    #[display("Store error: {}", message)]
    StoreFailed {
        /// Error reported by the store
        message: String,
    },
}

impl ActionOutcome {
    /// True when the store was changed.
    pub fn is_applied(&self) -> bool {
        matches!(
            self,
            ActionOutcome::Added { .. }
                | ActionOutcome::Updated { .. }
                | ActionOutcome::Deleted { .. }
        )
    }
}
