//! Table command handlers - cell edits and row appends.

use crate::domain::document::{DocumentStateStore, StoreError};
use crate::domain::foundation::{ColumnKey, TableKey};

/// Command to edit one cell of a named table.
#[derive(Debug, Clone)]
pub struct SetCellCommand {
    pub table: TableKey,
    pub row: usize,
    pub column: ColumnKey,
    pub value: String,
}

/// Command to append a blank row to a named table.
#[derive(Debug, Clone)]
pub struct AddRowCommand {
    pub table: TableKey,
}

/// Result of a successful table edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEditResult {
    /// Row that was edited or appended.
    pub row: usize,
    pub revision: u64,
}

/// Handler for cell edits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetCellHandler;

impl SetCellHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        store: &mut DocumentStateStore,
        cmd: SetCellCommand,
    ) -> Result<TableEditResult, StoreError> {
        store.set_cell(cmd.table.as_str(), cmd.row, cmd.column.as_str(), cmd.value)?;

        tracing::debug!(
            table = %cmd.table,
            row = cmd.row,
            column = %cmd.column,
            revision = store.revision(),
            "cell edited"
        );
        Ok(TableEditResult {
            row: cmd.row,
            revision: store.revision(),
        })
    }
}

/// Handler for row appends.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddRowHandler;

impl AddRowHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        store: &mut DocumentStateStore,
        cmd: AddRowCommand,
    ) -> Result<TableEditResult, StoreError> {
        let row = store.add_row(cmd.table.as_str())?;

        tracing::debug!(table = %cmd.table, row, revision = store.revision(), "row added");
        Ok(TableEditResult {
            row,
            revision: store.revision(),
        })
    }
}
