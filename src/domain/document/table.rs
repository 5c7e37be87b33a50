//! Table - generic, column-parameterized grid used by every tabular section.
//!
//! A `Table` is an immutable value. `set_cell` and `add_row` return a new
//! table and leave the receiver untouched, so a reference held by the
//! render surface never changes underneath it.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::catalog::{Column, TableSpec};
use crate::domain::foundation::{ColumnKey, DomainError, ErrorCode};

/// Errors raised by table mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Row index {index} is out of range for a table of {len} rows")]
    RowOutOfRange { index: usize, len: usize },

    #[error("Column '{column}' is not declared for this table")]
    UnknownColumn { column: String },

    #[error("Row {row} does not carry exactly the declared column keys")]
    KeyMismatch { row: usize },
}

impl From<TableError> for DomainError {
    fn from(err: TableError) -> Self {
        let code = match &err {
            TableError::RowOutOfRange { .. } => ErrorCode::OutOfRange,
            TableError::UnknownColumn { .. } => ErrorCode::ColumnNotFound,
            TableError::KeyMismatch { .. } => ErrorCode::ValidationFailed,
        };
        DomainError::new(code, err.to_string())
    }
}

/// One row: a mapping from the table's column keys to text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TableRow {
    cells: BTreeMap<ColumnKey, String>,
}

impl TableRow {
    /// A row with every declared column mapped to empty text.
    pub fn blank(columns: &[Column]) -> Self {
        columns
            .iter()
            .map(|c| (c.key.clone(), String::new()))
            .collect()
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Cell values in the given column order. Missing cells read as empty.
    pub fn values_in<'a>(&'a self, columns: &'a [Column]) -> impl Iterator<Item = &'a str> + 'a {
        columns
            .iter()
            .map(move |c| self.get(c.key.as_str()).unwrap_or_default())
    }

    /// True when every cell is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.cells.values().all(|v| v.trim().is_empty())
    }

    fn has_key_set(&self, columns: &[Column]) -> bool {
        self.cells.len() == columns.len()
            && columns.iter().all(|c| self.cells.contains_key(c.key.as_str()))
    }

    fn with_value(&self, column: &ColumnKey, value: String) -> Self {
        let mut cells = self.cells.clone();
        cells.insert(column.clone(), value);
        Self { cells }
    }
}

impl<K: Into<ColumnKey>, V: Into<String>> FromIterator<(K, V)> for TableRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Ordered sequence of rows sharing one declared column key set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: Arc<[Column]>,
    rows: Vec<TableRow>,
}

impl Table {
    /// Creates a table, checking that every row carries exactly the declared keys.
    pub fn new(columns: impl Into<Arc<[Column]>>, rows: Vec<TableRow>) -> Result<Self, TableError> {
        let columns = columns.into();
        if let Some(row) = rows.iter().position(|r| !r.has_key_set(&columns)) {
            return Err(TableError::KeyMismatch { row });
        }
        Ok(Self { columns, rows })
    }

    /// A table with the given columns and no rows.
    pub fn empty(columns: impl Into<Arc<[Column]>>) -> Self {
        Self {
            columns: columns.into(),
            rows: Vec::new(),
        }
    }

    /// Seeds a table from its catalog declaration. Omitted default cells start empty.
    pub fn seeded(spec: &TableSpec) -> Result<Self, TableError> {
        let columns: Arc<[Column]> = spec.columns.clone().into();
        let rows = spec
            .default_rows
            .iter()
            .map(|defaults| {
                columns
                    .iter()
                    .map(|c| {
                        let value = defaults.get(c.key.as_str()).cloned().unwrap_or_default();
                        (c.key.clone(), value)
                    })
                    .collect()
            })
            .collect();
        Self::new(columns, rows)
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Accessors
    // ════════════════════════════════════════════════════════════════════════════════

    /// Declared columns, in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&TableRow> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Mutations (return a new table)
    // ════════════════════════════════════════════════════════════════════════════════

    /// Returns a table where row `row_index` holds `value` under `column`.
    ///
    /// Every other row is carried over unchanged.
    #[must_use = "set_cell returns a new table and leaves the receiver unchanged"]
    pub fn set_cell(
        &self,
        row_index: usize,
        column: &str,
        value: impl Into<String>,
    ) -> Result<Self, TableError> {
        if row_index >= self.rows.len() {
            return Err(TableError::RowOutOfRange {
                index: row_index,
                len: self.rows.len(),
            });
        }
        let key = self
            .columns
            .iter()
            .find(|c| c.key.as_str() == column)
            .map(|c| c.key.clone())
            .ok_or_else(|| TableError::UnknownColumn {
                column: column.to_string(),
            })?;

        let value = value.into();
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                if i == row_index {
                    row.with_value(&key, value.clone())
                } else {
                    row.clone()
                }
            })
            .collect();

        Ok(Self {
            columns: Arc::clone(&self.columns),
            rows,
        })
    }

    /// Returns a table with one blank row appended.
    #[must_use = "add_row returns a new table and leaves the receiver unchanged"]
    pub fn add_row(&self) -> Self {
        let mut rows = self.rows.clone();
        rows.push(TableRow::blank(&self.columns));
        Self {
            columns: Arc::clone(&self.columns),
            rows,
        }
    }
}
