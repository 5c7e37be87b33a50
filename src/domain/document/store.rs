//! DocumentStateStore - the mutable field values and tables of one editing session.
//!
//! There is exactly one store per session. It is created explicitly with
//! [`DocumentStateStore::initialize`] and handed by reference to whoever
//! needs it; nothing reaches it through ambient state.

use std::collections::HashMap;
use thiserror::Error;

use crate::domain::catalog::ContentCatalog;
use crate::domain::foundation::{DomainError, ErrorCode, FieldKey, TableKey};

use super::{Table, TableError};

/// Errors raised by store reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Table '{table}': {source}")]
    Table {
        table: TableKey,
        #[source]
        source: TableError,
    },
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UnknownField(key) => {
                DomainError::new(ErrorCode::FieldNotFound, format!("Unknown field: {}", key))
                    .with_detail("field", key)
            }
            StoreError::UnknownTable(key) => {
                DomainError::new(ErrorCode::TableNotFound, format!("Unknown table: {}", key))
                    .with_detail("table", key)
            }
            StoreError::Table { table, source } => {
                DomainError::from(source).with_detail("table", table.to_string())
            }
        }
    }
}

/// Owns every field value and every named table for the session.
#[derive(Debug, Clone)]
pub struct DocumentStateStore {
    fields: HashMap<FieldKey, String>,
    tables: HashMap<TableKey, Table>,
    revision: u64,
}

impl DocumentStateStore {
    /// Creates the store for a catalog: every field empty, every table seeded
    /// from its declared default rows.
    pub fn initialize(catalog: &ContentCatalog) -> Result<Self, StoreError> {
        let fields = catalog
            .field_specs()
            .map(|spec| (spec.key.clone(), String::new()))
            .collect();

        let tables = catalog
            .table_specs()
            .map(|spec| {
                Table::seeded(spec)
                    .map(|table| (spec.key.clone(), table))
                    .map_err(|source| StoreError::Table {
                        table: spec.key.clone(),
                        source,
                    })
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Self {
            fields,
            tables,
            revision: 0,
        })
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Reads
    // ════════════════════════════════════════════════════════════════════════════════

    /// Current value of a field.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Current state of a table.
    pub fn table(&self, key: &str) -> Option<&Table> {
        self.tables.get(key)
    }

    /// Number of accepted mutations since initialization.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Writes
    // ════════════════════════════════════════════════════════════════════════════════

    /// Replaces a field's text.
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> Result<(), StoreError> {
        let slot = self
            .fields
            .get_mut(key)
            .ok_or_else(|| StoreError::UnknownField(key.to_string()))?;
        *slot = value.into();
        self.revision += 1;
        Ok(())
    }

    /// Edits one cell of a named table. The stored table is replaced as a whole.
    pub fn set_cell(
        &mut self,
        table: &str,
        row: usize,
        column: &str,
        value: impl Into<String>,
    ) -> Result<(), StoreError> {
        self.replace_table(table, |current| current.set_cell(row, column, value))
            .map(|_| ())
    }

    /// Appends a blank row to a named table, returning the new row's index.
    pub fn add_row(&mut self, table: &str) -> Result<usize, StoreError> {
        self.replace_table(table, |current| Ok(current.add_row()))
            .map(|t| t.len() - 1)
    }

    fn replace_table<F>(&mut self, key: &str, mutate: F) -> Result<&Table, StoreError>
    where
        F: FnOnce(&Table) -> Result<Table, TableError>,
    {
        let slot = self
            .tables
            .get_mut(key)
            .ok_or_else(|| StoreError::UnknownTable(key.to_string()))?;

        let next = mutate(slot).map_err(|source| StoreError::Table {
            table: TableKey::from(key),
            source,
        })?;

        *slot = next;
        self.revision += 1;
        Ok(&*slot)
    }
}
