//! ContentCatalog - the immutable, ordered registry of section definitions.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, FieldKey, TableKey};

use super::{FieldSpec, Section, TableSpec};

/// Source of the built-in GAWD DOC template.
const GAWD_DOC_YAML: &str = include_str!("gawd_doc.yaml");

static GAWD_DOC: Lazy<Result<Arc<ContentCatalog>, CatalogError>> =
    Lazy::new(|| ContentCatalog::from_yaml_str(GAWD_DOC_YAML).map(Arc::new));

/// Errors raised while loading or validating a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Catalog could not be parsed: {0}")]
    Parse(String),

    #[error("Catalog title cannot be empty")]
    EmptyTitle,

    #[error("Section {index} has an empty title")]
    EmptySectionTitle { index: usize },

    #[error("Section '{section}' declares a blank key")]
    BlankKey { section: String },

    #[error("Field key '{0}' is declared more than once")]
    DuplicateFieldKey(FieldKey),

    #[error("Table key '{0}' is declared more than once")]
    DuplicateTableKey(TableKey),

    #[error("Table '{table}' declares no columns")]
    NoColumns { table: TableKey },

    #[error("Table '{table}' declares column '{column}' more than once")]
    DuplicateColumn { table: TableKey, column: String },

    #[error("Default row {row} of table '{table}' uses undeclared column '{column}'")]
    UndeclaredDefaultColumn {
        table: TableKey,
        row: usize,
        column: String,
    },
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        DomainError::new(ErrorCode::InvalidCatalog, err.to_string())
    }
}

/// Static registry of section definitions, in document order.
///
/// Loaded once and never mutated. Consumers share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCatalog {
    title: String,
    sections: Vec<Section>,
}

impl ContentCatalog {
    /// Builds and validates a catalog from already-constructed sections.
    pub fn new(title: impl Into<String>, sections: Vec<Section>) -> Result<Self, CatalogError> {
        let catalog = Self {
            title: title.into(),
            sections,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in GAWD DOC template.
    pub fn gawd_doc() -> Result<Arc<ContentCatalog>, CatalogError> {
        (*GAWD_DOC).clone()
    }

    /// Loads a custom template from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: ContentCatalog =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle);
        }

        let mut field_keys = HashSet::new();
        let mut table_keys = HashSet::new();

        for (index, section) in self.sections.iter().enumerate() {
            if section.title.trim().is_empty() {
                return Err(CatalogError::EmptySectionTitle { index });
            }

            for field in section.fields() {
                if field.key.is_blank() {
                    return Err(CatalogError::BlankKey {
                        section: section.title.clone(),
                    });
                }
                if !field_keys.insert(field.key.clone()) {
                    return Err(CatalogError::DuplicateFieldKey(field.key.clone()));
                }
            }

            for table in section.tables() {
                if table.key.is_blank() {
                    return Err(CatalogError::BlankKey {
                        section: section.title.clone(),
                    });
                }
                if !table_keys.insert(table.key.clone()) {
                    return Err(CatalogError::DuplicateTableKey(table.key.clone()));
                }
                Self::validate_table(section, table)?;
            }
        }

        Ok(())
    }

    fn validate_table(section: &Section, table: &TableSpec) -> Result<(), CatalogError> {
        if table.columns.is_empty() {
            return Err(CatalogError::NoColumns {
                table: table.key.clone(),
            });
        }

        let mut seen = HashSet::new();
        for column in &table.columns {
            if column.key.is_blank() {
                return Err(CatalogError::BlankKey {
                    section: section.title.clone(),
                });
            }
            if !seen.insert(column.key.as_str()) {
                return Err(CatalogError::DuplicateColumn {
                    table: table.key.clone(),
                    column: column.key.to_string(),
                });
            }
        }

        for (row, defaults) in table.default_rows.iter().enumerate() {
            if let Some(column) = defaults.keys().find(|k| !seen.contains(k.as_str())) {
                return Err(CatalogError::UndeclaredDefaultColumn {
                    table: table.key.clone(),
                    row,
                    column: column.clone(),
                });
            }
        }

        Ok(())
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Accessors
    // ════════════════════════════════════════════════════════════════════════════════

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sections in declaration (document) order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Every field spec, in document order.
    pub fn field_specs(&self) -> impl Iterator<Item = &FieldSpec> {
        self.sections.iter().flat_map(|s| s.fields())
    }

    /// Every table spec, in document order.
    pub fn table_specs(&self) -> impl Iterator<Item = &TableSpec> {
        self.sections.iter().flat_map(|s| s.tables())
    }

    pub fn field_keys(&self) -> Vec<&FieldKey> {
        self.field_specs().map(|f| &f.key).collect()
    }

    pub fn table_spec(&self, key: &str) -> Option<&TableSpec> {
        self.table_specs().find(|t| t.key.as_str() == key)
    }

    /// Titles of the purely instructional sections.
    pub fn suppressed_titles(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|s| s.suppress_in_export)
            .map(|s| s.title.as_str())
            .collect()
    }
}
