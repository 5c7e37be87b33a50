//! Section definitions - the static, ordered building blocks of a template.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{ColumnKey, FieldKey, TableKey, ValidationError};

/// Heading rank of a section. Determines nesting and print font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Numeric rank (1-3).
    pub fn rank(&self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }

    /// Font size used for this heading in the print artifact.
    pub fn print_font_size_px(&self) -> u8 {
        match self {
            HeadingLevel::H1 => 22,
            HeadingLevel::H2 => 18,
            HeadingLevel::H3 => 15,
        }
    }

    /// HTML tag name for this heading.
    pub fn tag(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
        }
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(HeadingLevel::H1),
            2 => Ok(HeadingLevel::H2),
            3 => Ok(HeadingLevel::H3),
            other => Err(ValidationError::out_of_range("level", 1, 3, other as i64)),
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.rank()
    }
}

/// Kind of instructional display content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProseKind {
    Body,
    Guidance,
    Prompt,
    Example,
    Quote,
    Bullets,
    Ordered,
    Code,
}

/// Display-only prose. Shown in the editor, never exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProseBlock {
    pub kind: ProseKind,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
}

/// One free-text prompt the user fills in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub key: FieldKey,
    #[serde(default)]
    pub placeholder: String,
    /// Visible height of the input, in text rows.
    #[serde(default = "default_field_rows")]
    pub rows: u8,
}

fn default_field_rows() -> u8 {
    3
}

/// A declared table column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    pub key: ColumnKey,
    pub label: String,
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: ColumnKey::new(key),
            label: label.into(),
        }
    }
}

/// A tabular section: declared columns plus the rows the table is seeded with.
///
/// Default rows may leave columns out; those cells start as empty text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    pub key: TableKey,
    pub columns: Vec<Column>,
    #[serde(default)]
    pub default_rows: Vec<BTreeMap<String, String>>,
}

impl TableSpec {
    /// Column keys in declared order.
    pub fn column_keys(&self) -> impl Iterator<Item = &ColumnKey> {
        self.columns.iter().map(|c| &c.key)
    }

    pub fn has_column(&self, key: &str) -> bool {
        self.columns.iter().any(|c| c.key.as_str() == key)
    }
}

/// One element of a section body, in render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SectionElement {
    Prose(ProseBlock),
    Field(FieldSpec),
    Table(TableSpec),
}

/// One titled block of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub level: HeadingLevel,
    pub title: String,
    /// Purely instructional sections: shown in the editor, headed out of the export.
    #[serde(default)]
    pub suppress_in_export: bool,
    #[serde(default)]
    pub elements: Vec<SectionElement>,
}

impl Section {
    /// First guidance text of the section, if any.
    pub fn guidance(&self) -> Option<&str> {
        self.first_prose(ProseKind::Guidance)
    }

    /// First prompt text of the section, if any.
    pub fn prompt(&self) -> Option<&str> {
        self.first_prose(ProseKind::Prompt)
    }

    /// First example text of the section, if any.
    pub fn example(&self) -> Option<&str> {
        self.first_prose(ProseKind::Example)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.elements.iter().filter_map(|e| match e {
            SectionElement::Field(spec) => Some(spec),
            _ => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &TableSpec> {
        self.elements.iter().filter_map(|e| match e {
            SectionElement::Table(spec) => Some(spec),
            _ => None,
        })
    }

    fn first_prose(&self, kind: ProseKind) -> Option<&str> {
        self.elements.iter().find_map(|e| match e {
            SectionElement::Prose(p) if p.kind == kind => Some(p.text.as_str()),
            _ => None,
        })
    }
}
