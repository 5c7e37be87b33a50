//! PrintArtifact - the transient, print-ready copy of the document.

use serde::Serialize;

use crate::domain::catalog::{Column, HeadingLevel};
use crate::domain::document::TableRow;
use crate::domain::foundation::{ExportId, Timestamp};

/// One node of a print artifact, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PrintNode {
    Heading {
        level: HeadingLevel,
        text: String,
    },
    TextBlock {
        text: String,
        is_empty: bool,
    },
    TableBlock {
        columns: Vec<Column>,
        rows: Vec<TableRow>,
    },
}

impl PrintNode {
    pub fn is_heading(&self) -> bool {
        matches!(self, PrintNode::Heading { .. })
    }

    /// Heading text, if this node is a heading.
    pub fn heading_text(&self) -> Option<&str> {
        match self {
            PrintNode::Heading { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// A filtered, serialized snapshot of the document owned by one export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintArtifact {
    pub id: ExportId,
    pub created_at: Timestamp,
    /// Store revision the artifact was built from.
    pub source_revision: u64,
    pub nodes: Vec<PrintNode>,
}

impl PrintArtifact {
    pub fn new(source_revision: u64, nodes: Vec<PrintNode>) -> Self {
        Self {
            id: ExportId::new(),
            created_at: Timestamp::now(),
            source_revision,
            nodes,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Structural equality: same nodes, ignoring identity and creation time.
    pub fn same_content(&self, other: &PrintArtifact) -> bool {
        self.nodes == other.nodes
    }

    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(PrintNode::heading_text)
    }
}
