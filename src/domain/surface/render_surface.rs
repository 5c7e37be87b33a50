//! RenderSurface - materializes the current document in document order.

use std::sync::Arc;

use crate::domain::catalog::{ContentCatalog, HeadingLevel, ProseBlock, SectionElement};
use crate::domain::document::{DocumentStateStore, Table};
use crate::domain::foundation::{FieldKey, TableKey};

/// One materialized node of the live document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedNode {
    Heading { level: HeadingLevel, text: String },
    Prose(ProseBlock),
    Field { key: FieldKey, value: String },
    Table { key: TableKey, table: Table },
}

/// Snapshot of everything the surface currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Store revision the snapshot was read at.
    pub revision: u64,
    pub nodes: Vec<RenderedNode>,
}

impl RenderedDocument {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// The editable view composed from the catalog and the document store.
#[derive(Debug, Clone)]
pub struct RenderSurface {
    catalog: Arc<ContentCatalog>,
    mounted: bool,
}

impl RenderSurface {
    /// Creates an unmounted surface.
    pub fn new(catalog: Arc<ContentCatalog>) -> Self {
        Self {
            catalog,
            mounted: false,
        }
    }

    pub fn mount(&mut self) {
        self.mounted = true;
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn catalog(&self) -> &Arc<ContentCatalog> {
        &self.catalog
    }

    /// Returns the nodes currently on screen, or `None` before mount.
    ///
    /// A field the store does not know renders as empty text; a table the
    /// store does not know renders with its declared columns and no rows.
    pub fn materialize(&self, store: &DocumentStateStore) -> Option<RenderedDocument> {
        if !self.mounted {
            return None;
        }

        let mut nodes = Vec::new();
        for section in self.catalog.sections() {
            nodes.push(RenderedNode::Heading {
                level: section.level,
                text: section.title.clone(),
            });

            for element in &section.elements {
                let node = match element {
                    SectionElement::Prose(prose) => RenderedNode::Prose(prose.clone()),
                    SectionElement::Field(spec) => RenderedNode::Field {
                        key: spec.key.clone(),
                        value: store.field(spec.key.as_str()).unwrap_or_default().to_string(),
                    },
                    SectionElement::Table(spec) => {
                        let table = store
                            .table(spec.key.as_str())
                            .cloned()
                            .unwrap_or_else(|| Table::empty(spec.columns.clone()));
                        RenderedNode::Table {
                            key: spec.key.clone(),
                            table,
                        }
                    }
                };
                nodes.push(node);
            }
        }

        Some(RenderedDocument {
            revision: store.revision(),
            nodes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Column, FieldSpec, ProseKind, Section, TableSpec};

    fn small_catalog() -> Arc<ContentCatalog> {
        let sections = vec![
            Section {
                level: HeadingLevel::H1,
                title: "README".into(),
                suppress_in_export: true,
                elements: vec![SectionElement::Prose(ProseBlock {
                    kind: ProseKind::Body,
                    text: "How to use".into(),
                    items: vec![],
                })],
            },
            Section {
                level: HeadingLevel::H3,
                title: "1.2 Scope".into(),
                suppress_in_export: false,
                elements: vec![SectionElement::Field(FieldSpec {
                    key: "s1_2".into(),
                    placeholder: String::new(),
                    rows: 3,
                })],
            },
            Section {
                level: HeadingLevel::H2,
                title: "Costs".into(),
                suppress_in_export: false,
                elements: vec![SectionElement::Table(TableSpec {
                    key: "cost_rows".into(),
                    columns: vec![Column::new("scale", "Scale"), Column::new("cost", "Cost")],
                    default_rows: vec![],
                })],
            },
        ];
        Arc::new(ContentCatalog::new("T", sections).unwrap())
    }

    #[test]
    fn unmounted_surface_materializes_nothing() {
        let catalog = small_catalog();
        let store = DocumentStateStore::initialize(&catalog).unwrap();
        let surface = RenderSurface::new(catalog);

        assert!(!surface.is_mounted());
        assert!(surface.materialize(&store).is_none());
    }

    #[test]
    fn mounted_surface_follows_catalog_order() {
        let catalog = small_catalog();
        let mut store = DocumentStateStore::initialize(&catalog).unwrap();
        store.set_field("s1_2", "Only batch jobs").unwrap();
        let mut surface = RenderSurface::new(catalog);
        surface.mount();

        let doc = surface.materialize(&store).unwrap();

        assert_eq!(doc.revision, 1);
        assert_eq!(doc.len(), 6);
        assert!(matches!(&doc.nodes[0], RenderedNode::Heading { text, .. } if text == "README"));
        assert!(matches!(&doc.nodes[1], RenderedNode::Prose(_)));
        assert!(matches!(&doc.nodes[2], RenderedNode::Heading { level: HeadingLevel::H3, .. }));
        assert!(matches!(
            &doc.nodes[3],
            RenderedNode::Field { key, value } if key.as_str() == "s1_2" && value == "Only batch jobs"
        ));
        assert!(matches!(&doc.nodes[5], RenderedNode::Table { key, table }
            if key.as_str() == "cost_rows" && table.is_empty()));
    }

    #[test]
    fn unknown_store_entries_render_as_empty() {
        let catalog = small_catalog();
        let other = ContentCatalog::new("Other", vec![]).unwrap();
        let store = DocumentStateStore::initialize(&other).unwrap();
        let mut surface = RenderSurface::new(catalog);
        surface.mount();

        let doc = surface.materialize(&store).unwrap();

        assert!(doc.nodes.iter().any(|n| matches!(n,
            RenderedNode::Field { value, .. } if value.is_empty())));
        assert!(doc.nodes.iter().any(|n| matches!(n,
            RenderedNode::Table { table, .. } if table.columns().len() == 2)));
    }

    #[test]
    fn unmount_hides_content_again() {
        let catalog = small_catalog();
        let store = DocumentStateStore::initialize(&catalog).unwrap();
        let mut surface = RenderSurface::new(catalog);
        surface.mount();
        surface.unmount();

        assert!(surface.materialize(&store).is_none());
    }
}
