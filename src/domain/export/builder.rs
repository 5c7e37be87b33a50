//! Print artifact construction: traverse, filter, classify, serialize.

use crate::domain::surface::{RenderedDocument, RenderedNode};

use super::{HeadingExclusions, PrintArtifact, PrintNode};

/// Text emitted for a field whose value is empty or whitespace.
pub const DEFAULT_EMPTY_PLACEHOLDER: &str = "(empty)";

/// Builds the print artifact for a materialized document.
///
/// Walks the nodes in order and emits:
/// - a heading node for every heading not in `exclusions`
/// - a text block for every field, using `placeholder` when the value is blank
/// - a table block for every table, rows copied as-is (blank rows included)
///
/// Prose is instructional and never exported. The document is only read.
pub fn build_print_artifact(
    document: &RenderedDocument,
    exclusions: &HeadingExclusions,
    placeholder: &str,
) -> PrintArtifact {
    let nodes = document
        .nodes
        .iter()
        .filter_map(|node| print_node(node, exclusions, placeholder))
        .collect();

    PrintArtifact::new(document.revision, nodes)
}

fn print_node(
    node: &RenderedNode,
    exclusions: &HeadingExclusions,
    placeholder: &str,
) -> Option<PrintNode> {
    match node {
        RenderedNode::Heading { text, .. } if exclusions.excludes(text) => None,
        RenderedNode::Heading { level, text } => Some(PrintNode::Heading {
            level: *level,
            text: text.clone(),
        }),
        RenderedNode::Prose(_) => None,
        RenderedNode::Field { value, .. } => Some(text_block(value, placeholder)),
        RenderedNode::Table { table, .. } => Some(PrintNode::TableBlock {
            columns: table.columns().to_vec(),
            rows: table.rows().to_vec(),
        }),
    }
}

fn text_block(value: &str, placeholder: &str) -> PrintNode {
    if value.trim().is_empty() {
        PrintNode::TextBlock {
            text: placeholder.to_string(),
            is_empty: true,
        }
    } else {
        PrintNode::TextBlock {
            text: value.to_string(),
            is_empty: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Column, ContentCatalog, HeadingLevel, ProseBlock, ProseKind};
    use crate::domain::document::{DocumentStateStore, Table, TableRow};
    use crate::domain::surface::RenderSurface;
    use proptest::prelude::*;

    fn sla_columns() -> Vec<Column> {
        vec![
            Column::new("metric", "Metric"),
            Column::new("target", "Target"),
            Column::new("mechanism", "Design Mechanism That Achieves It"),
            Column::new("measured", "How It's Measured"),
        ]
    }

    fn heading(level: HeadingLevel, text: &str) -> RenderedNode {
        RenderedNode::Heading {
            level,
            text: text.to_string(),
        }
    }

    fn field(key: &str, value: &str) -> RenderedNode {
        RenderedNode::Field {
            key: key.into(),
            value: value.to_string(),
        }
    }

    #[test]
    fn empty_field_and_sla_table_scenario() {
        let row: TableRow = [
            ("metric", "p99 latency"),
            ("target", "< 30s"),
            ("mechanism", ""),
            ("measured", ""),
        ]
        .into_iter()
        .collect();
        let document = RenderedDocument {
            revision: 0,
            nodes: vec![
                field("s1_2", ""),
                RenderedNode::Table {
                    key: "sla_rows".into(),
                    table: Table::new(sla_columns(), vec![row.clone()]).unwrap(),
                },
            ],
        };

        let artifact =
            build_print_artifact(&document, &HeadingExclusions::default(), DEFAULT_EMPTY_PLACEHOLDER);

        assert_eq!(
            artifact.nodes[0],
            PrintNode::TextBlock {
                text: "(empty)".into(),
                is_empty: true
            }
        );
        match &artifact.nodes[1] {
            PrintNode::TableBlock { columns, rows } => {
                let keys: Vec<&str> = columns.iter().map(|c| c.key.as_str()).collect();
                assert_eq!(keys, vec!["metric", "target", "mechanism", "measured"]);
                assert_eq!(rows, &vec![row]);
            }
            other => panic!("expected table block, got {:?}", other),
        }
    }

    #[test]
    fn excluded_heading_drops_only_the_heading_line() {
        let document = RenderedDocument {
            revision: 0,
            nodes: vec![
                heading(HeadingLevel::H2, "README"),
                field("notes", "kept"),
                heading(HeadingLevel::H2, "1. Design Goals"),
            ],
        };
        let exclusions = HeadingExclusions::new(["README"]);

        let artifact = build_print_artifact(&document, &exclusions, DEFAULT_EMPTY_PLACEHOLDER);

        assert_eq!(artifact.headings().collect::<Vec<_>>(), vec!["1. Design Goals"]);
        assert_eq!(artifact.len(), 2);
        assert!(matches!(&artifact.nodes[0], PrintNode::TextBlock { text, .. } if text == "kept"));
    }

    #[test]
    fn prose_is_never_exported() {
        let document = RenderedDocument {
            revision: 0,
            nodes: vec![RenderedNode::Prose(ProseBlock {
                kind: ProseKind::Guidance,
                text: "Before anything else".into(),
                items: vec![],
            })],
        };

        let artifact =
            build_print_artifact(&document, &HeadingExclusions::default(), DEFAULT_EMPTY_PLACEHOLDER);
        assert!(artifact.is_empty());
    }

    #[test]
    fn non_empty_text_keeps_line_breaks_and_surrounding_space() {
        let document = RenderedDocument {
            revision: 7,
            nodes: vec![field("s2", "  line one\nline two\n")],
        };

        let artifact =
            build_print_artifact(&document, &HeadingExclusions::default(), DEFAULT_EMPTY_PLACEHOLDER);

        assert_eq!(artifact.source_revision, 7);
        assert_eq!(
            artifact.nodes[0],
            PrintNode::TextBlock {
                text: "  line one\nline two\n".into(),
                is_empty: false
            }
        );
    }

    #[test]
    fn builtin_document_exports_every_field_and_table() {
        let catalog = ContentCatalog::gawd_doc().unwrap();
        let store = DocumentStateStore::initialize(&catalog).unwrap();
        let mut surface = RenderSurface::new(catalog.clone());
        surface.mount();
        let document = surface.materialize(&store).unwrap();

        let artifact = build_print_artifact(
            &document,
            &HeadingExclusions::from_catalog(&catalog),
            DEFAULT_EMPTY_PLACEHOLDER,
        );

        let text_blocks = artifact
            .nodes
            .iter()
            .filter(|n| matches!(n, PrintNode::TextBlock { is_empty: true, .. }))
            .count();
        let tables = artifact
            .nodes
            .iter()
            .filter(|n| matches!(n, PrintNode::TableBlock { .. }))
            .count();
        assert_eq!(text_blocks, 29);
        assert_eq!(tables, 5);
        assert!(!artifact.headings().any(|h| h == "README"));
        assert_eq!(artifact.headings().next(), Some("THE GAWD DOC"));
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Properties
    // ════════════════════════════════════════════════════════════════════════════════

    const EXCLUDED: &str = "README";

    fn arb_level() -> impl Strategy<Value = HeadingLevel> {
        prop_oneof![
            Just(HeadingLevel::H1),
            Just(HeadingLevel::H2),
            Just(HeadingLevel::H3),
        ]
    }

    fn arb_table() -> impl Strategy<Value = Table> {
        prop::collection::vec(prop::collection::vec("[a-z <]{0,6}", 4), 0..5).prop_map(|rows| {
            let columns = sla_columns();
            let rows = rows
                .into_iter()
                .map(|values| {
                    columns
                        .iter()
                        .map(|c| c.key.clone())
                        .zip(values)
                        .collect::<TableRow>()
                })
                .collect();
            Table::new(columns, rows).unwrap()
        })
    }

    fn arb_node() -> impl Strategy<Value = RenderedNode> {
        prop_oneof![
            (arb_level(), prop_oneof![Just(EXCLUDED.to_string()), "[A-Z][a-z ]{0,10}"])
                .prop_map(|(level, text)| RenderedNode::Heading { level, text }),
            "[a-z]{0,8}".prop_map(|text| RenderedNode::Prose(ProseBlock {
                kind: ProseKind::Body,
                text,
                items: vec![],
            })),
            ("[a-z0-9_]{1,6}", "[ a-z\n\t]{0,12}")
                .prop_map(|(key, value)| RenderedNode::Field { key: key.as_str().into(), value }),
            ("[a-z_]{1,6}", arb_table())
                .prop_map(|(key, table)| RenderedNode::Table { key: key.as_str().into(), table }),
        ]
    }

    fn arb_document() -> impl Strategy<Value = RenderedDocument> {
        prop::collection::vec(arb_node(), 0..24)
            .prop_map(|nodes| RenderedDocument { revision: 0, nodes })
    }

    /// The node each rendered node should become, or `None` if it is dropped.
    fn expected(node: &RenderedNode) -> Option<PrintNode> {
        match node {
            RenderedNode::Heading { text, .. } if text.trim() == EXCLUDED => None,
            RenderedNode::Heading { level, text } => Some(PrintNode::Heading {
                level: *level,
                text: text.clone(),
            }),
            RenderedNode::Prose(_) => None,
            RenderedNode::Field { value, .. } if value.trim().is_empty() => {
                Some(PrintNode::TextBlock {
                    text: DEFAULT_EMPTY_PLACEHOLDER.into(),
                    is_empty: true,
                })
            }
            RenderedNode::Field { value, .. } => Some(PrintNode::TextBlock {
                text: value.clone(),
                is_empty: false,
            }),
            RenderedNode::Table { table, .. } => Some(PrintNode::TableBlock {
                columns: table.columns().to_vec(),
                rows: table.rows().to_vec(),
            }),
        }
    }

    proptest! {
        #[test]
        fn survivors_keep_document_order(document in arb_document()) {
            let exclusions = HeadingExclusions::new([EXCLUDED]);
            let artifact = build_print_artifact(&document, &exclusions, DEFAULT_EMPTY_PLACEHOLDER);

            let want: Vec<PrintNode> = document.nodes.iter().filter_map(expected).collect();
            prop_assert_eq!(artifact.nodes, want);
        }

        #[test]
        fn exclusion_removes_headings_only(document in arb_document()) {
            let exclusions = HeadingExclusions::new([EXCLUDED]);
            let artifact = build_print_artifact(&document, &exclusions, DEFAULT_EMPTY_PLACEHOLDER);

            prop_assert!(artifact.headings().all(|h| h != EXCLUDED));

            let content_in = document
                .nodes
                .iter()
                .filter(|n| matches!(n, RenderedNode::Field { .. } | RenderedNode::Table { .. }))
                .count();
            let content_out = artifact.nodes.iter().filter(|n| !n.is_heading()).count();
            prop_assert_eq!(content_in, content_out);
        }

        #[test]
        fn blank_fields_become_placeholders(value in "[ \t\n]{0,8}") {
            let document = RenderedDocument { revision: 0, nodes: vec![field("k", &value)] };
            let artifact = build_print_artifact(&document, &HeadingExclusions::default(), "(blank)");

            prop_assert_eq!(
                &artifact.nodes[0],
                &PrintNode::TextBlock { text: "(blank)".into(), is_empty: true }
            );
        }

        #[test]
        fn tables_copy_every_row(table in arb_table()) {
            let document = RenderedDocument {
                revision: 0,
                nodes: vec![RenderedNode::Table { key: "t".into(), table: table.clone() }],
            };
            let artifact =
                build_print_artifact(&document, &HeadingExclusions::default(), DEFAULT_EMPTY_PLACEHOLDER);

            match &artifact.nodes[0] {
                PrintNode::TableBlock { rows, columns } => {
                    prop_assert_eq!(rows.len(), table.len());
                    prop_assert_eq!(rows.as_slice(), table.rows());
                    prop_assert_eq!(columns.as_slice(), table.columns());
                }
                other => prop_assert!(false, "expected table block, got {:?}", other),
            }
        }
    }
}
