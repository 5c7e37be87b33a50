//! HTML rendering of print artifacts.
//!
//! Produces a standalone HTML document: the style directive in a `<style>`
//! block and the artifact nodes under the print root element.

use std::fmt::Write;

use crate::config::ExportConfig;
use crate::domain::catalog::Column;
use crate::domain::document::TableRow;
use crate::domain::export::{PrintArtifact, PrintNode, StyleDirective};

/// Renders a [`PrintArtifact`] to print-formatted HTML.
#[derive(Debug, Clone)]
pub struct HtmlArtifactRenderer {
    title: String,
}

impl HtmlArtifactRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(config.document_title.clone())
    }

    /// Full HTML document for an artifact.
    pub fn render(&self, artifact: &PrintArtifact, style: &StyleDirective) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style id="{style_id}">
{print_css}{content_css}    </style>
</head>
<body>
<div id="{root_id}" data-export-id="{export_id}">
{body}</div>
</body>
</html>
"#,
            title = html_escape(&self.title),
            style_id = html_escape(&style.style_id),
            print_css = style.to_css(),
            content_css = style.content_css(),
            root_id = html_escape(&style.root_id),
            export_id = artifact.id,
            body = self.render_nodes(&artifact.nodes),
        )
    }

    /// The artifact nodes alone, one element per node.
    pub fn render_nodes(&self, nodes: &[PrintNode]) -> String {
        let mut out = String::new();
        for node in nodes {
            match node {
                PrintNode::Heading { level, text } => {
                    let _ = writeln!(out, "<{tag}>{}</{tag}>", html_escape(text), tag = level.tag());
                }
                PrintNode::TextBlock { text, is_empty } => {
                    let class = if *is_empty { "text-block empty" } else { "text-block" };
                    let _ = writeln!(out, r#"<div class="{}">{}</div>"#, class, html_escape(text));
                }
                PrintNode::TableBlock { columns, rows } => {
                    render_table(&mut out, columns, rows);
                }
            }
        }
        out
    }
}

impl Default for HtmlArtifactRenderer {
    fn default() -> Self {
        Self::new("THE GAWD DOC")
    }
}

fn render_table(out: &mut String, columns: &[Column], rows: &[TableRow]) {
    out.push_str("<table>\n<thead><tr>");
    for column in columns {
        let _ = write!(out, "<th>{}</th>", html_escape(&column.label));
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for row in rows {
        out.push_str("<tr>");
        for value in row.values_in(columns) {
            let _ = write!(out, "<td>{}</td>", html_escape(value));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::HeadingLevel;

    fn artifact() -> PrintArtifact {
        let row: TableRow = [("metric", "p99 latency"), ("target", "< 30s")]
            .into_iter()
            .collect();
        PrintArtifact::new(
            0,
            vec![
                PrintNode::Heading {
                    level: HeadingLevel::H2,
                    text: "1. Design Goals".into(),
                },
                PrintNode::TextBlock {
                    text: "(empty)".into(),
                    is_empty: true,
                },
                PrintNode::TableBlock {
                    columns: vec![Column::new("metric", "Metric"), Column::new("target", "Target")],
                    rows: vec![row, TableRow::default()],
                },
            ],
        )
    }

    #[test]
    fn render_wraps_nodes_in_print_root() {
        let html = HtmlArtifactRenderer::default().render(&artifact(), &StyleDirective::print_only());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<style id="print-only-style">"#));
        assert!(html.contains(r#"<div id="print-only-root""#));
        assert!(html.contains("@media print"));
    }

    #[test]
    fn title_comes_from_export_config() {
        let config = ExportConfig {
            document_title: "Grades & Rosters".into(),
            ..Default::default()
        };
        let html = HtmlArtifactRenderer::from_config(&config).render(&artifact(), &StyleDirective::print_only());

        assert!(html.contains("<title>Grades &amp; Rosters</title>"));
    }

    #[test]
    fn default_title_is_the_template_name() {
        let html = HtmlArtifactRenderer::default().render(&artifact(), &StyleDirective::print_only());
        assert!(html.contains("<title>THE GAWD DOC</title>"));
    }

    #[test]
    fn headings_use_their_level_tag() {
        let html = HtmlArtifactRenderer::default().render_nodes(&artifact().nodes);
        assert!(html.contains("<h2>1. Design Goals</h2>"));
    }

    #[test]
    fn empty_text_blocks_carry_the_empty_class() {
        let html = HtmlArtifactRenderer::default().render_nodes(&artifact().nodes);
        assert!(html.contains(r#"<div class="text-block empty">(empty)</div>"#));
    }

    #[test]
    fn tables_render_header_row_and_every_body_row() {
        let html = HtmlArtifactRenderer::default().render_nodes(&artifact().nodes);

        assert!(html.contains("<th>Metric</th><th>Target</th>"));
        assert!(html.contains("<td>p99 latency</td><td>&lt; 30s</td>"));
        assert!(html.contains("<tr><td></td><td></td></tr>"));
    }

    #[test]
    fn html_escape_escapes_special_chars() {
        assert_eq!(html_escape(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }
}
