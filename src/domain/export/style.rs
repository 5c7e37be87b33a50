//! StyleDirective - print-only visibility and layout rules for an artifact.

use std::fmt::Write;

use crate::domain::catalog::HeadingLevel;

/// Element id of the region the artifact is attached under.
pub const PRINT_ROOT_ID: &str = "print-only-root";

/// Element id of the style block that accompanies the artifact.
pub const PRINT_STYLE_ID: &str = "print-only-style";

/// Print rules attached alongside a print artifact and removed with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDirective {
    pub root_id: String,
    pub style_id: String,
    pub font_family: String,
    pub text_font_px: u8,
    pub line_height: String,
    pub empty_text_color: String,
    pub cell_border: String,
    pub cell_padding_px: u8,
}

impl StyleDirective {
    /// The standard directive: hide everything except the artifact when printing.
    pub fn print_only() -> Self {
        Self {
            root_id: PRINT_ROOT_ID.to_string(),
            style_id: PRINT_STYLE_ID.to_string(),
            font_family: "'Charter', 'Georgia', 'Times New Roman', serif".to_string(),
            text_font_px: 13,
            line_height: "1.45".to_string(),
            empty_text_color: "#666".to_string(),
            cell_border: "1px solid #ddd".to_string(),
            cell_padding_px: 6,
        }
    }

    /// The `@media print` block: visibility, page breaks and table layout.
    pub fn to_css(&self) -> String {
        let root = &self.root_id;
        format!(
            r#"@media print {{
  body * {{ visibility: hidden !important; }}
  #{root}, #{root} * {{ visibility: visible !important; }}
  html, body {{ height: auto !important; overflow: visible !important; }}
  #{root} {{ position: absolute; left: 0; top: 0; width: 100%; margin: 0; padding: 0; display: inline-block; }}
  #{root} {{ page-break-after: avoid; break-after: avoid; }}
  #{root} > * {{ break-inside: avoid; }}
  #{root} > *:last-child {{ break-after: avoid; }}
  table {{ width: 100%; border-collapse: collapse; margin: 6px 0 12px 0; }}
  th, td {{ border: {border}; padding: {pad}px; vertical-align: top; }}
}}
"#,
            root = root,
            border = self.cell_border,
            pad = self.cell_padding_px,
        )
    }

    /// Typography for the nodes inside the artifact root.
    pub fn content_css(&self) -> String {
        let root = &self.root_id;
        let mut css = String::new();
        for level in [HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3] {
            let _ = writeln!(
                css,
                "#{root} {tag} {{ margin: 16px 0 6px 0; font-family: {font}; font-size: {size}px; font-weight: 700; }}",
                root = root,
                tag = level.tag(),
                font = self.font_family,
                size = level.print_font_size_px(),
            );
        }
        let _ = writeln!(
            css,
            "#{root} .text-block {{ white-space: pre-wrap; margin: 0 0 10px 0; font-family: {font}; font-size: {size}px; line-height: {lh}; }}",
            root = root,
            font = self.font_family,
            size = self.text_font_px,
            lh = self.line_height,
        );
        let _ = writeln!(
            css,
            "#{root} .text-block.empty {{ color: {color}; }}",
            root = root,
            color = self.empty_text_color,
        );
        css
    }
}

impl Default for StyleDirective {
    fn default() -> Self {
        Self::print_only()
    }
}
