//! Export configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::export::DEFAULT_EMPTY_PLACEHOLDER;

/// Export pipeline configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Text printed for fields left empty
    #[serde(default = "default_placeholder")]
    pub empty_placeholder: String,

    /// Heading titles dropped from exports in addition to the catalog's instructional sections
    #[serde(default)]
    pub extra_excluded_headings: Vec<String>,

    /// Title of the printed HTML document
    #[serde(default = "default_document_title")]
    pub document_title: String,
}

impl ExportConfig {
    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.empty_placeholder.trim().is_empty() {
            return Err(ValidationError::EmptyPlaceholder);
        }
        if self.document_title.trim().is_empty() {
            return Err(ValidationError::MissingRequired("export.document_title"));
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            empty_placeholder: default_placeholder(),
            extra_excluded_headings: Vec::new(),
            document_title: default_document_title(),
        }
    }
}

fn default_placeholder() -> String {
    DEFAULT_EMPTY_PLACEHOLDER.to_string()
}

fn default_document_title() -> String {
    "THE GAWD DOC".to_string()
}
