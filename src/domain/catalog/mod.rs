//! Content catalog module - Static template content.
//!
//! The catalog is the ordered list of sections (heading, guidance prose,
//! prompts, fields and tables) that the editor renders. It is read-only
//! for the lifetime of the process.

#[allow(clippy::module_inception)]
mod catalog;
mod section;

pub use catalog::{CatalogError, ContentCatalog};
pub use section::{
    Column, FieldSpec, HeadingLevel, ProseBlock, ProseKind, Section, SectionElement, TableSpec,
};
