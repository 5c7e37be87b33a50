//! Domain layer containing the document model and export logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `catalog` - Static template content (sections, fields, table declarations)
//! - `document` - Editable state: the document store and the table model
//! - `surface` - The live view materialized from catalog and store
//! - `export` - Pure construction of the print artifact and its style rules

pub mod catalog;
pub mod document;
pub mod export;
pub mod foundation;
pub mod surface;
