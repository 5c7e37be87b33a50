//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the GAWD DOC domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ColumnKey, ExportId, FieldKey, SubscriptionId, TableKey};
pub use timestamp::Timestamp;
