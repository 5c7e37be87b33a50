//! Export command handler and its completion cleanup.

mod cleanup;
mod export_document;

pub use cleanup::{CleanupOnCompletion, InFlightSlot};
pub use export_document::{
    ExportDocumentCommand, ExportDocumentError, ExportDocumentHandler, ExportOutcome,
};
