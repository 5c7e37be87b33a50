//! Application handlers.
//!
//! Command handlers that orchestrate domain operations:
//! - `editing` - Field edits, cell edits and row appends on the document store
//! - `export` - Print export with guaranteed cleanup

pub mod editing;
pub mod export;

pub use editing::{
    AddRowCommand, AddRowHandler, EditFieldCommand, EditFieldHandler, EditFieldResult,
    SetCellCommand, SetCellHandler, TableEditResult,
};
pub use export::{
    CleanupOnCompletion, ExportDocumentCommand, ExportDocumentError, ExportDocumentHandler,
    ExportOutcome, InFlightSlot,
};
