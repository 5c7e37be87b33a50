//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Editing handlers write to the document store; the export handler reads a
//! snapshot of the render surface and drives the print ports.

pub mod handlers;

pub use handlers::{
    // Editing handlers
    AddRowCommand, AddRowHandler, EditFieldCommand, EditFieldHandler, EditFieldResult,
    SetCellCommand, SetCellHandler, TableEditResult,
    // Export handlers
    ExportDocumentCommand, ExportDocumentError, ExportDocumentHandler, ExportOutcome,
};
