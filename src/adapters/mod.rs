//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the host environment:
//! - `print` - Print surfaces and print hosts (in-memory, spool directory, system command)

pub mod print;

pub use print::{
    CommandPrintHost, HtmlArtifactRenderer, InMemoryPrintHost, InMemoryPrintSurface,
    SpoolDirectorySurface,
};
