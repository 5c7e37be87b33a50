//! Print adapters - Implementations of the print surface and print host ports.
//!
//! - `InMemoryPrintSurface` / `InMemoryPrintHost` - Deterministic, for tests
//! - `SpoolDirectorySurface` - Attaches artifacts as HTML files in a spool directory
//! - `CommandPrintHost` - Prints the spool surface's attached artifacts with a system command
//! - `HtmlArtifactRenderer` - Print-formatted HTML for an artifact

mod command_host;
mod html_renderer;
mod in_memory;
mod spool_surface;

pub use command_host::CommandPrintHost;
pub use html_renderer::HtmlArtifactRenderer;
pub use in_memory::{InMemoryPrintHost, InMemoryPrintSurface};
pub use spool_surface::SpoolDirectorySurface;
