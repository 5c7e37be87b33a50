//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Print Ports
//!
//! - `PrintSurface` - Region a print artifact is attached to while printing
//! - `PrintHost` - Host print facility with a single completion signal per request
//! - `PrintCompletionHandler` - Receiver of that completion signal

mod print_host;
mod print_surface;

pub use print_host::{PrintCompletionHandler, PrintHost, PrintHostError, PrintOutcome};
pub use print_surface::{PrintSurface, SurfaceError};
