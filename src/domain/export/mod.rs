//! Export module - Pure construction of the print artifact.
//!
//! Everything in here is side-effect free. Attaching the artifact, driving
//! the host print facility and cleaning up live behind the ports in
//! `crate::ports` and the handler in `crate::application::handlers::export`.

mod artifact;
mod builder;
mod exclusions;
mod style;

pub use artifact::{PrintArtifact, PrintNode};
pub use builder::{build_print_artifact, DEFAULT_EMPTY_PLACEHOLDER};
pub use exclusions::HeadingExclusions;
pub use style::{StyleDirective, PRINT_ROOT_ID, PRINT_STYLE_ID};
