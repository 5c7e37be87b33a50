//! PrintSurface port - Where a print artifact is attached while it prints.
//!
//! Attaching places the artifact and its style directive in a region that
//! is invisible on screen and visible to the print pass. Detaching removes
//! both together.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::export::{PrintArtifact, StyleDirective};
use crate::domain::foundation::{DomainError, ErrorCode, ExportId};

/// Port for the region that hosts print artifacts.
///
/// # Contract
///
/// Implementations must:
/// - Make `attach` complete (artifact and style both present) before returning
/// - Treat `detach` of an unknown or already-detached id as a no-op
/// - Never touch document state; the artifact is a private copy
#[async_trait]
pub trait PrintSurface: Send + Sync {
    /// Attach an artifact and its style directive.
    async fn attach(
        &self,
        artifact: &PrintArtifact,
        style: &StyleDirective,
    ) -> Result<(), SurfaceError>;

    /// Remove the artifact and its style directive.
    async fn detach(&self, id: ExportId) -> Result<(), SurfaceError>;

    /// Whether the artifact with this id is currently attached.
    async fn is_attached(&self, id: ExportId) -> bool;
}

/// Errors from print surface operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// An artifact with the same id is already attached.
    #[error("Artifact already attached: {0}")]
    AlreadyAttached(ExportId),

    /// The surface could not be written.
    #[error("Surface I/O error: {message}")]
    Io { message: String },
}

impl SurfaceError {
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

impl From<SurfaceError> for DomainError {
    fn from(err: SurfaceError) -> Self {
        DomainError::new(ErrorCode::SurfaceUnavailable, err.to_string())
    }
}
