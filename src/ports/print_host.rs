//! PrintHost port - The host environment's print facility.
//!
//! The host accepts a print request and later emits exactly one completion
//! signal for it, whether the user printed, cancelled, or the facility
//! failed. Completion is observed only through subscribed handlers.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, SubscriptionId};

/// How a print request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintOutcome {
    Completed,
    Cancelled,
    Failed(String),
}

impl fmt::Display for PrintOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrintOutcome::Completed => write!(f, "completed"),
            PrintOutcome::Cancelled => write!(f, "cancelled"),
            PrintOutcome::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// Receiver of the host's print-completion signal.
///
/// # Example
///
/// ```ignore
/// struct LogOutcome;
///
/// #[async_trait]
/// impl PrintCompletionHandler for LogOutcome {
///     async fn on_complete(&self, outcome: PrintOutcome) {
///         tracing::info!(%outcome, "print finished");
///     }
///
///     fn name(&self) -> &'static str {
///         "LogOutcome"
///     }
/// }
/// ```
#[async_trait]
pub trait PrintCompletionHandler: Send + Sync {
    /// Called when a print request ends, for any outcome.
    async fn on_complete(&self, outcome: PrintOutcome);

    /// Handler name for logging.
    fn name(&self) -> &'static str;
}

/// Port for the host print facility.
#[async_trait]
pub trait PrintHost: Send + Sync {
    /// Resolves once the current frame is committed, so anything attached
    /// before the call is visible to the next render pass.
    async fn next_frame(&self);

    /// Ask the host to print the currently print-visible content.
    ///
    /// Returns once the request is accepted; it does not wait for the
    /// print to finish.
    async fn request_print(&self) -> Result<(), PrintHostError>;

    /// Register a handler on the completion signal.
    fn subscribe_completion(&self, handler: Arc<dyn PrintCompletionHandler>) -> SubscriptionId;

    /// Remove a handler. Returns false if it was not registered.
    fn unsubscribe_completion(&self, id: SubscriptionId) -> bool;
}

/// Errors from the print facility itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrintHostError {
    /// The host has no print facility available.
    #[error("Print facility unavailable: {0}")]
    Unavailable(String),

    /// The host refused the request.
    #[error("Print request rejected: {0}")]
    Rejected(String),
}

impl PrintHostError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }
}

impl From<PrintHostError> for DomainError {
    fn from(err: PrintHostError) -> Self {
        DomainError::new(ErrorCode::PrintFacilityError, err.to_string())
    }
}
