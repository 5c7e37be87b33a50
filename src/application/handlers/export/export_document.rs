//! ExportDocumentHandler - Command handler for printing the current document.

use std::sync::Arc;
use thiserror::Error;

use crate::config::ExportConfig;
use crate::domain::catalog::ContentCatalog;
use crate::domain::document::DocumentStateStore;
use crate::domain::export::{
    build_print_artifact, HeadingExclusions, StyleDirective, DEFAULT_EMPTY_PLACEHOLDER,
};
use crate::domain::foundation::{DomainError, ErrorCode, ExportId};
use crate::domain::surface::{RenderSurface, RenderedDocument};
use crate::ports::{PrintHost, PrintHostError, PrintOutcome, PrintSurface, SurfaceError};

use super::{CleanupOnCompletion, InFlightSlot};

/// Command to export the document as it is currently shown.
#[derive(Debug, Clone)]
pub struct ExportDocumentCommand {
    /// The materialized document, or `None` if nothing is mounted yet.
    pub document: Option<RenderedDocument>,
}

impl ExportDocumentCommand {
    /// Snapshots whatever the surface currently shows.
    pub fn from_surface(surface: &RenderSurface, store: &DocumentStateStore) -> Self {
        Self {
            document: surface.materialize(store),
        }
    }
}

/// What an export trigger did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    /// No content was mounted; nothing was built or printed.
    NothingToExport,
    /// Another export is still waiting for its completion signal.
    AlreadyInFlight,
    /// The artifact is attached and the print request was accepted.
    Started { export_id: ExportId },
}

/// Errors that end an export early. Cleanup has always run by the time
/// one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportDocumentError {
    #[error("Failed to attach print artifact: {0}")]
    Attach(#[from] SurfaceError),

    #[error("Print request for export {export_id} failed: {source}")]
    PrintRequest {
        export_id: ExportId,
        #[source]
        source: PrintHostError,
    },
}

impl From<ExportDocumentError> for DomainError {
    fn from(err: ExportDocumentError) -> Self {
        match err {
            ExportDocumentError::Attach(e) => e.into(),
            ExportDocumentError::PrintRequest { export_id, source } => {
                DomainError::new(ErrorCode::PrintFacilityError, source.to_string())
                    .with_detail("export_id", export_id.to_string())
            }
        }
    }
}

/// Handler for export triggers.
///
/// Builds the artifact, attaches it, registers the one-shot cleanup, waits
/// one frame and then asks the host to print. Only one export may be in
/// flight; a trigger that arrives while one is pending is ignored.
pub struct ExportDocumentHandler {
    surface: Arc<dyn PrintSurface>,
    host: Arc<dyn PrintHost>,
    exclusions: HeadingExclusions,
    placeholder: String,
    style: StyleDirective,
    in_flight: Arc<InFlightSlot>,
}

impl ExportDocumentHandler {
    pub fn new(
        surface: Arc<dyn PrintSurface>,
        host: Arc<dyn PrintHost>,
        exclusions: HeadingExclusions,
    ) -> Self {
        Self {
            surface,
            host,
            exclusions,
            placeholder: DEFAULT_EMPTY_PLACEHOLDER.to_string(),
            style: StyleDirective::print_only(),
            in_flight: Arc::new(InFlightSlot::new()),
        }
    }

    /// Handler configured from the catalog's suppressed sections and `ExportConfig`.
    pub fn from_config(
        surface: Arc<dyn PrintSurface>,
        host: Arc<dyn PrintHost>,
        catalog: &ContentCatalog,
        config: &ExportConfig,
    ) -> Self {
        let exclusions = HeadingExclusions::from_catalog(catalog)
            .with_extra(config.extra_excluded_headings.iter());
        Self::new(surface, host, exclusions).with_placeholder(config.empty_placeholder.clone())
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_style(mut self, style: StyleDirective) -> Self {
        self.style = style;
        self
    }

    /// The export currently waiting for its completion signal, if any.
    pub fn in_flight(&self) -> Option<ExportId> {
        self.in_flight.current()
    }

    pub async fn handle(
        &self,
        cmd: ExportDocumentCommand,
    ) -> Result<ExportOutcome, ExportDocumentError> {
        // 1. Nothing mounted means nothing to export
        let Some(document) = cmd.document else {
            tracing::debug!("export requested before document was mounted");
            return Ok(ExportOutcome::NothingToExport);
        };

        // 2. Traverse, filter, classify, serialize
        let artifact = build_print_artifact(&document, &self.exclusions, &self.placeholder);
        let export_id = artifact.id;

        // 3. One export at a time
        if !self.in_flight.try_claim(export_id) {
            tracing::warn!(
                pending = ?self.in_flight.current(),
                "export ignored: previous export still in flight"
            );
            return Ok(ExportOutcome::AlreadyInFlight);
        }

        // 4. Attach artifact and style
        if let Err(e) = self.surface.attach(&artifact, &self.style).await {
            self.in_flight.release(export_id);
            tracing::error!(%export_id, error = %e, "failed to attach print artifact");
            return Err(e.into());
        }

        tracing::info!(
            %export_id,
            revision = artifact.source_revision,
            nodes = artifact.len(),
            "print artifact attached"
        );

        // 5. Register one-shot cleanup before anything can complete
        let cleanup = Arc::new(CleanupOnCompletion::new(
            export_id,
            Arc::clone(&self.surface),
            Arc::clone(&self.host),
            Arc::clone(&self.in_flight),
        ));
        let subscription = self.host.subscribe_completion(cleanup.clone());
        cleanup.bind(subscription);

        // 6. Let the attachment commit, then print
        self.host.next_frame().await;

        if let Err(source) = self.host.request_print().await {
            tracing::warn!(%export_id, error = %source, "print request failed");
            cleanup.run(&PrintOutcome::Failed(source.to_string())).await;
            return Err(ExportDocumentError::PrintRequest { export_id, source });
        }

        tracing::debug!(%export_id, "print requested");
        Ok(ExportOutcome::Started { export_id })
    }
}
