//! Spool directory print surface.
//!
//! Attaching writes the rendered artifact to `{spool_dir}/print_{id}.html`;
//! detaching deletes it. The surface remembers which artifacts it attached,
//! so files left in the directory by an earlier process are never printed.

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::config::{ExportConfig, PrintConfig};
use crate::domain::export::{PrintArtifact, StyleDirective};
use crate::domain::foundation::ExportId;
use crate::ports::{PrintSurface, SurfaceError};

use super::HtmlArtifactRenderer;

const FILE_PREFIX: &str = "print_";
const FILE_SUFFIX: &str = ".html";

/// Print surface backed by a directory of HTML files.
///
/// Uses a write-to-temp-then-rename pattern so a print command never
/// picks up a half-written artifact:
/// 1. Write content to `print_{id}.html.tmp`
/// 2. Sync to disk
/// 3. Rename to `print_{id}.html`
#[derive(Debug, Clone)]
pub struct SpoolDirectorySurface {
    spool_dir: PathBuf,
    renderer: HtmlArtifactRenderer,
    attached: Arc<RwLock<BTreeSet<ExportId>>>,
}

impl SpoolDirectorySurface {
    pub fn new(spool_dir: impl Into<PathBuf>) -> Self {
        Self {
            spool_dir: spool_dir.into(),
            renderer: HtmlArtifactRenderer::default(),
            attached: Arc::new(RwLock::new(BTreeSet::new())),
        }
    }

    /// Surface over the configured spool directory, titled from `ExportConfig`.
    pub fn from_config(print: &PrintConfig, export: &ExportConfig) -> Self {
        Self::new(print.spool_dir.clone()).with_renderer(HtmlArtifactRenderer::from_config(export))
    }

    pub fn with_renderer(mut self, renderer: HtmlArtifactRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn spool_dir(&self) -> &Path {
        &self.spool_dir
    }

    /// Path of the spooled file for an export.
    pub fn artifact_path(&self, id: ExportId) -> PathBuf {
        self.spool_dir
            .join(format!("{}{}{}", FILE_PREFIX, id, FILE_SUFFIX))
    }

    fn temp_path(&self, id: ExportId) -> PathBuf {
        self.spool_dir
            .join(format!("{}{}{}.tmp", FILE_PREFIX, id, FILE_SUFFIX))
    }

    /// Spooled files of the artifacts this surface currently has attached.
    ///
    /// Anything else in the directory is ignored.
    pub fn attached_paths(&self) -> Vec<PathBuf> {
        self.attached
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .map(|id| self.artifact_path(*id))
            .collect()
    }

    fn forget(&self, id: ExportId) {
        self.attached
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&id);
    }
}

#[async_trait]
impl PrintSurface for SpoolDirectorySurface {
    async fn attach(
        &self,
        artifact: &PrintArtifact,
        style: &StyleDirective,
    ) -> Result<(), SurfaceError> {
        let final_path = self.artifact_path(artifact.id);
        if self.is_attached(artifact.id).await || fs::try_exists(&final_path).await.unwrap_or(false) {
            return Err(SurfaceError::AlreadyAttached(artifact.id));
        }

        fs::create_dir_all(&self.spool_dir).await.map_err(|e| {
            SurfaceError::io(format!(
                "Failed to create spool directory {}: {}",
                self.spool_dir.display(),
                e
            ))
        })?;

        let html = self.renderer.render(artifact, style);
        let temp_path = self.temp_path(artifact.id);

        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            SurfaceError::io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.write_all(html.as_bytes()).await.map_err(|e| {
            SurfaceError::io(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.sync_all().await.map_err(|e| {
            SurfaceError::io(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        fs::rename(&temp_path, &final_path).await.map_err(|e| {
            SurfaceError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            ))
        })?;

        self.attached
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(artifact.id);

        tracing::debug!(export_id = %artifact.id, path = %final_path.display(), "artifact spooled");
        Ok(())
    }

    /// Forgets the artifact even when the file cannot be deleted, so a
    /// leftover file is never handed to a later print.
    async fn detach(&self, id: ExportId) -> Result<(), SurfaceError> {
        self.forget(id);
        let path = self.artifact_path(id);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SurfaceError::io(format!(
                "Failed to delete {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn is_attached(&self, id: ExportId) -> bool {
        self.attached
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains(&id)
    }
}
