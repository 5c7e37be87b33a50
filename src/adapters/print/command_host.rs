//! Print host that runs a system print command over a spool surface.
//!
//! Each accepted request spawns the configured command (default `lp`) with
//! the file of every artifact the paired surface has attached as an argument. When the command finishes, fails
//! to start, or times out, the completion signal fires exactly once.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::process::Stdio;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::process::Command;

use crate::config::PrintConfig;
use crate::domain::foundation::SubscriptionId;
use crate::ports::{PrintCompletionHandler, PrintHost, PrintHostError, PrintOutcome};

use super::SpoolDirectorySurface;

type Subscribers = Arc<RwLock<BTreeMap<SubscriptionId, Arc<dyn PrintCompletionHandler>>>>;

/// Print host backed by an external print command.
///
/// # Example
///
/// ```rust,ignore
/// let surface = Arc::new(SpoolDirectorySurface::new("/var/spool/gawd-doc"));
/// let host = CommandPrintHost::new("lp", surface.clone())
///     .with_args(["-d", "office"])
///     .with_timeout(Duration::from_secs(30));
/// ```
pub struct CommandPrintHost {
    command: String,
    args: Vec<String>,
    surface: Arc<SpoolDirectorySurface>,
    timeout: Duration,
    subscribers: Subscribers,
    next_subscription: AtomicU64,
}

impl CommandPrintHost {
    pub fn new(command: impl Into<String>, surface: Arc<SpoolDirectorySurface>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            surface,
            timeout: Duration::from_secs(60),
            subscribers: Arc::new(RwLock::new(BTreeMap::new())),
            next_subscription: AtomicU64::new(0),
        }
    }

    pub fn from_config(config: &PrintConfig, surface: Arc<SpoolDirectorySurface>) -> Self {
        Self::new(config.command.clone(), surface)
            .with_args(config.args.iter().cloned())
            .with_timeout(Duration::from_secs(config.timeout_secs))
    }

    /// Extra arguments passed before the artifact paths.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Runs the command to completion and maps the result to an outcome.
    async fn run(command: String, args: Vec<String>, timeout: Duration) -> PrintOutcome {
        let child = Command::new(&command)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn();

        let child = match child {
            Ok(child) => child,
            Err(e) => return PrintOutcome::Failed(format!("Failed to start {}: {}", command, e)),
        };

        match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Err(_) => PrintOutcome::Failed(format!(
                "{} timed out after {} ms",
                command,
                timeout.as_millis()
            )),
            Ok(Err(e)) => PrintOutcome::Failed(format!("{} execution failed: {}", command, e)),
            Ok(Ok(output)) if output.status.success() => PrintOutcome::Completed,
            Ok(Ok(output)) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let reason = if stderr.trim().is_empty() {
                    format!("{} exited with {}", command, output.status)
                } else {
                    format!("{} returned error: {}", command, stderr.trim())
                };
                PrintOutcome::Failed(reason)
            }
        }
    }

    async fn dispatch(subscribers: &Subscribers, outcome: PrintOutcome) {
        let handlers: Vec<Arc<dyn PrintCompletionHandler>> = subscribers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .values()
            .cloned()
            .collect();

        for handler in handlers {
            tracing::debug!(handler = handler.name(), %outcome, "dispatching print completion");
            handler.on_complete(outcome.clone()).await;
        }
    }
}

#[async_trait]
impl PrintHost for CommandPrintHost {
    async fn next_frame(&self) {
        tokio::task::yield_now().await;
    }

    async fn request_print(&self) -> Result<(), PrintHostError> {
        let files = self.surface.attached_paths();
        if files.is_empty() {
            return Err(PrintHostError::rejected(format!(
                "No artifacts attached in {}",
                self.surface.spool_dir().display()
            )));
        }

        let mut args = self.args.clone();
        args.extend(files.iter().map(|p| p.display().to_string()));

        tracing::info!(command = %self.command, files = files.len(), "print command started");

        let command = self.command.clone();
        let timeout = self.timeout;
        let subscribers = Arc::clone(&self.subscribers);
        tokio::spawn(async move {
            let outcome = Self::run(command, args, timeout).await;
            match &outcome {
                PrintOutcome::Failed(reason) => tracing::warn!(%reason, "print command failed"),
                _ => tracing::info!(%outcome, "print command finished"),
            }
            Self::dispatch(&subscribers, outcome).await;
        });

        Ok(())
    }

    fn subscribe_completion(&self, handler: Arc<dyn PrintCompletionHandler>) -> SubscriptionId {
        let id = SubscriptionId::from_raw(self.next_subscription.fetch_add(1, Ordering::SeqCst));
        self.subscribers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(id, handler);
        id
    }

    fn unsubscribe_completion(&self, id: SubscriptionId) -> bool {
        self.subscribers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&id)
            .is_some()
    }
}
