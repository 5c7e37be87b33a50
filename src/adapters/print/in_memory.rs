//! In-memory print surface and print host for testing.
//!
//! Both adapters are deterministic and in-process. The host never emits a
//! completion signal on its own; tests drive it with `emit_completion`.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::export::{PrintArtifact, StyleDirective};
use crate::domain::foundation::{ExportId, SubscriptionId};
use crate::ports::{
    PrintCompletionHandler, PrintHost, PrintHostError, PrintOutcome, PrintSurface, SurfaceError,
};

// Lock state stays consistent across a panic in a test, so poisoning is ignored.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// ════════════════════════════════════════════════════════════════════════════════
// Surface
// ════════════════════════════════════════════════════════════════════════════════

/// In-memory print surface.
///
/// Keeps attached artifacts in a map keyed by export id.
///
/// # Example
///
/// ```ignore
/// let surface = Arc::new(InMemoryPrintSurface::new());
/// surface.attach(&artifact, &StyleDirective::print_only()).await?;
/// assert_eq!(surface.attached_count(), 1);
/// ```
#[derive(Default)]
pub struct InMemoryPrintSurface {
    attached: RwLock<HashMap<ExportId, (PrintArtifact, StyleDirective)>>,
    detach_calls: AtomicUsize,
    fail_next_attach: RwLock<Option<SurfaceError>>,
}

impl InMemoryPrintSurface {
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// Number of artifacts currently attached.
    pub fn attached_count(&self) -> usize {
        read(&self.attached).len()
    }

    /// A copy of an attached artifact.
    pub fn artifact(&self, id: ExportId) -> Option<PrintArtifact> {
        read(&self.attached).get(&id).map(|(a, _)| a.clone())
    }

    /// The style directive attached with an artifact.
    pub fn style(&self, id: ExportId) -> Option<StyleDirective> {
        read(&self.attached).get(&id).map(|(_, s)| s.clone())
    }

    /// Total `detach` calls, including no-op ones.
    pub fn detach_calls(&self) -> usize {
        self.detach_calls.load(Ordering::SeqCst)
    }

    /// Makes the next `attach` fail with the given error.
    pub fn fail_next_attach(&self, err: SurfaceError) {
        *write(&self.fail_next_attach) = Some(err);
    }
}

#[async_trait]
impl PrintSurface for InMemoryPrintSurface {
    async fn attach(
        &self,
        artifact: &PrintArtifact,
        style: &StyleDirective,
    ) -> Result<(), SurfaceError> {
        if let Some(err) = write(&self.fail_next_attach).take() {
            return Err(err);
        }

        let mut attached = write(&self.attached);
        if attached.contains_key(&artifact.id) {
            return Err(SurfaceError::AlreadyAttached(artifact.id));
        }
        attached.insert(artifact.id, (artifact.clone(), style.clone()));
        Ok(())
    }

    async fn detach(&self, id: ExportId) -> Result<(), SurfaceError> {
        self.detach_calls.fetch_add(1, Ordering::SeqCst);
        write(&self.attached).remove(&id);
        Ok(())
    }

    async fn is_attached(&self, id: ExportId) -> bool {
        read(&self.attached).contains_key(&id)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Host
// ════════════════════════════════════════════════════════════════════════════════

/// In-memory print host.
///
/// Features:
/// - Counts frames and print requests
/// - Completion handlers keyed by subscription id
/// - Manual completion via `emit_completion`
#[derive(Default)]
pub struct InMemoryPrintHost {
    subscribers: RwLock<BTreeMap<SubscriptionId, Arc<dyn PrintCompletionHandler>>>,
    next_subscription: AtomicU64,
    frames: AtomicUsize,
    print_requests: AtomicUsize,
    fail_next_request: RwLock<Option<PrintHostError>>,
}

impl InMemoryPrintHost {
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// Fires the completion signal, invoking every current subscriber once.
    ///
    /// Subscribers are snapshotted before dispatch, so a handler that
    /// unsubscribes while running does not affect this round.
    pub async fn emit_completion(&self, outcome: PrintOutcome) {
        let handlers: Vec<Arc<dyn PrintCompletionHandler>> =
            read(&self.subscribers).values().cloned().collect();

        for handler in handlers {
            tracing::debug!(handler = handler.name(), %outcome, "dispatching print completion");
            handler.on_complete(outcome.clone()).await;
        }
    }

    /// Number of accepted `request_print` calls.
    pub fn print_requests(&self) -> usize {
        self.print_requests.load(Ordering::SeqCst)
    }

    /// Number of `next_frame` calls.
    pub fn frames(&self) -> usize {
        self.frames.load(Ordering::SeqCst)
    }

    /// Number of registered completion handlers.
    pub fn subscriber_count(&self) -> usize {
        read(&self.subscribers).len()
    }

    /// Makes the next `request_print` fail with the given error.
    pub fn fail_next_request(&self, err: PrintHostError) {
        *write(&self.fail_next_request) = Some(err);
    }
}

#[async_trait]
impl PrintHost for InMemoryPrintHost {
    async fn next_frame(&self) {
        self.frames.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
    }

    async fn request_print(&self) -> Result<(), PrintHostError> {
        if let Some(err) = write(&self.fail_next_request).take() {
            return Err(err);
        }
        self.print_requests.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn subscribe_completion(&self, handler: Arc<dyn PrintCompletionHandler>) -> SubscriptionId {
        let id = SubscriptionId::from_raw(self.next_subscription.fetch_add(1, Ordering::SeqCst));
        write(&self.subscribers).insert(id, handler);
        id
    }

    fn unsubscribe_completion(&self, id: SubscriptionId) -> bool {
        write(&self.subscribers).remove(&id).is_some()
    }
}
