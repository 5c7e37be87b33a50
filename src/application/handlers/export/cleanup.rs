//! One-shot cleanup bound to the host's print-completion signal.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::foundation::{ExportId, SubscriptionId};
use crate::ports::{PrintCompletionHandler, PrintHost, PrintOutcome, PrintSurface};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Tracks the single export allowed to be in flight.
#[derive(Debug, Default)]
pub struct InFlightSlot {
    current: Mutex<Option<ExportId>>,
}

impl InFlightSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the slot for `id`. Returns false if another export holds it.
    pub fn try_claim(&self, id: ExportId) -> bool {
        let mut current = lock(&self.current);
        if current.is_some() {
            return false;
        }
        *current = Some(id);
        true
    }

    /// Releases the slot if `id` holds it.
    pub fn release(&self, id: ExportId) {
        let mut current = lock(&self.current);
        if *current == Some(id) {
            *current = None;
        }
    }

    pub fn current(&self) -> Option<ExportId> {
        *lock(&self.current)
    }
}

/// Removes one export's artifact the first time the completion signal fires.
///
/// Every outcome (completed, cancelled, failed) is handled the same way.
/// Later signals are no-ops.
pub struct CleanupOnCompletion {
    export_id: ExportId,
    surface: Arc<dyn PrintSurface>,
    host: Arc<dyn PrintHost>,
    slot: Arc<InFlightSlot>,
    subscription: Mutex<Option<SubscriptionId>>,
    fired: AtomicBool,
}

impl CleanupOnCompletion {
    pub fn new(
        export_id: ExportId,
        surface: Arc<dyn PrintSurface>,
        host: Arc<dyn PrintHost>,
        slot: Arc<InFlightSlot>,
    ) -> Self {
        Self {
            export_id,
            surface,
            host,
            slot,
            subscription: Mutex::new(None),
            fired: AtomicBool::new(false),
        }
    }

    /// Records the subscription to drop on cleanup.
    ///
    /// If cleanup already ran, the subscription is dropped right away.
    pub fn bind(&self, subscription: SubscriptionId) {
        *lock(&self.subscription) = Some(subscription);
        if self.fired.load(Ordering::SeqCst) {
            self.unsubscribe();
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    /// Runs the cleanup once. Returns false if it had already run.
    pub async fn run(&self, outcome: &PrintOutcome) -> bool {
        if self.fired.swap(true, Ordering::SeqCst) {
            tracing::debug!(export_id = %self.export_id, %outcome, "duplicate completion ignored");
            return false;
        }

        if let Err(e) = self.surface.detach(self.export_id).await {
            tracing::warn!(export_id = %self.export_id, error = %e, "failed to detach print artifact");
        }
        self.unsubscribe();
        self.slot.release(self.export_id);

        tracing::info!(export_id = %self.export_id, %outcome, "export cleaned up");
        true
    }

    fn unsubscribe(&self) {
        if let Some(id) = lock(&self.subscription).take() {
            self.host.unsubscribe_completion(id);
        }
    }
}

#[async_trait]
impl PrintCompletionHandler for CleanupOnCompletion {
    async fn on_complete(&self, outcome: PrintOutcome) {
        self.run(&outcome).await;
    }

    fn name(&self) -> &'static str {
        "CleanupOnCompletion"
    }
}
