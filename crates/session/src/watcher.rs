//! Re-fill watcher: an explicit state machine over structural mutations.
//!
//! Some pages render form controls in asynchronous batches after the initial
//! fill (postback-style partial updates); a one-shot fill silently misses
//! whatever did not exist yet. The watcher holds the last fill request and
//! releases it for replay when new controls appear — bounded by a retry
//! budget, a debounce window, and an absolute expiry, so a page that never
//! stops mutating cannot re-fill forever.
//!
//! The watcher owns no timers. Deadlines are plain values; the host bridge
//! (or test) injects `Instant`s and drives `poll`, which keeps every
//! transition deterministic and every "timer" trivially cancellable.

use std::time::Instant;

use gridfill_config::WatcherSettings;
use gridfill_dom::MutationBatch;
use gridfill_protocol::FillRequest;

/// Where the watcher is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatcherPhase {
    /// No observation session. Entered on construction, on explicit
    /// disconnect, and when the retry budget runs out.
    Idle,
    /// Holding a replay payload and watching for new controls.
    Observing,
    /// The absolute expiry closed the session. Terminal until the next
    /// `start`.
    Expired,
}

pub struct RefillWatcher {
    settings: WatcherSettings,
    phase: WatcherPhase,
    payload: Option<FillRequest>,
    retries: u32,
    debounce_deadline: Option<Instant>,
    expiry_deadline: Option<Instant>,
}

impl RefillWatcher {
    pub fn new(settings: WatcherSettings) -> Self {
        Self {
            settings,
            phase: WatcherPhase::Idle,
            payload: None,
            retries: 0,
            debounce_deadline: None,
            expiry_deadline: None,
        }
    }

    pub fn phase(&self) -> WatcherPhase {
        self.phase
    }

    /// Qualifying mutation batches seen this session.
    pub fn retries(&self) -> u32 {
        self.retries
    }

    pub fn max_retries(&self) -> u32 {
        self.settings.max_retries
    }

    /// Begin a new observation session for `payload`, tearing down any prior
    /// session first — its deadlines never outlive it.
    pub fn start(&mut self, payload: FillRequest, now: Instant) {
        self.disconnect();
        self.phase = WatcherPhase::Observing;
        self.payload = Some(payload);
        self.retries = 0;
        self.expiry_deadline = Some(now + self.settings.expiry());
    }

    /// Feed one observer callback. A batch that brought in form controls
    /// spends one retry and (re)arms the debounce deadline, so a burst of
    /// batches collapses into a single scheduled re-fill. With the budget
    /// already spent, a qualifying batch ends the session instead.
    pub fn on_mutations(&mut self, batch: &MutationBatch, now: Instant) {
        if self.phase != WatcherPhase::Observing {
            return;
        }
        if self.past_expiry(now) {
            self.expire();
            return;
        }
        if !batch.has_form_controls() {
            return;
        }
        if self.retries >= self.settings.max_retries {
            self.disconnect();
            return;
        }
        self.retries += 1;
        self.debounce_deadline = Some(now + self.settings.debounce());
    }

    /// Fire due deadlines. Expiry wins over a pending debounce: once the
    /// session is past its absolute cap, no re-fill escapes. A due debounce
    /// yields the replay payload exactly once; when that was the last
    /// budgeted re-fill the session ends with it.
    pub fn poll(&mut self, now: Instant) -> Option<FillRequest> {
        if self.phase != WatcherPhase::Observing {
            return None;
        }
        if self.past_expiry(now) {
            self.expire();
            return None;
        }
        match self.debounce_deadline {
            Some(deadline) if now >= deadline => {
                self.debounce_deadline = None;
                let payload = self.payload.clone();
                if self.retries >= self.settings.max_retries {
                    self.disconnect();
                }
                payload
            }
            _ => None,
        }
    }

    /// Earliest pending deadline, for the host's timer wheel.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.debounce_deadline, self.expiry_deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// End observation. Idempotent and safe to call from any phase.
    pub fn disconnect(&mut self) {
        if self.phase == WatcherPhase::Observing {
            self.phase = WatcherPhase::Idle;
        }
        self.payload = None;
        self.debounce_deadline = None;
        self.expiry_deadline = None;
    }

    fn past_expiry(&self, now: Instant) -> bool {
        self.expiry_deadline.is_some_and(|deadline| now >= deadline)
    }

    fn expire(&mut self) {
        self.phase = WatcherPhase::Expired;
        self.payload = None;
        self.debounce_deadline = None;
        self.expiry_deadline = None;
    }
}
