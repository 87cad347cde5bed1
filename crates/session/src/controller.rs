use std::time::Instant;

use gridfill_config::WatcherSettings;
use gridfill_dom::{FormPage, MutationBatch};
use gridfill_protocol::{FillRequest, FillResult};

use crate::watcher::RefillWatcher;

/// Per-page-context controller: owns the form document, the re-fill watcher,
/// and (inside the watcher) the last fill request. Constructed when the
/// bridge injects into a page, shut down on page unload. Everything a page
/// needs to remember between fills lives here as one owned value; there is
/// no global state.
pub struct Session {
    page: FormPage,
    watcher: RefillWatcher,
}

impl Session {
    pub fn new(page: FormPage, settings: WatcherSettings) -> Self {
        Self { page, watcher: RefillWatcher::new(settings) }
    }

    pub fn page(&self) -> &FormPage {
        &self.page
    }

    /// The bridge syncs late-rendered controls through here before (or
    /// while) reporting the mutation batch that added them.
    pub fn page_mut(&mut self) -> &mut FormPage {
        &mut self.page
    }

    pub fn watcher(&self) -> &RefillWatcher {
        &self.watcher
    }

    /// Handle an inbound fill request. The returned result is the caller's
    /// sole completion signal; re-fills the watcher schedules later are
    /// fire-and-forget and never produce a reply.
    pub fn handle_fill(&mut self, request: FillRequest, now: Instant) -> FillResult {
        let result = run_fill(&mut self.page, &request);
        log::info!(
            "fill: {} filled, {} failed",
            result.filled_count,
            result.errors.as_ref().map_or(0, Vec::len)
        );
        self.watcher.start(request, now);
        result
    }

    /// Forward one observer callback to the watcher.
    pub fn on_mutations(&mut self, batch: &MutationBatch, now: Instant) {
        log::debug!(
            "mutations: {} added node(s), qualifying={}",
            batch.added.len(),
            batch.has_form_controls()
        );
        self.watcher.on_mutations(batch, now);
    }

    /// Drive pending deadlines. Returns the re-fill result when the debounce
    /// window released one, so the host can log or inspect it; there is no
    /// caller left to reply to.
    pub fn tick(&mut self, now: Instant) -> Option<FillResult> {
        let payload = self.watcher.poll(now)?;
        let result = run_fill(&mut self.page, &payload);
        log::info!(
            "re-fill {}/{}: {} filled, {} failed",
            self.watcher.retries(),
            self.watcher.max_retries(),
            result.filled_count,
            result.errors.as_ref().map_or(0, Vec::len)
        );
        Some(result)
    }

    /// Earliest instant `tick` has work at.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.watcher.next_deadline()
    }

    /// Page-unload teardown.
    pub fn shutdown(&mut self) {
        self.watcher.disconnect();
    }
}

fn run_fill(page: &mut FormPage, request: &FillRequest) -> FillResult {
    gridfill_engine::fill(
        page,
        &request.record,
        &request.field_mapping,
        request.custom_overrides.as_ref(),
    )
}
