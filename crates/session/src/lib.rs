//! `gridfill-session` — the per-page-context fill session.
//!
//! One [`Session`] per injected page: it owns the form document, the last
//! fill request, and the [`RefillWatcher`] that re-applies the request when
//! the page keeps rendering controls after the initial pass. The host bridge
//! drives it with three calls: `handle_fill`, `on_mutations`, `tick`.

pub mod controller;
pub mod watcher;

pub use controller::Session;
pub use watcher::{RefillWatcher, WatcherPhase};
