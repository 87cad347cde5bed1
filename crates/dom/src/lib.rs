//! `gridfill-dom` — in-process model of a page's form controls.
//!
//! The host bridge (extension shim, embedded webview, test harness) maps the
//! real DOM onto these types: each fillable control becomes a [`FormElement`],
//! and each MutationObserver callback becomes a [`MutationBatch`]. The engine
//! crates never touch a real DOM; they mutate a [`FormPage`] and the bridge
//! syncs the changes back.

pub mod element;
pub mod events;
pub mod mutation;
pub mod page;

pub use element::{FormElement, SelectOption, TargetCategory};
pub use events::{EventKind, FieldEvent};
pub use mutation::{AddedNode, MutationBatch};
pub use page::{FormPage, ResolvedTarget};
