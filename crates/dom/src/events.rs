//! Synthetic field events.
//!
//! Frameworks bound to the page listen for `input`, `change`, or `blur`; the
//! engine dispatches the documented sequence after every mutating assignment
//! and the page records it. The host bridge replays the log as real DOM
//! events; tests assert on it directly.

use serde::{Deserialize, Serialize};

/// The three notifications a fill can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Input,
    Change,
    Blur,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Change => write!(f, "change"),
            Self::Blur => write!(f, "blur"),
        }
    }
}

/// One dispatched event, tagged with the element's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEvent {
    pub name: String,
    pub kind: EventKind,
}

impl FieldEvent {
    pub fn new(name: impl Into<String>, kind: EventKind) -> Self {
        Self { name: name.into(), kind }
    }
}
