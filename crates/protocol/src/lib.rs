//! Gridfill Bridge Protocol — v1 Frozen Wire Format
//!
//! This crate defines the canonical types exchanged between the host bridge
//! (popup/background orchestrator) and the in-page fill session. The wire
//! format is JSON with camelCase keys.
//!
//! # Protocol Version
//!
//! This is **protocol v1** — the wire format is frozen. Changes require:
//! 1. Version bump in PROTOCOL_VERSION
//! 2. New golden vectors in `tests/golden.rs`
//! 3. Backward compatibility handling
//!
//! # The `errors` contract
//!
//! `FillResult.errors` is `null` when no target failed, **never** an empty
//! list. The orchestrator branches on that distinction; golden vectors pin it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Current protocol version. Increment for breaking changes.
pub const PROTOCOL_VERSION: u32 = 1;

/// Label → value data for one fill pass. Immutable once handed to the engine.
pub type Record = BTreeMap<String, String>;

/// Label → target-identifier(s) configuration.
pub type FieldMapping = BTreeMap<String, TargetSpec>;

/// Flat identifier → value overrides, bypassing the label indirection.
pub type CustomFields = BTreeMap<String, String>;

// =============================================================================
// Bridge → Session Messages
// =============================================================================

/// Messages the bridge delivers into a page session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ClientMessage {
    FillForm(FillRequest),
}

/// One fill pass: a record, the mapping that routes it, optional overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillRequest {
    pub record: Record,
    pub field_mapping: FieldMapping,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_overrides: Option<CustomFields>,
}

/// A mapping entry fans out to one target or several; the bare-string form
/// is what hand-written configurations mostly use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetSpec {
    One(String),
    Many(Vec<String>),
}

impl TargetSpec {
    /// The targets as a slice; a bare string is a singleton.
    pub fn targets(&self) -> &[String] {
        match self {
            Self::One(name) => std::slice::from_ref(name),
            Self::Many(names) => names,
        }
    }
}

// =============================================================================
// Session → Bridge Reply
// =============================================================================

/// Aggregated outcome of one fill pass. The reply to a fill request is the
/// sole completion signal; watcher re-fills never produce one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillResult {
    /// True iff at least one target was filled.
    pub success: bool,
    pub filled_count: usize,
    /// `label → target` success descriptions, in fill order.
    pub filled: Vec<String>,
    /// Every per-target failure reason. `None` when there were none — the
    /// orchestrator branches on null vs list.
    pub errors: Option<Vec<String>>,
    /// First three failure reasons joined by `", "`, for compact display.
    pub error: Option<String>,
}

impl FillResult {
    /// Build a result from the ordered success and failure lists, deriving
    /// the counts, the overall flag, and the truncated display string.
    pub fn from_parts(filled: Vec<String>, errors: Vec<String>) -> Self {
        let error = if errors.is_empty() {
            None
        } else {
            Some(errors.iter().take(3).cloned().collect::<Vec<_>>().join(", "))
        };
        Self {
            success: !filled.is_empty(),
            filled_count: filled.len(),
            filled,
            errors: if errors.is_empty() { None } else { Some(errors) },
            error,
        }
    }
}
