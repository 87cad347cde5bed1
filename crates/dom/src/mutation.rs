use serde::{Deserialize, Serialize};

/// Tags that qualify a batch when they appear on an added node itself.
const CONTROL_TAGS: &[&str] = &["input", "select", "textarea", "form"];

/// Tags that qualify a batch when they appear among a node's descendants.
/// `form` counts only on the node itself.
const CONTROL_DESCENDANT_TAGS: &[&str] = &["input", "select", "textarea"];

/// Summary of one node added by a structural mutation: its tag plus the tags
/// of its descendants. The bridge flattens real added nodes into this shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddedNode {
    pub tag: String,
    #[serde(default)]
    pub descendants: Vec<String>,
}

impl AddedNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), descendants: Vec::new() }
    }

    pub fn with_descendants(mut self, tags: &[&str]) -> Self {
        self.descendants = tags.iter().map(|t| t.to_string()).collect();
        self
    }
}

/// Summary of one observer callback: every element node it added.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MutationBatch {
    pub added: Vec<AddedNode>,
}

impl MutationBatch {
    pub fn new(added: Vec<AddedNode>) -> Self {
        Self { added }
    }

    /// True when the batch brought in form controls worth a re-fill: an
    /// added node that is itself `input`/`select`/`textarea`/`form`, or has
    /// an `input`/`select`/`textarea` descendant.
    pub fn has_form_controls(&self) -> bool {
        self.added.iter().any(|node| {
            let tag = node.tag.to_lowercase();
            if CONTROL_TAGS.contains(&tag.as_str()) {
                return true;
            }
            node.descendants
                .iter()
                .any(|d| CONTROL_DESCENDANT_TAGS.contains(&d.to_lowercase().as_str()))
        })
    }
}
