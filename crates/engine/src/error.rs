use std::fmt;

/// Per-target fill failure. None of these abort a fill pass; the driver
/// records the reason and moves to the next target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillError {
    /// No element on the page carries the target name.
    TargetNotFound(String),
    /// Select had no option acceptable under any matching pass.
    NoMatchingOption,
    /// No same-named radio sibling carries the value.
    NoMatchingRadio,
    /// Element category outside the handled set.
    UnsupportedType { tag: String, input_type: String },
    /// The host bridge failed while assigning to the element (e.g. the
    /// target was invalidated between resolve and apply).
    Assignment(String),
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TargetNotFound(name) => write!(f, "input not found: {name}"),
            Self::NoMatchingOption => write!(f, "no matching option"),
            Self::NoMatchingRadio => write!(f, "no matching radio"),
            Self::UnsupportedType { tag, input_type } => {
                write!(f, "unsupported input type: {tag} ({input_type})")
            }
            Self::Assignment(msg) => write!(f, "assignment failed: {msg}"),
        }
    }
}

impl std::error::Error for FillError {}
