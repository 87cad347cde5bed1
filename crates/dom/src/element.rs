use serde::{Deserialize, Serialize};

/// Input types treated as free-text controls.
const TEXT_LIKE_TYPES: &[&str] = &["text", "email", "tel", "number", "url", "search", "password"];

/// One option of a `<select>` control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self { value: value.into(), text: text.into() }
    }
}

/// A form control, identified by its stable `name` attribute.
///
/// `tag` and `input_type` are kept as the page reported them; the semantic
/// category is derived once, at resolution time, via [`TargetCategory::of`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormElement {
    pub name: String,
    pub tag: String,
    /// The `type` attribute. Absent on non-`<input>` tags and on inputs
    /// that rely on the `text` default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub checked: bool,
    /// Non-empty only for selects.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

impl FormElement {
    /// An `<input>` with an explicit `type` attribute.
    pub fn input_of(name: impl Into<String>, input_type: &str) -> Self {
        Self {
            name: name.into(),
            tag: "input".into(),
            input_type: Some(input_type.into()),
            value: String::new(),
            checked: false,
            options: Vec::new(),
        }
    }

    /// A plain `<input type="text">`.
    pub fn text(name: impl Into<String>) -> Self {
        Self::input_of(name, "text")
    }

    pub fn textarea(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: "textarea".into(),
            input_type: None,
            value: String::new(),
            checked: false,
            options: Vec::new(),
        }
    }

    pub fn select(name: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            name: name.into(),
            tag: "select".into(),
            input_type: None,
            value: String::new(),
            checked: false,
            options,
        }
    }

    pub fn checkbox(name: impl Into<String>) -> Self {
        Self::input_of(name, "checkbox")
    }

    /// One radio button of a group; the group is the set of radios sharing
    /// the same name.
    pub fn radio(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut el = Self::input_of(name, "radio");
        el.value = value.into();
        el
    }

    pub fn date(name: impl Into<String>) -> Self {
        Self::input_of(name, "date")
    }

    pub fn hidden(name: impl Into<String>) -> Self {
        Self::input_of(name, "hidden")
    }

    /// Set the initial value (builder style).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

/// Semantic category of a form control. Closed set: the fill engine pattern
/// matches on this, never on raw tag/type strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetCategory {
    TextLike,
    TextArea,
    Select,
    Checkbox,
    Radio,
    Date,
    Hidden,
    Unsupported,
}

impl TargetCategory {
    /// Derive the category from tag and `type` attribute. An `<input>`
    /// without a `type` defaults to `text`; tags outside the form-control
    /// set are `Unsupported`.
    pub fn of(element: &FormElement) -> Self {
        match element.tag.to_lowercase().as_str() {
            "textarea" => Self::TextArea,
            "select" => Self::Select,
            "input" => {
                let input_type = element
                    .input_type
                    .as_deref()
                    .unwrap_or("text")
                    .to_lowercase();
                match input_type.as_str() {
                    t if TEXT_LIKE_TYPES.contains(&t) => Self::TextLike,
                    "checkbox" => Self::Checkbox,
                    "radio" => Self::Radio,
                    "date" => Self::Date,
                    "hidden" => Self::Hidden,
                    _ => Self::Unsupported,
                }
            }
            _ => Self::Unsupported,
        }
    }
}

impl std::fmt::Display for TargetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::TextLike => "text",
            Self::TextArea => "textarea",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Date => "date",
            Self::Hidden => "hidden",
            Self::Unsupported => "unsupported",
        };
        write!(f, "{s}")
    }
}
