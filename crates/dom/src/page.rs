use serde::{Deserialize, Serialize};

use crate::element::{FormElement, TargetCategory};
use crate::events::{EventKind, FieldEvent};

/// A target resolved against the current page state.
///
/// Valid only for the page state it was resolved from; re-resolve after the
/// page mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub index: usize,
    pub category: TargetCategory,
    /// Same-named radio sibling indices in document order. Empty for every
    /// other category.
    pub radio_group: Vec<usize>,
}

/// The page's form controls in document order, plus the synthetic event log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormPage {
    pub elements: Vec<FormElement>,
    #[serde(skip)]
    events: Vec<FieldEvent>,
}

impl FormPage {
    pub fn new(elements: Vec<FormElement>) -> Self {
        Self { elements, events: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn element(&self, index: usize) -> &FormElement {
        &self.elements[index]
    }

    /// Append a control that appeared after initial render.
    pub fn push_element(&mut self, element: FormElement) {
        self.elements.push(element);
    }

    /// Resolve a target identifier to the first element whose `name` equals
    /// it (querySelector semantics). The category is fixed here; radios also
    /// get their sibling set.
    pub fn resolve(&self, name: &str) -> Option<ResolvedTarget> {
        let index = self.elements.iter().position(|el| el.name == name)?;
        let category = TargetCategory::of(&self.elements[index]);
        let radio_group = if category == TargetCategory::Radio {
            self.radio_group(name)
        } else {
            Vec::new()
        };
        Some(ResolvedTarget { index, category, radio_group })
    }

    /// All radio buttons sharing `name`, in document order.
    pub fn radio_group(&self, name: &str) -> Vec<usize> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, el)| el.name == name && TargetCategory::of(el) == TargetCategory::Radio)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn set_value(&mut self, index: usize, value: &str) {
        self.elements[index].value = value.to_string();
    }

    /// Set the checked state. Checking a radio unchecks its same-named
    /// siblings (native exclusivity).
    pub fn set_checked(&mut self, index: usize, checked: bool) {
        if checked && TargetCategory::of(&self.elements[index]) == TargetCategory::Radio {
            let name = self.elements[index].name.clone();
            for sibling in self.radio_group(&name) {
                self.elements[sibling].checked = sibling == index;
            }
        } else {
            self.elements[index].checked = checked;
        }
    }

    /// Record a synthetic event against the element's name.
    pub fn dispatch(&mut self, index: usize, kind: EventKind) {
        let name = self.elements[index].name.clone();
        self.events.push(FieldEvent { name, kind });
    }

    pub fn events(&self) -> &[FieldEvent] {
        &self.events
    }

    /// Drain the event log (the bridge replays these as real DOM events).
    pub fn take_events(&mut self) -> Vec<FieldEvent> {
        std::mem::take(&mut self.events)
    }

    /// Event kinds dispatched against one element, in dispatch order.
    pub fn events_for(&self, name: &str) -> Vec<EventKind> {
        self.events
            .iter()
            .filter(|e| e.name == name)
            .map(|e| e.kind)
            .collect()
    }
}
