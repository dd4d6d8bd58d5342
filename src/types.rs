use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::feedback::{FieldFeedback, FieldView};

// ─── Text fields ────────────────────────────────────────────────────────────

/// One text-like field: its value, derived state and rendering capability.
#[derive(Clone, Debug)]
pub struct TextField<F = FieldView> {
    pub(crate) id: FieldId,
    pub(crate) value: String,
    pub(crate) validity: Validity,
    /// Native-validity message currently attached to the field.
    pub(crate) custom_validity: Option<String>,
    pub(crate) visible: bool,
    pub(crate) feedback: F,
}

impl<F: FieldFeedback> TextField<F> {
    pub fn new(id: FieldId, feedback: F) -> Self {
        TextField {
            id,
            value: String::new(),
            validity: Validity::Unset,
            custom_validity: None,
            visible: !id.is_conditional(),
            feedback,
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    pub fn custom_validity(&self) -> Option<&str> {
        self.custom_validity.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub(crate) fn mark_valid(&mut self) {
        self.validity = Validity::Valid;
        self.custom_validity = None;
        self.feedback.clear();
    }

    pub(crate) fn mark_invalid(&mut self, message: &str) {
        self.validity = Validity::Invalid;
        self.custom_validity = Some(message.to_string());
        self.feedback.set_error(message);
    }

    /// Empty the field and forget any validation state.
    pub(crate) fn reset(&mut self) {
        self.value.clear();
        self.validity = Validity::Unset;
        self.custom_validity = None;
        self.feedback.reset();
    }
}

// ─── Group controls ─────────────────────────────────────────────────────────

/// A single-choice drop-down. The empty value is the placeholder option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    pub(crate) options: Vec<String>,
    pub(crate) value: String,
    pub(crate) custom_validity: Option<String>,
}

impl Selector {
    pub fn new(options: Vec<String>) -> Self {
        Selector {
            options,
            value: String::new(),
            custom_validity: None,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Select `value`; a value that is not one of the options selects the placeholder.
    pub fn select(&mut self, value: &str) {
        self.value = if self.options.iter().any(|o| o == value) {
            value.to_string()
        } else {
            String::new()
        };
    }

    pub fn is_chosen(&self) -> bool {
        !self.value.is_empty()
    }

    pub fn custom_validity(&self) -> Option<&str> {
        self.custom_validity.as_deref()
    }
}

/// A required radio group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadioGroup {
    pub(crate) options: Vec<String>,
    pub(crate) checked: Option<usize>,
}

impl RadioGroup {
    pub fn new(options: Vec<String>) -> Self {
        RadioGroup {
            options,
            checked: None,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Check the option whose value is `value`. Unknown values change nothing.
    pub fn choose(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o == value) {
            Some(i) => {
                self.checked = Some(i);
                true
            }
            None => false,
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.checked.map(|i| self.options[i].as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checkbox {
    /// Text rendered next to the box; may carry surrounding whitespace.
    pub label: String,
    pub checked: bool,
}

impl Checkbox {
    pub fn new(label: impl Into<String>) -> Self {
        Checkbox {
            label: label.into(),
            checked: false,
        }
    }
}

/// The hobby checkboxes plus the toggle that reveals the free-text entry.
///
/// The group's "select at least one" tooltip is attached to the first box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckboxGroup {
    pub(crate) boxes: Vec<Checkbox>,
    pub(crate) other: Checkbox,
    pub(crate) custom_validity: Option<String>,
}

impl CheckboxGroup {
    pub fn new(labels: &[String], other_label: &str) -> Self {
        CheckboxGroup {
            boxes: labels.iter().map(Checkbox::new).collect(),
            other: Checkbox::new(other_label),
            custom_validity: None,
        }
    }

    pub fn boxes(&self) -> &[Checkbox] {
        &self.boxes
    }

    pub fn other(&self) -> &Checkbox {
        &self.other
    }

    /// Set box `index`; returns false when there is no such box.
    pub fn set_checked(&mut self, index: usize, checked: bool) -> bool {
        match self.boxes.get_mut(index) {
            Some(b) => {
                b.checked = checked;
                true
            }
            None => false,
        }
    }

    pub fn any_checked(&self) -> bool {
        self.other.checked || self.boxes.iter().any(|b| b.checked)
    }

    /// Trimmed labels of the checked fixed boxes, in document order.
    pub fn checked_labels(&self) -> Vec<String> {
        self.boxes
            .iter()
            .filter(|b| b.checked)
            .map(|b| b.label.trim().to_string())
            .collect()
    }

    /// Tooltip currently carried by the first box.
    pub fn custom_validity(&self) -> Option<&str> {
        self.custom_validity.as_deref()
    }
}

// ─── Submission record ──────────────────────────────────────────────────────

/// A successfully submitted registration. Never mutated once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub city: String,
    pub gender: String,
    pub hobbies: Vec<String>,
}
