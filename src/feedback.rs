//! The per-field feedback capability a UI layer implements.
//!
//! The core never touches host APIs: it decides validity and calls these
//! methods. [`FieldView`] is the in-memory implementation used by headless
//! hosts and tests.

use crate::enums::VisualClass;

/// Extension point for rendering field feedback.
pub trait FieldFeedback {
    /// Create the inline error-text element next to the field if absent.
    fn ensure_error_slot(&mut self) {}

    /// Mark the field invalid, render `message` inline and set it as the
    /// field's tooltip.
    fn set_error(&mut self, message: &str);

    /// Mark the field valid and blank both the inline text and the tooltip.
    fn clear(&mut self);

    /// Drop the visual class entirely and blank inline text and tooltip.
    fn reset(&mut self);
}

/// Recorded UI state of one field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldView {
    class: Option<VisualClass>,
    /// `None` until the error element has been created.
    error_text: Option<String>,
    tooltip: String,
}

impl FieldView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(&self) -> Option<VisualClass> {
        self.class
    }

    pub fn has_error_slot(&self) -> bool {
        self.error_text.is_some()
    }

    /// Inline error text; empty if blank or the slot was never created.
    pub fn error_text(&self) -> &str {
        self.error_text.as_deref().unwrap_or("")
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    fn write_error_text(&mut self, text: &str) {
        let slot = self.error_text.get_or_insert_with(String::new);
        slot.clear();
        slot.push_str(text);
    }
}

impl FieldFeedback for FieldView {
    fn ensure_error_slot(&mut self) {
        if self.error_text.is_none() {
            self.error_text = Some(String::new());
        }
    }

    fn set_error(&mut self, message: &str) {
        self.class = Some(VisualClass::Invalid);
        self.write_error_text(message);
        self.tooltip = message.to_string();
    }

    fn clear(&mut self) {
        self.class = Some(VisualClass::Valid);
        self.write_error_text("");
        self.tooltip.clear();
    }

    fn reset(&mut self) {
        self.class = None;
        if let Some(slot) = self.error_text.as_mut() {
            slot.clear();
        }
        self.tooltip.clear();
    }
}
