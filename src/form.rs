//! The registration form: field registry, field validation and group validation.
//!
//! Every control is created once from a [`FormConfig`] and addressed by
//! [`FieldId`] or by its typed accessor. Validation results flow into the
//! field's [`FieldFeedback`] and into the native-validity messages that
//! [`RegistrationForm::report_validity`] collects.

use crate::config::FormConfig;
use crate::enums::*;
use crate::error::{ValidationError, ValidityReport};
use crate::feedback::{FieldFeedback, FieldView};
use crate::rules::RuleTable;
use crate::types::*;

pub const CITY_PROMPT: &str = "Please select an item in the list.";
pub const HOBBY_PROMPT: &str = "Please select at least one hobby.";
pub const GENDER_PROMPT: &str = "Please select one of these options.";

/// Validate one field against its rule, update its state and feedback.
///
/// Fields without a rule are always valid and keep whatever visual state
/// they had. The error slot is created either way.
pub fn validate<F: FieldFeedback>(field: &mut TextField<F>, rules: &RuleTable) -> bool {
    field.feedback.ensure_error_slot();

    let Some(rule) = rules.get(field.id) else {
        return true;
    };

    let valid = rule.test(&field.value);
    if valid {
        field.mark_valid();
    } else {
        field.mark_invalid(&rule.message);
    }
    tracing::trace!(field = %field.id, valid, "field validated");
    valid
}

#[derive(Clone, Debug)]
pub struct RegistrationForm<F = FieldView> {
    rules: RuleTable,
    /// Indexed by `FieldId` discriminant, i.e. `FieldId::ALL` order.
    fields: Vec<TextField<F>>,
    city: Selector,
    gender: RadioGroup,
    hobbies: CheckboxGroup,
}

impl RegistrationForm<FieldView> {
    /// Build a headless form whose feedback is recorded in [`FieldView`]s.
    pub fn new(config: &FormConfig, rules: RuleTable) -> Self {
        Self::with_feedback(config, rules, |_| FieldView::new())
    }
}

impl<F: FieldFeedback> RegistrationForm<F> {
    /// Build a form, asking `make_feedback` for each field's UI binding.
    pub fn with_feedback(
        config: &FormConfig,
        rules: RuleTable,
        mut make_feedback: impl FnMut(FieldId) -> F,
    ) -> Self {
        RegistrationForm {
            rules,
            fields: FieldId::ALL
                .into_iter()
                .map(|id| TextField::new(id, make_feedback(id)))
                .collect(),
            city: Selector::new(config.cities.clone()),
            gender: RadioGroup::new(config.genders.clone()),
            hobbies: CheckboxGroup::new(&config.hobbies, &config.other_hobby_label),
        }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn field(&self, id: FieldId) -> &TextField<F> {
        &self.fields[id as usize]
    }

    pub(crate) fn field_mut(&mut self, id: FieldId) -> &mut TextField<F> {
        &mut self.fields[id as usize]
    }

    pub fn fields(&self) -> impl Iterator<Item = &TextField<F>> {
        self.fields.iter()
    }

    pub fn city(&self) -> &Selector {
        &self.city
    }

    pub fn gender(&self) -> &RadioGroup {
        &self.gender
    }

    pub fn hobbies(&self) -> &CheckboxGroup {
        &self.hobbies
    }

    /// Replace a field's value without validating it.
    pub fn set_value(&mut self, id: FieldId, value: impl Into<String>) {
        self.field_mut(id).set_value(value);
    }

    pub fn select_city(&mut self, value: &str) {
        self.city.select(value);
    }

    pub fn choose_gender(&mut self, value: &str) -> bool {
        self.gender.choose(value)
    }

    pub fn set_hobby(&mut self, index: usize, checked: bool) -> bool {
        self.hobbies.set_checked(index, checked)
    }

    /// Check or uncheck the "other" toggle.
    ///
    /// Checking reveals the free-text field. Unchecking hides it, empties it
    /// and drops its validation state. Group validity is recomputed either way.
    pub fn set_other_hobby(&mut self, checked: bool) {
        self.hobbies.other.checked = checked;
        let field = self.field_mut(FieldId::OtherText);
        field.visible = checked;
        if !checked {
            field.reset();
        }
        self.check_group_validity();
    }

    pub fn other_hobby_checked(&self) -> bool {
        self.hobbies.other.checked
    }

    /// Run the field validator on `id`.
    pub fn validate_field(&mut self, id: FieldId) -> bool {
        let RegistrationForm { rules, fields, .. } = self;
        validate(&mut fields[id as usize], rules)
    }

    /// Recompute the city and hobby group tooltips.
    pub fn check_group_validity(&mut self) {
        self.city.custom_validity = if self.city.is_chosen() {
            None
        } else {
            Some(CITY_PROMPT.to_string())
        };

        self.hobbies.custom_validity = if self.hobbies.any_checked() {
            None
        } else {
            Some(HOBBY_PROMPT.to_string())
        };

        tracing::debug!(
            city = self.city.is_chosen(),
            hobbies = self.hobbies.any_checked(),
            "group validity checked"
        );
    }

    /// Aggregate native validity from the current tooltip state.
    ///
    /// Does not re-run any validator.
    pub fn check_validity(&self) -> bool {
        self.native_errors().is_empty()
    }

    /// Every failing native-validity message, in document order.
    pub fn report_validity(&self) -> ValidityReport {
        ValidityReport {
            errors: self.native_errors(),
        }
    }

    fn native_errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let mut push = |control: &str, message: &str| {
            errors.push(ValidationError {
                control: control.to_string(),
                message: message.to_string(),
            })
        };

        for field in self.fields.iter().filter(|f| !f.id.is_conditional()) {
            if let Some(message) = field.custom_validity() {
                push(field.id.as_str(), message);
            }
        }
        if let Some(message) = self.city.custom_validity() {
            push("city", message);
        }
        if self.gender.value().is_none() {
            push("gender", GENDER_PROMPT);
        }
        if let Some(message) = self.hobbies.custom_validity() {
            push("hobbies", message);
        }
        let other = self.field(FieldId::OtherText);
        if let Some(message) = other.custom_validity() {
            push(other.id.as_str(), message);
        }

        errors
    }

    /// Snapshot the form as a record, if a gender has been chosen.
    ///
    /// Text values are taken verbatim. Hobbies are the trimmed labels of the
    /// checked boxes, followed by the free-text entry when the "other"
    /// toggle is checked. That entry stands in for the toggle's label and is
    /// trimmed like every other hobby, so the list never carries surrounding
    /// whitespace.
    pub fn record(&self) -> Option<SubmissionRecord> {
        let gender = self.gender.value()?.to_string();

        let mut hobbies = self.hobbies.checked_labels();
        if self.hobbies.other.checked {
            hobbies.push(self.field(FieldId::OtherText).value.trim().to_string());
        }

        let text = |id: FieldId| self.field(id).value.clone();
        Some(SubmissionRecord {
            name: text(FieldId::Name),
            mobile: text(FieldId::Mobile),
            email: text(FieldId::Email),
            password: text(FieldId::Password),
            address: text(FieldId::Address),
            city: self.city.value.clone(),
            gender,
            hobbies,
        })
    }
}
