//! Event wiring: routes user events to the validators and the controller.
//!
//! Each call to [`FormSession::dispatch`] runs to completion before the next
//! event is handled, so form state has a single writer and needs no locking.

use crate::enums::FieldId;
use crate::error::{SubmitError, ValidityReport};
use crate::feedback::FieldFeedback;
use crate::form::RegistrationForm;
use crate::store::KeyValueStore;
use crate::submit::{Navigator, SubmissionController, SubmitOutcome};
use crate::types::SubmissionRecord;

/// A user interaction with the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    /// The value of a text-like field changed.
    Input { field: FieldId, value: String },
    /// The user tried to move focus forward out of a field.
    TabForward { field: FieldId },
    CityChanged(String),
    GenderChosen(String),
    HobbyToggled { index: usize, checked: bool },
    OtherHobbyToggled(bool),
    Submit,
}

/// What the host should do after an event was handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    Handled,
    /// Cancel the focus move; the field is invalid.
    NavigationBlocked,
    Submitted(SubmissionRecord),
    Rejected(ValidityReport),
}

impl From<SubmitOutcome> for Dispatch {
    fn from(outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Submitted(record) => Dispatch::Submitted(record),
            SubmitOutcome::Rejected(report) => Dispatch::Rejected(report),
        }
    }
}

/// A form bound to its submission controller.
pub struct FormSession<F, S, N> {
    form: RegistrationForm<F>,
    controller: SubmissionController<S, N>,
}

impl<F: FieldFeedback, S: KeyValueStore, N: Navigator> FormSession<F, S, N> {
    pub fn new(form: RegistrationForm<F>, controller: SubmissionController<S, N>) -> Self {
        FormSession { form, controller }
    }

    pub fn form(&self) -> &RegistrationForm<F> {
        &self.form
    }

    pub fn controller(&self) -> &SubmissionController<S, N> {
        &self.controller
    }

    pub fn dispatch(&mut self, event: FormEvent) -> Result<Dispatch, SubmitError> {
        tracing::debug!(?event, "dispatch");
        let form = &mut self.form;

        match event {
            FormEvent::Input { field, value } => {
                if !form.field(field).is_visible() {
                    return Ok(Dispatch::Handled);
                }
                form.set_value(field, value);
                form.validate_field(field);
                Ok(Dispatch::Handled)
            }
            FormEvent::TabForward { field } => {
                if !form.field(field).is_visible() || form.validate_field(field) {
                    Ok(Dispatch::Handled)
                } else {
                    Ok(Dispatch::NavigationBlocked)
                }
            }
            FormEvent::CityChanged(value) => {
                form.select_city(&value);
                form.check_group_validity();
                Ok(Dispatch::Handled)
            }
            FormEvent::GenderChosen(value) => {
                form.choose_gender(&value);
                Ok(Dispatch::Handled)
            }
            FormEvent::HobbyToggled { index, checked } => {
                if form.set_hobby(index, checked) {
                    form.check_group_validity();
                }
                Ok(Dispatch::Handled)
            }
            FormEvent::OtherHobbyToggled(checked) => {
                form.set_other_hobby(checked);
                Ok(Dispatch::Handled)
            }
            FormEvent::Submit => self.controller.submit(form).map(Dispatch::from),
        }
    }

    /// Dispatch several events, stopping at the first store failure.
    pub fn dispatch_all(
        &mut self,
        events: impl IntoIterator<Item = FormEvent>,
    ) -> Result<Vec<Dispatch>, SubmitError> {
        events.into_iter().map(|e| self.dispatch(e)).collect()
    }

    pub fn into_parts(self) -> (RegistrationForm<F>, SubmissionController<S, N>) {
        (self.form, self.controller)
    }
}
