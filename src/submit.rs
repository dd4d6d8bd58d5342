//! Submission controller and the navigation extension point.

use crate::config::FormConfig;
use crate::enums::{ControllerState, FieldId};
use crate::error::{SubmitError, ValidityReport};
use crate::feedback::FieldFeedback;
use crate::form::RegistrationForm;
use crate::store::{KeyValueStore, RecordStore};
use crate::types::SubmissionRecord;

/// Extension point for what happens after a record has been persisted.
pub trait Navigator {
    /// Show a user-visible acknowledgment.
    fn acknowledge(&mut self, message: &str);

    /// Leave the form for `view`.
    fn redirect(&mut self, view: &str);
}

/// Navigator that only remembers what it was asked to do.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingNavigator {
    pub acknowledgments: Vec<String>,
    pub redirects: Vec<String>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_redirect(&self) -> Option<&str> {
        self.redirects.last().map(String::as_str)
    }
}

impl Navigator for RecordingNavigator {
    fn acknowledge(&mut self, message: &str) {
        self.acknowledgments.push(message.to_string());
    }

    fn redirect(&mut self, view: &str) {
        self.redirects.push(view.to_string());
    }
}

/// Result of one submit event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The record was persisted and navigation requested.
    Submitted(SubmissionRecord),
    /// Something failed validation; nothing was persisted.
    Rejected(ValidityReport),
}

pub struct SubmissionController<S, N> {
    records: RecordStore<S>,
    navigator: N,
    results_view: String,
    success_message: String,
    state: ControllerState,
}

impl<S: KeyValueStore, N: Navigator> SubmissionController<S, N> {
    pub fn new(config: &FormConfig, store: S, navigator: N) -> Self {
        SubmissionController {
            records: RecordStore::new(store, config.storage_key.clone()),
            navigator,
            results_view: config.results_view.clone(),
            success_message: config.success_message.clone(),
            state: ControllerState::Idle,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn records(&self) -> &RecordStore<S> {
        &self.records
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Handle one submit event against `form`.
    ///
    /// The default navigation is always suppressed: the only ways off the
    /// form are the navigator's redirect after a stored record, or an `Err`
    /// from the store. Every validator is re-run regardless of any earlier
    /// per-keystroke result.
    pub fn submit<F: FieldFeedback>(
        &mut self,
        form: &mut RegistrationForm<F>,
    ) -> Result<SubmitOutcome, SubmitError> {
        self.state = ControllerState::Submitting;
        let result = self.process(form);
        self.state = ControllerState::Idle;
        result
    }

    fn process<F: FieldFeedback>(
        &mut self,
        form: &mut RegistrationForm<F>,
    ) -> Result<SubmitOutcome, SubmitError> {
        form.check_group_validity();

        let mut valid = true;
        let other_checked = form.other_hobby_checked();
        for id in FieldId::ALL {
            if id.is_conditional() && !other_checked {
                continue;
            }
            if !form.validate_field(id) {
                valid = false;
            }
        }
        // Native validity is read only once every tooltip has been refreshed.
        let valid = valid && form.check_validity();

        if valid && let Some(record) = form.record() {
            tracing::debug!("simulating record post");
            self.records.append(&record)?;
            self.navigator.acknowledge(&self.success_message);
            self.navigator.redirect(&self.results_view);
            return Ok(SubmitOutcome::Submitted(record));
        }

        let report = form.report_validity();
        tracing::warn!(errors = report.errors.len(), "submission blocked");
        Ok(SubmitOutcome::Rejected(report))
    }
}
