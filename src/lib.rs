//! Validation and submission core for a registration form.
//!
//! The crate owns the form state and every decision about it. A UI layer
//! supplies three capabilities and forwards user events:
//!
//! ```text
//! FormEvent → FormSession::dispatch → field / group validators → FieldFeedback
//!          Submit → SubmissionController → RecordStore<KeyValueStore> → Navigator
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use regform::{FieldId, FormEvent, Dispatch};
//!
//! let mut session = regform::session(&regform::FormConfig::default());
//!
//! session.dispatch(FormEvent::Input {
//!     field: FieldId::Mobile,
//!     value: "1234567890".into(),
//! }).unwrap();
//! let mobile = session.form().field(FieldId::Mobile);
//! assert_eq!(
//!     mobile.feedback().error_text(),
//!     "Must be 10 digits starting with 6, 7, 8, or 9."
//! );
//!
//! let outcome = session.dispatch(FormEvent::Submit).unwrap();
//! assert!(matches!(outcome, Dispatch::Rejected(_)));
//! ```

pub mod config;
pub mod enums;
pub mod error;
pub mod events;
pub mod feedback;
pub mod form;
pub mod rules;
pub mod store;
pub mod submit;
pub mod types;

pub use config::FormConfig;
pub use enums::*;
pub use error::*;
pub use events::{Dispatch, FormEvent, FormSession};
pub use feedback::{FieldFeedback, FieldView};
pub use form::{RegistrationForm, validate};
pub use rules::{Rule, RuleCheck, RuleTable};
pub use store::{FileStore, KeyValueStore, MemoryStore, RecordStore};
pub use submit::{Navigator, RecordingNavigator, SubmissionController, SubmitOutcome};
pub use types::*;

/// A headless session with the standard rules, an in-memory store and a
/// navigator that records redirects.
pub fn session(config: &FormConfig) -> FormSession<FieldView, MemoryStore, RecordingNavigator> {
    session_with_store(config, MemoryStore::new())
}

/// Like [`session`], persisting into `store`.
pub fn session_with_store<S: KeyValueStore>(
    config: &FormConfig,
    store: S,
) -> FormSession<FieldView, S, RecordingNavigator> {
    let form = RegistrationForm::new(config, RuleTable::standard());
    let controller = SubmissionController::new(config, store, RecordingNavigator::new());
    FormSession::new(form, controller)
}
