//! Closed enumerations shared by the form model.
//!
//! Field identifiers are closed: the markup offers exactly these text-like
//! controls. Option lists (cities, genders, hobbies) are open and live in
//! [`FormConfig`](crate::config::FormConfig).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a text-like field governed (or potentially governed) by a rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Name,
    Mobile,
    Email,
    Password,
    Address,
    OtherText,
}

impl FieldId {
    /// Every text-like field in document order.
    pub const ALL: [FieldId; 6] = [
        FieldId::Name,
        FieldId::Mobile,
        FieldId::Email,
        FieldId::Password,
        FieldId::Address,
        FieldId::OtherText,
    ];

    /// The markup identifier of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Mobile => "mobile",
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::Address => "address",
            FieldId::OtherText => "otherText",
        }
    }

    /// The kind of input control the markup renders for this field.
    pub fn kind(self) -> InputKind {
        match self {
            FieldId::Name | FieldId::OtherText => InputKind::Text,
            FieldId::Mobile => InputKind::Tel,
            FieldId::Email => InputKind::Email,
            FieldId::Password => InputKind::Password,
            FieldId::Address => InputKind::TextArea,
        }
    }

    /// Whether the field only applies while its companion checkbox is checked.
    pub fn is_conditional(self) -> bool {
        self == FieldId::OtherText
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown field: '{}'", s))
    }
}

/// Text-like input control kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Tel,
    Email,
    Password,
    TextArea,
}

/// Derived validity of a single field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validity {
    /// Never validated, or reset after its conditional toggle was unchecked.
    #[default]
    Unset,
    Valid,
    Invalid,
}

/// Visual class a UI layer applies to a validated field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualClass {
    Valid,
    Invalid,
}

impl VisualClass {
    pub fn as_str(self) -> &'static str {
        match self {
            VisualClass::Valid => "valid",
            VisualClass::Invalid => "invalid",
        }
    }
}

/// Lifecycle of the submission controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControllerState {
    #[default]
    Idle,
    /// Processing one submit event; always returns to `Idle` before the
    /// handler finishes.
    Submitting,
}
