use serde::{Deserialize, Serialize};
use std::fmt;

/// One native-validity message, as a browser would show it in a bubble.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Markup identifier of the control carrying the message.
    pub control: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.control, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Every control currently failing native validity, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityReport {
    pub errors: Vec<ValidationError>,
}

impl ValidityReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The message a host would surface first (the focused bubble).
    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// The message attached to `control`, if any.
    pub fn message_for(&self, control: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.control == control)
            .map(|e| e.message.as_str())
    }

    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }
}

/// Error kind for configuration failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigErrorKind {
    Syntax,
    TypeMismatch,
    Invalid,
}

/// Produced when a form configuration cannot be loaded or is inconsistent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigError {
    pub kind: ConfigErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}: {}", path, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Error kind for persistence failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreErrorKind {
    Io,
    /// The stored value under the namespace is not a record list.
    Corrupt,
    Encode,
}

/// Produced by a key-value store or the record store layered on it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreError {
    pub kind: StoreErrorKind,
    pub key: String,
    pub message: String,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "store key '{}': {}", self.key, self.message)
    }
}

impl std::error::Error for StoreError {}

/// The only way a submission fails outright. Invalid input is never an
/// error; it is reported through [`Dispatch::Rejected`](crate::events::Dispatch).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    Store(StoreError),
}

impl From<StoreError> for SubmitError {
    fn from(e: StoreError) -> Self {
        SubmitError::Store(e)
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Store(e) => write!(f, "Persistence error: {}", e),
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubmitError::Store(e) => Some(e),
        }
    }
}
