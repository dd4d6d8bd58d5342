//! Immutable form configuration, built once at startup.
//!
//! Carries the collaborator constants (storage namespace, results view,
//! acknowledgment text) and the option lists the markup offers. Loaded from
//! YAML with every key optional:
//!
//! ```yaml
//! storage_key: registrationData
//! results_view: raw-data.html
//! cities: [Mumbai, Pune]
//! hobbies: [Reading, Music]
//! ```

use crate::error::{ConfigError, ConfigErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DEFAULT_STORAGE_KEY: &str = "registrationData";
pub const DEFAULT_RESULTS_VIEW: &str = "raw-data.html";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Form Submitted Successfully!";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// Namespace the submitted record list is persisted under.
    pub storage_key: String,
    /// View the navigator redirects to after a successful submission.
    pub results_view: String,
    /// Acknowledgment shown before redirecting.
    pub success_message: String,
    pub cities: Vec<String>,
    pub genders: Vec<String>,
    /// Labels of the fixed hobby checkboxes, in document order.
    pub hobbies: Vec<String>,
    /// Label of the checkbox that reveals the free-text hobby field.
    pub other_hobby_label: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            results_view: DEFAULT_RESULTS_VIEW.to_string(),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            cities: ["Mumbai", "Delhi", "Bengaluru", "Chennai", "Kolkata"]
                .map(String::from)
                .to_vec(),
            genders: ["male", "female", "other"].map(String::from).to_vec(),
            hobbies: ["Reading", "Music", "Sports", "Travelling"]
                .map(String::from)
                .to_vec(),
            other_hobby_label: "Other".to_string(),
        }
    }
}

impl FormConfig {
    /// Parse and validate a YAML configuration.
    ///
    /// Empty input yields the default configuration.
    pub fn from_yaml(input: &str) -> Result<FormConfig, ConfigError> {
        if input.trim().is_empty() {
            return Ok(FormConfig::default());
        }

        let value: serde_json::Value = serde_saphyr::from_str(input).map_err(|e| {
            let msg = e.to_string();
            ConfigError {
                kind: classify_saphyr_error(&msg),
                message: msg,
                path: None,
            }
        })?;

        let config = match value {
            serde_json::Value::Null => FormConfig::default(),
            serde_json::Value::Object(_) => serde_json::from_value(value).map_err(|e| {
                let msg = e.to_string();
                ConfigError {
                    kind: classify_json_error(&msg),
                    message: msg,
                    path: None,
                }
            })?,
            _ => {
                return Err(ConfigError {
                    kind: ConfigErrorKind::TypeMismatch,
                    message: "configuration root must be a YAML mapping".to_string(),
                    path: None,
                });
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is usable to build a form.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.storage_key, "storage_key")?;
        require_non_empty(&self.results_view, "results_view")?;
        require_non_empty(&self.other_hobby_label, "other_hobby_label")?;
        // The hobby group carries its tooltip on the first checkbox.
        check_options(&self.hobbies, "hobbies")?;
        check_options(&self.cities, "cities")?;
        check_options(&self.genders, "genders")?;
        Ok(())
    }
}

fn require_non_empty(value: &str, path: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(invalid(path, format!("{} must not be empty", path)));
    }
    Ok(())
}

fn check_options(options: &[String], path: &str) -> Result<(), ConfigError> {
    if options.is_empty() {
        return Err(invalid(path, format!("{} must list at least one option", path)));
    }
    let mut seen = HashSet::new();
    for (i, option) in options.iter().enumerate() {
        if option.trim().is_empty() {
            return Err(invalid(
                &format!("{}[{}]", path, i),
                "option must not be empty".to_string(),
            ));
        }
        if !seen.insert(option.as_str()) {
            return Err(invalid(
                &format!("{}[{}]", path, i),
                format!("duplicate option '{}'", option),
            ));
        }
    }
    Ok(())
}

fn invalid(path: &str, message: String) -> ConfigError {
    ConfigError {
        kind: ConfigErrorKind::Invalid,
        message,
        path: Some(path.to_string()),
    }
}

fn classify_saphyr_error(msg: &str) -> ConfigErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("type") || lower.contains("invalid") || lower.contains("expected") {
        ConfigErrorKind::TypeMismatch
    } else {
        ConfigErrorKind::Syntax
    }
}

fn classify_json_error(msg: &str) -> ConfigErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("unknown field") || lower.contains("invalid type") {
        ConfigErrorKind::TypeMismatch
    } else {
        ConfigErrorKind::Syntax
    }
}
