// ABOUTME: Error types for settings groups
// ABOUTME: Missing settings, failed coercions and unusable data types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SettingsError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Cannot find the setting {0} in this group")]
    NotFound(String),

    #[error("Setting {name} has value {value:?} which is not a valid {expected}")]
    Format {
        name: String,
        value: String,
        expected: &'static str,
    },

    #[error("Invalid data type: {0}. Must be one of: boolean, integer, float, string")]
    InvalidType(String),
}

impl SettingsError {
    pub(crate) fn format(name: &str, value: &str, expected: &'static str) -> Self {
        SettingsError::Format {
            name: name.to_string(),
            value: value.to_string(),
            expected,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SettingsError::NotFound(_))
    }
}
