// ABOUTME: Runtime-typed validation for setting values
// ABOUTME: Checks stored text against a data type named at runtime

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SettingsError};
use crate::value::SettingValue;

/// Data types a setting can be validated against when the type is only
/// known by name (for example from a persisted schema or a UI form).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Boolean,
    Integer,
    Float,
    String,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Boolean => "boolean",
            DataType::Integer => "integer",
            DataType::Float => "float",
            DataType::String => "string",
        }
    }

    /// The narrowest data type `value` reads as. Text that is neither a
    /// boolean nor a number is a string.
    pub fn infer(value: &str) -> DataType {
        if DataType::Boolean.accepts(value) {
            DataType::Boolean
        } else if DataType::Integer.accepts(value) {
            DataType::Integer
        } else if value.bytes().any(|b| b.is_ascii_digit()) && DataType::Float.accepts(value) {
            DataType::Float
        } else {
            DataType::String
        }
    }

    /// Whether `value` coerces to this data type.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            DataType::Boolean => bool::from_setting(value).is_some(),
            DataType::Integer => i64::from_setting(value).is_some(),
            DataType::Float => f64::from_setting(value).is_some(),
            DataType::String => true,
        }
    }
}

impl FromStr for DataType {
    type Err = SettingsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "boolean" | "bool" => Ok(DataType::Boolean),
            "integer" | "int" => Ok(DataType::Integer),
            "float" | "double" => Ok(DataType::Float),
            "string" | "text" => Ok(DataType::String),
            _ => Err(SettingsError::InvalidType(s.to_string())),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a setting value against the data type named by `data_type`
pub fn validate_setting_value(name: &str, value: &str, data_type: &str) -> Result<()> {
    let data_type = data_type.parse::<DataType>()?;

    if data_type.accepts(value) {
        Ok(())
    } else {
        Err(SettingsError::format(name, value, data_type.as_str()))
    }
}
