// ABOUTME: Typed settings stored as text
// ABOUTME: Settings groups, value conversion and validation for persisted configuration

pub mod catalog;
pub mod error;
pub mod group;
pub mod validation;
pub mod value;

// Re-export main types
pub use catalog::SettingsCatalog;
pub use error::{Result, SettingsError};
pub use group::SettingsGroup;
pub use validation::{validate_setting_value, DataType};
pub use value::SettingValue;
