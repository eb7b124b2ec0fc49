// ABOUTME: Settings group with typed accessors over text-backed entries
// ABOUTME: Get/ensure/set contract with soft type checks on overwrite

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, SettingsError};
use crate::validation::{validate_setting_value, DataType};
use crate::value::SettingValue;

/// A collection of settings stored as text and read back as typed values.
///
/// The backing map is not allocated until the first write, so an untouched
/// group serializes as `{"settings": null}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsGroup {
    #[serde(rename = "settings")]
    entries: Option<HashMap<String, String>>,

    /// Data type of the last typed write per setting. Not persisted, so
    /// entries adopted from a map fall back to `DataType::infer`.
    #[serde(skip)]
    written_as: HashMap<String, DataType>,
}

impl PartialEq for SettingsGroup {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for SettingsGroup {}

impl SettingsGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt an already populated map, e.g. one read back from disk.
    pub fn from_entries(entries: HashMap<String, String>) -> Self {
        Self {
            entries: Some(entries),
            written_as: HashMap::new(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.entries.is_some()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries
            .as_ref()
            .is_some_and(|entries| entries.contains_key(name))
    }

    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stored text for `name`, without any coercion.
    pub fn get_raw(&self, name: &str) -> Option<&str> {
        self.entries
            .as_ref()
            .and_then(|entries| entries.get(name))
            .map(String::as_str)
    }

    /// Read `name` as a `T`.
    ///
    /// Fails with [`SettingsError::NotFound`] if the setting was never written
    /// and with [`SettingsError::Format`] if its text does not coerce to `T`.
    pub fn get<T: SettingValue>(&self, name: &str) -> Result<T> {
        let text = self
            .get_raw(name)
            .ok_or_else(|| SettingsError::NotFound(name.to_string()))?;

        T::from_setting(text).ok_or_else(|| SettingsError::format(name, text, T::TYPE_NAME))
    }

    /// Like [`get`](Self::get), but a missing setting yields `fallback`.
    /// Coercion failures are still reported.
    pub fn get_or<T: SettingValue>(&self, name: &str, fallback: T) -> Result<T> {
        match self.get(name) {
            Err(err) if err.is_not_found() => Ok(fallback),
            other => other,
        }
    }

    /// Read `name` as a `T`, first writing `T::default()` if it is missing.
    pub fn ensure<T: SettingValue + Default>(&mut self, name: &str) -> Result<T> {
        if !self.contains(name) {
            debug!("Initializing missing setting {} as {}", name, T::TYPE_NAME);
            self.set_forced(name, T::default())?;
        }
        self.get(name)
    }

    /// Write `value` under `name`, refusing to overwrite an existing value
    /// of an incompatible type. Text that reads as both types passes.
    pub fn set<T: SettingValue>(&mut self, name: &str, value: T) -> Result<()> {
        self.set_with(name, value, false)
    }

    /// Write `value` under `name` regardless of what is stored there.
    pub fn set_forced<T: SettingValue>(&mut self, name: &str, value: T) -> Result<()> {
        self.set_with(name, value, true)
    }

    /// Write `value` under `name`; `force` skips the type compatibility check.
    pub fn set_with<T: SettingValue>(&mut self, name: &str, value: T, force: bool) -> Result<()> {
        let text = value.to_setting();
        let entries = self.entries.get_or_insert_with(HashMap::new);

        match entries.get_mut(name) {
            Some(existing) => {
                if !force {
                    let stored_as = self
                        .written_as
                        .get(name)
                        .copied()
                        .unwrap_or_else(|| DataType::infer(existing.as_str()));
                    check_compatible::<T>(name, existing, stored_as, &text)?;
                }
                debug!("Updating setting {} (force: {})", name, force);
                *existing = text;

                // A string write over a typed value keeps the value's type
                if force || T::DATA_TYPE != DataType::String {
                    self.written_as.insert(name.to_string(), T::DATA_TYPE);
                }
            }
            None => {
                debug!("Adding setting {}", name);
                entries.insert(name.to_string(), text);
                self.written_as.insert(name.to_string(), T::DATA_TYPE);
            }
        }

        Ok(())
    }

    /// Remove `name`, returning its stored text. The group stays initialized.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.written_as.remove(name);
        self.entries.as_mut().and_then(|entries| entries.remove(name))
    }

    /// Check the stored text of `name` against a data type given by name.
    pub fn validate(&self, name: &str, data_type: &str) -> Result<()> {
        let data_type = data_type.parse::<DataType>()?;
        let text = self
            .get_raw(name)
            .ok_or_else(|| SettingsError::NotFound(name.to_string()))?;

        validate_setting_value(name, text, data_type.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(name, _)| name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .flat_map(|entries| entries.iter())
            .map(|(name, text)| (name.as_str(), text.as_str()))
    }

    /// The backing map, or `None` if nothing has been written yet.
    pub fn entries(&self) -> Option<&HashMap<String, String>> {
        self.entries.as_ref()
    }

    pub fn into_entries(self) -> HashMap<String, String> {
        self.entries.unwrap_or_default()
    }
}

/// Soft type check for a non-forced overwrite. The stored text has to read as
/// `T`. Every text reads as a string, so a string write must in turn read as
/// `stored_as`: "80" over an integer passes, "loud" does not.
fn check_compatible<T: SettingValue>(
    name: &str,
    existing: &str,
    stored_as: DataType,
    text: &str,
) -> Result<()> {
    if T::from_setting(existing).is_none() {
        warn!(
            "Refusing to overwrite setting {}: stored value {:?} is not a valid {}",
            name, existing, T::TYPE_NAME
        );
        return Err(SettingsError::format(name, existing, T::TYPE_NAME));
    }

    if T::DATA_TYPE == DataType::String && !stored_as.accepts(text) {
        warn!(
            "Refusing to overwrite setting {}: new value {:?} is not a valid {}",
            name, text, stored_as
        );
        return Err(SettingsError::format(name, text, stored_as.as_str()));
    }

    Ok(())
}

impl From<HashMap<String, String>> for SettingsGroup {
    fn from(entries: HashMap<String, String>) -> Self {
        Self::from_entries(entries)
    }
}
