// ABOUTME: Named collection of settings groups
// ABOUTME: One group per namespace, created on first mutable access

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::group::SettingsGroup;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsCatalog {
    groups: HashMap<String, SettingsGroup>,
}

impl SettingsCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(&self, name: &str) -> Option<&SettingsGroup> {
        self.groups.get(name)
    }

    /// Group `name`, creating an empty one if it does not exist yet.
    pub fn group_mut(&mut self, name: &str) -> &mut SettingsGroup {
        self.groups.entry(name.to_string()).or_insert_with(|| {
            debug!("Creating settings group {}", name);
            SettingsGroup::new()
        })
    }

    pub fn insert_group(&mut self, name: &str, group: SettingsGroup) -> Option<SettingsGroup> {
        self.groups.insert(name.to_string(), group)
    }

    pub fn remove_group(&mut self, name: &str) -> Option<SettingsGroup> {
        self.groups.remove(name)
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_mut_creates_once() {
        let mut catalog = SettingsCatalog::new();
        assert!(catalog.group("audio").is_none());

        catalog.group_mut("audio").set("volume", 75).unwrap();
        catalog.group_mut("audio").set("muted", false).unwrap();

        assert_eq!(catalog.len(), 1);
        let audio = catalog.group("audio").unwrap();
        assert_eq!(audio.get::<i32>("volume").unwrap(), 75);
        assert!(!audio.get::<bool>("muted").unwrap());
    }

    #[test]
    fn test_groups_do_not_share_entries() {
        let mut catalog = SettingsCatalog::new();
        catalog.group_mut("audio").set("volume", 75).unwrap();
        catalog.group_mut("video").set("volume", 10).unwrap();

        assert_eq!(catalog.group("audio").unwrap().get::<i32>("volume").unwrap(), 75);
        assert_eq!(catalog.group("video").unwrap().get::<i32>("volume").unwrap(), 10);
    }

    #[test]
    fn test_insert_and_remove_group() {
        let mut catalog = SettingsCatalog::new();
        let mut group = SettingsGroup::new();
        group.set("speed", 2).unwrap();

        assert!(catalog.insert_group("camera", group.clone()).is_none());
        assert_eq!(catalog.insert_group("camera", SettingsGroup::new()), Some(group));

        let removed = catalog.remove_group("camera").unwrap();
        assert!(!removed.is_initialized());
        assert!(catalog.is_empty());
        assert!(catalog.remove_group("camera").is_none());
    }

    #[test]
    fn test_group_names() {
        let mut catalog = SettingsCatalog::new();
        catalog.group_mut("audio");
        catalog.group_mut("video");

        let mut names: Vec<&str> = catalog.group_names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["audio", "video"]);
    }
}
