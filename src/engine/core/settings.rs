//! Narrow interface to the external settings store.

use super::types::SettingValue;
use std::collections::BTreeMap;

/// The only two operations the engine needs from a settings store
pub trait Settings {
    fn get_setting(&self, key: &str) -> Option<SettingValue>;
    fn set_setting(&mut self, key: &str, value: SettingValue);
}

/// Typed readers on top of [`Settings`]
pub trait SettingsExt: Settings {
    /// String view of any scalar; `None` when unset
    fn get_str(&self, key: &str) -> Option<String> {
        self.get_setting(key).map(|v| v.to_string())
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        self.get_setting(key).and_then(|v| v.as_int())
    }

    /// Unset counts as false
    fn get_bool(&self, key: &str) -> bool {
        self.get_setting(key).is_some_and(|v| v.is_truthy())
    }
}

impl<S: Settings + ?Sized> SettingsExt for S {}

/// In-memory settings store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySettings {
    values: BTreeMap<String, SettingValue>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: &str, value: impl Into<SettingValue>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    pub fn values(&self) -> &BTreeMap<String, SettingValue> {
        &self.values
    }
}

impl Settings for MemorySettings {
    fn get_setting(&self, key: &str) -> Option<SettingValue> {
        self.values.get(key).cloned()
    }

    fn set_setting(&mut self, key: &str, value: SettingValue) {
        self.values.insert(key.to_string(), value);
    }
}

impl<S: Settings + ?Sized> Settings for &mut S {
    fn get_setting(&self, key: &str) -> Option<SettingValue> {
        (**self).get_setting(key)
    }

    fn set_setting(&mut self, key: &str, value: SettingValue) {
        (**self).set_setting(key, value)
    }
}
