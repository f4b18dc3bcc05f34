//! Self-correcting defaults.
//!
//! Each helper reads the stored value for one key and, when it is missing or no
//! longer valid, writes a default back through the settings store. A value that
//! is already valid is never rewritten.

use super::catalog::{NumericOption, OptionCatalogEntry, ToggleOption};
use super::settings::Settings;
use super::types::{Choice, SettingValue};
use tracing::info;

/// Make sure `key` holds one of `allowed_values`.
///
/// Falls back to `preferred_default`, or the first allowed value when none is
/// given. Returns whether a correction was written.
pub fn ensure_valid(
    settings: &mut dyn Settings,
    key: &str,
    allowed_values: &[Choice],
    preferred_default: Option<&str>,
) -> bool {
    let current = settings.get_setting(key).map(|v| v.to_string());
    if let Some(value) = current.as_deref() {
        if allowed_values.iter().any(|c| c.value == value) {
            return false;
        }
    }

    let first = allowed_values.first().map(|c| c.value.as_str());
    let Some(default) = preferred_default.or(first) else {
        // Nothing to fall back to
        return false;
    };

    info!(
        key,
        from = current.as_deref().unwrap_or("<unset>"),
        to = default,
        "Correcting setting to default"
    );
    settings.set_setting(key, SettingValue::from(default));
    true
}

/// [`ensure_valid`] against a catalog entry, using its designated default
pub fn ensure_entry(settings: &mut dyn Settings, entry: &OptionCatalogEntry) -> bool {
    ensure_valid(
        settings,
        entry.key,
        &entry.allowed_values,
        Some(entry.default_value.as_str()),
    )
}

/// Integer options: non-numeric or out-of-range values are reset to the default
pub fn ensure_in_range(settings: &mut dyn Settings, option: &NumericOption) -> bool {
    let current = settings.get_setting(option.key);
    if current
        .as_ref()
        .and_then(SettingValue::as_int)
        .is_some_and(|n| option.contains(n))
    {
        return false;
    }

    info!(
        key = option.key,
        from = %current.map(|v| v.to_string()).unwrap_or_else(|| "<unset>".to_string()),
        to = option.default_value,
        "Correcting setting to default"
    );
    settings.set_setting(option.key, SettingValue::Int(option.default_value));
    true
}

/// Boolean options: anything that is not a boolean is reset to the default
pub fn ensure_toggle(settings: &mut dyn Settings, option: &ToggleOption) -> bool {
    let current = settings.get_setting(option.key);
    if current.as_ref().and_then(SettingValue::as_bool).is_some() {
        return false;
    }

    info!(
        key = option.key,
        to = option.default_value,
        "Correcting setting to default"
    );
    settings.set_setting(option.key, SettingValue::Bool(option.default_value));
    true
}
