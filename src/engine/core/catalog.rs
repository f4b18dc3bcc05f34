//! Option catalog: allowed values and designated defaults per setting key.
//!
//! Fixed options are built once from the tables in `constants`; the device
//! option is synthesized from whatever the inventory reports at call time.

use super::types::{Choice, DeviceRecord, SettingValue};
use super::constants::*;

/// Setting keys read by the compiler and descriptor builder
pub mod keys {
    pub const MODE: &str = "mode";
    pub const DEVICE: &str = "device";
    pub const DECODING_METHOD: &str = "decodingMethod";
    pub const PRESET: &str = "preset";
    pub const TUNE: &str = "tune";
    pub const PROFILE: &str = "profile";
    pub const PIXEL_FORMAT: &str = "pixelFormat";
    pub const RC_METHOD: &str = "rateControlMethod";
    pub const RC_LOOKAHEAD: &str = "rateControlLookahead";
    pub const SPATIAL_AQ: &str = "spatialAQEnabled";
    pub const TEMPORAL_AQ: &str = "temporalAQEnabled";
    pub const AQ_STRENGTH: &str = "aqStrength";
}

/// Encoders this crate compiles arguments for
pub const NVENC_ENCODERS: &[&str] = &["h264_nvenc", "hevc_nvenc"];

pub const MODE_BASIC: &str = "basic";
pub const MODE_STANDARD: &str = "standard";
pub const DEVICE_NONE: &str = "none";
pub const DECODE_CPU: &str = "cpu";
pub const AUTO: &str = "auto";

/// Filters that move decoded frames into CUDA memory
pub const HW_UPLOAD_FILTERS: &[&str] = &["hwupload_cuda"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionCatalogEntry {
    pub key: &'static str,
    pub allowed_values: Vec<Choice>,
    pub default_value: String,
}

impl OptionCatalogEntry {
    fn from_table(key: &'static str, table: &[(&str, &str)], default_value: &str) -> Self {
        Self {
            key,
            allowed_values: table.iter().map(|(v, l)| Choice::new(*v, *l)).collect(),
            default_value: default_value.to_string(),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.allowed_values.iter().any(|c| c.value == value)
    }
}

/// Integer option edited with a slider (bounds inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericOption {
    pub key: &'static str,
    pub min: i64,
    pub max: i64,
    pub default_value: i64,
}

impl NumericOption {
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOption {
    pub key: &'static str,
    pub default_value: bool,
}

/// How a key's raw text should be interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind {
    Select(OptionCatalogEntry),
    Numeric(NumericOption),
    Toggle(ToggleOption),
    /// Values come from the hardware inventory
    Device,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionCatalog {
    pub mode: OptionCatalogEntry,
    pub decoding_method: OptionCatalogEntry,
    pub preset: OptionCatalogEntry,
    pub tune: OptionCatalogEntry,
    pub profile: OptionCatalogEntry,
    pub pixel_format: OptionCatalogEntry,
    pub rc_method: OptionCatalogEntry,
    pub rc_lookahead: NumericOption,
    pub aq_strength: NumericOption,
    pub spatial_aq: ToggleOption,
    pub temporal_aq: ToggleOption,
}

impl Default for OptionCatalog {
    fn default() -> Self {
        Self::nvenc()
    }
}

impl OptionCatalog {
    /// The NVENC option set
    pub fn nvenc() -> Self {
        Self {
            mode: OptionCatalogEntry::from_table(keys::MODE, MODES, MODE_BASIC),
            decoding_method: OptionCatalogEntry::from_table(
                keys::DECODING_METHOD,
                DECODING_METHODS,
                DECODE_CPU,
            ),
            preset: OptionCatalogEntry::from_table(keys::PRESET, NVENC_PRESETS, "p4"),
            tune: OptionCatalogEntry::from_table(keys::TUNE, NVENC_TUNES, AUTO),
            profile: OptionCatalogEntry::from_table(keys::PROFILE, NVENC_PROFILES, "main"),
            pixel_format: OptionCatalogEntry::from_table(keys::PIXEL_FORMAT, PIX_FMTS, AUTO),
            rc_method: OptionCatalogEntry::from_table(keys::RC_METHOD, RC_METHODS, AUTO),
            rc_lookahead: NumericOption {
                key: keys::RC_LOOKAHEAD,
                min: RC_LOOKAHEAD_RANGE.0,
                max: RC_LOOKAHEAD_RANGE.1,
                default_value: 0,
            },
            aq_strength: NumericOption {
                key: keys::AQ_STRENGTH,
                min: AQ_STRENGTH_RANGE.0,
                max: AQ_STRENGTH_RANGE.1,
                default_value: 8,
            },
            spatial_aq: ToggleOption {
                key: keys::SPATIAL_AQ,
                default_value: false,
            },
            temporal_aq: ToggleOption {
                key: keys::TEMPORAL_AQ,
                default_value: false,
            },
        }
    }

    /// Device selector entry for the devices discovered right now.
    ///
    /// With no devices the only allowed value is the `none` sentinel.
    pub fn device_entry(devices: &[DeviceRecord]) -> OptionCatalogEntry {
        if devices.is_empty() {
            return OptionCatalogEntry {
                key: keys::DEVICE,
                allowed_values: vec![Choice::new(NO_DEVICE.0, NO_DEVICE.1)],
                default_value: DEVICE_NONE.to_string(),
            };
        }

        OptionCatalogEntry {
            key: keys::DEVICE,
            allowed_values: devices
                .iter()
                .map(|d| Choice::new(&d.id, format!("NVIDIA device '{}'", d.display_name)))
                .collect(),
            default_value: devices[0].id.clone(),
        }
    }

    /// Enumerated entries with a fixed value set
    pub fn select_entries(&self) -> [&OptionCatalogEntry; 7] {
        [
            &self.mode,
            &self.decoding_method,
            &self.preset,
            &self.tune,
            &self.profile,
            &self.pixel_format,
            &self.rc_method,
        ]
    }

    pub fn kind_of(&self, key: &str) -> Option<OptionKind> {
        if key == keys::DEVICE {
            return Some(OptionKind::Device);
        }
        if let Some(entry) = self.select_entries().into_iter().find(|e| e.key == key) {
            return Some(OptionKind::Select(entry.clone()));
        }
        [self.rc_lookahead, self.aq_strength]
            .into_iter()
            .find(|n| n.key == key)
            .map(OptionKind::Numeric)
            .or_else(|| {
                [self.spatial_aq, self.temporal_aq]
                    .into_iter()
                    .find(|t| t.key == key)
                    .map(OptionKind::Toggle)
            })
    }

    /// Every key the catalog knows about, in form order
    pub fn keys(&self) -> Vec<&'static str> {
        vec![
            keys::MODE,
            keys::DEVICE,
            keys::DECODING_METHOD,
            keys::PRESET,
            keys::TUNE,
            keys::PROFILE,
            keys::PIXEL_FORMAT,
            keys::RC_METHOD,
            keys::RC_LOOKAHEAD,
            keys::SPATIAL_AQ,
            keys::TEMPORAL_AQ,
            keys::AQ_STRENGTH,
        ]
    }

    /// Parse user-supplied text for `key` into a typed value.
    ///
    /// Device ids are accepted as-is; they are checked against the live
    /// inventory the next time the form is built.
    pub fn parse_value(&self, key: &str, raw: &str) -> Result<SettingValue, String> {
        let raw = raw.trim();
        match self.kind_of(key) {
            None => Err(format!("Unknown setting '{}'", key)),
            Some(OptionKind::Device) => Ok(SettingValue::from(raw)),
            Some(OptionKind::Select(entry)) => {
                if entry.contains(raw) {
                    Ok(SettingValue::from(raw))
                } else {
                    let allowed: Vec<&str> =
                        entry.allowed_values.iter().map(|c| c.value.as_str()).collect();
                    Err(format!(
                        "Invalid value '{}' for {} (expected one of: {})",
                        raw,
                        key,
                        allowed.join(", ")
                    ))
                }
            }
            Some(OptionKind::Numeric(opt)) => match raw.parse::<i64>() {
                Ok(n) if opt.contains(n) => Ok(SettingValue::Int(n)),
                _ => Err(format!(
                    "Invalid value '{}' for {} (expected an integer {}-{})",
                    raw, key, opt.min, opt.max
                )),
            },
            Some(OptionKind::Toggle(_)) => match SettingValue::from(raw).as_bool() {
                Some(b) => Ok(SettingValue::Bool(b)),
                None => Err(format!(
                    "Invalid value '{}' for {} (expected true or false)",
                    raw, key
                )),
            },
        }
    }
}
