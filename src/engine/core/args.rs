//! Settings-to-arguments compiler for the NVENC encoders.
//!
//! Ordering matters throughout: ffmpeg applies some rate-control flags relative
//! to the preset, so flags are appended in a fixed sequence and never reordered.
//!
//! Stored values are read through the catalog: anything outside an option's
//! allowed set is replaced by the catalog default, the same value the
//! defaulting helpers would write back. Invalid input never reaches ffmpeg.

use super::catalog::{
    AUTO, DECODE_CPU, DEVICE_NONE, HW_UPLOAD_FILTERS, MODE_BASIC, NumericOption, OptionCatalog,
    OptionCatalogEntry, ToggleOption, keys,
};
use super::settings::{Settings, SettingsExt};
use super::types::{CompiledArguments, DeviceRecord};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::hardware::DeviceSource;
use tracing::{debug, warn};

/// Pick the device to run on.
///
/// The configured id wins when it is still present; otherwise the first
/// discovered device is used. An unknown id is a fallback, not an error.
pub fn resolve_device<'a>(devices: &'a [DeviceRecord], configured: Option<&str>) -> Option<&'a DeviceRecord> {
    if let Some(wanted) = configured.filter(|id| *id != DEVICE_NONE && !id.is_empty()) {
        if let Some(device) = devices.iter().find(|d| d.id == wanted) {
            return Some(device);
        }
        warn!(configured = wanted, "Configured NVIDIA device not present, using first device");
    }
    devices.first()
}

/// Compiles a settings snapshot into ffmpeg arguments.
///
/// Stateless: every call re-reads the settings and re-discovers devices.
pub struct ArgumentCompiler<'a, D: DeviceSource> {
    inventory: D,
    catalog: &'a OptionCatalog,
}

impl<'a, D: DeviceSource> ArgumentCompiler<'a, D> {
    pub fn new(inventory: D, catalog: &'a OptionCatalog) -> Self {
        Self { inventory, catalog }
    }

    /// Filters needed to upload frames into device memory.
    ///
    /// Exposed unconditionally; inserting them into a graph is the caller's call.
    pub fn filter_chain(&self) -> Vec<String> {
        HW_UPLOAD_FILTERS.iter().map(|f| f.to_string()).collect()
    }

    pub fn compile(&self, settings: &dyn Settings, stream_index: usize) -> EngineResult<CompiledArguments> {
        if self.is_basic(settings) {
            return Ok(CompiledArguments {
                pre_input_args: Vec::new(),
                filter_chain: Vec::new(),
                stream_args: self.basic_stream_args(stream_index),
            });
        }

        let devices = self.inventory.discover_devices()?;
        let device = resolve_device(&devices, settings.get_str(keys::DEVICE).as_deref())
            .ok_or(EngineError::NoHardwareDevice)?;
        debug!(device = %device.id, name = %device.display_name, "Resolved NVIDIA device");

        Ok(CompiledArguments {
            pre_input_args: self.decode_args(settings, device),
            filter_chain: self.filter_chain(),
            stream_args: self.stream_args(settings, stream_index),
        })
    }

    /// Unknown or mis-cased modes fall back to the catalog default, as the form does
    fn is_basic(&self, settings: &dyn Settings) -> bool {
        let mode = settings
            .get_str(keys::MODE)
            .filter(|m| self.catalog.mode.contains(m))
            .unwrap_or_else(|| self.catalog.mode.default_value.clone());
        mode == MODE_BASIC
    }

    /// Effective value of a select option; `None` when unset or empty
    fn select(&self, settings: &dyn Settings, entry: &OptionCatalogEntry) -> Option<String> {
        let value = settings.get_str(entry.key).filter(|v| !v.is_empty())?;
        if entry.contains(&value) {
            return Some(value);
        }
        debug!(key = entry.key, value = %value, "Invalid setting, using catalog default");
        Some(entry.default_value.clone())
    }

    /// Effective value of a numeric option; `None` when unset
    fn numeric(&self, settings: &dyn Settings, option: &NumericOption) -> Option<i64> {
        let value = settings.get_setting(option.key)?;
        match value.as_int().filter(|n| option.contains(*n)) {
            Some(n) => Some(n),
            None => {
                debug!(key = option.key, value = %value, "Invalid setting, using catalog default");
                Some(option.default_value)
            }
        }
    }

    /// Only real booleans count; anything else is the default
    fn toggle(&self, settings: &dyn Settings, option: &ToggleOption) -> bool {
        settings
            .get_setting(option.key)
            .and_then(|v| v.as_bool())
            .unwrap_or(option.default_value)
    }

    /// Safe minimal set: catalog defaults only
    fn basic_stream_args(&self, stream_index: usize) -> Vec<String> {
        vec![
            "-preset".to_string(),
            self.catalog.preset.default_value.clone(),
            format!("-profile:v:{}", stream_index),
            self.catalog.profile.default_value.clone(),
        ]
    }

    fn decode_args(&self, settings: &dyn Settings, device: &DeviceRecord) -> Vec<String> {
        let method = self
            .select(settings, &self.catalog.decoding_method)
            .unwrap_or_else(|| DECODE_CPU.to_string());
        if method == DECODE_CPU {
            return Vec::new();
        }

        vec![
            "-hwaccel".to_string(),
            method.clone(),
            "-hwaccel_device".to_string(),
            device.id.clone(),
            "-init_hw_device".to_string(),
            format!("{}=hw", method),
            "-filter_hw_device".to_string(),
            "hw".to_string(),
        ]
    }

    fn stream_args(&self, settings: &dyn Settings, stream_index: usize) -> Vec<String> {
        let catalog = self.catalog;
        let mut args = Vec::new();
        let not_auto = |entry: &OptionCatalogEntry| self.select(settings, entry).filter(|v| v != AUTO);

        // Preset and tune
        if let Some(preset) = self.select(settings, &catalog.preset) {
            args.push("-preset".to_string());
            args.push(preset);
        }
        if let Some(tune) = not_auto(&catalog.tune) {
            args.push("-tune".to_string());
            args.push(tune);
            // Profile rides on the tune guard
            if let Some(profile) = self.select(settings, &catalog.profile) {
                args.push(format!("-profile:v:{}", stream_index));
                args.push(profile);
            }
        }

        // Rate control
        if let Some(method) = not_auto(&catalog.rc_method) {
            args.push(format!("-rc:v:{}", stream_index));
            args.push(method);
        }
        if let Some(lookahead) = self
            .numeric(settings, &catalog.rc_lookahead)
            .filter(|n| *n > 0)
        {
            args.push(format!("-rc-lookahead:v:{}", stream_index));
            args.push(lookahead.to_string());
        }

        // Adaptive quantization
        let spatial = self.toggle(settings, &catalog.spatial_aq);
        let temporal = self.toggle(settings, &catalog.temporal_aq);
        if spatial {
            args.push("-spatial-aq".to_string());
            args.push("1".to_string());
        }
        if temporal {
            args.push("-temporal-aq".to_string());
            args.push("1".to_string());
        }
        if spatial || temporal {
            let strength = self
                .numeric(settings, &catalog.aq_strength)
                .unwrap_or(catalog.aq_strength.default_value);
            args.push(format!("-aq-strength:v:{}", stream_index));
            args.push(strength.to_string());
        }

        args
    }
}
