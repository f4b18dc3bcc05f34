//! Form descriptors for the NVENC settings.
//!
//! One descriptor per configurable option. Stored values are corrected through
//! the defaulting helpers before a descriptor is built, so a form never shows
//! a selection that is no longer available.

use crate::engine::core::{
    Choice, NumericOption, OptionCatalog, OptionCatalogEntry, Settings, SettingsExt, ToggleOption,
    ensure_entry, ensure_in_range, ensure_toggle, ensure_valid, keys,
};
use crate::engine::core::catalog::MODE_STANDARD;
use crate::engine::error::EngineResult;
use crate::engine::hardware::DeviceSource;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Select,
    Slider,
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Visible,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SliderRange {
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    pub input_kind: InputKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<SliderRange>,
    pub visibility: Visibility,
}

impl OptionDescriptor {
    pub fn is_hidden(&self) -> bool {
        self.visibility == Visibility::Hidden
    }
}

const PROFILE_DESCRIPTION: &str = "The profile determines which features of the codec are available and enabled,\n\
while also affecting other restrictions.\n\
Any of these profiles are capable of 4:2:0, 4:2:2 and 4:4:4, however the support\n\
depends on the installed hardware.";

const PIXEL_FORMAT_DESCRIPTION: &str = "Note: If you get the 'No NVENC capable devices found' error make sure you're \n\
encoding to a supported pixel format for the hardware and ffmpeg version.\n\
Any of these profiles are capable of 4:2:0, 4:2:2 and 4:4:4, however the support\n\
depends on the installed hardware.";

const RC_METHOD_DESCRIPTION: &str = "Note that the rate control is already defined in the Encoder Quality Preset option.\n\
Selecting anything other than 'Disabled' will override the preset rate-control.";

const SPATIAL_AQ_DESCRIPTION: &str = "This adjusts the quantization parameter within each frame based on spatial complexity.\n\
This helps in improving the quality of areas within a frame that are more detailed or complex.";

const TEMPORAL_AQ_DESCRIPTION: &str = "This adjusts the quantization parameter across frames, based on the motion and temporal complexity.\n\
This is particularly effective in scenes with varying levels of motion, enhancing quality where it's most needed.";

const AQ_STRENGTH_DESCRIPTION: &str = "Controls the strength of the adaptive quantization (both spatial and temporal).\n\
A higher value indicates stronger adaptation, which can lead to better preservation\n\
of detail but might also increase the bitrate.";

/// Builds the settings form, correcting stale values along the way
pub struct DescriptorBuilder<'a, D: DeviceSource> {
    inventory: D,
    catalog: &'a OptionCatalog,
}

impl<'a, D: DeviceSource> DescriptorBuilder<'a, D> {
    pub fn new(inventory: D, catalog: &'a OptionCatalog) -> Self {
        Self { inventory, catalog }
    }

    /// Every descriptor in form order
    pub fn build(&self, settings: &mut dyn Settings) -> EngineResult<Vec<OptionDescriptor>> {
        let catalog = self.catalog;
        Ok(vec![
            self.mode(settings),
            self.device(settings)?,
            self.select(
                settings,
                &catalog.decoding_method,
                "Enable HW Decoding",
                Some("Warning. Ensure your device supports decoding the source video codec or it will fail."),
            ),
            self.select(settings, &catalog.preset, "Encoder quality preset", None),
            self.select(
                settings,
                &catalog.tune,
                "Tune for a particular type of source or situation",
                None,
            ),
            self.select(settings, &catalog.profile, "Profile", Some(PROFILE_DESCRIPTION)),
            self.select(
                settings,
                &catalog.pixel_format,
                "Encoder pixel format",
                Some(PIXEL_FORMAT_DESCRIPTION),
            ),
            self.select(
                settings,
                &catalog.rc_method,
                "Encoder ratecontrol method",
                Some(RC_METHOD_DESCRIPTION),
            ),
            self.slider(
                settings,
                &catalog.rc_lookahead,
                "Configure the number of frames to look ahead for rate-control",
                None,
            ),
            self.toggle(
                settings,
                &catalog.spatial_aq,
                "Enable Spatial Adaptive Quantization",
                SPATIAL_AQ_DESCRIPTION,
            ),
            self.toggle(
                settings,
                &catalog.temporal_aq,
                "Enable Temporal Adaptive Quantization",
                TEMPORAL_AQ_DESCRIPTION,
            ),
            self.aq_strength(settings),
        ])
    }

    /// The mode selector is the one option that is always shown
    pub fn mode(&self, settings: &mut dyn Settings) -> OptionDescriptor {
        ensure_entry(settings, &self.catalog.mode);
        OptionDescriptor {
            key: keys::MODE,
            label: "Configuration mode",
            description: None,
            input_kind: InputKind::Select,
            choices: self.catalog.mode.allowed_values.clone(),
            range: None,
            visibility: Visibility::Visible,
        }
    }

    /// Device selector built from a fresh discovery
    pub fn device(&self, settings: &mut dyn Settings) -> EngineResult<OptionDescriptor> {
        let devices = self.inventory.discover_devices()?;
        let entry = OptionCatalog::device_entry(&devices);
        ensure_valid(
            settings,
            keys::DEVICE,
            &entry.allowed_values,
            Some(entry.default_value.as_str()),
        );

        Ok(OptionDescriptor {
            key: keys::DEVICE,
            label: "NVIDIA Device",
            description: None,
            input_kind: InputKind::Select,
            choices: entry.allowed_values,
            range: None,
            visibility: self.standard_only(settings),
        })
    }

    pub fn aq_strength(&self, settings: &mut dyn Settings) -> OptionDescriptor {
        let mut descriptor = self.slider(
            settings,
            &self.catalog.aq_strength,
            "Strength of the adaptive quantization",
            Some(AQ_STRENGTH_DESCRIPTION),
        );
        if !settings.get_bool(keys::SPATIAL_AQ) && !settings.get_bool(keys::TEMPORAL_AQ) {
            descriptor.visibility = Visibility::Hidden;
        }
        descriptor
    }

    fn select(
        &self,
        settings: &mut dyn Settings,
        entry: &OptionCatalogEntry,
        label: &'static str,
        description: Option<&'static str>,
    ) -> OptionDescriptor {
        ensure_entry(settings, entry);
        OptionDescriptor {
            key: entry.key,
            label,
            description,
            input_kind: InputKind::Select,
            choices: entry.allowed_values.clone(),
            range: None,
            visibility: self.standard_only(settings),
        }
    }

    fn slider(
        &self,
        settings: &mut dyn Settings,
        option: &NumericOption,
        label: &'static str,
        description: Option<&'static str>,
    ) -> OptionDescriptor {
        ensure_in_range(settings, option);
        OptionDescriptor {
            key: option.key,
            label,
            description,
            input_kind: InputKind::Slider,
            choices: Vec::new(),
            range: Some(SliderRange {
                min: option.min,
                max: option.max,
            }),
            visibility: self.standard_only(settings),
        }
    }

    fn toggle(
        &self,
        settings: &mut dyn Settings,
        option: &ToggleOption,
        label: &'static str,
        description: &'static str,
    ) -> OptionDescriptor {
        ensure_toggle(settings, option);
        OptionDescriptor {
            key: option.key,
            label,
            description: Some(description),
            input_kind: InputKind::Toggle,
            choices: Vec::new(),
            range: None,
            visibility: self.standard_only(settings),
        }
    }

    fn standard_only(&self, settings: &dyn Settings) -> Visibility {
        if settings.get_str(keys::MODE).as_deref() == Some(MODE_STANDARD) {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }
}
