// Descriptor building: visibility, defaulting side effects and wire shape

use nvencfg::engine::{FixedInventory, MemorySettings, OptionCatalog, SettingsExt, keys};
use nvencfg::ui::{DescriptorBuilder, InputKind, OptionDescriptor, Visibility};

use crate::common::helpers::*;

fn build(inventory: FixedInventory, settings: &mut CountingSettings) -> Vec<OptionDescriptor> {
    let catalog = OptionCatalog::nvenc();
    DescriptorBuilder::new(inventory, &catalog)
        .build(settings)
        .expect("descriptor build should succeed")
}

fn by_key<'d>(descriptors: &'d [OptionDescriptor], key: &str) -> &'d OptionDescriptor {
    descriptors
        .iter()
        .find(|d| d.key == key)
        .unwrap_or_else(|| panic!("no descriptor for {}", key))
}

#[test]
fn test_basic_mode_only_shows_mode_selector() {
    let mut settings = CountingSettings::new(MemorySettings::new().with("mode", "basic"));
    let descriptors = build(two_cards(), &mut settings);

    let visible: Vec<&str> = descriptors
        .iter()
        .filter(|d| d.visibility == Visibility::Visible)
        .map(|d| d.key)
        .collect();
    assert_eq!(visible, vec![keys::MODE]);
}

#[test]
fn test_standard_mode_shows_everything_but_aq_strength() {
    let mut settings = CountingSettings::new(standard());
    let descriptors = build(two_cards(), &mut settings);

    let hidden: Vec<&str> = descriptors
        .iter()
        .filter(|d| d.is_hidden())
        .map(|d| d.key)
        .collect();
    assert_eq!(hidden, vec![keys::AQ_STRENGTH]);
}

#[test]
fn test_aq_strength_shown_with_spatial_aq() {
    let mut settings = CountingSettings::new(standard().with("spatialAQEnabled", true));
    let descriptors = build(two_cards(), &mut settings);
    assert!(!by_key(&descriptors, keys::AQ_STRENGTH).is_hidden());
}

#[test]
fn test_input_kinds() {
    let mut settings = CountingSettings::new(standard());
    let descriptors = build(two_cards(), &mut settings);

    assert_eq!(by_key(&descriptors, keys::PRESET).input_kind, InputKind::Select);
    assert_eq!(by_key(&descriptors, keys::DEVICE).input_kind, InputKind::Select);
    assert_eq!(
        by_key(&descriptors, keys::RC_LOOKAHEAD).input_kind,
        InputKind::Slider
    );
    assert_eq!(
        by_key(&descriptors, keys::AQ_STRENGTH).input_kind,
        InputKind::Slider
    );
    assert_eq!(
        by_key(&descriptors, keys::TEMPORAL_AQ).input_kind,
        InputKind::Toggle
    );

    let aq = by_key(&descriptors, keys::AQ_STRENGTH).range.unwrap();
    assert_eq!((aq.min, aq.max), (0, 15));
}

#[test]
fn test_device_choices_track_inventory() {
    let mut settings = CountingSettings::new(standard());
    let descriptors = build(two_cards(), &mut settings);

    let device = by_key(&descriptors, keys::DEVICE);
    let values: Vec<&str> = device.choices.iter().map(|c| c.value.as_str()).collect();
    assert_eq!(values, vec!["0", "1"]);
    assert_eq!(device.choices[1].label, "NVIDIA device 'Card B (UUID: Y)'");
}

#[test]
fn test_build_corrects_stale_device_then_settles() {
    let mut settings = CountingSettings::new(standard().with("device", "1"));
    build(one_card(), &mut settings);
    assert_eq!(settings.get_str("device").as_deref(), Some("0"));

    // Every option now holds a valid value; a second pass writes nothing
    let after_first = settings.writes();
    assert!(after_first > 0);
    build(one_card(), &mut settings);
    assert_eq!(settings.writes(), after_first);
}

#[test]
fn test_valid_store_is_left_alone() {
    let full = standard()
        .with("device", "0")
        .with("decodingMethod", "cuda")
        .with("preset", "p2")
        .with("tune", "hq")
        .with("profile", "high")
        .with("pixelFormat", "nv12")
        .with("rateControlMethod", "vbr")
        .with("rateControlLookahead", 10i64)
        .with("spatialAQEnabled", true)
        .with("temporalAQEnabled", false)
        .with("aqStrength", 5i64);
    let mut settings = CountingSettings::new(full.clone());

    build(two_cards(), &mut settings);
    assert_eq!(settings.writes(), 0);
    assert_eq!(settings.inner, full);
}

#[test]
fn test_descriptor_json_wire_names() {
    let mut settings = CountingSettings::new(standard());
    let descriptors = build(one_card(), &mut settings);

    let json = serde_json::to_value(by_key(&descriptors, keys::RC_METHOD)).unwrap();
    assert_eq!(json["key"], "rateControlMethod");
    assert_eq!(json["inputKind"], "select");
    assert_eq!(json["visibility"], "visible");
    assert_eq!(json["choices"][0]["value"], "auto");
    assert!(json["description"].as_str().unwrap().contains("override"));
    assert!(json.get("range").is_none());
}
