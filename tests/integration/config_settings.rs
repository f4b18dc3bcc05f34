// Config file as the settings store: set, correct, persist, reload

use nvencfg::config::Config;
use nvencfg::engine::{ArgumentCompiler, OptionCatalog, SettingValue, Settings, SettingsExt};
use nvencfg::ui::DescriptorBuilder;
use tempfile::TempDir;

use crate::common::helpers::*;

#[test]
fn test_parsed_values_survive_reload() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    let catalog = OptionCatalog::nvenc();

    let mut config = Config::load_from(&path).unwrap();
    for (key, raw) in [
        ("mode", "standard"),
        ("preset", "p6"),
        ("rateControlLookahead", "16"),
        ("temporalAQEnabled", "true"),
    ] {
        let value = catalog.parse_value(key, raw).unwrap();
        config.set_setting(key, value);
    }
    config.save_to(&path).unwrap();

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.get_setting("rateControlLookahead"), Some(SettingValue::Int(16)));
    assert_eq!(reloaded.get_setting("temporalAQEnabled"), Some(SettingValue::Bool(true)));

    let compiled = ArgumentCompiler::new(one_card(), &catalog)
        .compile(&reloaded, 0)
        .unwrap();
    assert_eq!(
        compiled.stream_args,
        vec![
            "-preset",
            "p6",
            "-rc-lookahead:v:0",
            "16",
            "-temporal-aq",
            "1",
            "-aq-strength:v:0",
            "8"
        ]
    );
}

#[test]
fn test_form_corrections_are_persisted() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(
        &path,
        "[settings]\nmode = \"standard\"\ndevice = \"3\"\npreset = \"p0\"\n",
    )
    .unwrap();

    let catalog = OptionCatalog::nvenc();
    let mut config = Config::load_from(&path).unwrap();
    DescriptorBuilder::new(two_cards(), &catalog)
        .build(&mut config)
        .unwrap();
    config.save_to(&path).unwrap();

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.get_str("device").as_deref(), Some("0"));
    assert_eq!(reloaded.get_str("preset").as_deref(), Some("p4"));
    assert_eq!(reloaded.get_str("mode").as_deref(), Some("standard"));
    assert_eq!(reloaded.settings.len(), catalog.keys().len());
}

#[test]
fn test_tool_section_configures_discovery() {
    let config: Config = toml::from_str(
        "[tool]\nprogram = \"/opt/nvidia/bin/nvidia-smi\"\nargs = [\"--list-gpus\"]\n",
    )
    .unwrap();

    let source = config.tool.device_source();
    assert_eq!(source.program, "/opt/nvidia/bin/nvidia-smi");
    assert_eq!(source.args, vec!["--list-gpus"]);
    assert_eq!(config.tool.encoder, "h264_nvenc");
}
