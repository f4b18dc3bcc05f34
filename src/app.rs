use crate::cli::{Cli, Commands};
use anyhow::{Context, Result, bail};
use nvencfg::config::Config;
use nvencfg::engine::{
    ArgumentCompiler, DeviceSource, NVENC_ENCODERS, OptionCatalog, Settings, SettingsExt,
    format_command,
};
use nvencfg::ui::DescriptorBuilder;
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };

    match cli.command {
        Commands::Devices => handle_devices(&path),
        Commands::Args { stream, json } => handle_args(&path, stream, json),
        Commands::Command {
            input,
            output,
            stream,
            encoder,
            upload_filter,
        } => handle_command(&path, &input, &output, stream, encoder, upload_filter),
        Commands::Form => handle_form(&path),
        Commands::Get { key } => handle_get(&path, &key),
        Commands::Set { key, value } => handle_set(&path, &key, &value),
        Commands::Encoders => handle_encoders(),
        Commands::InitConfig => handle_init_config(&path),
    }
}

fn handle_devices(path: &Path) -> Result<()> {
    let config = Config::load_from(path)?;
    let devices = config.tool.device_source().discover_devices()?;

    if devices.is_empty() {
        println!("No NVIDIA devices found");
        return Ok(());
    }

    for device in devices {
        println!("{}: {}", device.id, device.display_name);
    }
    Ok(())
}

fn handle_args(path: &Path, stream: usize, json: bool) -> Result<()> {
    let config = Config::load_from(path)?;
    let catalog = OptionCatalog::nvenc();
    let compiler = ArgumentCompiler::new(config.tool.device_source(), &catalog);
    let compiled = compiler.compile(&config, stream)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&compiled)?);
    } else {
        println!("pre-input: {}", format_command(&compiled.pre_input_args));
        println!("filters:   {}", compiled.filter_chain.join(","));
        println!("stream:    {}", format_command(&compiled.stream_args));
    }
    Ok(())
}

fn handle_command(
    path: &Path,
    input: &str,
    output: &str,
    stream: usize,
    encoder: Option<String>,
    upload_filter: bool,
) -> Result<()> {
    let config = Config::load_from(path)?;
    let encoder = encoder.unwrap_or_else(|| config.tool.encoder.clone());
    if !NVENC_ENCODERS.contains(&encoder.as_str()) {
        bail!(
            "Unsupported encoder '{}' (expected one of: {})",
            encoder,
            NVENC_ENCODERS.join(", ")
        );
    }

    let catalog = OptionCatalog::nvenc();
    let compiler = ArgumentCompiler::new(config.tool.device_source(), &catalog);
    let compiled = compiler.compile(&config, stream)?;

    let parts = compiled.command_line(&encoder, input, output, stream, upload_filter);
    println!("{}", format_command(&parts));
    Ok(())
}

fn handle_form(path: &Path) -> Result<()> {
    let mut config = Config::load_from(path)?;
    let before = config.settings.clone();

    let catalog = OptionCatalog::nvenc();
    let builder = DescriptorBuilder::new(config.tool.device_source(), &catalog);
    let descriptors = builder.build(&mut config)?;

    // Persist whatever the defaulting pass corrected
    if config.settings != before {
        config
            .save_to(path)
            .context("Failed to persist corrected settings")?;
    }

    println!("{}", serde_json::to_string_pretty(&descriptors)?);
    Ok(())
}

fn handle_get(path: &Path, key: &str) -> Result<()> {
    let catalog = OptionCatalog::nvenc();
    if catalog.kind_of(key).is_none() {
        bail!("Unknown setting '{}'", key);
    }

    let config = Config::load_from(path)?;
    match config.get_str(key) {
        Some(value) => println!("{}", value),
        None => println!("(unset)"),
    }
    Ok(())
}

fn handle_set(path: &Path, key: &str, raw: &str) -> Result<()> {
    let catalog = OptionCatalog::nvenc();
    let value = catalog.parse_value(key, raw).map_err(anyhow::Error::msg)?;

    let mut config = Config::load_from(path)?;
    config.set_setting(key, value.clone());
    config.save_to(path)?;

    println!("{} = {}", key, value);
    Ok(())
}

fn handle_encoders() -> Result<()> {
    for encoder in NVENC_ENCODERS {
        println!("{}", encoder);
    }
    Ok(())
}

fn handle_init_config(path: &Path) -> Result<()> {
    if Config::ensure_default(path)? {
        println!("Created default config at: {}", path.display());
    } else {
        println!("Config file exists at: {}", path.display());
        let config = Config::load_from(path)?;
        println!("  device tool: {} {}", config.tool.program, config.tool.args.join(" "));
        println!("  encoder:     {}", config.tool.encoder);
        println!("  settings:    {} stored", config.settings.len());
    }
    Ok(())
}
