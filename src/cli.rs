use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nvencfg")]
#[command(about = "Compile NVENC settings into ffmpeg arguments", long_about = None)]
pub struct Cli {
    /// Config file to use (defaults to the user config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List NVIDIA devices reported by the device listing tool
    Devices,

    /// Compile the stored settings into encoder arguments
    Args {
        /// Zero-based index of the output video stream
        #[arg(long, default_value_t = 0)]
        stream: usize,

        /// Print all argument lists as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the full ffmpeg command without executing (dry run)
    Command {
        /// Input file
        #[arg(long)]
        input: String,

        /// Output file
        #[arg(long)]
        output: String,

        /// Zero-based index of the output video stream
        #[arg(long, default_value_t = 0)]
        stream: usize,

        /// Encoder to use (overrides config)
        #[arg(long)]
        encoder: Option<String>,

        /// Insert the hardware upload filter chain (-vf)
        #[arg(long)]
        upload_filter: bool,
    },

    /// Build the settings form, correct stale values and print it as JSON
    Form,

    /// Print a stored setting
    Get {
        /// Setting key (e.g. preset, rateControlLookahead)
        key: String,
    },

    /// Validate and store a setting
    Set {
        /// Setting key (e.g. preset, rateControlLookahead)
        key: String,

        /// New value
        value: String,
    },

    /// List supported NVENC encoders
    Encoders,

    /// Show config status and location, or create default config if missing
    InitConfig,
}

pub fn parse() -> Cli {
    Cli::parse()
}
