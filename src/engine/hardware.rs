//! NVIDIA device discovery via nvidia-smi

use std::io::ErrorKind;
use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::engine::core::DeviceRecord;
use crate::engine::error::{EngineError, EngineResult};

/// Matches `GPU 0: NVIDIA GeForce RTX 3080 (UUID: GPU-...)`
static GPU_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"GPU (\d+): (.+) \(UUID: (.+)\)").expect("GPU line pattern is valid")
});

/// Anything that can report the accelerators present right now
pub trait DeviceSource {
    /// A fresh list on every call; devices come and go between runs.
    ///
    /// An empty list means "no accelerator available" and is not an error.
    fn discover_devices(&self) -> EngineResult<Vec<DeviceRecord>>;
}

/// Parse `nvidia-smi -L` output into device records
pub fn parse_device_list(output: &str) -> Vec<DeviceRecord> {
    GPU_LINE
        .captures_iter(output)
        .map(|caps| DeviceRecord {
            id: caps[1].to_string(),
            display_name: format!("{} (UUID: {})", &caps[2], &caps[3]),
        })
        .collect()
}

/// Device listing backed by an external command (`nvidia-smi -L` by default)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NvidiaSmi {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for NvidiaSmi {
    fn default() -> Self {
        Self {
            program: "nvidia-smi".to_string(),
            args: vec!["-L".to_string()],
        }
    }
}

impl NvidiaSmi {
    pub fn with_command(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl DeviceSource for NvidiaSmi {
    fn discover_devices(&self) -> EngineResult<Vec<DeviceRecord>> {
        let output = match Command::new(&self.program).args(&self.args).output() {
            Ok(output) => output,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(program = %self.program, "Device listing tool not installed");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(EngineError::ToolInvocation {
                    program: self.program.clone(),
                    source,
                });
            }
        };

        if !output.status.success() {
            // Typically the driver is loaded but no NVIDIA GPU is present
            warn!(
                program = %self.program,
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "Device listing tool failed, assuming no devices"
            );
            return Ok(Vec::new());
        }

        let devices = parse_device_list(&String::from_utf8_lossy(&output.stdout));
        debug!(count = devices.len(), "Discovered NVIDIA devices");
        Ok(devices)
    }
}

/// A fixed inventory, for hosts that already know their devices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedInventory(pub Vec<DeviceRecord>);

impl DeviceSource for FixedInventory {
    fn discover_devices(&self) -> EngineResult<Vec<DeviceRecord>> {
        Ok(self.0.clone())
    }
}

impl<D: DeviceSource + ?Sized> DeviceSource for &D {
    fn discover_devices(&self) -> EngineResult<Vec<DeviceRecord>> {
        (**self).discover_devices()
    }
}
