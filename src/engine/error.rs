//! Typed errors for the engine.
//!
//! Only two conditions are fatal. Everything else (missing or stale option
//! values) is corrected or omitted rather than raised.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Standard-mode compilation needs at least one accelerator
    #[error("No NVIDIA device found")]
    NoHardwareDevice,

    /// The device-listing tool exists but could not be run
    #[error("Failed to execute {program}: {source}")]
    ToolInvocation {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
