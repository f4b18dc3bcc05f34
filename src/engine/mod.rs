// Argument compiler engine - independent of the CLI and of any settings backend

pub mod core;
pub mod error;
pub mod hardware;

pub use core::*;
pub use error::{EngineError, EngineResult};
pub use hardware::{DeviceSource, FixedInventory, NvidiaSmi, parse_device_list};
