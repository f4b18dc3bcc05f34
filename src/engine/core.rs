mod args;
pub mod catalog;
pub mod constants;
mod defaults;
mod settings;
mod types;

pub use args::{ArgumentCompiler, resolve_device};
pub use catalog::{
    NVENC_ENCODERS, NumericOption, OptionCatalog, OptionCatalogEntry, OptionKind, ToggleOption,
    keys,
};
pub use defaults::{ensure_entry, ensure_in_range, ensure_toggle, ensure_valid};
pub use settings::{MemorySettings, Settings, SettingsExt};
pub use types::{Choice, CompiledArguments, DeviceRecord, SettingValue, format_command};
