#![allow(dead_code)] // Not every test binary uses every helper

use nvencfg::engine::{
    ArgumentCompiler, CompiledArguments, DeviceRecord, FixedInventory, MemorySettings,
    OptionCatalog, SettingValue, Settings,
};

/// Single card, matching the worked scenario
pub fn one_card() -> FixedInventory {
    FixedInventory(vec![DeviceRecord::new("0", "Card A (UUID: X)")])
}

pub fn two_cards() -> FixedInventory {
    FixedInventory(vec![
        DeviceRecord::new("0", "Card A (UUID: X)"),
        DeviceRecord::new("1", "Card B (UUID: Y)"),
    ])
}

pub fn no_cards() -> FixedInventory {
    FixedInventory::default()
}

pub fn standard() -> MemorySettings {
    MemorySettings::new().with("mode", "standard")
}

/// Compile against a fresh catalog
pub fn compile(
    inventory: &FixedInventory,
    settings: &dyn Settings,
    stream_index: usize,
) -> CompiledArguments {
    let catalog = OptionCatalog::nvenc();
    ArgumentCompiler::new(inventory, &catalog)
        .compile(settings, stream_index)
        .expect("compilation should succeed")
}

/// Settings store that counts writes
#[derive(Debug, Default)]
pub struct CountingSettings {
    pub inner: MemorySettings,
    writes: usize,
}

impl CountingSettings {
    pub fn new(inner: MemorySettings) -> Self {
        Self { inner, writes: 0 }
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Settings for CountingSettings {
    fn get_setting(&self, key: &str) -> Option<SettingValue> {
        self.inner.get_setting(key)
    }

    fn set_setting(&mut self, key: &str, value: SettingValue) {
        self.writes += 1;
        self.inner.set_setting(key, value);
    }
}
