// Library interface for nvencfg
// Exposes the argument compiler, device discovery and form descriptors

pub mod config;
pub mod engine;
pub mod ui;
