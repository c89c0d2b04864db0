//! Persistence adapters

pub mod json_settings;

pub use json_settings::JsonSettingsStore;
