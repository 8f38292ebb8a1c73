//! # Configuration
//!
//! Layered settings loading plus the live handle the settings panel uses to
//! flip the navigation policy at runtime.

pub mod settings;

pub use settings::{HotkeySettings, NavigationSettings, Settings, SettingsStore};
