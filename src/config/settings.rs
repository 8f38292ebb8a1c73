//! Application settings and configuration structures.

use std::sync::Arc;

use config::{Config, ConfigError, Environment, File};
use parking_lot::RwLock;
use serde::Deserialize;

use crate::domain::services::FilterPolicy;

/// Root configuration structure containing all engine settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Navigation policy settings
    pub navigation: NavigationSettings,

    /// Hotkey chord bindings
    pub hotkeys: HotkeySettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Navigation policy settings.
#[derive(Debug, Clone, Deserialize)]
pub struct NavigationSettings {
    /// Only target channels that are occupied but not full.
    pub only_not_empty: bool,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self { only_not_empty: true }
    }
}

/// Hotkey chord bindings, as parseable chord strings.
#[derive(Debug, Clone, Deserialize)]
pub struct HotkeySettings {
    /// Chord for "go to next voice channel" (e.g. "ctrl+n")
    pub next: String,

    /// Chord for "go to previous voice channel" (e.g. "ctrl+b")
    pub previous: String,
}

impl Default for HotkeySettings {
    fn default() -> Self {
        Self {
            next: "ctrl+n".into(),
            previous: "ctrl+b".into(),
        }
    }
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. built-in defaults
    /// 2. config/default.toml (base configuration)
    /// 3. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 4. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        // Determine the running environment
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("navigation.only_not_empty", true)?
            .set_default("hotkeys.next", "ctrl+n")?
            .set_default("hotkeys.previous", "ctrl+b")?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Load from environment variables
            // APP__NAVIGATION__ONLY_NOT_EMPTY=false -> navigation.only_not_empty = false
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            // Map simple environment variables
            .set_override_option("hotkeys.next", std::env::var("HOTKEY_NEXT").ok())?
            .set_override_option("hotkeys.previous", std::env::var("HOTKEY_PREVIOUS").ok())?
            .build()?
            .try_deserialize()
    }
}

/// Live handle to the navigation settings.
///
/// The settings panel mutates the value through this handle; the engine
/// reads one [`FilterPolicy`] snapshot per navigation request and never
/// holds the lock across the computation.
#[derive(Clone, Default)]
pub struct SettingsStore {
    inner: Arc<RwLock<NavigationSettings>>,
}

impl SettingsStore {
    /// Wrap loaded navigation settings in a shared handle.
    pub fn new(settings: NavigationSettings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(settings)),
        }
    }

    /// Current value of the `only_not_empty` toggle.
    pub fn only_not_empty(&self) -> bool {
        self.inner.read().only_not_empty
    }

    /// Settings-panel hook: flip the `only_not_empty` toggle.
    pub fn set_only_not_empty(&self, value: bool) {
        self.inner.write().only_not_empty = value;
    }

    /// Snapshot of the current filter policy for one navigation request.
    pub fn filter_policy(&self) -> FilterPolicy {
        FilterPolicy {
            require_space: self.only_not_empty(),
        }
    }
}
