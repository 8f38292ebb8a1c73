//! Application Startup
//!
//! Wires host collaborators into a navigation service and manages the
//! hotkey lifecycle: register at startup, deregister at shutdown.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::services::{
    ChannelSwitcher, NavigationService, Navigator, NotificationSink,
};
use crate::config::{Settings, SettingsStore};
use crate::domain::entities::{ChannelStore, GuildChannelStore, VoiceSessionStore};
use crate::domain::services::PermissionGate;
use crate::domain::value_objects::ChannelId;
use crate::presentation::hotkeys::{HotkeyId, HotkeyRegistry, KeyChord, NavigationHotkeys};

/// Host-supplied collaborators the engine is wired against.
pub struct Collaborators<C, G, S, P, W, N> {
    pub channels: Arc<C>,
    pub guild_channels: Arc<G>,
    pub sessions: Arc<S>,
    pub permissions: Arc<P>,
    pub switcher: Arc<W>,
    pub notifier: Arc<N>,
}

/// Running engine instance.
///
/// Holds the registered bindings and the live settings handle. Dropping the
/// host deregisters the bindings.
pub struct NavigationHost<R: HotkeyRegistry> {
    hotkeys: NavigationHotkeys<R>,
    settings: SettingsStore,
}

impl<R: HotkeyRegistry> NavigationHost<R> {
    /// Build the engine from settings and collaborators, then register the
    /// two trigger bindings.
    ///
    /// Fails only on startup problems (unparseable chord strings); runtime
    /// navigation failures never surface here.
    pub fn build<C, G, S, P, W, N>(
        settings: Settings,
        registry: Arc<R>,
        collaborators: Collaborators<C, G, S, P, W, N>,
    ) -> Result<Self>
    where
        C: ChannelStore + 'static,
        G: GuildChannelStore + 'static,
        S: VoiceSessionStore + 'static,
        P: PermissionGate + 'static,
        W: ChannelSwitcher + 'static,
        N: NotificationSink + 'static,
    {
        let next: KeyChord = settings
            .hotkeys
            .next
            .parse()
            .with_context(|| format!("invalid hotkeys.next chord {:?}", settings.hotkeys.next))?;
        let previous: KeyChord = settings.hotkeys.previous.parse().with_context(|| {
            format!("invalid hotkeys.previous chord {:?}", settings.hotkeys.previous)
        })?;

        let settings_store = SettingsStore::new(settings.navigation);

        let service: Arc<dyn Navigator> = Arc::new(NavigationService::new(
            collaborators.channels,
            collaborators.guild_channels,
            collaborators.sessions,
            collaborators.permissions,
            collaborators.switcher,
            collaborators.notifier,
            settings_store.clone(),
        ));

        let hotkeys = NavigationHotkeys::register(registry, service, next, previous);
        tracing::info!(environment = %settings.environment, "voice navigation ready");

        Ok(Self {
            hotkeys,
            settings: settings_store,
        })
    }

    /// Forward a fired binding id from the host's input hook.
    pub fn dispatch(&self, id: HotkeyId) -> Option<ChannelId> {
        self.hotkeys.dispatch(id)
    }

    /// Live settings handle for the host's settings panel.
    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    /// Deregister the trigger bindings.
    pub fn shutdown(self) {
        self.hotkeys.shutdown();
    }
}
