//! Navigation Service
//!
//! Handles one navigation request end to end: snapshot the policy, resolve
//! the current channel, select the neighbor, then hand the result to the
//! switcher or resolve the failure into exactly one toast. The triggering
//! input event always completes without panicking.

use std::sync::Arc;

use uuid::Uuid;

use crate::config::SettingsStore;
use crate::domain::entities::{ChannelStore, GuildChannelStore, VoiceSessionStore};
use crate::domain::services::{
    NavDirection, NeighborSelector, PermissionGate, SessionResolver,
};
use crate::domain::value_objects::ChannelId;
use crate::shared::error::NavError;

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
}

/// A user-facing toast notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Unique id for the host's toast de-duplication
    pub id: Uuid,

    /// Literal message shown to the user
    pub message: String,

    /// Severity
    pub kind: ToastKind,
}

impl Toast {
    /// Build a failure toast.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind: ToastKind::Failure,
        }
    }

    /// Build a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind: ToastKind::Success,
        }
    }
}

/// External mutation point: tells the host to move the user.
///
/// The sole side effect a successful navigation triggers.
pub trait ChannelSwitcher: Send + Sync {
    /// Connect the user to the given voice channel.
    fn select_voice_channel(&self, id: &ChannelId);
}

/// External notification surface for failure toasts.
pub trait NotificationSink: Send + Sync {
    /// Show a toast to the user.
    fn show(&self, toast: Toast);
}

/// Direction-fixed entry points, the seam the hotkey layer dispatches into.
pub trait Navigator: Send + Sync {
    /// Jump to the next voice channel; Some(id) on success.
    fn go_next(&self) -> Option<ChannelId>;

    /// Jump to the previous voice channel; Some(id) on success.
    fn go_previous(&self) -> Option<ChannelId>;
}

/// NavigationService implementation
pub struct NavigationService<C, G, S, P, W, N>
where
    C: ChannelStore,
    G: GuildChannelStore,
    S: VoiceSessionStore,
    P: PermissionGate,
    W: ChannelSwitcher,
    N: NotificationSink,
{
    channels: Arc<C>,
    guild_channels: Arc<G>,
    sessions: Arc<S>,
    permissions: Arc<P>,
    switcher: Arc<W>,
    notifier: Arc<N>,
    settings: SettingsStore,
}

impl<C, G, S, P, W, N> NavigationService<C, G, S, P, W, N>
where
    C: ChannelStore,
    G: GuildChannelStore,
    S: VoiceSessionStore,
    P: PermissionGate,
    W: ChannelSwitcher,
    N: NotificationSink,
{
    pub fn new(
        channels: Arc<C>,
        guild_channels: Arc<G>,
        sessions: Arc<S>,
        permissions: Arc<P>,
        switcher: Arc<W>,
        notifier: Arc<N>,
        settings: SettingsStore,
    ) -> Self {
        Self {
            channels,
            guild_channels,
            sessions,
            permissions,
            switcher,
            notifier,
            settings,
        }
    }

    /// Run one navigation request.
    ///
    /// Returns the id handed to the switcher, or None when a failure was
    /// resolved into a toast. Never panics and never propagates an error.
    pub fn navigate(&self, direction: NavDirection) -> Option<ChannelId> {
        // One snapshot per invocation; the panel may flip the toggle at any
        // time between requests.
        let policy = self.settings.filter_policy();

        let current = match SessionResolver::resolve_current_voice_channel(
            &*self.sessions,
            &*self.channels,
        ) {
            Ok(channel) => channel,
            Err(err) => return self.fail(err, direction),
        };

        let siblings = self.guild_channels.voice_channels(&current.guild_id);

        match NeighborSelector::select_neighbor(
            &current,
            &siblings,
            direction,
            policy,
            &*self.permissions,
        ) {
            Ok(target) => {
                tracing::debug!(
                    channel = %target.id,
                    position = target.position,
                    ?direction,
                    "switching voice channel"
                );
                self.switcher.select_voice_channel(&target.id);
                Some(target.id)
            }
            Err(err) => self.fail(err, direction),
        }
    }

    /// Resolve a failure into exactly one toast.
    fn fail(&self, err: NavError, direction: NavDirection) -> Option<ChannelId> {
        tracing::debug!(error = %err, ?direction, "voice navigation failed");
        self.notifier.show(Toast::failure(err.user_message()));
        None
    }
}

impl<C, G, S, P, W, N> Navigator for NavigationService<C, G, S, P, W, N>
where
    C: ChannelStore,
    G: GuildChannelStore,
    S: VoiceSessionStore,
    P: PermissionGate,
    W: ChannelSwitcher,
    N: NotificationSink,
{
    fn go_next(&self) -> Option<ChannelId> {
        self.navigate(NavDirection::Next)
    }

    fn go_previous(&self) -> Option<ChannelId> {
        self.navigate(NavDirection::Previous)
    }
}
