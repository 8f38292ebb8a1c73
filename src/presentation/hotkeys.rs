//! Hotkey chords, registry contract, and dispatch.
//!
//! The host owns the actual input hook; this module registers the two
//! navigation bindings at startup, maps fired binding ids back to
//! directions, and deregisters at shutdown. Bindings are active regardless
//! of window focus.

use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::application::services::Navigator;
use crate::domain::value_objects::ChannelId;

/// Stable id of a registered binding within the host's registry namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HotkeyId(pub u32);

/// Binding id for "go to next voice channel".
pub const NEXT_CHANNEL_HOTKEY: HotkeyId = HotkeyId(1337);

/// Binding id for "go to previous voice channel".
pub const PREVIOUS_CHANNEL_HOTKEY: HotkeyId = HotkeyId(1338);

/// Modifier half of a two-key chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
}

impl Modifier {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Ctrl => "ctrl",
            Self::Alt => "alt",
            Self::Shift => "shift",
        }
    }
}

/// A fixed two-key chord: one modifier plus one alphanumeric key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyChord {
    pub modifier: Modifier,
    pub key: char,
}

/// Chord string parse errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChordParseError {
    #[error("chord must look like 'ctrl+n', got {0:?}")]
    Malformed(String),

    #[error("unknown modifier {0:?}")]
    UnknownModifier(String),

    #[error("key must be a single alphanumeric character, got {0:?}")]
    InvalidKey(String),
}

impl FromStr for KeyChord {
    type Err = ChordParseError;

    /// Parse chord strings of the form `"ctrl+n"`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('+');
        let (Some(modifier), Some(key), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ChordParseError::Malformed(s.to_owned()));
        };

        let modifier = match modifier.trim().to_lowercase().as_str() {
            "ctrl" | "control" => Modifier::Ctrl,
            "alt" => Modifier::Alt,
            "shift" => Modifier::Shift,
            other => return Err(ChordParseError::UnknownModifier(other.to_owned())),
        };

        let key = key.trim().to_lowercase();
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphanumeric() => Ok(Self { modifier, key: c }),
            _ => Err(ChordParseError::InvalidKey(key)),
        }
    }
}

impl std::fmt::Display for KeyChord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+{}", self.modifier.as_str(), self.key)
    }
}

/// The host's input-event registry.
///
/// Registered bindings fire whether or not the client window has focus.
pub trait HotkeyRegistry: Send + Sync {
    /// Bind a chord under a stable id.
    fn register(&self, id: HotkeyId, chord: KeyChord);

    /// Remove a binding previously registered under `id`.
    fn unregister(&self, id: HotkeyId);
}

/// Lifecycle wrapper around the two navigation bindings.
///
/// Registers on construction, dispatches fired ids into the navigator, and
/// deregisters exactly once on shutdown (or drop).
pub struct NavigationHotkeys<R: HotkeyRegistry> {
    registry: Arc<R>,
    navigator: Arc<dyn Navigator>,
    registered: AtomicBool,
}

impl<R: HotkeyRegistry> NavigationHotkeys<R> {
    /// Register both bindings and return the live handle.
    pub fn register(
        registry: Arc<R>,
        navigator: Arc<dyn Navigator>,
        next: KeyChord,
        previous: KeyChord,
    ) -> Self {
        tracing::info!(%next, %previous, "registering voice navigation hotkeys");
        registry.register(NEXT_CHANNEL_HOTKEY, next);
        registry.register(PREVIOUS_CHANNEL_HOTKEY, previous);

        Self {
            registry,
            navigator,
            registered: AtomicBool::new(true),
        }
    }

    /// Route a fired binding id to its navigation direction.
    ///
    /// Ids outside the two navigation bindings are ignored.
    pub fn dispatch(&self, id: HotkeyId) -> Option<ChannelId> {
        match id {
            NEXT_CHANNEL_HOTKEY => self.navigator.go_next(),
            PREVIOUS_CHANNEL_HOTKEY => self.navigator.go_previous(),
            other => {
                tracing::trace!(id = other.0, "ignoring unbound hotkey id");
                None
            }
        }
    }

    /// Deregister both bindings. Idempotent.
    pub fn shutdown(&self) {
        if !self.registered.swap(false, Ordering::SeqCst) {
            return;
        }
        tracing::info!("deregistering voice navigation hotkeys");
        self.registry.unregister(NEXT_CHANNEL_HOTKEY);
        self.registry.unregister(PREVIOUS_CHANNEL_HOTKEY);
    }
}

impl<R: HotkeyRegistry> Drop for NavigationHotkeys<R> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
