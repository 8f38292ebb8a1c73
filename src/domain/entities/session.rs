//! Voice session entity and store trait.
//!
//! The user's current call membership: at most one active channel at a
//! time, owned and mutated entirely by the host.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ChannelId;

/// Read-only snapshot of the user's voice session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceSession {
    /// Channel the user is connected to
    pub channel_id: ChannelId,

    /// When the user joined the channel
    pub joined_at: DateTime<Utc>,

    /// Whether the user muted themselves
    pub self_mute: bool,

    /// Whether the user deafened themselves
    pub self_deaf: bool,
}

impl VoiceSession {
    /// Build a session snapshot for a freshly joined channel.
    pub fn new(channel_id: impl Into<ChannelId>) -> Self {
        Self {
            channel_id: channel_id.into(),
            joined_at: Utc::now(),
            self_mute: false,
            self_deaf: false,
        }
    }
}

/// Current call membership lookup.
///
/// Implemented by the host adapter. Returns 0 or 1 channel references; the
/// reference may be stale if the channel was deleted out from under the
/// session.
pub trait VoiceSessionStore: Send + Sync {
    /// Id of the voice channel the user is currently bound to, if any.
    fn active_voice_channel_id(&self) -> Option<ChannelId>;
}
