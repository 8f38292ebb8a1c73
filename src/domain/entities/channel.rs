//! Channel entity and store traits.
//!
//! Snapshot of a host channel as read from the external channel store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ChannelId, GuildId};

/// Channel kinds as reported by the host client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    /// A text channel within a guild
    #[default]
    Text,
    /// A voice channel within a guild
    Voice,
    /// A stage channel (broadcast voice, not navigable)
    Stage,
    /// A category that contains channels
    Category,
}

impl ChannelKind {
    /// Convert from the host's string representation.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "voice" => Self::Voice,
            "stage" => Self::Stage,
            "category" => Self::Category,
            _ => Self::Text,
        }
    }

    /// Convert to the host's string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Voice => "voice",
            Self::Stage => "stage",
            Self::Category => "category",
        }
    }

    /// Whether a user can hold a call session in this kind of channel.
    ///
    /// Stage channels carry audio but are not navigation targets.
    pub fn is_voice(&self) -> bool {
        matches!(self, Self::Voice)
    }
}

impl std::fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read-only snapshot of a channel.
///
/// The host owns and mutates channels; the engine only reads them. The
/// `position` value is the navigation axis: unique within a guild's voice
/// channels, gaps allowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    /// Host-issued channel id
    pub id: ChannelId,

    /// Guild this channel belongs to
    pub guild_id: GuildId,

    /// Channel name (1-100 characters)
    pub name: String,

    /// Channel kind
    #[serde(rename = "type")]
    pub kind: ChannelKind,

    /// Sorting position within the guild
    pub position: i32,

    /// Maximum occupants; None or Some(0) means unlimited
    pub user_limit: Option<u32>,

    /// Current occupant count
    pub member_count: u32,

    /// Channel creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Channel {
    /// Check if this is a voice channel a user can occupy.
    pub fn is_voice(&self) -> bool {
        self.kind.is_voice()
    }

    /// The capacity limit, with None and 0 both meaning unlimited.
    pub fn capacity(&self) -> Option<u32> {
        match self.user_limit {
            Some(0) | None => None,
            limit => limit,
        }
    }

    /// Occupied but not full: a capacity limit exists, at least one member
    /// is present, and the count is strictly below the limit.
    ///
    /// Unlimited channels are never "partially full".
    pub fn is_partially_full(&self) -> bool {
        match self.capacity() {
            Some(limit) => self.member_count > 0 && self.member_count < limit,
            None => false,
        }
    }
}

/// Channel lookup by id.
///
/// Implemented by the host adapter (or the in-memory directory). A miss is
/// a valid outcome: session references can go stale.
pub trait ChannelStore: Send + Sync {
    /// Find a channel by its id.
    fn channel(&self, id: &ChannelId) -> Option<Channel>;
}

/// Per-guild voice channel listing.
pub trait GuildChannelStore: Send + Sync {
    /// Voice channels of a guild in the store's native order.
    ///
    /// The order is whatever the host keeps internally and is NOT required
    /// to follow `position`; the selector's fallback rule depends on it
    /// being returned untouched.
    fn voice_channels(&self, guild_id: &GuildId) -> Vec<Channel>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voice_channel(limit: Option<u32>, members: u32) -> Channel {
        Channel {
            id: ChannelId::new("c1"),
            guild_id: GuildId::new("g1"),
            name: "General".to_string(),
            kind: ChannelKind::Voice,
            position: 0,
            user_limit: limit,
            member_count: members,
            created_at: Utc::now(),
        }
    }

    // ==========================================================================
    // ChannelKind Tests
    // ==========================================================================

    #[test]
    fn test_kind_from_str() {
        assert_eq!(ChannelKind::from_str("voice"), ChannelKind::Voice);
        assert_eq!(ChannelKind::from_str("VOICE"), ChannelKind::Voice);
        assert_eq!(ChannelKind::from_str("stage"), ChannelKind::Stage);
        assert_eq!(ChannelKind::from_str("category"), ChannelKind::Category);
        assert_eq!(ChannelKind::from_str("anything-else"), ChannelKind::Text);
    }

    #[test]
    fn test_kind_as_str_roundtrip() {
        for kind in [
            ChannelKind::Text,
            ChannelKind::Voice,
            ChannelKind::Stage,
            ChannelKind::Category,
        ] {
            assert_eq!(ChannelKind::from_str(kind.as_str()), kind);
        }
    }

    #[test]
    fn test_only_voice_kind_is_navigable() {
        assert!(ChannelKind::Voice.is_voice());
        assert!(!ChannelKind::Text.is_voice());
        assert!(!ChannelKind::Stage.is_voice());
        assert!(!ChannelKind::Category.is_voice());
    }

    // ==========================================================================
    // Occupancy Tests
    // ==========================================================================

    #[test]
    fn test_capacity_treats_zero_as_unlimited() {
        assert_eq!(voice_channel(Some(0), 3).capacity(), None);
        assert_eq!(voice_channel(None, 3).capacity(), None);
        assert_eq!(voice_channel(Some(5), 3).capacity(), Some(5));
    }

    #[test]
    fn test_partially_full_requires_limit_occupants_and_space() {
        // occupied, below limit
        assert!(voice_channel(Some(5), 3).is_partially_full());

        // empty
        assert!(!voice_channel(Some(5), 0).is_partially_full());

        // at capacity
        assert!(!voice_channel(Some(5), 5).is_partially_full());

        // unlimited
        assert!(!voice_channel(None, 3).is_partially_full());
        assert!(!voice_channel(Some(0), 3).is_partially_full());
    }

    #[test]
    fn test_channel_kind_serializes_as_type() {
        let channel = voice_channel(Some(5), 1);
        let json = serde_json::to_string(&channel).expect("Failed to serialize channel");
        assert!(json.contains("\"type\":\"voice\""));
    }
}
