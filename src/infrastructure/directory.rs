//! In-memory channel directory.
//!
//! Implements the three read-side store traits over DashMap-backed state.
//! Per-guild voice lists keep insertion order; that order is exactly what
//! `voice_channels` hands back, which makes the selector's first-of-filtered
//! fallback reproducible in tests and demos.

use dashmap::DashMap;
use parking_lot::RwLock;

use crate::domain::entities::{
    Channel, ChannelStore, Guild, GuildChannelStore, VoiceSession, VoiceSessionStore,
};
use crate::domain::value_objects::{ChannelId, GuildId};

/// DashMap-backed directory of guilds, channels, and the active session.
#[derive(Default)]
pub struct InMemoryDirectory {
    guilds: DashMap<GuildId, Guild>,
    channels: DashMap<ChannelId, Channel>,
    // Insertion-ordered voice channel ids per guild ("store-native order").
    guild_voice: DashMap<GuildId, Vec<ChannelId>>,
    session: RwLock<Option<VoiceSession>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a guild. Channels of unregistered guilds do not resolve.
    pub fn add_guild(&self, guild: Guild) {
        self.guilds.insert(guild.id.clone(), guild);
    }

    /// Insert or replace a channel snapshot.
    ///
    /// A voice channel joins its guild's voice list on first insert and
    /// keeps its slot on replacement.
    pub fn upsert_channel(&self, channel: Channel) {
        if channel.is_voice() {
            let mut order = self.guild_voice.entry(channel.guild_id.clone()).or_default();
            if !order.contains(&channel.id) {
                order.push(channel.id.clone());
            }
        }
        self.channels.insert(channel.id.clone(), channel);
    }

    /// Drop a channel and its voice-list slot.
    pub fn remove_channel(&self, id: &ChannelId) {
        if let Some((_, channel)) = self.channels.remove(id) {
            if let Some(mut order) = self.guild_voice.get_mut(&channel.guild_id) {
                order.retain(|entry| entry != id);
            }
        }
    }

    /// Bind the user's session to a channel.
    pub fn connect(&self, id: impl Into<ChannelId>) {
        *self.session.write() = Some(VoiceSession::new(id.into()));
    }

    /// Clear the user's session.
    pub fn disconnect(&self) {
        *self.session.write() = None;
    }
}

impl ChannelStore for InMemoryDirectory {
    fn channel(&self, id: &ChannelId) -> Option<Channel> {
        self.channels.get(id).map(|entry| entry.value().clone())
    }
}

impl GuildChannelStore for InMemoryDirectory {
    fn voice_channels(&self, guild_id: &GuildId) -> Vec<Channel> {
        if !self.guilds.contains_key(guild_id) {
            return Vec::new();
        }

        self.guild_voice
            .get(guild_id)
            .map(|order| {
                order
                    .iter()
                    .filter_map(|id| self.channels.get(id).map(|entry| entry.value().clone()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl VoiceSessionStore for InMemoryDirectory {
    fn active_voice_channel_id(&self) -> Option<ChannelId> {
        self.session
            .read()
            .as_ref()
            .map(|session| session.channel_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ChannelKind;
    use chrono::Utc;

    fn channel(id: &str, guild: &str, kind: ChannelKind, position: i32) -> Channel {
        Channel {
            id: ChannelId::new(id),
            guild_id: GuildId::new(guild),
            name: format!("channel-{}", id),
            kind,
            position,
            user_limit: None,
            member_count: 0,
            created_at: Utc::now(),
        }
    }

    fn directory_with_guild(guild: &str) -> InMemoryDirectory {
        let directory = InMemoryDirectory::new();
        directory.add_guild(Guild::new(guild, format!("guild-{}", guild)));
        directory
    }

    #[test]
    fn test_voice_channels_keep_insertion_order_not_position_order() {
        let directory = directory_with_guild("g1");
        directory.upsert_channel(channel("c7", "g1", ChannelKind::Voice, 7));
        directory.upsert_channel(channel("c1", "g1", ChannelKind::Voice, 1));
        directory.upsert_channel(channel("c5", "g1", ChannelKind::Voice, 5));

        let order: Vec<i32> = directory
            .voice_channels(&GuildId::new("g1"))
            .iter()
            .map(|c| c.position)
            .collect();
        assert_eq!(order, vec![7, 1, 5]);
    }

    #[test]
    fn test_replacing_a_channel_keeps_its_slot() {
        let directory = directory_with_guild("g1");
        directory.upsert_channel(channel("c7", "g1", ChannelKind::Voice, 7));
        directory.upsert_channel(channel("c1", "g1", ChannelKind::Voice, 1));

        // Occupancy update arrives as a full snapshot replacement.
        let mut updated = channel("c7", "g1", ChannelKind::Voice, 7);
        updated.member_count = 3;
        directory.upsert_channel(updated);

        let channels = directory.voice_channels(&GuildId::new("g1"));
        assert_eq!(channels[0].id, ChannelId::new("c7"));
        assert_eq!(channels[0].member_count, 3);
        assert_eq!(channels.len(), 2);
    }

    #[test]
    fn test_non_voice_channels_are_not_listed() {
        let directory = directory_with_guild("g1");
        directory.upsert_channel(channel("t1", "g1", ChannelKind::Text, 0));
        directory.upsert_channel(channel("v1", "g1", ChannelKind::Voice, 1));
        directory.upsert_channel(channel("s1", "g1", ChannelKind::Stage, 2));

        let listed = directory.voice_channels(&GuildId::new("g1"));
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, ChannelId::new("v1"));

        // Text channels still resolve by id.
        assert!(directory.channel(&ChannelId::new("t1")).is_some());
    }

    #[test]
    fn test_unregistered_guild_resolves_to_nothing() {
        let directory = InMemoryDirectory::new();
        directory.upsert_channel(channel("v1", "ghost", ChannelKind::Voice, 1));

        assert!(directory.voice_channels(&GuildId::new("ghost")).is_empty());
    }

    #[test]
    fn test_remove_channel_clears_the_voice_slot() {
        let directory = directory_with_guild("g1");
        directory.upsert_channel(channel("v1", "g1", ChannelKind::Voice, 1));
        directory.upsert_channel(channel("v2", "g1", ChannelKind::Voice, 2));

        directory.remove_channel(&ChannelId::new("v1"));

        let listed = directory.voice_channels(&GuildId::new("g1"));
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, ChannelId::new("v2"));
        assert!(directory.channel(&ChannelId::new("v1")).is_none());
    }

    #[test]
    fn test_session_connect_and_disconnect() {
        let directory = directory_with_guild("g1");
        assert_eq!(directory.active_voice_channel_id(), None);

        directory.connect("v1");
        assert_eq!(directory.active_voice_channel_id(), Some(ChannelId::new("v1")));

        directory.disconnect();
        assert_eq!(directory.active_voice_channel_id(), None);
    }
}
