//! Common Test Utilities
//!
//! Shared fixtures and mocked collaborators for the navigation tests.

use chrono::Utc;
use parking_lot::Mutex;

use voice_nav::application::services::{ChannelSwitcher, NotificationSink, Toast};
use voice_nav::domain::entities::{Channel, ChannelKind, Guild};
use voice_nav::domain::value_objects::{ChannelId, GuildId};
use voice_nav::infrastructure::InMemoryDirectory;
use voice_nav::presentation::hotkeys::{HotkeyId, HotkeyRegistry, KeyChord};

mockall::mock! {
    pub Switcher {}

    impl ChannelSwitcher for Switcher {
        fn select_voice_channel(&self, id: &ChannelId);
    }
}

mockall::mock! {
    pub Sink {}

    impl NotificationSink for Sink {
        fn show(&self, toast: Toast);
    }
}

/// An unlimited voice channel with no occupants.
pub fn voice_channel(id: &str, guild: &str, position: i32) -> Channel {
    Channel {
        id: ChannelId::new(id),
        guild_id: GuildId::new(guild),
        name: format!("voice-{}", id),
        kind: ChannelKind::Voice,
        position,
        user_limit: None,
        member_count: 0,
        created_at: Utc::now(),
    }
}

/// A voice channel with a capacity limit and a current occupant count.
pub fn capped_voice_channel(
    id: &str,
    guild: &str,
    position: i32,
    limit: u32,
    members: u32,
) -> Channel {
    Channel {
        user_limit: Some(limit),
        member_count: members,
        ..voice_channel(id, guild, position)
    }
}

/// A text channel (never a navigation target).
pub fn text_channel(id: &str, guild: &str, position: i32) -> Channel {
    Channel {
        kind: ChannelKind::Text,
        ..voice_channel(id, guild, position)
    }
}

/// Directory with one registered guild and the given channels inserted in
/// order (insertion order is the store-native order the fallback reads).
pub fn guild_directory(guild: &str, channels: Vec<Channel>) -> InMemoryDirectory {
    let directory = InMemoryDirectory::new();
    directory.add_guild(Guild::new(guild, format!("guild-{}", guild)));
    for channel in channels {
        directory.upsert_channel(channel);
    }
    directory
}

/// Registry fake recording register/unregister calls.
#[derive(Default)]
pub struct RecordingRegistry {
    pub registered: Mutex<Vec<(HotkeyId, KeyChord)>>,
    pub unregistered: Mutex<Vec<HotkeyId>>,
}

impl HotkeyRegistry for RecordingRegistry {
    fn register(&self, id: HotkeyId, chord: KeyChord) {
        self.registered.lock().push((id, chord));
    }

    fn unregister(&self, id: HotkeyId) {
        self.unregistered.lock().push(id);
    }
}
