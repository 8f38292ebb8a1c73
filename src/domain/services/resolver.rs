//! Session resolution domain service.

use crate::domain::entities::{Channel, ChannelStore, VoiceSessionStore};
use crate::shared::error::NavError;

/// Domain service resolving the channel the user is currently calling from.
pub struct SessionResolver;

impl SessionResolver {
    /// Resolve the user's current voice channel.
    ///
    /// Fails with [`NavError::NotInVoice`] when no session exists, or when
    /// the session holds a stale id the channel store no longer knows (a
    /// dead reference reads the same as no call to the user). Fails with
    /// [`NavError::NotVoiceChannel`] when the referenced channel is not
    /// voice-capable. Read-only; never mutates host state.
    pub fn resolve_current_voice_channel(
        sessions: &dyn VoiceSessionStore,
        channels: &dyn ChannelStore,
    ) -> Result<Channel, NavError> {
        let Some(channel_id) = sessions.active_voice_channel_id() else {
            return Err(NavError::NotInVoice);
        };

        let Some(channel) = channels.channel(&channel_id) else {
            return Err(NavError::NotInVoice);
        };

        if !channel.is_voice() {
            return Err(NavError::NotVoiceChannel);
        }

        Ok(channel)
    }
}
