//! Navigation Error Types
//!
//! Centralized error handling. Every variant is non-fatal and resolves into
//! exactly one user-facing toast at the point of detection; nothing here is
//! ever propagated as a panic across the component boundary.

use serde::Serialize;

/// Navigation error type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum NavError {
    /// The user has no active voice session.
    #[error("no active voice session")]
    NotInVoice,

    /// The session points at a channel that is not voice-capable.
    #[error("active channel is not voice-capable")]
    NotVoiceChannel,

    /// The eligibility filter produced an empty sibling set.
    #[error("no eligible voice channel in the guild")]
    NoEligibleChannel,

    /// The filtered set was non-empty but produced neither an exact neighbor
    /// nor a fallback. Unreachable by construction; handled instead of
    /// asserted away.
    #[error("no neighbor or fallback in a non-empty filtered set")]
    NoNeighborOrFallback,
}

impl NavError {
    /// The literal toast message shown to the user for this failure.
    ///
    /// One message is shared by both directions and the empty-result case.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotInVoice => "Not in a voice channel",
            Self::NotVoiceChannel => "Not in a voice-capable channel",
            Self::NoEligibleChannel | Self::NoNeighborOrFallback => {
                "Couldn't find next/previous channel"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_not_in_voice() {
        assert_eq!(NavError::NotInVoice.user_message(), "Not in a voice channel");
    }

    #[test]
    fn test_user_message_not_voice_channel() {
        assert_eq!(
            NavError::NotVoiceChannel.user_message(),
            "Not in a voice-capable channel"
        );
    }

    #[test]
    fn test_user_message_shared_for_empty_and_defensive_case() {
        assert_eq!(
            NavError::NoEligibleChannel.user_message(),
            NavError::NoNeighborOrFallback.user_message()
        );
        assert_eq!(
            NavError::NoEligibleChannel.user_message(),
            "Couldn't find next/previous channel"
        );
    }

    #[test]
    fn test_display_is_diagnostic_not_user_facing() {
        let rendered = format!("{}", NavError::NotInVoice);
        assert_eq!(rendered, "no active voice session");
        assert_ne!(rendered, NavError::NotInVoice.user_message());
    }
}
