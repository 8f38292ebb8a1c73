//! Discord-compatible permission flags.
//!
//! Permissions are represented as a 64-bit bitfield where each bit
//! represents a specific permission. Only the voice-relevant subset is
//! modeled here; bit positions match the host's numbering so raw values
//! can be passed through unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 64-bit permission bitfield.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permissions(pub i64);

impl Permissions {
    /// Allows all permissions and bypasses channel permission overwrites
    pub const ADMINISTRATOR: i64 = 1 << 3;
    /// Allows for using priority speaker in a voice channel
    pub const PRIORITY_SPEAKER: i64 = 1 << 8;
    /// Allows the user to go live
    pub const STREAM: i64 = 1 << 9;
    /// Allows guild members to view a channel
    pub const VIEW_CHANNEL: i64 = 1 << 10;
    /// Allows for joining of a voice channel
    pub const CONNECT: i64 = 1 << 20;
    /// Allows for speaking in a voice channel
    pub const SPEAK: i64 = 1 << 21;
    /// Allows for muting members in a voice channel
    pub const MUTE_MEMBERS: i64 = 1 << 22;
    /// Allows for deafening of members in a voice channel
    pub const DEAFEN_MEMBERS: i64 = 1 << 23;
    /// Allows for moving of members between voice channels
    pub const MOVE_MEMBERS: i64 = 1 << 24;
    /// Allows for using voice-activity-detection in a voice channel
    pub const USE_VAD: i64 = 1 << 25;

    /// All modeled permissions combined
    pub const ALL: i64 = Self::ADMINISTRATOR
        | Self::PRIORITY_SPEAKER
        | Self::STREAM
        | Self::VIEW_CHANNEL
        | Self::CONNECT
        | Self::SPEAK
        | Self::MUTE_MEMBERS
        | Self::DEAFEN_MEMBERS
        | Self::MOVE_MEMBERS
        | Self::USE_VAD;

    /// Default permissions for an ordinary member
    pub const DEFAULT: i64 =
        Self::VIEW_CHANNEL | Self::CONNECT | Self::SPEAK | Self::STREAM | Self::USE_VAD;

    /// Create a new Permissions instance.
    pub const fn new(bits: i64) -> Self {
        Self(bits)
    }

    /// Create empty permissions.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create permissions with all modeled flags set.
    pub const fn all() -> Self {
        Self(Self::ALL)
    }

    /// The permission required to enter a voice channel.
    pub const fn connect() -> Self {
        Self(Self::CONNECT)
    }

    /// Check if a specific permission is set.
    pub const fn has(&self, permission: i64) -> bool {
        // Administrator overrides all
        if self.0 & Self::ADMINISTRATOR != 0 {
            return true;
        }
        self.0 & permission == permission
    }

    /// Check if administrator permission is set.
    pub const fn is_admin(&self) -> bool {
        self.0 & Self::ADMINISTRATOR != 0
    }

    /// Add a permission.
    pub fn add(&mut self, permission: i64) {
        self.0 |= permission;
    }

    /// Remove a permission.
    pub fn remove(&mut self, permission: i64) {
        self.0 &= !permission;
    }

    /// Get the raw bits.
    pub const fn bits(&self) -> i64 {
        self.0
    }

    /// Compute effective permissions after applying overwrites.
    ///
    /// # Arguments
    /// * `base` - Base permissions (from roles)
    /// * `allow` - Permissions to allow (from overwrite)
    /// * `deny` - Permissions to deny (from overwrite)
    pub fn apply_overwrites(base: i64, allow: i64, deny: i64) -> i64 {
        (base & !deny) | allow
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Permissions {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Permissions> for i64 {
    fn from(perms: Permissions) -> Self {
        perms.0
    }
}

impl std::ops::BitOr for Permissions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for Permissions {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}
