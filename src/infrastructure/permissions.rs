//! Static permission gate.
//!
//! Per-channel permission grants over a default grant. Suitable for
//! embedders without a live permission system and for tests; a real host
//! adapter would answer from its own capability calculation.

use dashmap::DashMap;

use crate::domain::entities::Channel;
use crate::domain::services::PermissionGate;
use crate::domain::value_objects::{ChannelId, Permissions};

/// Permission gate answering from a fixed table.
pub struct StaticPermissionGate {
    default: Permissions,
    grants: DashMap<ChannelId, Permissions>,
}

impl StaticPermissionGate {
    /// Gate with the given default grant for channels without an override.
    pub fn new(default: Permissions) -> Self {
        Self {
            default,
            grants: DashMap::new(),
        }
    }

    /// Gate granting every modeled permission everywhere.
    pub fn allow_all() -> Self {
        Self::new(Permissions::all())
    }

    /// Gate granting nothing by default.
    pub fn deny_all() -> Self {
        Self::new(Permissions::empty())
    }

    /// Override the grant for one channel.
    pub fn grant(&self, id: impl Into<ChannelId>, permissions: Permissions) {
        self.grants.insert(id.into(), permissions);
    }

    /// Remove a per-channel override, falling back to the default grant.
    pub fn clear(&self, id: &ChannelId) {
        self.grants.remove(id);
    }
}

impl PermissionGate for StaticPermissionGate {
    fn can(&self, permission: Permissions, channel: &Channel) -> bool {
        let granted = self
            .grants
            .get(&channel.id)
            .map(|entry| *entry)
            .unwrap_or(self.default);
        granted.has(permission.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ChannelKind;
    use crate::domain::value_objects::GuildId;
    use chrono::Utc;

    fn channel(id: &str) -> Channel {
        Channel {
            id: ChannelId::new(id),
            guild_id: GuildId::new("g1"),
            name: format!("voice-{}", id),
            kind: ChannelKind::Voice,
            position: 0,
            user_limit: None,
            member_count: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_default_grant_applies_without_override() {
        let gate = StaticPermissionGate::allow_all();
        assert!(gate.can(Permissions::connect(), &channel("c1")));

        let gate = StaticPermissionGate::deny_all();
        assert!(!gate.can(Permissions::connect(), &channel("c1")));
    }

    #[test]
    fn test_per_channel_override_wins_over_default() {
        let gate = StaticPermissionGate::deny_all();
        gate.grant("c1", Permissions::new(Permissions::CONNECT));

        assert!(gate.can(Permissions::connect(), &channel("c1")));
        assert!(!gate.can(Permissions::connect(), &channel("c2")));
    }

    #[test]
    fn test_clear_restores_the_default_grant() {
        let gate = StaticPermissionGate::allow_all();
        gate.grant("c1", Permissions::empty());
        assert!(!gate.can(Permissions::connect(), &channel("c1")));

        gate.clear(&ChannelId::new("c1"));
        assert!(gate.can(Permissions::connect(), &channel("c1")));
    }

    #[test]
    fn test_admin_grant_implies_connect() {
        let gate = StaticPermissionGate::deny_all();
        gate.grant("c1", Permissions::new(Permissions::ADMINISTRATOR));

        assert!(gate.can(Permissions::connect(), &channel("c1")));
    }
}
