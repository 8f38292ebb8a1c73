//! Neighbor selection domain service.
//!
//! Picks the adjacent voice channel relative to the current one, applying
//! the permission gate and the occupancy policy before any position logic.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Channel;
use crate::domain::value_objects::Permissions;
use crate::shared::error::NavError;

/// Navigation direction along the position axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavDirection {
    /// Towards the channel at `position + 1`
    Next,
    /// Towards the channel at `position - 1`
    Previous,
}

impl NavDirection {
    /// Position delta of an exact neighbor in this direction.
    pub const fn offset(&self) -> i32 {
        match self {
            Self::Next => 1,
            Self::Previous => -1,
        }
    }
}

/// Eligibility policy applied on top of the permission gate.
///
/// Snapshot of the user's `only_not_empty` setting, taken once per
/// invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPolicy {
    /// When true, only partially full channels (occupied, capped, below the
    /// cap) are eligible. When false, occupancy is ignored.
    pub require_space: bool,
}

/// Capability oracle supplied by the host.
///
/// The selector only ever asks for [`Permissions::CONNECT`]; the trait stays
/// polymorphic over the permission so host adapters can reuse their general
/// capability check.
pub trait PermissionGate: Send + Sync {
    /// Whether the local user holds `permission` in `channel`.
    fn can(&self, permission: Permissions, channel: &Channel) -> bool;
}

/// Domain service computing the navigation target.
pub struct NeighborSelector;

impl NeighborSelector {
    /// Select the next or previous eligible voice channel.
    ///
    /// `siblings` is the guild's voice channel set in store-native order;
    /// it may include `current`, which is filtered like any other channel.
    ///
    /// The search runs in three steps over the eligible subset:
    /// 1. a channel at exactly `current.position ± 1`,
    /// 2. otherwise the first eligible channel in the input order — the
    ///    sequence is deliberately NOT re-sorted by position,
    /// 3. otherwise [`NavError::NoEligibleChannel`] (empty set) or the
    ///    defensive [`NavError::NoNeighborOrFallback`].
    pub fn select_neighbor(
        current: &Channel,
        siblings: &[Channel],
        direction: NavDirection,
        policy: FilterPolicy,
        gate: &dyn PermissionGate,
    ) -> Result<Channel, NavError> {
        let eligible: Vec<&Channel> = siblings
            .iter()
            .filter(|channel| Self::is_eligible(channel, policy, gate))
            .collect();

        if eligible.is_empty() {
            return Err(NavError::NoEligibleChannel);
        }

        let wanted = current.position + direction.offset();
        let target = eligible
            .iter()
            .find(|channel| channel.position == wanted)
            .or_else(|| eligible.first());

        match target {
            Some(channel) => Ok((*channel).clone()),
            // Unreachable given the emptiness check above; kept as a typed
            // failure instead of an assertion.
            None => Err(NavError::NoNeighborOrFallback),
        }
    }

    /// Permission first; occupancy is not consulted for channels the gate
    /// rejects.
    fn is_eligible(channel: &Channel, policy: FilterPolicy, gate: &dyn PermissionGate) -> bool {
        if !gate.can(Permissions::connect(), channel) {
            return false;
        }

        !policy.require_space || channel.is_partially_full()
    }
}
