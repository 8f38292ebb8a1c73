//! Guild entity.
//!
//! The parent collection owning an ordered set of channels. Only the
//! details the navigation engine needs are mirrored here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::GuildId;

/// Read-only snapshot of a guild.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guild {
    /// Host-issued guild id
    pub id: GuildId,

    /// Guild name
    pub name: String,

    /// When the snapshot was taken
    pub created_at: DateTime<Utc>,
}

impl Guild {
    /// Build a guild snapshot.
    pub fn new(id: impl Into<GuildId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}
