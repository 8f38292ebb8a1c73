//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **ChannelId / GuildId**: Opaque string identifiers issued by the host
//! - **Permissions**: 64-bit permission bitfield with helper methods

mod id;
mod permissions;

pub use id::*;
pub use permissions::*;
