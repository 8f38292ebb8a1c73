//! # Domain Entities
//!
//! Read-only snapshots of the host client's state, together with the store
//! traits a host adapter implements to supply them.
//!
//! ## Core Entities
//!
//! - **Channel**: A communication space within a guild; voice channels are
//!   the navigation targets
//! - **Guild**: A community that contains channels
//! - **VoiceSession**: The user's current call membership (0 or 1 channels)
//!
//! ## Store Traits
//!
//! Each entity has an associated store trait defining the read-only lookup
//! the engine needs. These traits are implemented by host adapters (or by
//! the in-memory directory in the infrastructure layer), following the
//! dependency inversion principle.

mod channel;
mod guild;
mod session;

// Re-export Channel entity and related types
pub use channel::{Channel, ChannelKind, ChannelStore, GuildChannelStore};

// Re-export Guild entity
pub use guild::Guild;

// Re-export VoiceSession entity and related types
pub use session::{VoiceSession, VoiceSessionStore};
