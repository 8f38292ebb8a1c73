//! # Domain Layer
//!
//! The domain layer contains the core decision logic of the navigation
//! engine. It is independent of any host client or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Core domain entities (Channel, Guild, VoiceSession)
//! - **value_objects**: Immutable value types (ids, Permissions)
//! - **services**: The session resolver and neighbor selector
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Pure, synchronous decision logic over externally supplied snapshots
//! - Store traits define the read-only contracts a host must satisfy
//! - The core never mutates host state; it only reports a target channel id

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
