//! # Infrastructure Layer
//!
//! Reference implementations of the collaborator traits. A real host client
//! supplies its own adapters; these are used by embedders without a live
//! store and by the integration tests.
//!
//! - **InMemoryDirectory**: channel/guild/session stores backed by DashMap
//! - **StaticPermissionGate**: per-channel permission grants over a default
//! - **TracingNotificationSink**: renders toasts as tracing events

pub mod directory;
pub mod notifications;
pub mod permissions;

pub use directory::InMemoryDirectory;
pub use notifications::TracingNotificationSink;
pub use permissions::StaticPermissionGate;
