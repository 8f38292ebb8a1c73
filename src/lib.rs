//! # Voice Channel Navigation
//!
//! This crate provides a hotkey-driven voice channel navigation engine:
//! - A pure selection core that picks the next or previous eligible voice
//!   channel relative to the user's current call
//! - Permission and occupancy filtering with a deterministic fallback
//! - Thin plumbing for hotkey bindings, settings, and toast notifications
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Core entities, value objects, and the resolver and
//!   selector services that hold all of the decision logic
//! - **Application Layer**: The navigation service orchestrating resolve,
//!   select, switch, and notify
//! - **Infrastructure Layer**: In-memory reference implementations of the
//!   host store traits
//! - **Presentation Layer**: Hotkey chords, registration, and dispatch
//!
//! ## Module Structure
//!
//! ```text
//! voice_nav/
//! +-- config/        Settings loading and the live policy handle
//! +-- domain/        Entities, value objects, resolver and selector
//! +-- application/   Navigation service
//! +-- infrastructure/ In-memory directory, permission gate, toast sink
//! +-- presentation/  Hotkey chords, registry trait, dispatcher
//! +-- shared/        Common utilities (errors)
//! ```
//!
//! The host client owns every store; this crate only reads snapshots through
//! narrow collaborator traits and reports the desired target channel id back
//! through a switcher trait.

// Configuration module
pub mod config;

// Domain layer - Core decision logic
pub mod domain;

// Application layer - Orchestration
pub mod application;

// Infrastructure layer - Reference store implementations
pub mod infrastructure;

// Presentation layer - Hotkey plumbing
pub mod presentation;

// Shared utilities
pub mod shared;

// Host wiring and hotkey lifecycle
pub mod startup;

// Telemetry and observability
pub mod telemetry;
