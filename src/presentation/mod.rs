//! # Presentation Layer
//!
//! The outer surface of the engine: key chord parsing, registration of the
//! two trigger bindings against the host's input-event registry, and the
//! dispatch of fired chords into the navigator.

pub mod hotkeys;

pub use hotkeys::*;
