//! # Application Layer
//!
//! Orchestration of the domain core: resolve the current channel, select a
//! neighbor, then either switch or notify. No decision logic lives here.

pub mod services;

pub use services::*;
