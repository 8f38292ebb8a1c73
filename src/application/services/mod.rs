//! # Application Services
//!
//! ## Services
//!
//! - **NavigationService**: End-to-end handling of one navigation request

mod navigation_service;

pub use navigation_service::*;
