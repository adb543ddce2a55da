//! # Fieldgate Core
//!
//! Core types, traits, and error definitions for Fieldgate, the tenant-scoped
//! access layer over the remote field-service API. This crate provides the
//! foundational abstractions used by the remote client, the resource
//! repositories, and the caching layer.

pub mod error;
pub mod id;
pub mod logging;
pub mod pagination;
pub mod params;
pub mod result;
pub mod tenant;

pub use error::*;
pub use id::*;
pub use pagination::*;
pub use params::*;
pub use result::*;
pub use tenant::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
