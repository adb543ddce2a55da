//! # Fieldgate Remote
//!
//! Client for the remote field-service API. Exposes the [`ResourceClient`]
//! seam the resource repositories are built on, plus the HTTP implementation
//! used in production.

mod client;
mod http_client;

pub use client::*;
pub use http_client::*;
