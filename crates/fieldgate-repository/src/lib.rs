//! # Fieldgate Repository
//!
//! The tenant-scoped resource access protocol: one generic repository over
//! the remote field-service API, parameterized per resource type by a
//! [`RemoteResource`] binding that supplies the entity mapper, the
//! criteria-to-wire-parameters factory, the endpoint, and the search
//! capability flag.

pub mod repository;
pub mod resource;
pub mod resources;
pub mod wire;

pub use repository::*;
pub use resource::*;
pub use resources::*;
