//! Domain types shared across the storage, service, and API layers.

pub mod id;
pub mod resource_type;

pub use id::ResourceId;
pub use resource_type::ResourceType;
