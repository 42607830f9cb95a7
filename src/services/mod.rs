//! Business services orchestrating validated requests against the storage layer.

pub mod resource;

pub use resource::ResourceService;
