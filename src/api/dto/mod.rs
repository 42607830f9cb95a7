//! Request/response DTOs for the API surface.

pub mod resource;

pub use resource::{
    CreateResourceBody, ListResourcesQuery, ResourceResponse, UpdateResourceBody,
};
