//! HTTP request handlers.

pub mod resources;

pub use resources::{
    create_resource_handler, delete_resource_handler, get_resource_handler,
    list_resources_handler, update_resource_handler,
};
