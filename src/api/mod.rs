//! # REST API Components
//!
//! HTTP surface of the rescat service: routing, DTOs, the request-validation
//! gate, the uniform response envelope, and error translation.

pub mod dto;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod pagination;
pub mod routes;
pub mod server;
pub mod validate;

pub use error::ApiError;
pub use routes::{build_router, ApiState};
pub use server::start_api_server;
