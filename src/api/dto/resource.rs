//! Resource DTOs for API request/response handling.
//!
//! Request shapes declare their constraints with `validator` and reject
//! unrecognized fields; the validation gate (`crate::api::validate`) enforces
//! both before any business logic runs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::api::pagination::{default_limit, default_page};
use crate::domain::{ResourceId, ResourceType};
use crate::storage::ResourceRecord;

/// Request body for creating a resource.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateResourceBody {
    /// Display name, required and non-empty.
    #[validate(required(message = "name is required"), length(min = 1, message = "name should not be empty"))]
    pub name: Option<String>,

    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,

    /// Category; must be one of the closed enum values.
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
}

/// Request body for updating a resource. Absent or empty fields keep their
/// stored values.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateResourceBody {
    /// Target resource id, required and UUID-formatted.
    #[validate(required(message = "id is required"), custom(function = validate_uuid))]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, rename = "type")]
    pub resource_type: Option<ResourceType>,
}

/// Query parameters for the paginated listing, pagination fields embedded
/// alongside the optional filters.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ListResourcesQuery {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: i64,

    #[serde(default = "default_limit")]
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: i64,

    /// Exact-match category filter.
    #[serde(default, rename = "type")]
    pub resource_type: Option<ResourceType>,

    /// Substring filter on the name.
    #[serde(default)]
    pub name: Option<String>,
}

impl Default for ListResourcesQuery {
    fn default() -> Self {
        Self { page: default_page(), limit: default_limit(), resource_type: None, name: None }
    }
}

/// Response projection of a resource: the soft-delete flag and creation
/// timestamp stay internal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceResponse {
    pub id: ResourceId,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
}

impl From<ResourceRecord> for ResourceResponse {
    fn from(record: ResourceRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            resource_type: record.resource_type,
        }
    }
}

fn validate_uuid(value: &str) -> Result<(), ValidationError> {
    if Uuid::parse_str(value).is_err() {
        let mut err = ValidationError::new("isUuid");
        err.message = Some("id must be a UUID".into());
        return Err(err);
    }
    Ok(())
}
