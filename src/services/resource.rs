//! Resource service
//!
//! Business logic for the catalog: create, paginated listing with filters,
//! fetch-by-id, update-with-merge, and soft delete. Each operation issues one
//! logical round of persistence calls and holds no state of its own; NotFound
//! is the only business-level failure and everything else propagates to the
//! API boundary unchanged.

use crate::api::dto::{CreateResourceBody, ListResourcesQuery, ResourceResponse, UpdateResourceBody};
use crate::api::pagination::PaginationResponse;
use crate::domain::ResourceId;
use crate::errors::{Error, Result};
use crate::storage::{NewResource, ResourceFilter, ResourceRepository};
use tracing::instrument;

const RESOURCE_NOT_FOUND: &str = "Resource does not exist!";

/// Service for catalog resource operations, backed by an injected repository.
#[derive(Debug, Clone)]
pub struct ResourceService {
    repo: ResourceRepository,
}

impl ResourceService {
    /// Creates a new resource service with the given repository.
    pub fn new(repo: ResourceRepository) -> Self {
        Self { repo }
    }

    /// Creates a new resource and returns its response projection.
    #[instrument(skip(self, input), name = "svc_create_resource")]
    pub async fn create(&self, input: CreateResourceBody) -> Result<ResourceResponse> {
        let record = self
            .repo
            .create(NewResource {
                // The validation gate guarantees name is present and non-empty.
                name: input.name.unwrap_or_default(),
                description: input.description,
                resource_type: input.resource_type,
            })
            .await?;

        Ok(ResourceResponse::from(record))
    }

    /// Lists non-deleted resources matching the query filters, newest first,
    /// with the total count taken independently of the page window.
    #[instrument(skip(self, query), fields(page = query.page, limit = query.limit), name = "svc_list_resources")]
    pub async fn find_all(
        &self,
        query: ListResourcesQuery,
    ) -> Result<PaginationResponse<ResourceResponse>> {
        let skip = (query.page - 1) * query.limit;

        let filter = ResourceFilter {
            resource_type: query.resource_type,
            name_contains: query.name,
        };

        let (records, total) = self.repo.list(&filter, query.limit, skip).await?;

        Ok(PaginationResponse {
            total,
            current_page: query.page,
            data: records.into_iter().map(ResourceResponse::from).collect(),
        })
    }

    /// Fetches a single non-deleted resource by id.
    #[instrument(skip(self), fields(resource_id = %id), name = "svc_get_resource")]
    pub async fn find_one(&self, id: &str) -> Result<ResourceResponse> {
        let id = ResourceId::from_string(id.to_string());
        let record = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| Error::not_found(RESOURCE_NOT_FOUND))?;

        Ok(ResourceResponse::from(record))
    }

    /// Updates a resource with field-level merge semantics: a provided
    /// non-empty value replaces the stored one, anything else is retained.
    /// Empty strings therefore cannot clear a field.
    #[instrument(skip(self, input), name = "svc_update_resource")]
    pub async fn update(&self, input: UpdateResourceBody) -> Result<ResourceResponse> {
        // The validation gate guarantees id is present and UUID-formatted.
        let id = ResourceId::from_string(input.id.unwrap_or_default());

        let current = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| Error::not_found(RESOURCE_NOT_FOUND))?;

        let name = match input.name {
            Some(name) if !name.is_empty() => name,
            _ => current.name,
        };
        let description = match input.description {
            Some(description) if !description.is_empty() => Some(description),
            _ => current.description,
        };
        let resource_type = input.resource_type.unwrap_or(current.resource_type);

        let record =
            self.repo.update(&id, &name, description.as_deref(), resource_type).await?;

        Ok(ResourceResponse::from(record))
    }

    /// Soft-deletes a resource. A second delete on the same id fails with
    /// NotFound because the row is no longer visible.
    #[instrument(skip(self), fields(resource_id = %id), name = "svc_delete_resource")]
    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = ResourceId::from_string(id.to_string());

        self.repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| Error::not_found(RESOURCE_NOT_FOUND))?;

        self.repo.soft_delete(&id).await
    }
}
