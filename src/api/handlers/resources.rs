//! Resource endpoints.
//!
//! Each handler extracts its validated payload, delegates to the service, and
//! wraps the result in the success envelope. Errors bubble up to `ApiError`,
//! the sole status-code translator.

use axum::extract::{Path, State};
use axum::Json;
use tracing::instrument;

use crate::api::dto::{
    CreateResourceBody, ListResourcesQuery, ResourceResponse, UpdateResourceBody,
};
use crate::api::envelope::ApiEnvelope;
use crate::api::error::ApiError;
use crate::api::pagination::PaginationResponse;
use crate::api::routes::ApiState;
use crate::api::validate::{ValidJson, ValidQuery};

/// `POST /api/resource` — create a resource.
#[instrument(skip(state, body), name = "http_create_resource")]
pub async fn create_resource_handler(
    State(state): State<ApiState>,
    ValidJson(body): ValidJson<CreateResourceBody>,
) -> Result<Json<ApiEnvelope<ResourceResponse>>, ApiError> {
    let created = state.resources.create(body).await?;
    Ok(Json(ApiEnvelope::success(created)))
}

/// `GET /api/resource` — paginated listing with optional type/name filters.
#[instrument(skip(state, query), name = "http_list_resources")]
pub async fn list_resources_handler(
    State(state): State<ApiState>,
    ValidQuery(query): ValidQuery<ListResourcesQuery>,
) -> Result<Json<ApiEnvelope<PaginationResponse<ResourceResponse>>>, ApiError> {
    let page = state.resources.find_all(query).await?;
    Ok(Json(ApiEnvelope::success(page)))
}

/// `GET /api/resource/{id}` — fetch one resource. The raw path id is looked
/// up as-is, without format validation.
#[instrument(skip(state), fields(resource_id = %id), name = "http_get_resource")]
pub async fn get_resource_handler(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<ApiEnvelope<ResourceResponse>>, ApiError> {
    let resource = state.resources.find_one(&id).await?;
    Ok(Json(ApiEnvelope::success(resource)))
}

/// `PUT /api/resource` — merge-update a resource.
#[instrument(skip(state, body), name = "http_update_resource")]
pub async fn update_resource_handler(
    State(state): State<ApiState>,
    ValidJson(body): ValidJson<UpdateResourceBody>,
) -> Result<Json<ApiEnvelope<ResourceResponse>>, ApiError> {
    let updated = state.resources.update(body).await?;
    Ok(Json(ApiEnvelope::success(updated)))
}

/// `DELETE /api/resource/{id}` — soft-delete a resource; success carries no
/// payload.
#[instrument(skip(state), fields(resource_id = %id), name = "http_delete_resource")]
pub async fn delete_resource_handler(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<ApiEnvelope<()>>, ApiError> {
    state.resources.delete(&id).await?;
    Ok(Json(ApiEnvelope::empty()))
}
