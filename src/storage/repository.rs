//! Resource repository
//!
//! CRUD operations for the `resources` table. Soft-deleted rows are treated
//! as absent by every read, update, and delete here; only `create` can bring
//! a row into existence and nothing ever physically removes one.

use crate::domain::{ResourceId, ResourceType};
use crate::errors::{Error, Result};
use crate::storage::DbPool;
use sqlx::{FromRow, Sqlite};
use tracing::instrument;

/// Internal database row structure for resources.
#[derive(Debug, Clone, FromRow)]
struct ResourceRow {
    pub id: ResourceId,
    pub name: String,
    pub description: Option<String>,
    #[sqlx(rename = "type")]
    pub resource_type: ResourceType,
    pub is_deleted: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Resource data returned from the repository.
#[derive(Debug, Clone)]
pub struct ResourceRecord {
    pub id: ResourceId,
    pub name: String,
    pub description: Option<String>,
    pub resource_type: ResourceType,
    pub is_deleted: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ResourceRow> for ResourceRecord {
    fn from(row: ResourceRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            resource_type: row.resource_type,
            is_deleted: row.is_deleted,
            created_at: row.created_at,
        }
    }
}

/// Fields for inserting a new resource.
#[derive(Debug, Clone)]
pub struct NewResource {
    pub name: String,
    pub description: Option<String>,
    pub resource_type: ResourceType,
}

/// Filter for listing resources. `is_deleted = 0` is always applied on top.
#[derive(Debug, Clone, Default)]
pub struct ResourceFilter {
    /// Exact match on the resource type
    pub resource_type: Option<ResourceType>,
    /// Substring match on the resource name
    pub name_contains: Option<String>,
}

const SELECT_COLUMNS: &str = "id, name, description, type, is_deleted, created_at";

/// Repository for resource persistence.
#[derive(Debug, Clone)]
pub struct ResourceRepository {
    pool: DbPool,
}

impl ResourceRepository {
    /// Creates a new resource repository with the given database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Inserts a new resource and returns the stored record.
    #[instrument(skip(self, new), fields(resource_name = %new.name), name = "db_create_resource")]
    pub async fn create(&self, new: NewResource) -> Result<ResourceRecord> {
        let id = ResourceId::new();
        let now = chrono::Utc::now();

        let result = sqlx::query(
            "INSERT INTO resources (id, name, description, type, is_deleted, created_at) \
             VALUES (?, ?, ?, ?, 0, ?)",
        )
        .bind(&id)
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.resource_type)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, resource_name = %new.name, "Failed to create resource");
            Error::Database {
                source: e,
                context: format!("Failed to create resource '{}'", new.name),
            }
        })?;

        if result.rows_affected() == 0 {
            return Err(Error::internal("Failed to create resource"));
        }

        tracing::info!(resource_id = %id, resource_name = %new.name, "Created new resource");

        self.find_by_id(&id).await?.ok_or_else(|| {
            Error::internal(format!("Resource '{}' missing immediately after insert", id))
        })
    }

    /// Retrieves a non-deleted resource by its unique ID.
    #[instrument(skip(self), fields(resource_id = %id), name = "db_get_resource_by_id")]
    pub async fn find_by_id(&self, id: &ResourceId) -> Result<Option<ResourceRecord>> {
        let row = sqlx::query_as::<Sqlite, ResourceRow>(&format!(
            "SELECT {} FROM resources WHERE id = ? AND is_deleted = 0",
            SELECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, resource_id = %id, "Failed to get resource by ID");
            Error::Database {
                source: e,
                context: format!("Failed to get resource with ID '{}'", id),
            }
        })?;

        Ok(row.map(ResourceRecord::from))
    }

    /// Lists non-deleted resources matching the filter, newest first, together
    /// with the total count of matching rows across all pages.
    #[instrument(
        skip(self, filter),
        fields(limit = limit, offset = offset),
        name = "db_list_resources"
    )]
    pub async fn list(
        &self,
        filter: &ResourceFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<ResourceRecord>, i64)> {
        let mut conditions = vec!["is_deleted = 0".to_string()];
        if filter.resource_type.is_some() {
            conditions.push("type = ?".to_string());
        }
        let name_pattern = filter.name_contains.as_ref().map(|name| format!("%{}%", name));
        if name_pattern.is_some() {
            conditions.push("name LIKE ?".to_string());
        }
        let where_clause = conditions.join(" AND ");

        let select_sql = format!(
            "SELECT {} FROM resources WHERE {} ORDER BY created_at DESC LIMIT ? OFFSET ?",
            SELECT_COLUMNS, where_clause
        );
        let count_sql = format!("SELECT COUNT(*) FROM resources WHERE {}", where_clause);

        let mut select_query = sqlx::query_as::<Sqlite, ResourceRow>(&select_sql);
        let mut count_query = sqlx::query_scalar::<Sqlite, i64>(&count_sql);

        if let Some(ty) = filter.resource_type {
            select_query = select_query.bind(ty);
            count_query = count_query.bind(ty);
        }
        if let Some(pattern) = &name_pattern {
            select_query = select_query.bind(pattern);
            count_query = count_query.bind(pattern);
        }

        let rows = select_query.bind(limit).bind(offset).fetch_all(&self.pool).await.map_err(
            |e| {
                tracing::error!(error = %e, "Failed to list resources");
                Error::Database { source: e, context: "Failed to list resources".to_string() }
            },
        )?;

        let total = count_query.fetch_one(&self.pool).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to count resources");
            Error::Database { source: e, context: "Failed to count resources".to_string() }
        })?;

        Ok((rows.into_iter().map(ResourceRecord::from).collect(), total))
    }

    /// Overwrites the mutable fields of a non-deleted resource and returns the
    /// stored record. Field-level merge policy lives in the service layer.
    #[instrument(skip(self, name, description, resource_type), fields(resource_id = %id), name = "db_update_resource")]
    pub async fn update(
        &self,
        id: &ResourceId,
        name: &str,
        description: Option<&str>,
        resource_type: ResourceType,
    ) -> Result<ResourceRecord> {
        let result = sqlx::query(
            "UPDATE resources SET name = ?, description = ?, type = ? \
             WHERE id = ? AND is_deleted = 0",
        )
        .bind(name)
        .bind(description)
        .bind(resource_type)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, resource_id = %id, "Failed to update resource");
            Error::Database {
                source: e,
                context: format!("Failed to update resource with ID '{}'", id),
            }
        })?;

        if result.rows_affected() == 0 {
            return Err(Error::not_found("Resource does not exist!"));
        }

        tracing::info!(resource_id = %id, "Updated resource");

        self.find_by_id(id).await?.ok_or_else(|| {
            Error::internal(format!("Resource '{}' missing immediately after update", id))
        })
    }

    /// Flags a non-deleted resource as deleted. The row remains in the table
    /// but becomes invisible to every other operation.
    #[instrument(skip(self), fields(resource_id = %id), name = "db_soft_delete_resource")]
    pub async fn soft_delete(&self, id: &ResourceId) -> Result<()> {
        let result =
            sqlx::query("UPDATE resources SET is_deleted = 1 WHERE id = ? AND is_deleted = 0")
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, resource_id = %id, "Failed to delete resource");
                    Error::Database {
                        source: e,
                        context: format!("Failed to delete resource with ID '{}'", id),
                    }
                })?;

        if result.rows_affected() == 0 {
            return Err(Error::not_found("Resource does not exist!"));
        }

        tracing::info!(resource_id = %id, "Soft-deleted resource");

        Ok(())
    }

    /// Returns the database pool.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
