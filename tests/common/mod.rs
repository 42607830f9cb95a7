//! Shared test infrastructure: in-memory SQLite pools with migrations applied
//! and a standard set of seeded resources.

#![allow(dead_code)]

use std::str::FromStr;

use rescat::domain::{ResourceId, ResourceType};
use rescat::storage::DbPool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Create a fresh in-memory database with all migrations applied.
///
/// A single connection keeps every query on the same in-memory instance.
pub async fn test_pool() -> DbPool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("in-memory connect options")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("connect to in-memory database");

    rescat::storage::pool::MIGRATOR.run(&pool).await.expect("run migrations");

    pool
}

/// Ids of the standard seeded rows.
pub struct Seeded {
    pub audio: ResourceId,
    pub deleted_document: ResourceId,
    pub document: ResourceId,
    pub link: ResourceId,
}

/// Seed the standard fixture: four resources created in order, one of them
/// soft-deleted. Creation timestamps are spaced out so that newest-first
/// ordering is deterministic (link > document > deleted_document > audio).
pub async fn seed_resources(pool: &DbPool) -> Seeded {
    let base = chrono::Utc::now();

    let audio = insert_resource(pool, "Audio 1", None, ResourceType::Audio, false, base).await;
    let deleted_document = insert_resource(
        pool,
        "Document 1",
        None,
        ResourceType::Document,
        true,
        base + chrono::Duration::seconds(1),
    )
    .await;
    let document = insert_resource(
        pool,
        "Document 2",
        Some("TEST ABC"),
        ResourceType::Document,
        false,
        base + chrono::Duration::seconds(2),
    )
    .await;
    let link = insert_resource(
        pool,
        "Link 1",
        None,
        ResourceType::Link,
        false,
        base + chrono::Duration::seconds(3),
    )
    .await;

    Seeded { audio, deleted_document, document, link }
}

async fn insert_resource(
    pool: &DbPool,
    name: &str,
    description: Option<&str>,
    resource_type: ResourceType,
    is_deleted: bool,
    created_at: chrono::DateTime<chrono::Utc>,
) -> ResourceId {
    let id = ResourceId::new();

    sqlx::query(
        "INSERT INTO resources (id, name, description, type, is_deleted, created_at) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(name)
    .bind(description)
    .bind(resource_type)
    .bind(is_deleted)
    .bind(created_at)
    .execute(pool)
    .await
    .unwrap_or_else(|e| panic!("failed to seed resource '{}': {}", name, e));

    id
}
