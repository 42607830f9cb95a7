//! Service-level tests against an in-memory database.

mod common;

use common::{seed_resources, test_pool};
use rescat::api::dto::{CreateResourceBody, ListResourcesQuery, UpdateResourceBody};
use rescat::domain::ResourceType;
use rescat::errors::Error;
use rescat::services::ResourceService;
use rescat::storage::{DbPool, ResourceRepository};

fn service(pool: &DbPool) -> ResourceService {
    ResourceService::new(ResourceRepository::new(pool.clone()))
}

fn list_query(
    page: i64,
    limit: i64,
    resource_type: Option<ResourceType>,
    name: Option<&str>,
) -> ListResourcesQuery {
    ListResourcesQuery { page, limit, resource_type, name: name.map(str::to_string) }
}

#[tokio::test]
async fn find_all_returns_paginated_resources_newest_first() {
    let pool = test_pool().await;
    seed_resources(&pool).await;
    let service = service(&pool);

    let result = service.find_all(list_query(1, 2, None, None)).await.unwrap();

    assert_eq!(result.total, 3);
    assert_eq!(result.current_page, 1);
    assert_eq!(result.data.len(), 2);
    assert_eq!(result.data[0].name, "Link 1");
    assert_eq!(result.data[0].resource_type, ResourceType::Link);
    assert_eq!(result.data[1].name, "Document 2");
    assert_eq!(result.data[1].description.as_deref(), Some("TEST ABC"));
}

#[tokio::test]
async fn find_all_total_is_independent_of_page_window() {
    let pool = test_pool().await;
    seed_resources(&pool).await;
    let service = service(&pool);

    let result = service.find_all(list_query(2, 2, None, None)).await.unwrap();

    assert_eq!(result.total, 3);
    assert_eq!(result.current_page, 2);
    assert_eq!(result.data.len(), 1);
    assert_eq!(result.data[0].name, "Audio 1");
}

#[tokio::test]
async fn find_all_filters_by_type() {
    let pool = test_pool().await;
    seed_resources(&pool).await;
    let service = service(&pool);

    let result =
        service.find_all(list_query(1, 10, Some(ResourceType::Link), None)).await.unwrap();

    assert_eq!(result.total, 1);
    assert!(result.data.iter().all(|r| r.resource_type == ResourceType::Link));
}

#[tokio::test]
async fn find_all_filters_by_name_substring() {
    let pool = test_pool().await;
    seed_resources(&pool).await;
    let service = service(&pool);

    let result = service.find_all(list_query(1, 10, None, Some("Doc"))).await.unwrap();

    assert!(!result.data.is_empty());
    assert!(result.data.iter().all(|r| r.name.contains("Doc")));
}

#[tokio::test]
async fn find_all_never_returns_soft_deleted_rows() {
    let pool = test_pool().await;
    seed_resources(&pool).await;
    let service = service(&pool);

    // "Document 1" is soft-deleted; the type filter must not resurrect it.
    let result =
        service.find_all(list_query(1, 10, Some(ResourceType::Document), None)).await.unwrap();

    assert_eq!(result.total, 1);
    assert_eq!(result.data[0].name, "Document 2");
}

#[tokio::test]
async fn find_one_returns_projection() {
    let pool = test_pool().await;
    let seeded = seed_resources(&pool).await;
    let service = service(&pool);

    let result = service.find_one(seeded.audio.as_str()).await.unwrap();

    assert_eq!(result.id, seeded.audio);
    assert_eq!(result.name, "Audio 1");
    assert_eq!(result.resource_type, ResourceType::Audio);
    assert_eq!(result.description, None);
}

#[tokio::test]
async fn find_one_unknown_id_fails_with_not_found() {
    let pool = test_pool().await;
    seed_resources(&pool).await;
    let service = service(&pool);

    let err = service.find_one("123").await.unwrap_err();

    assert!(matches!(err, Error::NotFound(_)));
    assert_eq!(err.to_string(), "Resource does not exist!");
}

#[tokio::test]
async fn find_one_soft_deleted_id_fails_with_not_found() {
    let pool = test_pool().await;
    let seeded = seed_resources(&pool).await;
    let service = service(&pool);

    let err = service.find_one(seeded.deleted_document.as_str()).await.unwrap_err();

    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn create_assigns_id_and_persists_fields() {
    let pool = test_pool().await;
    let service = service(&pool);

    let created = service
        .create(CreateResourceBody {
            name: Some("New Doc".to_string()),
            description: None,
            resource_type: ResourceType::Document,
        })
        .await
        .unwrap();

    assert!(!created.id.as_str().is_empty());
    assert_eq!(created.name, "New Doc");
    assert_eq!(created.resource_type, ResourceType::Document);
    assert_eq!(created.description, None);

    let fetched = service.find_one(created.id.as_str()).await.unwrap();
    assert_eq!(fetched.name, "New Doc");
    assert_eq!(fetched.description, None);
    assert_eq!(fetched.resource_type, ResourceType::Document);
}

#[tokio::test]
async fn update_merges_only_provided_fields() {
    let pool = test_pool().await;
    let seeded = seed_resources(&pool).await;
    let service = service(&pool);

    let updated = service
        .update(UpdateResourceBody {
            id: Some(seeded.document.into_string()),
            name: Some("Updated Doc".to_string()),
            description: None,
            resource_type: None,
        })
        .await
        .unwrap();

    assert_eq!(updated.name, "Updated Doc");
    assert_eq!(updated.description.as_deref(), Some("TEST ABC"));
    assert_eq!(updated.resource_type, ResourceType::Document);
}

#[tokio::test]
async fn update_treats_empty_strings_as_no_change() {
    let pool = test_pool().await;
    let seeded = seed_resources(&pool).await;
    let service = service(&pool);

    let updated = service
        .update(UpdateResourceBody {
            id: Some(seeded.document.into_string()),
            name: Some(String::new()),
            description: Some(String::new()),
            resource_type: None,
        })
        .await
        .unwrap();

    assert_eq!(updated.name, "Document 2");
    assert_eq!(updated.description.as_deref(), Some("TEST ABC"));
}

#[tokio::test]
async fn update_unknown_id_fails_with_not_found() {
    let pool = test_pool().await;
    seed_resources(&pool).await;
    let service = service(&pool);

    let err = service
        .update(UpdateResourceBody {
            id: Some("does-not-exist".to_string()),
            name: Some("Test".to_string()),
            description: None,
            resource_type: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NotFound(_)));
    assert_eq!(err.to_string(), "Resource does not exist!");
}

#[tokio::test]
async fn update_soft_deleted_id_fails_with_not_found() {
    let pool = test_pool().await;
    let seeded = seed_resources(&pool).await;
    let service = service(&pool);

    let err = service
        .update(UpdateResourceBody {
            id: Some(seeded.deleted_document.into_string()),
            name: Some("Revived".to_string()),
            description: None,
            resource_type: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn delete_hides_resource_from_reads() {
    let pool = test_pool().await;
    let seeded = seed_resources(&pool).await;
    let service = service(&pool);

    service.delete(seeded.audio.as_str()).await.unwrap();

    let err = service.find_one(seeded.audio.as_str()).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    // The row is flagged, not removed.
    let raw: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM resources WHERE id = ? AND is_deleted = 1")
            .bind(seeded.audio.as_str())
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(raw, 1);
}

#[tokio::test]
async fn second_delete_fails_with_not_found() {
    let pool = test_pool().await;
    let seeded = seed_resources(&pool).await;
    let service = service(&pool);

    service.delete(seeded.link.as_str()).await.unwrap();
    let err = service.delete(seeded.link.as_str()).await.unwrap_err();

    assert!(matches!(err, Error::NotFound(_)));
    assert_eq!(err.to_string(), "Resource does not exist!");
}
