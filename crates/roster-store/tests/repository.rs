//! The users list repository over a real file store.

use std::sync::Arc;

use roster_core::testing::{CannedResponse, FakeEngine, user_json};
use roster_core::{
    AppError, CachedUsersListRepository, LocalDataSource, USERS_LIST_CACHE_KEY, UserDto,
    UsersListRepository,
};
use roster_store::{FixtureSource, JsonFileDataSource, StoreConfig};
use serde_json::json;

fn store(dir: &std::path::Path, fixtures: FixtureSource) -> Arc<JsonFileDataSource> {
    Arc::new(JsonFileDataSource::new(
        StoreConfig::new(dir).with_fixtures(fixtures),
    ))
}

#[tokio::test]
async fn test_network_result_is_cached_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let engine = Arc::new(FakeEngine::new().with_response(
        "/users",
        CannedResponse::Json(json!([user_json(4, "Patricia"), user_json(5, "Chelsey")])),
    ));
    let local = store(dir.path(), FixtureSource::Disabled);
    let repo = CachedUsersListRepository::new(Arc::clone(&engine), Arc::clone(&local));

    let users = repo.fetch_users_list(false).await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(engine.calls(), 1);

    let cached: Vec<UserDto> = local.load(USERS_LIST_CACHE_KEY).await.unwrap();
    assert_eq!(cached.iter().map(|u| u.id).collect::<Vec<_>>(), vec![4, 5]);

    // Second fetch is served from disk even with the network gone.
    engine.set_response("/users", CannedResponse::Fault("offline".to_string()));
    let again = repo.fetch_users_list(false).await.unwrap();
    assert_eq!(again, users);
    assert_eq!(engine.calls(), 1);
}

#[tokio::test]
async fn test_bundled_fixtures_serve_a_cold_start() {
    let dir = tempfile::tempdir().unwrap();
    let engine = Arc::new(FakeEngine::new());
    let repo = CachedUsersListRepository::new(
        Arc::clone(&engine),
        store(dir.path(), FixtureSource::Bundled),
    );

    let users = repo.fetch_users_list(false).await.unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[0].name.as_deref(), Some("Leanne Graham"));
    assert_eq!(engine.calls(), 0);
}

#[tokio::test]
async fn test_force_refresh_skips_cache_and_overwrites_it() {
    let dir = tempfile::tempdir().unwrap();
    let engine = Arc::new(
        FakeEngine::new()
            .with_response("/users", CannedResponse::Json(json!([user_json(9, "Fresh")]))),
    );
    let local = store(dir.path(), FixtureSource::Bundled);
    let repo = CachedUsersListRepository::new(Arc::clone(&engine), Arc::clone(&local));

    let users = repo.fetch_users_list(true).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, Some(9));

    let cached: Vec<UserDto> = local.load(USERS_LIST_CACHE_KEY).await.unwrap();
    assert_eq!(cached.len(), 1);
}

#[tokio::test]
async fn test_unwritable_cache_does_not_fail_the_fetch() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, b"x").unwrap();

    let engine = Arc::new(
        FakeEngine::new()
            .with_response("/users", CannedResponse::Json(json!([user_json(1, "Leanne")]))),
    );
    let repo = CachedUsersListRepository::new(engine, store(&blocker, FixtureSource::Disabled));

    let users = repo.fetch_users_list(true).await.unwrap();
    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn test_network_failure_without_cache_propagates() {
    let dir = tempfile::tempdir().unwrap();
    let engine = Arc::new(FakeEngine::new().with_response("/users", CannedResponse::Status(503)));
    let repo = CachedUsersListRepository::new(engine, store(dir.path(), FixtureSource::Disabled));

    let err = repo.fetch_users_list(false).await.unwrap_err();
    assert!(matches!(err, AppError::HttpError { status: 503, .. }));
}
