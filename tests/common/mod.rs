#![allow(dead_code)]

use std::sync::Arc;

use academia::academia_auth::create_access_token;
use academia::academia_config::JwtConfig;
use academia::academia_core::Role;
use academia::academia_db::InMemoryStore;
use academia::academia_models::{ParentLink, ParentLinkId, StudentId, UserId, UserRecord};
use academia::academia_rbac::RolePermissionMap;
use academia::router::init_router;
use academia::state::AppState;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Well-known user ids seeded into every test store.
pub mod users {
    pub const ADMIN: i64 = 1;
    pub const TEACHER: i64 = 2;
    pub const STUDENT: i64 = 3;
    /// Linked to students 101 and 102.
    pub const PARENT: i64 = 7;
    /// A parent with no links.
    pub const OTHER_PARENT: i64 = 8;
    pub const INACTIVE_TEACHER: i64 = 9;
    /// Stored with the role string "finance", which is outside the registry.
    pub const FINANCE: i64 = 10;
}

pub struct TestApp {
    pub app: Router,
    pub store: InMemoryStore,
    pub state: AppState,
}

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret".to_string(),
        access_token_expiry: 3600,
    }
}

fn record(id: i64, role: &str, is_active: bool) -> UserRecord {
    UserRecord {
        id: UserId::new(id),
        email: format!("{role}{id}@example.com"),
        role: role.to_string(),
        is_active,
    }
}

pub async fn seeded_store() -> InMemoryStore {
    let store = InMemoryStore::new();
    store.insert_user(record(users::ADMIN, "admin", true)).await;
    store.insert_user(record(users::TEACHER, "teacher", true)).await;
    store.insert_user(record(users::STUDENT, "student", true)).await;
    store.insert_user(record(users::PARENT, "parent", true)).await;
    store.insert_user(record(users::OTHER_PARENT, "parent", true)).await;
    store
        .insert_user(record(users::INACTIVE_TEACHER, "teacher", false))
        .await;
    store.insert_user(record(users::FINANCE, "finance", true)).await;

    store
        .insert_parent_link(ParentLink::new(
            ParentLinkId::new(1),
            UserId::new(users::PARENT),
            StudentId::new(101),
        ))
        .await;
    store
        .insert_parent_link(
            ParentLink::new(
                ParentLinkId::new(2),
                UserId::new(users::PARENT),
                StudentId::new(102),
            )
            .with_relationship("mother"),
        )
        .await;
    store
}

pub fn state_with(store: InMemoryStore, table: RolePermissionMap) -> AppState {
    AppState::new(Arc::new(store), table, jwt_config())
}

pub async fn setup_test_app() -> TestApp {
    setup_test_app_with_table(RolePermissionMap::builtin()).await
}

pub async fn setup_test_app_with_table(table: RolePermissionMap) -> TestApp {
    let store = seeded_store().await;
    let state = state_with(store.clone(), table);
    TestApp {
        app: init_router(state.clone()),
        store,
        state,
    }
}

/// A valid token for `id`. The role claim is informational; the stored
/// record decides.
pub fn token_for(id: i64) -> String {
    create_access_token(
        UserId::new(id),
        &format!("user{id}@example.com"),
        Role::Student,
        &jwt_config(),
    )
    .unwrap()
}

pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn get_as(app: &Router, uri: &str, user: i64) -> (StatusCode, Value) {
    let token = token_for(user);
    get(app, uri, Some(&token)).await
}
