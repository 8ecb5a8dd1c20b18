use crate::logging::logging_middleware;
use crate::modules::authorization::controller::health;
use crate::modules::authorization::router::init_rbac_router;
use crate::state::AppState;
use axum::{Router, middleware, routing::get};

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", Router::new().nest("/rbac", init_rbac_router()))
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
}
