use academia_core::AppError;
use academia_models::{ParentLink, StudentId, UserId};
use academia_rbac::policies::{self, analytics, finance, parents};
use academia_rbac::{GateInfo, OwnershipResolver};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::Value;
use tracing::instrument;

use crate::guards::{authorize, authorize_role, load_parent_links};
use crate::middleware::auth::CurrentUser;
use crate::middleware::permission::{check_all_permissions, check_any_permission, check_permission};
use crate::middleware::role::{RequireAdmin, RequireTeacherOrAdmin};
use crate::modules::authorization::model::{
    AccessResponse, HealthResponse, MeResponse, PermissionCheckResponse, PermissionNamesQuery,
};
use crate::state::AppState;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Effective permissions and capabilities of the current user
#[instrument(skip(state, user), fields(user_id = %user.id()))]
pub async fn get_me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<MeResponse>, AppError> {
    let evaluator = state.evaluator();
    let role = user.role();

    let links = load_parent_links(&state, &user).await?;
    let linked_students = OwnershipResolver::new(&links)
        .linked_students(&user.principal)
        .into_iter()
        .collect();

    Ok(Json(MeResponse {
        user_id: user.id(),
        email: user.email().to_string(),
        role,
        permissions: evaluator.permissions_for(role).iter().copied().collect(),
        capabilities: evaluator.capabilities(role).into_iter().collect(),
        linked_students,
    }))
}

/// The role table in effect (admin only)
pub async fn get_role_table(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Json<Value> {
    Json(state.role_table.to_json())
}

/// Every named gate (admins and teachers)
pub async fn get_gates(_staff: RequireTeacherOrAdmin) -> Json<Vec<GateInfo>> {
    Json(policies::catalog())
}

pub async fn check_single_permission(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(permission): Path<String>,
) -> Result<Json<PermissionCheckResponse>, AppError> {
    check_permission(&state, &user, &permission)?;
    Ok(Json(PermissionCheckResponse {
        permissions: vec![permission],
        granted: true,
    }))
}

pub async fn check_any(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<PermissionNamesQuery>,
) -> Result<Json<PermissionCheckResponse>, AppError> {
    let names = query.names();
    check_any_permission(&state, &user, &names)?;
    Ok(Json(PermissionCheckResponse {
        permissions: names.into_iter().map(String::from).collect(),
        granted: true,
    }))
}

pub async fn check_all(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<PermissionNamesQuery>,
) -> Result<Json<PermissionCheckResponse>, AppError> {
    let names = query.names();
    check_all_permissions(&state, &user, &names)?;
    Ok(Json(PermissionCheckResponse {
        permissions: names.into_iter().map(String::from).collect(),
        granted: true,
    }))
}

/// Parent links of a user: admins, or the user themselves
#[instrument(skip(state, user), fields(caller = %user.id()))]
pub async fn get_user_parent_links(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(user_id): Path<UserId>,
) -> Result<Json<Vec<ParentLink>>, AppError> {
    let target = state
        .store
        .find_user(user_id)
        .await
        .map_err(AppError::internal)?
        .map(|record| record.id);

    let (target, _) = authorize(
        &state,
        &user,
        &parents::READ_USER_PARENT_LINKS,
        target,
        "User not found",
    )
    .await?;

    let links = state
        .store
        .parent_links_for_user(target)
        .await
        .map_err(AppError::internal)?;
    Ok(Json(links))
}

#[instrument(skip(state, user), fields(caller = %user.id()))]
pub async fn student_fee_payments_access(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(student_id): Path<StudentId>,
) -> Result<Json<AccessResponse>, AppError> {
    let links = load_parent_links(&state, &user).await?;
    let grant = finance::authorize_student_fee_payments(
        &user.principal,
        student_id,
        &OwnershipResolver::new(&links),
    )
    .map_err(|denied| AppError::forbidden(denied.reason))?;
    Ok(Json(AccessResponse::new(
        finance::STUDENT_FEE_PAYMENTS.name(),
        grant,
    )))
}

#[instrument(skip(state, user), fields(caller = %user.id()))]
pub async fn student_performance_access(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(student_id): Path<StudentId>,
) -> Result<Json<AccessResponse>, AppError> {
    let gate = &analytics::STUDENT_PERFORMANCE;
    let (_, grant) = authorize(&state, &user, gate, Some(student_id), "Student not found").await?;
    Ok(Json(AccessResponse::new(gate.name(), grant)))
}

pub async fn financial_summary_access(
    user: CurrentUser,
) -> Result<Json<AccessResponse>, AppError> {
    let gate = &analytics::FINANCIAL_SUMMARY;
    let grant = authorize_role(&user, gate)?;
    Ok(Json(AccessResponse::new(gate.name(), grant)))
}
