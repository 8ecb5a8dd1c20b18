//! Resource-level authorization for handlers.
//!
//! Handlers fetch the target resource first, then pass it here. A missing
//! resource is reported as 404 before any ownership question is asked, so a
//! denial always refers to something that exists.

use academia_core::{AppError, Role};
use academia_models::ParentLink;
use academia_rbac::{AuthorizationGate, Grant, OwnershipResolver, RoleGate};

use crate::middleware::auth::CurrentUser;
use crate::state::AppState;

/// Parent links of the current user, fetched only when guardianship can apply.
pub async fn load_parent_links(
    state: &AppState,
    user: &CurrentUser,
) -> Result<Vec<ParentLink>, AppError> {
    if user.role() != Role::Parent {
        return Ok(Vec::new());
    }
    state
        .store
        .parent_links_for_user(user.id())
        .await
        .map_err(AppError::internal)
}

/// Fetch, then 404, then gate, then 403.
///
/// # Example
///
/// ```rust,ignore
/// let notification = NotificationService::find(&state.db, id).await?;
/// let (notification, _) = authorize(
///     &state,
///     &user,
///     &communication::READ_NOTIFICATION,
///     notification,
///     "Notification not found",
/// )
/// .await?;
/// ```
pub async fn authorize<R>(
    state: &AppState,
    user: &CurrentUser,
    gate: &AuthorizationGate<R>,
    resource: Option<R>,
    not_found: &str,
) -> Result<(R, Grant), AppError> {
    let resource = resource.ok_or_else(|| AppError::not_found(not_found))?;

    let links = load_parent_links(state, user).await?;
    let resolver = OwnershipResolver::new(&links);

    let grant = gate
        .authorize(&user.principal, &resource, &resolver)
        .map_err(|denied| AppError::forbidden(denied.reason))?;

    Ok((resource, grant))
}

/// Gate an operation that has no target resource.
pub fn authorize_role(user: &CurrentUser, gate: &RoleGate) -> Result<Grant, AppError> {
    gate.require(&user.principal)
        .map_err(|denied| AppError::forbidden(denied.reason))
}
