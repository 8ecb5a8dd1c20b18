use crate::modules::authorization::controller::{
    check_all, check_any, check_single_permission, financial_summary_access, get_gates, get_me,
    get_role_table, get_user_parent_links, student_fee_payments_access,
    student_performance_access,
};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_rbac_router() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_me))
        .route("/roles", get(get_role_table))
        .route("/gates", get(get_gates))
        .route("/permissions/any", get(check_any))
        .route("/permissions/all", get(check_all))
        .route("/permissions/{permission}", get(check_single_permission))
        .route("/users/{user_id}/parent-links", get(get_user_parent_links))
        .route(
            "/students/{student_id}/fee-payments/access",
            get(student_fee_payments_access),
        )
        .route(
            "/students/{student_id}/performance/access",
            get(student_performance_access),
        )
        .route(
            "/reports/financial-summary/access",
            get(financial_summary_access),
        )
}
