mod common;

use academia::academia_models::{StudentId, UserId};
use axum::http::StatusCode;
use common::{get_as, setup_test_app, users};

fn fee_payments(student: i64) -> String {
    format!("/api/rbac/students/{student}/fee-payments/access")
}

fn performance(student: i64) -> String {
    format!("/api/rbac/students/{student}/performance/access")
}

#[tokio::test]
async fn test_linked_parent_reads_fee_payments_by_ownership() {
    let test = setup_test_app().await;
    let (status, body) = get_as(&test.app, &fee_payments(102), users::PARENT).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["allowed"], true);
    assert_eq!(body["grant"], "ownership");
    assert_eq!(body["gate"], "fee_payment.read_for_student");
    assert!(body.get("reason").is_none());
}

#[tokio::test]
async fn test_unlinked_student_fee_payments_denied() {
    let test = setup_test_app().await;
    let (status, body) = get_as(&test.app, &fee_payments(103), users::PARENT).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["error"],
        "Not authorized to access this student's fee payments"
    );
}

#[tokio::test]
async fn test_parent_without_links_denied() {
    let test = setup_test_app().await;
    let (status, _) = get_as(&test.app, &fee_payments(101), users::OTHER_PARENT).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_reads_any_fee_payments_by_blanket() {
    let test = setup_test_app().await;
    let (status, body) = get_as(&test.app, &fee_payments(103), users::ADMIN).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["grant"], "blanket");
}

#[tokio::test]
async fn test_teacher_and_student_denied_fee_payments() {
    let test = setup_test_app().await;
    for user in [users::TEACHER, users::STUDENT] {
        let (status, body) = get_as(&test.app, &fee_payments(101), user).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "Not authorized to access fee payments");
    }
}

#[tokio::test]
async fn test_removed_link_takes_effect_on_next_request() {
    let test = setup_test_app().await;

    let (status, _) = get_as(&test.app, &fee_payments(101), users::PARENT).await;
    assert_eq!(status, StatusCode::OK);

    test.store
        .remove_parent_link(UserId::new(users::PARENT), StudentId::new(101))
        .await;

    let (status, _) = get_as(&test.app, &fee_payments(101), users::PARENT).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = get_as(&test.app, &fee_payments(102), users::PARENT).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_student_performance_access() {
    let test = setup_test_app().await;

    let (status, body) = get_as(&test.app, &performance(103), users::TEACHER).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["grant"], "blanket");

    let (status, body) = get_as(&test.app, &performance(101), users::PARENT).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["grant"], "ownership");

    let (status, body) = get_as(&test.app, &performance(103), users::STUDENT).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["error"],
        "Not authorized to access this student's performance data"
    );
}

#[tokio::test]
async fn test_financial_summary_is_admin_only() {
    let test = setup_test_app().await;

    let (status, body) = get_as(&test.app, "/api/rbac/reports/financial-summary/access", users::ADMIN).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["grant"], "blanket");

    let (status, body) =
        get_as(&test.app, "/api/rbac/reports/financial-summary/access", users::TEACHER).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Not authorized to access financial summary");
}

#[tokio::test]
async fn test_parent_links_visible_to_admin_and_owner() {
    let test = setup_test_app().await;
    let uri = format!("/api/rbac/users/{}/parent-links", users::PARENT);

    let (status, body) = get_as(&test.app, &uri, users::ADMIN).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = get_as(&test.app, &uri, users::PARENT).await;
    assert_eq!(status, StatusCode::OK);
    let students: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|link| link["student_id"].as_i64().unwrap())
        .collect();
    assert_eq!(students, vec![101, 102]);
}

#[tokio::test]
async fn test_parent_links_of_another_user_denied() {
    let test = setup_test_app().await;
    let uri = format!("/api/rbac/users/{}/parent-links", users::PARENT);

    for user in [users::OTHER_PARENT, users::TEACHER] {
        let (status, body) = get_as(&test.app, &uri, user).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "Not authorized to access these parent relationships");
    }
}

#[tokio::test]
async fn test_missing_user_is_not_found_before_authorization() {
    let test = setup_test_app().await;

    // Not found wins even for a caller who would be denied
    for user in [users::ADMIN, users::STUDENT] {
        let (status, body) = get_as(&test.app, "/api/rbac/users/999/parent-links", user).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User not found");
    }
}
