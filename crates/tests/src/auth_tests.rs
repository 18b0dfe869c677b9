use pretty_assertions::assert_eq;
use shared_types::{LoginRequest, SignupRequest, UserRole};

use crate::common;

#[tokio::test]
async fn login_reports_role_for_redirect() {
    let (api, state) = common::test_client().await;
    common::seed_user(&state, "Admin One", "admin@eduhub.test", "ADMIN");
    common::seed_user(&state, "Student One", "student@eduhub.test", "STUDENT");

    let resp = api
        .login(&LoginRequest {
            email: "admin@eduhub.test".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.user.unwrap().role, UserRole::Admin);

    let resp = api
        .login(&LoginRequest {
            email: "student@eduhub.test".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
    assert_eq!(resp.user.unwrap().role, UserRole::Student);
}

#[tokio::test]
async fn login_tolerates_unrecognized_roles() {
    let (api, state) = common::test_client().await;
    common::seed_user(&state, "Odd Role", "odd@eduhub.test", "TEACHER");

    let resp = api
        .login(&LoginRequest {
            email: "odd@eduhub.test".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.user.unwrap().role, UserRole::Unknown);
}

#[tokio::test]
async fn failed_login_is_a_business_error_with_message() {
    let (api, state) = common::test_client().await;
    common::seed_user(&state, "Student One", "student@eduhub.test", "STUDENT");

    let resp = api
        .login(&LoginRequest {
            email: "student@eduhub.test".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap();
    assert!(!resp.is_success());
    assert_eq!(resp.message, "Invalid credentials");
    assert_eq!(resp.user, None);
}

#[tokio::test]
async fn signup_creates_account_then_rejects_duplicate() {
    let (api, state) = common::test_client().await;

    let req = SignupRequest {
        name: "New Student".into(),
        email: "new@eduhub.test".into(),
        password: "secret".into(),
        role: UserRole::Student,
        code: String::new(),
    };

    let resp = api.signup(&req).await.unwrap();
    assert!(resp.is_success());
    assert_eq!(state.lock().unwrap().users.len(), 1);

    let resp = api.signup(&req).await.unwrap();
    assert!(!resp.is_success());
    assert_eq!(resp.message, "Email already registered");
    assert_eq!(state.lock().unwrap().users.len(), 1);
}

#[tokio::test]
async fn verification_code_request_returns_a_message() {
    let (api, _state) = common::test_client().await;

    let resp = api.request_admin_code().await.unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.message, "Verification code sent");
}
