use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use client::ApiClient;

use crate::common;

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    // Bind and immediately drop a listener so the port is known-closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = ApiClient::new(format!("http://{addr}"));
    let err = api.list_users().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Network);
}

#[tokio::test]
async fn non_2xx_maps_to_server_with_the_backend_message() {
    let (api, _state) = common::test_client().await;

    let err = api.delete_user("missing").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Server);
    assert_eq!(err.message, "User not found");
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let (api, state) = common::test_client().await;
    state.lock().unwrap().broken = true;

    let err = api.list_users().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Decode);

    let err = api.list_classes().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Decode);
}

#[tokio::test]
async fn decode_failure_never_panics_and_reports_the_path() {
    let (api, state) = common::test_client().await;
    state.lock().unwrap().broken = true;

    let err = api.list_groups().await.unwrap_err();
    assert!(err.message.contains("/api/admin/groups"));
}
