use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, CreateResourceRequest};

use crate::common;

#[tokio::test]
async fn create_list_delete_roundtrip() {
    let (api, _state) = common::test_client().await;

    let created = api
        .create_resource(&CreateResourceRequest {
            title: "Calculus Notes".into(),
            link: "https://cdn.eduhub.test/calc.pdf".into(),
        })
        .await
        .unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.title, "Calculus Notes");

    let resources = api.list_resources().await.unwrap();
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0], created);

    api.delete_resource(&created.id).await.unwrap();
    assert!(api.list_resources().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_of_unknown_resource_is_a_server_error() {
    let (api, _state) = common::test_client().await;

    let err = api.delete_resource("missing").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Server);
    assert_eq!(err.message, "Resource not found");
}
