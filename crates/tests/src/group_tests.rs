use pretty_assertions::assert_eq;
use shared_types::CreateGroupRequest;

use crate::common;

#[tokio::test]
async fn create_list_delete_roundtrip() {
    let (api, _state) = common::test_client().await;

    let created = api
        .create_group(&CreateGroupRequest {
            name: "Batch A".into(),
        })
        .await
        .unwrap();
    assert!(!created.id.is_empty());
    assert!(created.users.is_empty());

    let groups = api.list_groups().await.unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "Batch A");

    api.delete_group(&created.id).await.unwrap();
    assert!(api.list_groups().await.unwrap().is_empty());
}

#[tokio::test]
async fn bulk_membership_is_visible_after_refetch() {
    let (api, state) = common::test_client().await;
    let id_a = common::seed_user(&state, "A", "a@eduhub.test", "STUDENT");
    let id_b = common::seed_user(&state, "B", "b@eduhub.test", "STUDENT");
    let group = api
        .create_group(&CreateGroupRequest {
            name: "Batch A".into(),
        })
        .await
        .unwrap();

    api.assign_users_to_group(&group.id, vec![id_a.clone(), id_b.clone()])
        .await
        .unwrap();

    let groups = api.list_groups().await.unwrap();
    let members: Vec<&str> = groups[0].users.iter().map(|u| u.key()).collect();
    assert_eq!(members, [id_a.as_str(), id_b.as_str()]);
}
