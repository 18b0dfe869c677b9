use dioxus::prelude::*;
use shared_types::paging::{page_count, page_slice};
use shared_types::{CreateGroupRequest, Group, User};
use shared_ui::{
    use_toast, Button, ButtonVariant, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, FormSelect, Input, Pagination, Separator,
};

use client::ApiClient;

use super::classes::UserChecklist;
use crate::store::Collection;

/// Groups section: create form, bulk membership assignment, and the paged
/// group table.
#[component]
pub fn GroupsSection(
    groups: Signal<Collection<Group>>,
    users: Signal<Collection<User>>,
) -> Element {
    let api = use_context::<ApiClient>();
    let toast = use_toast();

    let page = use_signal(|| 1usize);
    let deleting = use_signal(|| Option::<String>::None);

    let mut form_name = use_signal(String::new);
    let mut create_in_flight = use_signal(|| false);

    // Bulk-assignment form state; selection survives a failed submit.
    let mut assign_group = use_signal(String::new);
    let selected: Signal<Vec<String>> = use_signal(Vec::new);
    let mut assign_in_flight = use_signal(|| false);

    let visible: Vec<Group> = page_slice(groups.read().items(), page()).to_vec();
    let total_pages = page_count(groups.read().len());
    let all_groups: Vec<Group> = groups.read().items().to_vec();
    let all_users: Vec<User> = users.read().items().to_vec();

    let handle_add_group = {
        let api = api.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if *create_in_flight.read() {
                return;
            }
            let api = api.clone();
            spawn(async move {
                create_in_flight.set(true);
                let req = CreateGroupRequest {
                    name: form_name.read().trim().to_string(),
                };
                match api.create_group(&req).await {
                    Ok(created) => {
                        groups.write().append(created);
                        form_name.set(String::new());
                        toast.success("Group created".to_string());
                    }
                    Err(err) => {
                        tracing::error!(%err, "group creation failed");
                        toast.error(err.friendly_message());
                    }
                }
                create_in_flight.set(false);
            });
        }
    };

    let handle_assign_users = {
        let api = api.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if *assign_in_flight.read() {
                return;
            }
            let group_id = assign_group.read().clone();
            let user_ids = selected.read().clone();
            if group_id.is_empty() {
                toast.error("Select a group first.".to_string());
                return;
            }
            if user_ids.is_empty() {
                toast.error("Select at least one user.".to_string());
                return;
            }
            let api = api.clone();
            spawn(async move {
                assign_in_flight.set(true);
                match api.assign_users_to_group(&group_id, user_ids).await {
                    Ok(()) => {
                        toast.success("Users assigned to group".to_string());
                        assign_group.set(String::new());
                        let mut selected = selected;
                        selected.set(Vec::new());
                        super::load_groups(api.clone(), groups, toast).await;
                    }
                    Err(err) => {
                        tracing::error!(%err, "bulk group assignment failed");
                        toast.error(err.friendly_message());
                    }
                }
                assign_in_flight.set(false);
            });
        }
    };

    rsx! {
        section { class: "admin-section admin-section-wide",
            h2 { class: "admin-section-title", "Groups" }

            form { class: "admin-form", onsubmit: handle_add_group,
                h3 { class: "admin-form-title", "Add Group" }
                Input {
                    placeholder: "Group Name",
                    required: true,
                    value: form_name(),
                    on_input: move |e: FormEvent| form_name.set(e.value()),
                }
                button {
                    r#type: "submit",
                    class: "button admin-submit",
                    disabled: create_in_flight(),
                    if create_in_flight() { "Adding..." } else { "Add Group" }
                }
            }

            Separator {}

            form { class: "admin-form", onsubmit: handle_assign_users,
                h3 { class: "admin-form-title", "Assign Users to Group" }
                FormSelect {
                    value: assign_group(),
                    required: true,
                    onchange: move |e: FormEvent| assign_group.set(e.value()),
                    option { value: "", "Select Group" }
                    for group in all_groups.iter() {
                        option { value: "{group.id}", "{group.name}" }
                    }
                }
                UserChecklist { users: all_users.clone(), selected }
                button {
                    r#type: "submit",
                    class: "button admin-submit",
                    disabled: assign_in_flight(),
                    if assign_in_flight() { "Assigning..." } else { "Assign Users to Group" }
                }
            }

            Separator {}

            DataTable {
                DataTableHeader {
                    DataTableColumn { "Group Name" }
                    DataTableColumn { "Members" }
                    DataTableColumn { "Actions" }
                }
                DataTableBody {
                    for group in visible.iter() {
                        GroupRow {
                            key: "{group.id}",
                            group: group.clone(),
                            groups,
                            deleting,
                        }
                    }
                }
            }
            if groups.read().is_empty() {
                div { class: "admin-empty", "No groups yet." }
            }
            Pagination { page, total_pages }
        }
    }
}

#[component]
fn GroupRow(
    group: Group,
    groups: Signal<Collection<Group>>,
    deleting: Signal<Option<String>>,
) -> Element {
    let api = use_context::<ApiClient>();
    let toast = use_toast();

    let id = group.id.clone();
    let is_deleting = deleting.read().as_deref() == Some(id.as_str());
    let member_names = if group.users.is_empty() {
        "No members".to_string()
    } else {
        group
            .users
            .iter()
            .map(|u| u.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    rsx! {
        DataTableRow {
            DataTableCell { "{group.name}" }
            DataTableCell { "{member_names}" }
            DataTableCell {
                Button {
                    variant: ButtonVariant::Destructive,
                    disabled: is_deleting,
                    onclick: move |_| {
                        let api = api.clone();
                        let id = id.clone();
                        spawn(async move {
                            deleting.set(Some(id.clone()));
                            match api.delete_group(&id).await {
                                Ok(()) => {
                                    groups.write().remove_by_id(&id);
                                    toast.success("Group deleted".to_string());
                                }
                                Err(err) => {
                                    tracing::error!(%err, "group delete failed");
                                    toast.error(err.friendly_message());
                                }
                            }
                            deleting.set(None);
                        });
                    },
                    "Delete"
                }
            }
        }
    }
}
