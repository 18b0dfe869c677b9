use dioxus::prelude::*;
use shared_types::paging::{page_count, page_slice};
use shared_types::{User, UserRole};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, FormSelect, Input, Pagination,
};

use client::ApiClient;

use crate::store::Collection;

fn role_badge_variant(role: UserRole) -> BadgeVariant {
    match role {
        UserRole::Admin => BadgeVariant::Destructive,
        UserRole::Student => BadgeVariant::Primary,
        UserRole::Unknown => BadgeVariant::Outline,
    }
}

/// Users section: paged table with per-row delete, plus the meeting-link
/// assignment form. There is no create path here; accounts come from
/// signup.
#[component]
pub fn UsersSection(users: Signal<Collection<User>>) -> Element {
    let api = use_context::<ApiClient>();
    let toast = use_toast();

    let page = use_signal(|| 1usize);
    let deleting = use_signal(|| Option::<String>::None);

    // Meeting-link form state.
    let mut link_user = use_signal(String::new);
    let mut link_url = use_signal(String::new);
    let mut link_in_flight = use_signal(|| false);

    let visible: Vec<User> = page_slice(users.read().items(), page()).to_vec();
    let total_pages = page_count(users.read().len());
    let all_users: Vec<User> = users.read().items().to_vec();

    let handle_assign_link = {
        let api = api.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if *link_in_flight.read() {
                return;
            }
            let target = link_user.read().clone();
            let url = link_url.read().trim().to_string();
            if target.is_empty() || url.is_empty() {
                toast.error("Select a user and enter a link.".to_string());
                return;
            }
            let api = api.clone();
            spawn(async move {
                link_in_flight.set(true);
                match api.set_meeting_link(&target, &url).await {
                    Ok(()) => {
                        toast.success("Meeting link assigned".to_string());
                        link_user.set(String::new());
                        link_url.set(String::new());
                        // Membership-style edit: re-fetch the affected collection.
                        super::load_users(api.clone(), users, toast).await;
                    }
                    Err(err) => {
                        tracing::error!(%err, "meeting link assignment failed");
                        toast.error(err.friendly_message());
                    }
                }
                link_in_flight.set(false);
            });
        }
    };

    rsx! {
        section { class: "admin-section",
            h2 { class: "admin-section-title", "Users" }

            DataTable {
                DataTableHeader {
                    DataTableColumn { "Name" }
                    DataTableColumn { "Email" }
                    DataTableColumn { "Role" }
                    DataTableColumn { "Meeting" }
                    DataTableColumn { "Actions" }
                }
                DataTableBody {
                    for user in visible.iter() {
                        UserRow { key: "{user.key()}", user: user.clone(), users, deleting }
                    }
                }
            }
            if users.read().is_empty() {
                div { class: "admin-empty", "No users yet." }
            }
            Pagination { page, total_pages }

            form { class: "admin-form", onsubmit: handle_assign_link,
                h3 { class: "admin-form-title", "Assign Meeting Link" }
                FormSelect {
                    value: link_user(),
                    required: true,
                    onchange: move |e: FormEvent| link_user.set(e.value()),
                    option { value: "", "Select User" }
                    for user in all_users.iter() {
                        option { value: "{user.key()}", "{user.name} ({user.email})" }
                    }
                }
                Input {
                    placeholder: "Meeting Link",
                    required: true,
                    value: link_url(),
                    on_input: move |e: FormEvent| link_url.set(e.value()),
                }
                button {
                    r#type: "submit",
                    class: "button admin-submit",
                    disabled: link_in_flight(),
                    if link_in_flight() { "Assigning..." } else { "Assign Link" }
                }
            }
        }
    }
}

#[component]
fn UserRow(
    user: User,
    users: Signal<Collection<User>>,
    deleting: Signal<Option<String>>,
) -> Element {
    let api = use_context::<ApiClient>();
    let toast = use_toast();

    let key = user.key().to_string();
    let is_deleting = deleting.read().as_deref() == Some(key.as_str());

    rsx! {
        DataTableRow {
            DataTableCell { "{user.name}" }
            DataTableCell { "{user.email}" }
            DataTableCell {
                Badge { variant: role_badge_variant(user.role), "{user.role.as_str()}" }
            }
            DataTableCell {
                if let Some(link) = user.meeting_link.clone() {
                    a { href: link, target: "_blank", "Open" }
                } else {
                    "\u{2014}"
                }
            }
            DataTableCell {
                Button {
                    variant: ButtonVariant::Destructive,
                    disabled: is_deleting,
                    onclick: move |_| {
                        let api = api.clone();
                        let key = key.clone();
                        spawn(async move {
                            deleting.set(Some(key.clone()));
                            match api.delete_user(&key).await {
                                Ok(()) => {
                                    users.write().remove_by_id(&key);
                                    toast.success("User deleted".to_string());
                                }
                                Err(err) => {
                                    tracing::error!(%err, "user delete failed");
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
