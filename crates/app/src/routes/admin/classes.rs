use dioxus::prelude::*;
use shared_types::paging::{page_count, page_slice};
use shared_types::{Class, CreateClassRequest, Group, User};
use shared_ui::{
    use_toast, Button, ButtonVariant, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, FormSelect, Input, Pagination, Separator,
};

use client::ApiClient;

use crate::store::Collection;

/// Classes section: create form, bulk user assignment, and the paged
/// class table with per-row single assignment and delete.
#[component]
pub fn ClassesSection(
    classes: Signal<Collection<Class>>,
    users: Signal<Collection<User>>,
    groups: Signal<Collection<Group>>,
) -> Element {
    let api = use_context::<ApiClient>();
    let toast = use_toast();

    let page = use_signal(|| 1usize);

    // Create-class form state.
    let mut form_title = use_signal(String::new);
    let mut form_date = use_signal(String::new);
    let mut form_time = use_signal(String::new);
    let mut form_link = use_signal(String::new);
    let mut form_group = use_signal(String::new);
    let mut create_in_flight = use_signal(|| false);

    // Bulk-assignment form state. The selection is cleared only after the
    // server confirms, so a failed submit can be retried as-is.
    let mut assign_class = use_signal(String::new);
    let selected: Signal<Vec<String>> = use_signal(Vec::new);
    let mut assign_in_flight = use_signal(|| false);

    let visible: Vec<Class> = page_slice(classes.read().items(), page()).to_vec();
    let total_pages = page_count(classes.read().len());
    let all_classes: Vec<Class> = classes.read().items().to_vec();
    let all_users: Vec<User> = users.read().items().to_vec();
    let all_groups: Vec<Group> = groups.read().items().to_vec();

    let handle_add_class = {
        let api = api.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if *create_in_flight.read() {
                return;
            }
            let api = api.clone();
            spawn(async move {
                create_in_flight.set(true);
                let req = CreateClassRequest {
                    title: form_title.read().trim().to_string(),
                    date: form_date.read().clone(),
                    time: form_time.read().clone(),
                    link: form_link.read().trim().to_string(),
                    group_id: opt_string(&form_group.read()),
                };
                match api.create_class(&req).await {
                    Ok(created) => {
                        classes.write().append(created);
                        form_title.set(String::new());
                        form_date.set(String::new());
                        form_time.set(String::new());
                        form_link.set(String::new());
                        form_group.set(String::new());
                        toast.success("Class created".to_string());
                    }
                    Err(err) => {
                        // Form stays populated for a retry.
                        tracing::error!(%err, "class creation failed");
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
            let class_id = assign_class.read().clone();
            let user_ids = selected.read().clone();
            if class_id.is_empty() {
                toast.error("Select a class first.".to_string());
                return;
            }
            if user_ids.is_empty() {
                toast.error("Select at least one user.".to_string());
                return;
            }
            let api = api.clone();
            spawn(async move {
                assign_in_flight.set(true);
                match api.assign_users_to_class(&class_id, user_ids).await {
                    Ok(()) => {
                        toast.success("Users assigned to class".to_string());
                        assign_class.set(String::new());
                        let mut selected = selected;
                        selected.set(Vec::new());
                        // Membership is derived server-side; re-fetch.
                        super::load_classes(api.clone(), classes, toast).await;
                    }
                    Err(err) => {
                        tracing::error!(%err, "bulk class assignment failed");
                        toast.error(err.friendly_message());
                    }
                }
                assign_in_flight.set(false);
            });
        }
    };

    rsx! {
        section { class: "admin-section",
            h2 { class: "admin-section-title", "Live Classes" }

            form { class: "admin-form", onsubmit: handle_add_class,
                h3 { class: "admin-form-title", "Add Class" }
                Input {
                    placeholder: "Class Title",
                    required: true,
                    value: form_title(),
                    on_input: move |e: FormEvent| form_title.set(e.value()),
                }
                Input {
                    input_type: "date",
                    required: true,
                    value: form_date(),
                    on_input: move |e: FormEvent| form_date.set(e.value()),
                }
                Input {
                    input_type: "time",
                    required: true,
                    value: form_time(),
                    on_input: move |e: FormEvent| form_time.set(e.value()),
                }
                Input {
                    placeholder: "Meeting Link",
                    value: form_link(),
                    on_input: move |e: FormEvent| form_link.set(e.value()),
                }
                FormSelect {
                    value: form_group(),
                    onchange: move |e: FormEvent| form_group.set(e.value()),
                    option { value: "", "Select Group (optional)" }
                    for group in all_groups.iter() {
                        option { value: "{group.id}", "{group.name}" }
                    }
                }
                button {
                    r#type: "submit",
                    class: "button admin-submit",
                    disabled: create_in_flight(),
                    if create_in_flight() { "Adding..." } else { "Add Class" }
                }
            }

            Separator {}

            form { class: "admin-form", onsubmit: handle_assign_users,
                h3 { class: "admin-form-title", "Assign Users to Class" }
                FormSelect {
                    value: assign_class(),
                    required: true,
                    onchange: move |e: FormEvent| assign_class.set(e.value()),
                    option { value: "", "Select Class" }
                    for class in all_classes.iter() {
                        option { value: "{class.id}", "{class.title}" }
                    }
                }
                UserChecklist { users: all_users.clone(), selected }
                button {
                    r#type: "submit",
                    class: "button admin-submit",
                    disabled: assign_in_flight(),
                    if assign_in_flight() { "Assigning..." } else { "Assign Users to Class" }
                }
            }

            Separator {}

            DataTable {
                DataTableHeader {
                    DataTableColumn { "Title" }
                    DataTableColumn { "Date" }
                    DataTableColumn { "Time" }
                    DataTableColumn { "Group" }
                    DataTableColumn { "Users" }
                    DataTableColumn { "Link" }
                    DataTableColumn { "Actions" }
                }
                DataTableBody {
                    for class in visible.iter() {
                        ClassRow {
                            key: "{class.id}",
                            classroom: class.clone(),
                            classes,
                            users,
                        }
                    }
                }
            }
            if classes.read().is_empty() {
                div { class: "admin-empty", "No classes scheduled." }
            }
            Pagination { page, total_pages }
        }
    }
}

/// Checkbox list over all users, mirroring the selection into `selected`
/// by user key. Shared with the groups section.
#[component]
pub(crate) fn UserChecklist(users: Vec<User>, selected: Signal<Vec<String>>) -> Element {
    rsx! {
        ul { class: "user-checklist",
            for user in users.iter() {
                {
                    let key = user.key().to_string();
                    let is_checked = selected.read().contains(&key);
                    let toggle_key = key.clone();
                    rsx! {
                        li { key: "{key}", class: "user-checklist-item",
                            label { class: "checkbox-label",
                                input {
                                    r#type: "checkbox",
                                    checked: is_checked,
                                    onchange: move |_| {
                                        let mut selected = selected;
                                        let mut ids = selected.write();
                                        if ids.contains(&toggle_key) {
                                            ids.retain(|id| id != &toggle_key);
                                        } else {
                                            ids.push(toggle_key.clone());
                                        }
                                    },
                                }
                                span { "{user.name} ({user.email})" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ClassRow(
    classroom: Class,
    classes: Signal<Collection<Class>>,
    users: Signal<Collection<User>>,
) -> Element {
    let api = use_context::<ApiClient>();
    let toast = use_toast();

    let mut busy = use_signal(|| false);

    let class_id = classroom.id.clone();
    let group_name = classroom
        .group
        .as_ref()
        .map(|g| g.name.clone())
        .unwrap_or_else(|| "No group".to_string());
    let member_names = if classroom.users.is_empty() {
        "No users".to_string()
    } else {
        classroom
            .users
            .iter()
            .map(|u| u.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let all_users: Vec<User> = users.read().items().to_vec();

    let handle_quick_assign = {
        let api = api.clone();
        let class_id = class_id.clone();
        move |evt: FormEvent| {
            let user_id = evt.value();
            if user_id.is_empty() || *busy.read() {
                return;
            }
            let api = api.clone();
            let class_id = class_id.clone();
            spawn(async move {
                busy.set(true);
                match api.assign_user_to_class(&class_id, &user_id).await {
                    Ok(()) => {
                        toast.success("User assigned".to_string());
                        super::load_classes(api.clone(), classes, toast).await;
                    }
                    Err(err) => {
                        tracing::error!(%err, "single class assignment failed");
                        toast.error(err.friendly_message());
                    }
                }
                busy.set(false);
            });
        }
    };

    let handle_delete = {
        let api = api.clone();
        let class_id = class_id.clone();
        move |_: MouseEvent| {
            if *busy.read() {
                return;
            }
            let api = api.clone();
            let class_id = class_id.clone();
            spawn(async move {
                busy.set(true);
                match api.delete_class(&class_id).await {
                    Ok(()) => {
                        classes.write().remove_by_id(&class_id);
                        toast.success("Class deleted".to_string());
                    }
                    Err(err) => {
                        tracing::error!(%err, "class delete failed");
                        toast.error(err.friendly_message());
                    }
                }
                busy.set(false);
            });
        }
    };

    rsx! {
        DataTableRow {
            DataTableCell { "{classroom.title}" }
            DataTableCell { "{classroom.date}" }
            DataTableCell { "{classroom.time}" }
            DataTableCell { "{group_name}" }
            DataTableCell { "{member_names}" }
            DataTableCell {
                a { href: classroom.link.clone(), target: "_blank", "Join" }
            }
            DataTableCell {
                div { class: "admin-row-actions",
                    FormSelect {
                        value: "",
                        onchange: handle_quick_assign,
                        option { value: "", "Add user..." }
                        for user in all_users.iter() {
                            option { value: "{user.key()}", "{user.name}" }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        disabled: busy(),
                        onclick: handle_delete,
                        "Delete"
                    }
                }
            }
        }
    }
}

/// Empty-or-whitespace strings become `None`, everything else `Some(trimmed)`.
fn opt_string(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
