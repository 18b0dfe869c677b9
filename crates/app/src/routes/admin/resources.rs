use dioxus::prelude::*;
use shared_types::paging::{page_count, page_slice};
use shared_types::{CreateResourceRequest, Resource};
use shared_ui::{
    use_toast, Button, ButtonVariant, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, Input, Pagination, Separator,
};

use client::ApiClient;

use crate::store::Collection;

/// Resources section: create form plus the paged resource table.
/// Resources have no relationships, so this is plain CRUD.
#[component]
pub fn ResourcesSection(resources: Signal<Collection<Resource>>) -> Element {
    let api = use_context::<ApiClient>();
    let toast = use_toast();

    let page = use_signal(|| 1usize);
    let deleting = use_signal(|| Option::<String>::None);

    let mut form_title = use_signal(String::new);
    let mut form_link = use_signal(String::new);
    let mut create_in_flight = use_signal(|| false);

    let visible: Vec<Resource> = page_slice(resources.read().items(), page()).to_vec();
    let total_pages = page_count(resources.read().len());

    let handle_add_resource = {
        let api = api.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if *create_in_flight.read() {
                return;
            }
            let api = api.clone();
            spawn(async move {
                create_in_flight.set(true);
                let req = CreateResourceRequest {
                    title: form_title.read().trim().to_string(),
                    link: form_link.read().trim().to_string(),
                };
                match api.create_resource(&req).await {
                    Ok(created) => {
                        resources.write().append(created);
                        form_title.set(String::new());
                        form_link.set(String::new());
                        toast.success("Resource created".to_string());
                    }
                    Err(err) => {
                        tracing::error!(%err, "resource creation failed");
                        toast.error(err.friendly_message());
                    }
                }
                create_in_flight.set(false);
            });
        }
    };

    rsx! {
        section { class: "admin-section admin-section-wide",
            h2 { class: "admin-section-title", "Resources" }

            form { class: "admin-form", onsubmit: handle_add_resource,
                h3 { class: "admin-form-title", "Add Resource" }
                Input {
                    placeholder: "Resource Title",
                    required: true,
                    value: form_title(),
                    on_input: move |e: FormEvent| form_title.set(e.value()),
                }
                Input {
                    placeholder: "Resource Link",
                    required: true,
                    value: form_link(),
                    on_input: move |e: FormEvent| form_link.set(e.value()),
                }
                button {
                    r#type: "submit",
                    class: "button admin-submit",
                    disabled: create_in_flight(),
                    if create_in_flight() { "Adding..." } else { "Add Resource" }
                }
            }

            Separator {}

            DataTable {
                DataTableHeader {
                    DataTableColumn { "Title" }
                    DataTableColumn { "Link" }
                    DataTableColumn { "Actions" }
                }
                DataTableBody {
                    for resource in visible.iter() {
                        ResourceRow {
                            key: "{resource.id}",
                            resource: resource.clone(),
                            resources,
                            deleting,
                        }
                    }
                }
            }
            if resources.read().is_empty() {
                div { class: "admin-empty", "No resources yet." }
            }
            Pagination { page, total_pages }
        }
    }
}

#[component]
fn ResourceRow(
    resource: Resource,
    resources: Signal<Collection<Resource>>,
    deleting: Signal<Option<String>>,
) -> Element {
    let api = use_context::<ApiClient>();
    let toast = use_toast();

    let id = resource.id.clone();
    let is_deleting = deleting.read().as_deref() == Some(id.as_str());

    rsx! {
        DataTableRow {
            DataTableCell { "{resource.title}" }
            DataTableCell {
                a { href: resource.link.clone(), target: "_blank", "Open" }
            }
            DataTableCell {
                Button {
                    variant: ButtonVariant::Destructive,
                    disabled: is_deleting,
                    onclick: move |_| {
                        let api = api.clone();
                        let id = id.clone();
                        spawn(async move {
                            deleting.set(Some(id.clone()));
                            match api.delete_resource(&id).await {
                                Ok(()) => {
                                    resources.write().remove_by_id(&id);
                                    toast.success("Resource deleted".to_string());
                                }
                                Err(err) => {
                                    tracing::error!(%err, "resource delete failed");
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
