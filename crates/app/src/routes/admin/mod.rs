pub mod classes;
pub mod groups;
pub mod resources;
pub mod users;

use dioxus::prelude::*;
use shared_types::{Class, Group, Resource, User};
use shared_ui::{use_toast, Toasts};

use client::ApiClient;

use crate::store::Collection;

/// Administrator dashboard: four independent entity sections, each backed
/// by its own collection mirror. All four collections start loading in
/// parallel on mount; a section that fails to load keeps its previous
/// (empty) state and reports the failure as a toast.
#[component]
pub fn AdminDashboard() -> Element {
    let api = use_context::<ApiClient>();
    let toast = use_toast();

    let users = use_signal(Collection::<User>::new);
    let classes = use_signal(Collection::<Class>::new);
    let resources = use_signal(Collection::<Resource>::new);
    let groups = use_signal(Collection::<Group>::new);

    use_hook(|| {
        spawn(load_users(api.clone(), users, toast));
        spawn(load_classes(api.clone(), classes, toast));
        spawn(load_resources(api.clone(), resources, toast));
        spawn(load_groups(api.clone(), groups, toast));
    });

    rsx! {
        div { class: "admin-page",
            h1 { class: "admin-title", "EduHub Admin Dashboard" }
            div { class: "admin-grid",
                users::UsersSection { users }
                classes::ClassesSection { classes, users, groups }
                resources::ResourcesSection { resources }
                groups::GroupsSection { groups, users }
            }
        }
    }
}

// Collection loaders, shared between the on-mount fetches and the
// refresh-after-assignment policy. A failed load leaves the mirror as it
// was.

pub(crate) async fn load_users(api: ApiClient, mut store: Signal<Collection<User>>, toast: Toasts) {
    match api.list_users().await {
        Ok(records) => store.write().replace(records),
        Err(err) => {
            tracing::error!(%err, "failed to load users");
            toast.error(format!("Could not load users: {}", err.friendly_message()));
        }
    }
}

pub(crate) async fn load_classes(
    api: ApiClient,
    mut store: Signal<Collection<Class>>,
    toast: Toasts,
) {
    match api.list_classes().await {
        Ok(records) => store.write().replace(records),
        Err(err) => {
            tracing::error!(%err, "failed to load classes");
            toast.error(format!("Could not load classes: {}", err.friendly_message()));
        }
    }
}

pub(crate) async fn load_resources(
    api: ApiClient,
    mut store: Signal<Collection<Resource>>,
    toast: Toasts,
) {
    match api.list_resources().await {
        Ok(records) => store.write().replace(records),
        Err(err) => {
            tracing::error!(%err, "failed to load resources");
            toast.error(format!(
                "Could not load resources: {}",
                err.friendly_message()
            ));
        }
    }
}

pub(crate) async fn load_groups(
    api: ApiClient,
    mut store: Signal<Collection<Group>>,
    toast: Toasts,
) {
    match api.list_groups().await {
        Ok(records) => store.write().replace(records),
        Err(err) => {
            tracing::error!(%err, "failed to load groups");
            toast.error(format!("Could not load groups: {}", err.friendly_message()));
        }
    }
}
