use dioxus::prelude::*;
use shared_types::{Class, Resource};
use shared_ui::Skeleton;

use client::ApiClient;

use crate::auth::use_auth;

/// Student dashboard: sidebar, welcome header, classroom cards fetched
/// from the backend, built-in study resources, and quick actions.
#[component]
pub fn StudentDashboard() -> Element {
    let api = use_context::<ApiClient>();
    let auth = use_auth();

    let classrooms = use_resource(move || {
        let api = api.clone();
        async move { api.list_classes().await }
    });

    let username = auth.display_name();
    let resources = builtin_resources();

    rsx! {
        div { class: "student-page",
            Sidebar {}
            div { class: "student-main",
                Header { username }
                div { class: "student-card-grid",
                    match &*classrooms.read() {
                        Some(Ok(classes)) => rsx! {
                            for class in classes.iter() {
                                ClassroomCard { key: "{class.id}", classroom: class.clone() }
                            }
                        },
                        Some(Err(err)) => rsx! {
                            div { class: "student-empty",
                                "Could not load classes: {err.friendly_message()}"
                            }
                        },
                        None => rsx! {
                            Skeleton {}
                            Skeleton {}
                            Skeleton {}
                        },
                    }
                    for resource in resources.iter() {
                        ResourceCard { key: "{resource.id}", resource: resource.clone() }
                    }
                }
                QuickActions {}
            }
        }
    }
}

/// Starter resources shown alongside the fetched classrooms.
fn builtin_resources() -> Vec<Resource> {
    vec![
        Resource {
            id: "builtin-1".into(),
            title: "Calculus Notes".into(),
            link: "#".into(),
        },
        Resource {
            id: "builtin-2".into(),
            title: "Physics Lecture".into(),
            link: "#".into(),
        },
    ]
}

#[component]
fn Header(username: String) -> Element {
    rsx! {
        div { class: "student-header",
            h2 { "Welcome, {username}" }
            div { class: "student-header-meta",
                span { "\u{1f514}" }
                div { class: "student-avatar", {username.chars().take(2).collect::<String>().to_uppercase()} }
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        div { class: "student-sidebar",
            h1 { class: "student-sidebar-title", "Student Dashboard" }
            nav { class: "student-sidebar-nav",
                a { href: "#", "Dashboard" }
                a { href: "#", "Classes" }
                a { href: "#", "Resources" }
                a { href: "#", "Profile" }
            }
        }
    }
}

#[component]
fn ClassroomCard(classroom: Class) -> Element {
    rsx! {
        div { class: "classroom-card",
            h3 { "{classroom.title}" }
            p { "{classroom.date}" }
            p { "{classroom.time}" }
            a { class: "classroom-join", href: classroom.link.clone(), target: "_blank", "Join Class" }
        }
    }
}

#[component]
fn ResourceCard(resource: Resource) -> Element {
    rsx! {
        div { class: "resource-card",
            div {
                h3 { "{resource.title}" }
                a { class: "resource-open", href: resource.link.clone(), "View / Download" }
            }
        }
    }
}

#[component]
fn QuickActions() -> Element {
    rsx! {
        div { class: "student-quick-actions",
            button { class: "button", "data-style": "primary", r#type: "button", "Upload Assignment" }
            button { class: "button", "data-style": "secondary", r#type: "button", "Join Next Class" }
        }
    }
}
