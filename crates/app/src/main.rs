use dioxus::prelude::*;

mod auth;
mod routes;
mod store;

use auth::AuthState;
use client::ApiClient;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Backend origin, baked in at build time. Override with
/// `EDUHUB_API_BASE=https://api.example.com` when building for another
/// environment.
fn api_base() -> &'static str {
    option_env!("EDUHUB_API_BASE").unwrap_or("http://localhost:8080")
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One shared HTTP client for every page.
    use_context_provider(|| ApiClient::new(api_base()));
    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
