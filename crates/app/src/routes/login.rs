use dioxus::prelude::*;
use shared_types::LoginRequest;
use shared_ui::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input};

use client::ApiClient;

use crate::auth::{destination_for, use_auth};
use crate::routes::Route;

/// Login page. On a successful response the reported user is stored in
/// auth state and the router navigates by role: ADMIN to the admin
/// dashboard, STUDENT to the student dashboard, anything else back to
/// the landing page.
#[component]
pub fn Login() -> Element {
    let api = use_context::<ApiClient>();
    let mut auth = use_auth();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if *loading.read() {
            return;
        }
        let api = api.clone();
        spawn(async move {
            loading.set(true);
            error_msg.set(None);

            let req = LoginRequest {
                email: email(),
                password: password(),
            };
            match api.login(&req).await {
                Ok(resp) if resp.is_success() => match resp.user {
                    Some(user) => {
                        let dest = destination_for(user.role);
                        auth.set_user(user);
                        navigator().push(dest);
                    }
                    None => {
                        error_msg.set(Some(resp.message));
                    }
                },
                Ok(resp) => {
                    error_msg.set(Some(resp.message));
                }
                Err(err) => {
                    tracing::error!(%err, "login request failed");
                    error_msg.set(Some(err.friendly_message()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Welcome Back" }
                    CardDescription { "Enter your credentials to access your account" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Input {
                                label: "Email",
                                input_type: "email",
                                id: "email",
                                placeholder: "user@example.com",
                                required: true,
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                label: "Password",
                                input_type: "password",
                                id: "password",
                                placeholder: "Enter your password",
                                required: true,
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Login" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Don't have an account? "
                        Link { to: Route::Signup {}, "Sign Up" }
                    }
                }
            }
        }
    }
}
