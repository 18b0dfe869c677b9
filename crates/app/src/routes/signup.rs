use dioxus::prelude::*;
use shared_types::{SignupRequest, UserRole};
use shared_ui::{
    use_toast, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, FormSelect,
    Input,
};

use client::ApiClient;

use crate::routes::Route;

/// Signup page with role selection. Choosing the Admin role reveals a
/// verification-code flow: the code is requested from the backend and
/// submitted together with the form. A successful signup lands on the
/// login page.
#[component]
pub fn Signup() -> Element {
    let api = use_context::<ApiClient>();
    let toast = use_toast();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| UserRole::Student.as_str().to_string());
    let mut code = use_signal(String::new);
    let mut code_requested = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut requesting_code = use_signal(|| false);

    let request_code = {
        let api = api.clone();
        move |_: MouseEvent| {
            if *requesting_code.read() {
                return;
            }
            let api = api.clone();
            spawn(async move {
                requesting_code.set(true);
                match api.request_admin_code().await {
                    Ok(resp) => {
                        toast.success(resp.message);
                        code_requested.set(true);
                    }
                    Err(err) => {
                        tracing::error!(%err, "verification code request failed");
                        toast.error(err.friendly_message());
                    }
                }
                requesting_code.set(false);
            });
        }
    };

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        if *loading.read() {
            return;
        }
        let api = api.clone();
        spawn(async move {
            loading.set(true);
            error_msg.set(None);

            let req = SignupRequest {
                name: name(),
                email: email(),
                password: password(),
                role: UserRole::from_str_or_default(&role.read()),
                code: code(),
            };
            match api.signup(&req).await {
                Ok(resp) if resp.is_success() => {
                    toast.success(resp.message);
                    navigator().push(Route::Login {});
                }
                Ok(resp) => {
                    error_msg.set(Some(resp.message));
                }
                Err(err) => {
                    tracing::error!(%err, "signup request failed");
                    error_msg.set(Some(err.friendly_message()));
                }
            }
            loading.set(false);
        });
    };

    let is_admin = *role.read() == UserRole::Admin.as_str();

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Create Account" }
                    CardDescription { "Create an account to get started" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_signup,
                        div { class: "auth-field",
                            Input {
                                label: "Full Name",
                                id: "name",
                                placeholder: "Full Name",
                                required: true,
                                value: name(),
                                on_input: move |e: FormEvent| name.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                label: "Email",
                                input_type: "email",
                                id: "email",
                                placeholder: "Email",
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
                                placeholder: "Password",
                                required: true,
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }

                        div { class: "auth-field",
                            FormSelect {
                                label: "Role",
                                value: role(),
                                onchange: move |e: FormEvent| role.set(e.value()),
                                option { value: UserRole::Student.as_str(), "Student" }
                                option { value: UserRole::Admin.as_str(), "Admin" }
                            }
                        }

                        // Admin accounts need a verification code.
                        if is_admin {
                            div { class: "auth-field",
                                button {
                                    r#type: "button",
                                    class: "auth-code-request button",
                                    disabled: requesting_code(),
                                    onclick: request_code,
                                    if requesting_code() { "Requesting..." } else { "Request Verification Code" }
                                }
                                if code_requested() {
                                    Input {
                                        label: "Verification Code",
                                        id: "code",
                                        placeholder: "Enter Verification Code",
                                        required: true,
                                        value: code(),
                                        on_input: move |e: FormEvent| code.set(e.value()),
                                    }
                                }
                            }
                        }

                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { "Creating account..." } else { "Sign Up" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Login" }
                    }
                }
            }
        }
    }
}
