//! Registration page view with email/password form.

use std::time::Duration;

use api::validation::validate_registration;
use api::{ApiError, RecipeStore};
use dioxus::prelude::*;
use ui::use_store;

use crate::Route;

const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Register page component.
#[component]
pub fn Registration() -> Element {
    let store = use_store();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let store = store.clone();
        spawn(async move {
            error.set(None);

            let registration = match validate_registration(&email(), &password(), &name()) {
                Ok(registration) => registration,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            loading.set(true);
            match store.register(&registration).await {
                Ok(()) => {
                    tracing::info!("Registered {}", registration.email);
                    success.set(Some(
                        "Registration successful! Redirect to login page...".to_string(),
                    ));

                    #[cfg(target_arch = "wasm32")]
                    gloo_timers::future::sleep(REDIRECT_DELAY).await;
                    #[cfg(not(target_arch = "wasm32"))]
                    tokio::time::sleep(REDIRECT_DELAY).await;

                    nav.push(Route::Login {});
                }
                Err(e) => {
                    tracing::warn!("Registration failed: {}", e);
                    loading.set(false);
                    let message = match e {
                        ApiError::Http { message: None, .. } => {
                            "Invalid credentials! Try again.".to_string()
                        }
                        other => other.user_message(),
                    };
                    error.set(Some(message));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "Registration" }

            form {
                onsubmit: handle_register,
                class: "recipe-form",

                if let Some(err) = error() {
                    div { class: "banner banner--error", "{err}" }
                }
                if let Some(msg) = success() {
                    div { class: "banner banner--success", "{msg}" }
                }

                label { r#for: "registration-name", "Name" }
                input {
                    id: "registration-name",
                    r#type: "text",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

                label { r#for: "registration-email", "Email" }
                input {
                    id: "registration-email",
                    r#type: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                label { r#for: "registration-password", "Password" }
                input {
                    id: "registration-password",
                    r#type: "password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "btn btn--primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Registering..." } else { "Register" }
                }
            }

            p {
                "Already have an account? "
                Link { to: Route::Login {}, "Login" }
            }
        }
    }
}
