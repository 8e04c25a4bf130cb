//! Login page view with email/password form.

use api::validation::validate_credentials;
use api::{ApiError, RecipeStore};
use dioxus::prelude::*;
use ui::{sign_in, use_auth, use_store};

use crate::Route;

const BAD_CREDENTIALS: &str = "Invalid credentials! Try again.";

/// Login page component.
#[component]
pub fn Login() -> Element {
    let store = use_store();
    let auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go to the profile
    if auth().is_logged_in() {
        nav.replace(Route::Profile {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let store = store.clone();
        spawn(async move {
            error.set(None);

            let credentials = match validate_credentials(&email(), &password()) {
                Ok(credentials) => credentials,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            loading.set(true);
            match store.login(&credentials).await {
                Ok(session) => {
                    sign_in(&store, auth, session);
                    nav.push(Route::Home {});
                }
                Err(e) => {
                    tracing::warn!("Login failed for {}: {}", credentials, e);
                    loading.set(false);
                    let message = match e {
                        ApiError::Http { message: None, status: 400 | 401 } => {
                            BAD_CREDENTIALS.to_string()
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

            h1 { "Login" }

            form {
                onsubmit: handle_login,
                class: "recipe-form",

                if let Some(err) = error() {
                    div { class: "banner banner--error", "{err}" }
                }

                label { r#for: "login-email", "Email" }
                input {
                    id: "login-email",
                    r#type: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                label { r#for: "login-password", "Password" }
                input {
                    id: "login-password",
                    r#type: "password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "btn btn--primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Logging in..." } else { "Login" }
                }
            }

            p {
                "No account yet? "
                Link { to: Route::Registration {}, "Register" }
            }
        }
    }
}
