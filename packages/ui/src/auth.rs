//! Session context and hooks for the UI.
//!
//! The application root provides an [`HttpRecipeStore`] through the Dioxus
//! context. [`AuthProvider`] mirrors the store's [`store::SessionHandle`] into
//! a signal so views re-render on login and logout.

use api::HttpRecipeStore;
use dioxus::prelude::*;
use store::{Session, UserId};

/// Reactive view of the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.session.as_ref().map(|s| s.user_id)
    }
}

/// The recipe store provided at the application root.
pub fn use_store() -> HttpRecipeStore {
    use_context::<HttpRecipeStore>()
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Must sit below the component that provides the [`HttpRecipeStore`].
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let store = use_store();
    let auth_state = use_signal(move || AuthState {
        session: store.session().current(),
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Install a session returned by `login` and publish it to the UI.
pub fn sign_in(store: &HttpRecipeStore, mut auth: Signal<AuthState>, session: Session) {
    tracing::info!("User {} logged in", session.user_id);
    store.session().login(session.clone());
    auth.set(AuthState {
        session: Some(session),
    });
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    #[props(default)] on_logout: EventHandler<()>,
) -> Element {
    let store = use_store();
    let mut auth_state = use_auth();

    let onclick = move |_| {
        store.session().logout();
        auth_state.set(AuthState::default());
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
