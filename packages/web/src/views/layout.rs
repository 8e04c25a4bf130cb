use dioxus::prelude::*;
use store::RecipeRealmConfig;
use ui::{use_auth, LogoutButton, Navbar, SearchForm};

use crate::Route;

/// Navbar above every page.
#[component]
pub fn AppLayout() -> Element {
    let config = use_context::<RecipeRealmConfig>();
    let auth = use_auth();
    let nav = use_navigator();

    rsx! {
        Navbar {
            Link { class: "navbar-logo", to: Route::Home {}, "Recipe Realm" }
            Link { to: Route::AllRecipes {}, "All Recipes" }
            for category in config.categories {
                Link {
                    key: "{category.slug}",
                    to: Route::CategoryPage { slug: category.slug.clone() },
                    "{category.name}"
                }
            }
            if auth().is_logged_in() {
                Link { to: Route::Profile {}, "My Profile" }
            }
            SearchForm {
                on_search: move |query: String| {
                    nav.push(Route::Search { query });
                },
            }
            if auth().is_logged_in() {
                LogoutButton {
                    class: "btn btn--secondary",
                    on_logout: move |_| {
                        nav.push(Route::Login {});
                    },
                }
            } else {
                Link { class: "btn btn--secondary", to: Route::Login {}, "Login" }
                Link { class: "btn btn--primary", to: Route::Registration {}, "Register" }
            }
        }

        Outlet::<Route> {}
    }
}
