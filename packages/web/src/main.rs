use api::HttpRecipeStore;
use dioxus::prelude::*;
use store::{RecipeId, RecipeRealmConfig, UserId};

use ui::AuthProvider;
use views::{
    AllRecipes, AppLayout, AuthorRecipes, CategoryPage, Home, Login, Profile, RecipeDetail,
    Registration, Search,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/recipes")]
        AllRecipes {},
        #[route("/recipes/:id")]
        RecipeDetail { id: RecipeId },
        #[route("/category/:slug")]
        CategoryPage { slug: String },
        #[route("/search?:query")]
        Search { query: String },
        #[route("/authors/:id")]
        AuthorRecipes { id: UserId },
        #[route("/profile")]
        Profile {},
        #[route("/registration")]
        Registration {},
        #[route("/login")]
        Login {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

const CONFIG_TOML: &str = include_str!("../recipe-realm.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

fn load_config() -> RecipeRealmConfig {
    let config = RecipeRealmConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::error!("Invalid {}: {}", RecipeRealmConfig::filename(), e);
        RecipeRealmConfig::default()
    });
    resolve_base_url(config)
}

/// An empty base URL means "same origin as the page".
#[cfg(target_arch = "wasm32")]
fn resolve_base_url(config: RecipeRealmConfig) -> RecipeRealmConfig {
    if !config.api.base_url.is_empty() {
        return config;
    }
    match web_sys::window().and_then(|w| w.location().origin().ok()) {
        Some(origin) => config.with_base_url(origin),
        None => {
            tracing::error!("Cannot resolve the page origin for the API base URL");
            config
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn resolve_base_url(config: RecipeRealmConfig) -> RecipeRealmConfig {
    config
}

#[component]
fn App() -> Element {
    let config = use_context_provider(load_config);
    use_context_provider(|| {
        tracing::info!("Using recipe backend at {:?}", config.api.base_url);
        HttpRecipeStore::from_config(&config, views::make_session())
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
