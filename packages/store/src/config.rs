//! # Client configuration: `recipe-realm.toml`
//!
//! Defines the TOML file the web client is built with (filename:
//! [`RecipeRealmConfig::filename`] = `"recipe-realm.toml"`). It tells the client
//! where the backend lives and which categories get their own page.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = ""            # empty = same origin as the page
//!
//! [[categories]]
//! slug = "breakfast"       # route segment: /category/breakfast
//! name = "Breakfast"       # navbar label and page heading
//! id = 1                   # backend category id
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`RecipeRealmConfig`] | Top-level config with TOML (de)serialisation, builder helpers and slug lookup. |
//! | [`ApiConfig`] | Backend section, the `base_url` every request path is appended to. |
//! | [`CategoryRoute`] | One category page: slug, label and backend id. |
//!
//! A missing `[api]` section or missing `categories` list falls back to the
//! defaults, so an empty file is equivalent to [`RecipeRealmConfig::default`].

use serde::{Deserialize, Serialize};

use crate::models::CategoryId;

/// Top-level configuration stored in `recipe-realm.toml`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipeRealmConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryRoute>,
}

/// Backend configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST backend, without a trailing slash.
    /// Empty string means the page origin.
    #[serde(default)]
    pub base_url: String,
}

/// A category that has its own list page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRoute {
    pub slug: String,
    pub name: String,
    pub id: CategoryId,
}

fn default_categories() -> Vec<CategoryRoute> {
    [
        ("breakfast", "Breakfast", 1),
        ("lunch", "Lunch", 2),
        ("dinner", "Dinner", 3),
        ("drink", "Drink", 4),
        ("pasta", "Pasta", 5),
        ("dessert", "Dessert", 6),
    ]
    .into_iter()
    .map(|(slug, name, id)| CategoryRoute {
        slug: slug.to_string(),
        name: name.to_string(),
        id,
    })
    .collect()
}

impl Default for RecipeRealmConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            categories: default_categories(),
        }
    }
}

impl RecipeRealmConfig {
    /// Builder method to set the backend base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Look up a category page by its route slug.
    pub fn category_by_slug(&self, slug: &str) -> Option<&CategoryRoute> {
        self.categories
            .iter()
            .find(|c| c.slug.eq_ignore_ascii_case(slug))
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "recipe-realm.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
