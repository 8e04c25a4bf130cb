//! # API crate: the recipe backend as seen from the client
//!
//! Every view in the web client talks to the backend through the
//! [`RecipeStore`] trait defined here. The crate owns the HTTP boundary and
//! nothing else: no rendering, no view state.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`error`] | [`ApiError`], the error taxonomy every call returns, and the banner text for each case |
//! | [`http`] | [`HttpRecipeStore`], the `reqwest` implementation used by the browser build |
//! | [`memory`] | [`MemoryRecipeStore`], an in-process backend with the same semantics, used as the test backend |
//! | [`models`] | Account payloads (`Registration`, `Credentials`) and the favorite-add outcome |
//! | [`validation`] | Client-side form checks that run before a request is sent |
//!
//! ## Authentication
//!
//! Stores are built with a [`store::SessionHandle`]. Mutating calls and the
//! per-user listings read the bearer token from it at call time and fail with
//! [`ApiError::AuthRequired`] without a request when there is no session.
//! Public reads (recipes, categories) never send a token.
//!
//! ## Operations
//!
//! - **Recipes**: `list_recipes`, `get_recipe`, `create_recipe`, `update_recipe`, `delete_recipe`, `list_user_recipes`
//! - **Favorites**: `list_favorites`, `add_favorite`, `remove_favorite`
//! - **Reference data**: `list_categories`
//! - **Accounts**: `register`, `login`

use store::{Category, CategoryId, Recipe, RecipeFields, RecipeId, Session};

pub mod error;
pub mod http;
pub mod memory;
pub mod models;
pub mod validation;

pub use error::ApiError;
pub use http::HttpRecipeStore;
pub use memory::MemoryRecipeStore;
pub use models::{Credentials, FavoriteOutcome, Registration};
pub use validation::ValidationError;

/// Async interface to the recipe backend.
pub trait RecipeStore {
    /// All recipes, or only one category's when `category` is set.
    /// Server order is preserved.
    fn list_recipes(
        &self,
        category: Option<CategoryId>,
    ) -> impl std::future::Future<Output = Result<Vec<Recipe>, ApiError>>;
    fn get_recipe(
        &self,
        id: RecipeId,
    ) -> impl std::future::Future<Output = Result<Recipe, ApiError>>;
    fn list_categories(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Category>, ApiError>>;
    /// The active user's favorites; the authoritative listing for reconciliation.
    fn list_favorites(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Recipe>, ApiError>>;
    /// Recipes written by the active user.
    fn list_user_recipes(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Recipe>, ApiError>>;
    /// Add a favorite. An existing relation is an outcome, not an error.
    fn add_favorite(
        &self,
        id: RecipeId,
    ) -> impl std::future::Future<Output = Result<FavoriteOutcome, ApiError>>;
    fn remove_favorite(
        &self,
        id: RecipeId,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
    fn create_recipe(
        &self,
        fields: &RecipeFields,
    ) -> impl std::future::Future<Output = Result<Recipe, ApiError>>;
    fn update_recipe(
        &self,
        id: RecipeId,
        fields: &RecipeFields,
    ) -> impl std::future::Future<Output = Result<Recipe, ApiError>>;
    /// Delete a recipe. Asking the user to confirm is the caller's job.
    fn delete_recipe(
        &self,
        id: RecipeId,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
    fn register(
        &self,
        registration: &Registration,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
    /// Exchange credentials for a session. The caller installs it.
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl std::future::Future<Output = Result<Session, ApiError>>;
}
