//! Request and response payloads that are not recipe data.

mod account;

pub use account::{Credentials, LoginResponse, Registration};

use serde::{Deserialize, Serialize};
use store::RecipeId;

/// Result of asking the server to add a favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteOutcome {
    Added,
    /// The relation already existed (HTTP 409)
    AlreadyFavorited,
}

/// Body of `POST` and `DELETE /recipes/favorite`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRequest {
    pub recipe_id: RecipeId,
}
