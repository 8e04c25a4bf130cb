//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_regular_icons::FaHeart as FaRegularHeart;
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod controller;
pub use controller::{
    Banner, BannerKind, FavoriteAction, FavoriteRequests, LoadState, RecipeCardModel,
    RecipeListController,
};

pub mod views;

pub const RECIPES_CSS: Asset = asset!("/assets/recipes.css");

mod navbar;
pub use navbar::{Navbar, SearchForm};

mod auth;
pub use auth::{sign_in, use_auth, use_store, AuthProvider, AuthState, LogoutButton};

mod message_banner;
pub use message_banner::MessageBanner;

mod recipe_card;
pub use recipe_card::RecipeCard;

mod recipe_form;
pub use recipe_form::RecipeForm;
