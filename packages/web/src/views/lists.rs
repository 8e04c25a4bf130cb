//! List pages. Each is the shared recipe list with a different filter.

use dioxus::prelude::*;
use store::{Category, RecipeFilter, RecipeRealmConfig, UserId};
use ui::views::RecipeListView;

use crate::Route;

#[component]
fn ListPage(filter: RecipeFilter, heading: String) -> Element {
    let nav = use_navigator();

    rsx! {
        RecipeListView {
            filter,
            heading,
            on_open_recipe: move |id| {
                nav.push(Route::RecipeDetail { id });
            },
            on_open_author: move |id| {
                nav.push(Route::AuthorRecipes { id });
            },
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        ListPage { filter: RecipeFilter::All, heading: "Latest recipes" }
    }
}

#[component]
pub fn AllRecipes() -> Element {
    rsx! {
        ListPage { filter: RecipeFilter::All, heading: "All recipes" }
    }
}

#[component]
pub fn CategoryPage(slug: String) -> Element {
    let config = use_context::<RecipeRealmConfig>();

    let Some(route) = config.category_by_slug(&slug) else {
        tracing::warn!("Unknown category slug {:?}", slug);
        return rsx! {
            div { class: "view-placeholder", "Unknown category." }
        };
    };
    let style = Category {
        id: route.id,
        name: route.name.clone(),
    }
    .style();

    rsx! {
        div {
            class: style.css_class(),
            ListPage {
                filter: RecipeFilter::Category(route.id),
                heading: "{route.name}",
            }
        }
    }
}

#[component]
pub fn Search(query: String) -> Element {
    rsx! {
        ListPage {
            filter: RecipeFilter::Search(query.clone()),
            heading: "Results for \"{query}\"",
        }
    }
}

#[component]
pub fn AuthorRecipes(id: UserId) -> Element {
    rsx! {
        ListPage { filter: RecipeFilter::Author(id), heading: "Recipes by this author" }
    }
}
