use dioxus::prelude::*;
use store::RecipeId;
use ui::views::RecipeDetailView;

use crate::Route;

#[component]
pub fn RecipeDetail(id: RecipeId) -> Element {
    let nav = use_navigator();

    rsx! {
        RecipeDetailView {
            id,
            on_deleted: move |_| {
                nav.push(Route::Profile {});
            },
            on_open_author: move |id| {
                nav.push(Route::AuthorRecipes { id });
            },
        }
    }
}
