use dioxus::prelude::*;
use ui::views::ProfileView;

use crate::Route;

#[component]
pub fn Profile() -> Element {
    let nav = use_navigator();

    rsx! {
        ProfileView {
            on_open_recipe: move |id| {
                nav.push(Route::RecipeDetail { id });
            },
            on_open_author: move |id| {
                nav.push(Route::AuthorRecipes { id });
            },
        }
    }
}
