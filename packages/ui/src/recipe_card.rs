use dioxus::prelude::*;
use store::{RecipeId, UserId};

use crate::controller::RecipeCardModel;
use crate::icons::{FaHeart, FaRegularHeart};
use crate::Icon;

/// One recipe in a list. Stateless; the list view owns favorites.
#[component]
pub fn RecipeCard(
    card: RecipeCardModel,
    on_open: EventHandler<RecipeId>,
    on_open_author: EventHandler<UserId>,
    on_add_favorite: EventHandler<RecipeId>,
    on_remove_favorite: EventHandler<RecipeId>,
) -> Element {
    let recipe = &card.recipe;
    let id = recipe.id;
    let author_id = recipe.author_id();
    let author_name = recipe.author_name().to_string();
    let date = recipe.formatted_date();
    let is_favorite = card.is_favorite;

    let toggle = move |_| {
        if is_favorite {
            on_remove_favorite.call(id);
        } else {
            on_add_favorite.call(id);
        }
    };

    rsx! {
        article {
            class: "recipe-card",
            div {
                class: "recipe-card-header",
                h3 {
                    a {
                        class: "recipe-card-title",
                        onclick: move |_| on_open.call(id),
                        "{recipe.title}"
                    }
                }
                if card.is_logged_in {
                    button {
                        class: if is_favorite { "favorite-toggle favorite-toggle--on" } else { "favorite-toggle" },
                        title: if is_favorite { "Remove from favorites" } else { "Add to favorites" },
                        disabled: card.pending,
                        onclick: toggle,
                        if is_favorite {
                            Icon { icon: FaHeart, width: 18, height: 18 }
                        } else {
                            Icon { icon: FaRegularHeart, width: 18, height: 18 }
                        }
                    }
                }
            }
            p { class: "recipe-card-description", "{recipe.description}" }
            div {
                class: "recipe-card-meta",
                if let Some(author_id) = author_id {
                    if !author_name.is_empty() {
                        a {
                            class: "recipe-card-author",
                            onclick: move |_| on_open_author.call(author_id),
                            "{author_name}"
                        }
                    }
                }
                if !date.is_empty() {
                    span { class: "recipe-card-date", "{date}" }
                }
            }
        }
    }
}
