use api::RecipeStore;
use dioxus::prelude::*;
use store::{RecipeFilter, RecipeId, UserId};

use crate::controller::{FavoriteAction, LoadState, LoadTicket, RecipeListController};
use crate::{use_auth, use_store, MessageBanner, RecipeCard};

/// Shared recipe list, parametrized by filter.
///
/// Every list page (all recipes, a category, search results, an author's
/// recipes) is this view with a different [`RecipeFilter`]. Route parameter
/// changes arrive as a new `filter` prop.
#[component]
pub fn RecipeListView(
    filter: RecipeFilter,
    heading: String,
    on_open_recipe: EventHandler<RecipeId>,
    on_open_author: EventHandler<UserId>,
) -> Element {
    let store = use_store();
    let auth = use_auth();
    let mut controller = use_signal(|| RecipeListController::new(filter.clone()));

    // Track the filter in a signal so the effect re-runs on route param change
    let mut filter_signal = use_signal(|| filter.clone());
    if *filter_signal.peek() != filter {
        filter_signal.set(filter.clone());
    }

    let loader_store = store.clone();
    use_effect(move || {
        let filter = filter_signal();
        let ticket = controller.write().set_filter(filter);
        if let Some(ticket) = ticket {
            spawn(load(loader_store.clone(), controller, ticket));
        }
    });

    let favorites_store = store.clone();
    use_effect(move || {
        if !auth().is_logged_in() {
            return;
        }
        let store = favorites_store.clone();
        spawn(async move {
            match store.list_favorites().await {
                Ok(favorites) => controller
                    .write()
                    .reconcile_favorites(favorites.iter().map(|r| r.id)),
                Err(e) => tracing::warn!("Failed to reconcile favorites: {}", e),
            }
        });
    });

    let request = use_callback(move |action: FavoriteAction| {
        let is_logged_in = auth().is_logged_in();
        let Some(action) = controller.write().begin_favorite(action, is_logged_in) else {
            return;
        };
        let store = store.clone();
        spawn(async move {
            let result = action.run(&store).await;
            controller.write().finish_favorite(result);
        });
    });

    let state = controller.read().state().clone();
    let banner = controller.read().banner().cloned();
    let cards = controller.read().cards(auth().is_logged_in());

    rsx! {
        section {
            class: "recipe-list",
            h2 { "{heading}" }
            MessageBanner {
                banner,
                on_dismiss: move |_| controller.write().dismiss_banner(),
            }
            match state {
                LoadState::Idle | LoadState::Loading => rsx! {
                    div { class: "view-placeholder", "Loading..." }
                },
                LoadState::Failed(message) => rsx! {
                    div {
                        class: "view-placeholder view-placeholder--error",
                        p { "{message}" }
                    }
                },
                LoadState::Ready if cards.is_empty() => rsx! {
                    div { class: "view-placeholder", "No recipes found." }
                },
                LoadState::Ready => rsx! {
                    div {
                        class: "recipe-grid",
                        for card in cards {
                            RecipeCard {
                                key: "{card.recipe.id}",
                                card: card.clone(),
                                on_open: on_open_recipe,
                                on_open_author: on_open_author,
                                on_add_favorite: move |id| request.call(FavoriteAction::Add(id)),
                                on_remove_favorite: move |id| request.call(FavoriteAction::Remove(id)),
                            }
                        }
                    }
                },
            }
        }
    }
}

async fn load<S: RecipeStore>(
    store: S,
    mut controller: Signal<RecipeListController>,
    ticket: LoadTicket,
) {
    let result = ticket.run(&store).await;
    controller.write().finish_load(ticket, result);
}
