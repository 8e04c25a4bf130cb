use api::validation::validate_draft;
use api::RecipeStore;
use dioxus::prelude::*;
use store::{Recipe, RecipeDraft, RecipeId, UserId};

use crate::controller::{Banner, FavoriteAction, FavoriteRequests};
use crate::{use_auth, use_store, MessageBanner, RecipeForm};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProfileTab {
    MyRecipes,
    Favorites,
}

/// Which form, if any, replaces the recipe table.
#[derive(Clone, Debug, PartialEq)]
enum Editing {
    None,
    New,
    Existing(Recipe),
}

/// The logged-in user's page: own recipes and favorites.
#[component]
pub fn ProfileView(
    on_open_recipe: EventHandler<RecipeId>,
    on_open_author: EventHandler<UserId>,
) -> Element {
    let store = use_store();
    let auth = use_auth();
    let mut tab = use_signal(|| ProfileTab::MyRecipes);
    let mut banner = use_signal(|| Option::<Banner>::None);
    let mut editing = use_signal(|| Editing::None);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);
    let mut confirm_delete = use_signal(|| Option::<RecipeId>::None);
    let mut requests = use_signal(FavoriteRequests::default);

    let own_store = store.clone();
    let mut my_recipes = use_resource(move || {
        let store = own_store.clone();
        let logged_in = auth().is_logged_in();
        async move {
            if !logged_in {
                return Ok(Vec::new());
            }
            store.list_user_recipes().await
        }
    });

    // Reading the tab re-fetches favorites on every switch
    let favorites_store = store.clone();
    let mut favorites = use_resource(move || {
        let store = favorites_store.clone();
        let logged_in = auth().is_logged_in();
        let _ = tab();
        async move {
            if !logged_in {
                return Ok(Vec::new());
            }
            store.list_favorites().await
        }
    });

    let categories_store = store.clone();
    let categories = use_resource(move || {
        let store = categories_store.clone();
        async move {
            store.list_categories().await.unwrap_or_else(|e| {
                tracing::warn!("Failed to load categories: {}", e);
                Vec::new()
            })
        }
    });

    let save_store = store.clone();
    let save = use_callback(move |draft: RecipeDraft| {
        let store = save_store.clone();
        let target = editing();
        spawn(async move {
            let fields = match validate_draft(&draft, auth().user_id()) {
                Ok(fields) => fields,
                Err(e) => {
                    form_error.set(Some(e.to_string()));
                    return;
                }
            };
            busy.set(true);
            let result = match &target {
                Editing::Existing(recipe) => store.update_recipe(recipe.id, &fields).await,
                Editing::New | Editing::None => store.create_recipe(&fields).await,
            };
            busy.set(false);
            match result {
                Ok(saved) => {
                    let text = match target {
                        Editing::Existing(_) => format!("Recipe \"{}\" updated.", saved.title),
                        Editing::New | Editing::None => format!("Recipe \"{}\" created.", saved.title),
                    };
                    banner.set(Some(Banner::success(text)));
                    form_error.set(None);
                    editing.set(Editing::None);
                    my_recipes.restart();
                }
                Err(e) => {
                    tracing::error!("Failed to save recipe: {}", e);
                    form_error.set(Some(e.user_message()));
                }
            }
        });
    });

    let delete_store = store.clone();
    let delete = use_callback(move |id: RecipeId| {
        if confirm_delete() != Some(id) {
            confirm_delete.set(Some(id));
            return;
        }
        confirm_delete.set(None);
        let store = delete_store.clone();
        spawn(async move {
            match store.delete_recipe(id).await {
                Ok(()) => {
                    banner.set(Some(Banner::success("Recipe deleted.")));
                    my_recipes.restart();
                    favorites.restart();
                }
                Err(e) => {
                    tracing::error!("Failed to delete recipe {}: {}", id, e);
                    banner.set(Some(Banner::error(e.user_message())));
                }
            }
        });
    });

    let unfavorite = use_callback(move |id: RecipeId| {
        let Some(action) = requests.write().begin(FavoriteAction::Remove(id)) else {
            return;
        };
        let store = store.clone();
        spawn(async move {
            let result = action.run(&store).await;
            banner.set(Some(requests.write().finish(result)));
            favorites.restart();
        });
    });

    if !auth().is_logged_in() {
        return rsx! {
            div { class: "view-placeholder", "Please log in to see your profile." }
        };
    }

    let form = match editing() {
        Editing::None => None,
        Editing::New => Some(("New recipe", RecipeDraft::default(), "Create")),
        Editing::Existing(recipe) => Some(("Edit recipe", RecipeDraft::from(&recipe), "Save changes")),
    };
    if let Some((title, draft, label)) = form {
        return rsx! {
            section {
                class: "profile",
                h2 { "{title}" }
                RecipeForm {
                    initial: draft,
                    categories: categories().unwrap_or_default(),
                    submit_label: "{label}",
                    busy: busy(),
                    error: form_error(),
                    on_submit: save,
                    on_cancel: move |_| {
                        form_error.set(None);
                        editing.set(Editing::None);
                    },
                }
            }
        };
    }

    let current_tab = tab();
    let rows = match current_tab {
        ProfileTab::MyRecipes => my_recipes(),
        ProfileTab::Favorites => favorites(),
    };

    rsx! {
        section {
            class: "profile",
            div {
                class: "profile-tabs",
                button {
                    class: if current_tab == ProfileTab::MyRecipes { "tab tab--active" } else { "tab" },
                    onclick: move |_| tab.set(ProfileTab::MyRecipes),
                    "My recipes"
                }
                button {
                    class: if current_tab == ProfileTab::Favorites { "tab tab--active" } else { "tab" },
                    onclick: move |_| tab.set(ProfileTab::Favorites),
                    "Favorite recipes"
                }
                if current_tab == ProfileTab::MyRecipes {
                    button {
                        class: "btn btn--primary",
                        onclick: move |_| editing.set(Editing::New),
                        "Add recipe"
                    }
                }
            }

            MessageBanner {
                banner: banner(),
                on_dismiss: move |_| banner.set(None),
            }

            match rows {
                None => rsx! {
                    div { class: "view-placeholder", "Loading..." }
                },
                Some(Err(e)) => rsx! {
                    div { class: "view-placeholder view-placeholder--error", {e.user_message()} }
                },
                Some(Ok(recipes)) if recipes.is_empty() => rsx! {
                    div { class: "view-placeholder", "Nothing here yet." }
                },
                Some(Ok(recipes)) => rsx! {
                    table {
                        class: "profile-table",
                        tbody {
                            for recipe in recipes {
                                tr {
                                    key: "{recipe.id}",
                                    td {
                                        a {
                                            onclick: {
                                                let id = recipe.id;
                                                move |_| on_open_recipe.call(id)
                                            },
                                            "{recipe.title}"
                                        }
                                    }
                                    td {
                                        if let Some(author_id) = recipe.author_id() {
                                            a {
                                                onclick: move |_| on_open_author.call(author_id),
                                                {recipe.author_name().to_string()}
                                            }
                                        }
                                    }
                                    td { {recipe.formatted_date()} }
                                    td {
                                        class: "profile-actions",
                                        if current_tab == ProfileTab::MyRecipes {
                                            button {
                                                class: "btn btn--secondary",
                                                onclick: {
                                                    let recipe = recipe.clone();
                                                    move |_| editing.set(Editing::Existing(recipe.clone()))
                                                },
                                                "Edit"
                                            }
                                            button {
                                                class: "btn btn--danger",
                                                onclick: {
                                                    let id = recipe.id;
                                                    move |_| delete.call(id)
                                                },
                                                if confirm_delete() == Some(recipe.id) { "Really delete?" } else { "Delete" }
                                            }
                                        } else {
                                            button {
                                                class: "btn btn--secondary",
                                                disabled: requests.read().is_pending(recipe.id),
                                                onclick: {
                                                    let id = recipe.id;
                                                    move |_| unfavorite.call(id)
                                                },
                                                "Remove"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
