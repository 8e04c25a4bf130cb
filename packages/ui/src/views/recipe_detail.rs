use api::validation::validate_draft;
use api::RecipeStore;
use dioxus::prelude::*;
use store::{Recipe, RecipeDraft, RecipeId, UserId};

use crate::{use_auth, use_store, RecipeForm};

/// Shared recipe detail view.
///
/// Shows one recipe with its ingredients and steps as ordered lists. The
/// author gets edit and delete; delete asks for confirmation first.
#[component]
pub fn RecipeDetailView(
    id: RecipeId,
    /// Called after the recipe was deleted.
    on_deleted: EventHandler<()>,
    on_open_author: EventHandler<UserId>,
) -> Element {
    // Track the id in a signal so use_resource re-runs on route param change
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let store = use_store();
    let auth = use_auth();
    let mut recipe = use_signal(|| Option::<Recipe>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut editing = use_signal(|| false);
    let mut confirm_delete = use_signal(|| false);
    let mut busy = use_signal(|| false);

    let loader_store = store.clone();
    let _loader = use_resource(move || {
        let id = id_signal();
        let store = loader_store.clone();
        async move {
            editing.set(false);
            confirm_delete.set(false);
            match store.get_recipe(id).await {
                Ok(r) => {
                    recipe.set(Some(r));
                    error.set(None);
                }
                Err(e) => {
                    tracing::error!("Failed to load recipe {}: {}", id, e);
                    recipe.set(None);
                    error.set(Some(e.user_message()));
                }
            }
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
    let handle_save = move |draft: RecipeDraft| {
        let store = save_store.clone();
        let id = id_signal();
        spawn(async move {
            let fields = match validate_draft(&draft, auth().user_id()) {
                Ok(fields) => fields,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            busy.set(true);
            match store.update_recipe(id, &fields).await {
                Ok(updated) => {
                    recipe.set(Some(updated));
                    error.set(None);
                    editing.set(false);
                }
                Err(e) => {
                    tracing::error!("Failed to update recipe {}: {}", id, e);
                    error.set(Some(e.user_message()));
                }
            }
            busy.set(false);
        });
    };

    let handle_delete = move |_: MouseEvent| {
        if !confirm_delete() {
            confirm_delete.set(true);
            return;
        }
        let store = store.clone();
        let id = id_signal();
        spawn(async move {
            busy.set(true);
            match store.delete_recipe(id).await {
                Ok(()) => {
                    tracing::info!("Deleted recipe {}", id);
                    on_deleted.call(());
                }
                Err(e) => {
                    tracing::error!("Failed to delete recipe {}: {}", id, e);
                    error.set(Some(e.user_message()));
                    confirm_delete.set(false);
                }
            }
            busy.set(false);
        });
    };

    let Some(current) = recipe() else {
        return rsx! {
            div {
                class: "view-placeholder",
                if let Some(err) = error() {
                    p { class: "view-placeholder--error", "{err}" }
                } else {
                    "Loading..."
                }
            }
        };
    };

    let is_author = auth()
        .user_id()
        .is_some_and(|user_id| current.is_authored_by(user_id));

    if editing() {
        return rsx! {
            section {
                class: "recipe-detail",
                h2 { "Edit recipe" }
                RecipeForm {
                    initial: RecipeDraft::from(&current),
                    categories: categories().unwrap_or_default(),
                    submit_label: "Save changes",
                    busy: busy(),
                    error: error(),
                    on_submit: handle_save,
                    on_cancel: move |_| {
                        error.set(None);
                        editing.set(false);
                    },
                }
            }
        };
    }

    let author_id = current.author_id();
    let author_name = current.author_name().to_string();
    let date = current.formatted_date();

    rsx! {
        article {
            class: "recipe-detail",
            h2 { "{current.title}" }
            div {
                class: "recipe-card-meta",
                if let Some(author_id) = author_id {
                    a {
                        class: "recipe-card-author",
                        onclick: move |_| on_open_author.call(author_id),
                        "{author_name}"
                    }
                }
                if !date.is_empty() {
                    span { class: "recipe-card-date", "{date}" }
                }
            }
            if let Some(err) = error() {
                div { class: "banner banner--error", "{err}" }
            }
            p { class: "recipe-detail-description", "{current.description}" }

            h3 { "Ingredients" }
            ul {
                for (i, ingredient) in current.ingredient_list().into_iter().enumerate() {
                    li { key: "{i}", "{ingredient}" }
                }
            }

            h3 { "Steps" }
            ol {
                for (i, step) in current.step_list().into_iter().enumerate() {
                    li { key: "{i}", "{step}" }
                }
            }

            if is_author {
                div {
                    class: "recipe-form-actions",
                    button {
                        class: "btn btn--secondary",
                        disabled: busy(),
                        onclick: move |_| editing.set(true),
                        "Edit"
                    }
                    if confirm_delete() {
                        button {
                            class: "btn btn--secondary",
                            onclick: move |_| confirm_delete.set(false),
                            "Keep it"
                        }
                    }
                    button {
                        class: "btn btn--danger",
                        disabled: busy(),
                        onclick: handle_delete,
                        if confirm_delete() { "Really delete?" } else { "Delete" }
                    }
                }
            }
        }
    }
}
