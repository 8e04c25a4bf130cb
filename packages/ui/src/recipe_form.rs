use dioxus::prelude::*;
use store::{Category, RecipeDraft};

/// Add/edit form for a recipe.
///
/// Holds the draft locally and hands it to `on_submit` untouched; the caller
/// validates it and reports errors through `error`.
#[component]
pub fn RecipeForm(
    initial: RecipeDraft,
    categories: Vec<Category>,
    #[props(default = "Save".to_string())] submit_label: String,
    #[props(default)] busy: bool,
    #[props(!optional)] error: Option<String>,
    on_submit: EventHandler<RecipeDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(move || initial);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(draft());
    };

    let selected = draft().category_id.map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        form {
            class: "recipe-form",
            onsubmit: handle_submit,

            if let Some(err) = error {
                div { class: "banner banner--error", "{err}" }
            }

            label { r#for: "recipe-title", "Title" }
            input {
                id: "recipe-title",
                r#type: "text",
                value: draft().title,
                oninput: move |evt: FormEvent| draft.write().title = evt.value(),
            }

            label { r#for: "recipe-category", "Category" }
            select {
                id: "recipe-category",
                value: "{selected}",
                onchange: move |evt: FormEvent| {
                    draft.write().category_id = evt.value().parse().ok();
                },
                option { value: "", disabled: true, "Select a category" }
                for category in categories.iter() {
                    option {
                        key: "{category.id}",
                        value: "{category.id}",
                        "{category.name}"
                    }
                }
            }

            label { r#for: "recipe-description", "Description" }
            textarea {
                id: "recipe-description",
                rows: 3,
                value: draft().description,
                oninput: move |evt: FormEvent| draft.write().description = evt.value(),
            }

            label { r#for: "recipe-ingredients", "Ingredients" }
            textarea {
                id: "recipe-ingredients",
                rows: 5,
                placeholder: "One per line, or separated by commas",
                value: draft().ingredients,
                oninput: move |evt: FormEvent| draft.write().ingredients = evt.value(),
            }

            label { r#for: "recipe-steps", "Steps" }
            textarea {
                id: "recipe-steps",
                rows: 6,
                placeholder: "One per line, or as sentences",
                value: draft().steps,
                oninput: move |evt: FormEvent| draft.write().steps = evt.value(),
            }

            div {
                class: "recipe-form-actions",
                button {
                    r#type: "button",
                    class: "btn btn--secondary",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    r#type: "submit",
                    class: "btn btn--primary",
                    disabled: busy,
                    if busy { "Saving..." } else { "{submit_label}" }
                }
            }
        }
    }
}
