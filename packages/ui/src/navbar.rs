use dioxus::prelude::*;

use crate::icons::FaMagnifyingGlass;
use crate::Icon;
use crate::RECIPES_CSS;

#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: RECIPES_CSS }
        nav {
            class: "navbar",
            {children}
        }
    }
}

/// Search box for the navbar. Blank queries are not submitted.
#[component]
pub fn SearchForm(on_search: EventHandler<String>) -> Element {
    let mut query = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let q = query().trim().to_string();
        if q.is_empty() {
            return;
        }
        on_search.call(q);
        query.set(String::new());
    };

    rsx! {
        form {
            class: "navbar-search",
            onsubmit: handle_submit,
            input {
                r#type: "search",
                placeholder: "Search recipes",
                value: query(),
                oninput: move |evt: FormEvent| query.set(evt.value()),
            }
            button {
                r#type: "submit",
                title: "Search",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            }
        }
    }
}
