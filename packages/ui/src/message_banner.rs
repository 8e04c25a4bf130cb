use dioxus::prelude::*;

use crate::controller::{Banner, BannerKind};
use crate::icons::FaXmark;
use crate::Icon;

#[component]
pub fn MessageBanner(
    #[props(!optional)] banner: Option<Banner>,
    on_dismiss: EventHandler<()>,
) -> Element {
    let Some(banner) = banner else {
        return rsx! {};
    };
    let class = match banner.kind {
        BannerKind::Success => "banner banner--success",
        BannerKind::Info => "banner banner--info",
        BannerKind::Error => "banner banner--error",
    };

    rsx! {
        div {
            class: "{class}",
            role: "status",
            span { "{banner.text}" }
            button {
                class: "banner-dismiss",
                title: "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}
