use dioxus::prelude::*;

use crate::client::{
    constant::{DAISYUI_CSS, SITE_NAME, TAILWIND_SCRIPT},
    router::Route,
    theme::THEME_STYLE,
};

#[component]
pub fn App() -> Element {
    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Configuration-driven modal dialogs for Dioxus"
        }
        document::Link { rel: "stylesheet", href: DAISYUI_CSS }
        document::Script { src: TAILWIND_SCRIPT }
        document::Style { {THEME_STYLE} }
        Router::<Route> {}
    }
}
