use dioxus::prelude::*;

use crate::client::{component::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Title { "Not Found" }
        Page {
            class: "flex flex-col items-center justify-center gap-4 min-h-screen",
            h1 { class: "text-4xl font-bold", "404" }
            p { "No story lives at /{path}" }
            Link { to: Route::Home {}, class: "btn btn-primary", "Back to stories" }
        }
    }
}
