use dioxus::prelude::*;

use crate::client::{
    component::{Page, StoryCard},
    constant::SITE_NAME,
    router::Route,
};

const MODAL_DESCRIPTION: &str = "\
Fixed-layout dialog with a **variant** (`success`, `warning`, `error`, `info`), \
optional title and close button, and up to two actions.";

const MODAL_SYSTEM_DESCRIPTION: &str = "\
Dialogs described entirely by a `ModalConfig`: form, tabbed or custom content, \
validation on submit, lifecycle callbacks and a configurable action bar.";

#[component]
pub fn Home() -> Element {
    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "max-w-4xl mx-auto",
            heading: "Stories",
            StoryCard {
                title: "Modal",
                description: MODAL_DESCRIPTION,
                Link { to: Route::ModalStories {}, class: "btn btn-primary btn-sm", "Open stories" }
            }
            StoryCard {
                title: "ModalSystem",
                description: MODAL_SYSTEM_DESCRIPTION,
                Link { to: Route::ModalSystemStories {}, class: "btn btn-primary btn-sm", "Open stories" }
            }
        }
    }
}
