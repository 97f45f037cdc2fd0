use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, router::Route};

#[component]
pub fn Header() -> Element {
    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Home {},
                p {
                    class: "md:text-xl text-wrap font-semibold",
                    {SITE_NAME}
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            Link {
                to: Route::ModalStories {},
                class: "btn btn-outline",
                "Modal"
            }
            Link {
                to: Route::ModalSystemStories {},
                class: "btn btn-outline",
                "ModalSystem"
            }
        }
    })
}
