use dioxus::prelude::*;

use crate::client::{component::Header, router::Route};

#[component]
pub fn Layout() -> Element {
    rsx!(div {
        class: "flex flex-col min-h-screen",
        Header {  }
        main {
            class: "flex-1",
            Outlet::<Route> {}
        }
        footer {
            class: "footer footer-center p-4 bg-base-200 text-base-content/60 text-sm",
            "Stories render against the mock API when the server feature is enabled."
        }
    })
}
