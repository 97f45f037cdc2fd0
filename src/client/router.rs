use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{Home, ModalStories, ModalSystemStories, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/modal")]
    ModalStories {},

    #[route("/modal-system")]
    ModalSystemStories {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
