pub mod dialog;

#[cfg(test)]
mod test;

use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCircleCheck, FaCircleExclamation, FaCircleInfo, FaTriangleExclamation},
    Icon,
};

pub use dialog::{Dialog, DismissReason};

use crate::client::{
    component::modal_system::config::{ButtonColor, ButtonVariant, ModalSize},
    theme,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalVariant {
    Success,
    Warning,
    Error,
    Info,
    #[default]
    Default,
}

impl ModalVariant {
    /// Colour of the top border.
    pub fn accent(self) -> &'static str {
        match self {
            ModalVariant::Success => theme::SUCCESS,
            ModalVariant::Warning => theme::WARNING,
            ModalVariant::Error => theme::ERROR,
            ModalVariant::Info => theme::INFO,
            ModalVariant::Default => theme::PRIMARY,
        }
    }

    /// Colour of the primary action when it does not pick its own.
    pub fn action_color(self) -> ButtonColor {
        match self {
            ModalVariant::Success => ButtonColor::Success,
            ModalVariant::Warning => ButtonColor::Warning,
            ModalVariant::Error => ButtonColor::Error,
            ModalVariant::Info => ButtonColor::Info,
            ModalVariant::Default => ButtonColor::Primary,
        }
    }
}

/// Footer button of a `Modal`.
#[derive(Clone, PartialEq)]
pub struct ModalAction {
    pub label: String,
    pub on_click: EventHandler<()>,
    pub variant: Option<ButtonVariant>,
    pub color: Option<ButtonColor>,
}

impl ModalAction {
    pub fn new(label: impl Into<String>, on_click: EventHandler<()>) -> Self {
        Self {
            label: label.into(),
            on_click,
            variant: None,
            color: None,
        }
    }
}

#[component]
fn VariantIcon(variant: ModalVariant) -> Element {
    match variant {
        ModalVariant::Success => rsx!(span {
            class: "text-success mr-2",
            Icon { width: 24, height: 24, icon: FaCircleCheck }
        }),
        ModalVariant::Warning => rsx!(span {
            class: "text-warning mr-2",
            Icon { width: 24, height: 24, icon: FaTriangleExclamation }
        }),
        ModalVariant::Error => rsx!(span {
            class: "text-error mr-2",
            Icon { width: 24, height: 24, icon: FaCircleExclamation }
        }),
        ModalVariant::Info => rsx!(span {
            class: "text-info mr-2",
            Icon { width: 24, height: 24, icon: FaCircleInfo }
        }),
        ModalVariant::Default => rsx!(),
    }
}

/// Fixed-layout dialog with a variant accent and up to two actions.
#[component]
pub fn Modal(
    open: bool,
    on_close: EventHandler<()>,
    title: Option<String>,
    #[props(default)] variant: ModalVariant,
    #[props(default = true)] show_close_button: bool,
    primary_action: Option<ModalAction>,
    secondary_action: Option<ModalAction>,
    #[props(default)] max_width: ModalSize,
    #[props(default)] disable_backdrop_click: bool,
    #[props(default)] disable_escape_key_down: bool,
    children: Element,
) -> Element {
    let width_class = theme::modal_width_class(max_width);
    let accent = variant.accent();
    let has_actions = primary_action.is_some() || secondary_action.is_some();

    let on_dismiss = move |reason: DismissReason| {
        if reason.is_allowed(disable_backdrop_click, disable_escape_key_down) {
            on_close.call(());
        }
    };

    rsx!(
        Dialog {
            open,
            on_dismiss,
            show_close_button,
            class: width_class.to_string(),
            style: format!("border-top: 4px solid {};", accent),
            header: rsx!(
                div {
                    class: "flex items-center",
                    VariantIcon { variant }
                    if let Some(title) = title {
                        h3 {
                            class: "font-bold text-lg",
                            "{title}"
                        }
                    }
                }
            ),
            footer: if has_actions {
                Some(rsx!(
                    if let Some(action) = secondary_action {
                        button {
                            r#type: "button",
                            class: theme::button_class(action.variant.unwrap_or(ButtonVariant::Text), action.color.unwrap_or_default()),
                            onclick: move |_| action.on_click.call(()),
                            "{action.label}"
                        }
                    }
                    if let Some(action) = primary_action {
                        button {
                            r#type: "button",
                            class: theme::button_class(
                                action.variant.unwrap_or(ButtonVariant::Contained),
                                action.color.unwrap_or(variant.action_color()),
                            ),
                            onclick: move |_| action.on_click.call(()),
                            "{action.label}"
                        }
                    }
                ))
            } else {
                None
            },
            {children}
        }
    )
}
