use dioxus::prelude::*;

use super::{
    config::{ActionLayout, ActionsConfig, ButtonConfig, ButtonPosition},
    context::ModalContext,
};
use crate::client::{component::icon::NamedIcon, theme};

/// Buttons split by their `position`, each group in declared order.
pub fn partition_buttons(buttons: &[ButtonConfig]) -> (Vec<ButtonConfig>, Vec<ButtonConfig>) {
    buttons
        .iter()
        .cloned()
        .partition(|button| button.position == ButtonPosition::Left)
}

/// How the action bar places its buttons.
#[derive(Clone, Debug, PartialEq)]
pub enum ButtonArrangement {
    /// Left group at the start, right group at the end.
    Split {
        left: Vec<ButtonConfig>,
        right: Vec<ButtonConfig>,
    },
    /// One left-aligned cluster, left group first.
    Start(Vec<ButtonConfig>),
    /// One right-aligned cluster, right group first.
    End(Vec<ButtonConfig>),
}

pub fn arrange_buttons(actions: &ActionsConfig) -> ButtonArrangement {
    let (left, right) = partition_buttons(&actions.buttons);

    match actions.layout {
        ActionLayout::Split => ButtonArrangement::Split { left, right },
        ActionLayout::Left => ButtonArrangement::Start(left.into_iter().chain(right).collect()),
        ActionLayout::Right => ButtonArrangement::End(right.into_iter().chain(left).collect()),
    }
}

/// Every button locks while a submission is in flight.
pub fn button_disabled(button: &ButtonConfig, is_submitting: bool) -> bool {
    button.disabled || is_submitting
}

pub fn shows_spinner(button: &ButtonConfig, is_submitting: bool) -> bool {
    button.loading || is_submitting
}

#[component]
fn ActionButton(ctx: ModalContext, button: ButtonConfig) -> Element {
    let is_submitting = ctx.is_submitting();
    let actions = &ctx.config().actions;
    let mut class = theme::button_class(button.variant, button.color);
    if actions.full_width {
        class.push_str(" flex-1");
    }
    let style = actions
        .spacing
        .map(|spacing| format!("margin: 0 {}px;", u32::from(spacing) * 4))
        .unwrap_or_default();

    let disabled = button_disabled(&button, is_submitting);
    let spinner = shows_spinner(&button, is_submitting);
    let pressed = button.clone();

    rsx!(
        button {
            r#type: "button",
            class: "{class}",
            style: "{style}",
            disabled,
            onclick: move |_| ctx.press(pressed.clone()),
            if spinner {
                span { class: "loading loading-spinner loading-sm" }
            } else if let Some(icon) = button.start_icon {
                NamedIcon { name: icon }
            }
            "{button.label}"
            if let Some(icon) = button.end_icon {
                NamedIcon { name: icon }
            }
        }
    )
}

/// Classes of the action bar and of the button groups inside it.
///
/// With `full_width` every container spans the footer so the `flex-1`
/// buttons stretch. A split bar always spans it, since its groups sit at
/// opposite ends.
pub fn bar_classes(arrangement: &ButtonArrangement, full_width: bool) -> (String, &'static str) {
    let width = if full_width { " w-full" } else { "" };
    let group = if full_width { "flex gap-2 flex-1" } else { "flex gap-2" };

    let bar = match arrangement {
        ButtonArrangement::Split { .. } => "flex justify-between items-center gap-2 w-full".to_string(),
        ButtonArrangement::Start(_) => format!("flex justify-start gap-2{width}"),
        ButtonArrangement::End(_) => format!("flex justify-end gap-2{width}"),
    };

    (bar, group)
}

#[component]
pub fn ActionButtons(ctx: ModalContext) -> Element {
    let arrangement = arrange_buttons(&ctx.config().actions);
    let (bar, group) = bar_classes(&arrangement, ctx.config().actions.full_width);

    match arrangement {
        ButtonArrangement::Split { left, right } => rsx!(
            div {
                class: "{bar}",
                div {
                    class: "{group}",
                    for button in left {
                        ActionButton { key: "{button.id}", ctx: ctx.clone(), button: button.clone() }
                    }
                }
                div {
                    class: "{group} justify-end",
                    for button in right {
                        ActionButton { key: "{button.id}", ctx: ctx.clone(), button: button.clone() }
                    }
                }
            }
        ),
        ButtonArrangement::Start(buttons) | ButtonArrangement::End(buttons) => rsx!(
            div {
                class: "{bar}",
                for button in buttons {
                    ActionButton { key: "{button.id}", ctx: ctx.clone(), button: button.clone() }
                }
            }
        ),
    }
}
