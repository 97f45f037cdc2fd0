//! Configuration-driven modal engine.
//!
//! `ModalSystem` renders a `ModalConfig` inside the `Dialog` shell, owns the
//! per-instance `ModalState` and hands a `ModalContext` to the form, tabbed
//! and custom content renderers and to the action bar.

pub mod actions;
pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod form;
pub mod overrides;
pub mod state;
pub mod store;
pub mod tabbed;
pub mod validation;

#[cfg(test)]
mod test;

use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use dioxus_logger::tracing;

pub use config::{ContextData, ModalConfig};
pub use context::ModalContext;
pub use error::{ConfigError, SubmitError};
pub use overrides::{merge_config, ModalOverrides};
pub use validation::{validate_field, validate_form, ValidationResult};

use crate::client::{
    component::modal::{Dialog, DismissReason},
    theme,
};
use actions::ActionButtons;
use config::{ContentConfig, ScrollMode};
use form::FormContent;
use state::{InitSeed, ModalState};
use tabbed::{RenderSlot, TabbedContent};

#[component]
fn ConfigIndicator() -> Element {
    rsx!(
        span {
            class: "badge badge-primary badge-sm absolute top-2 left-2 z-10",
            "Config-Driven Modal"
        }
    )
}

/// Renders a modal from its configuration.
///
/// `open` and `on_close` belong to the caller and are independent of the
/// configuration's own lifecycle callbacks. An invalid configuration is a
/// wiring bug and panics on render.
#[component]
pub fn ModalSystem(
    config: ModalConfig,
    open: bool,
    on_close: EventHandler<()>,
    context: Option<ContextData>,
    overrides: Option<ModalOverrides>,
) -> Element {
    let config = Rc::new(merge_config(&config, overrides.as_ref()));
    if let Err(err) = config.validate() {
        tracing::error!("Invalid modal configuration: {}", err);
        panic!("Invalid modal configuration: {}", err);
    }
    let context = Rc::new(context.unwrap_or_default());

    let seed = InitSeed::from_config(&config);
    let mut state = use_signal({
        let seed = seed.clone();
        move || ModalState::new(&seed)
    });
    // Nested content components read the live state from context
    use_context_provider(|| state);

    // Effects registered once; they read the latest configuration through this cell
    let latest = use_hook(|| Rc::new(RefCell::new((config.clone(), context.clone()))));
    *latest.borrow_mut() = (config.clone(), context.clone());

    use_effect(use_reactive!(|seed| {
        if state.write().reinitialize(&seed) {
            tracing::debug!("Reinitialized modal state for a new configuration");
        }
    }));

    use_effect(use_reactive!(|open| {
        if open {
            state.write().reopen();
            let (config, context) = latest.borrow().clone();
            if let Some(on_open) = &config.on_open {
                on_open.call(&context);
            }
        }
    }));

    let ctx = ModalContext::new(config.clone(), context.clone(), state, on_close);

    let title = config.title.resolve(&context);
    let subtitle = config.subtitle.as_ref().map(|subtitle| subtitle.resolve(&context));
    let behavior = &config.behavior;
    let styling = config.styling.clone().unwrap_or_default();

    let mut class = theme::modal_width_class(styling.max_width.unwrap_or_default()).to_string();
    if behavior.show_indicator {
        class.push_str(" relative border-2 border-primary rounded-xl");
    }
    if behavior.scroll == ScrollMode::Body {
        class.push_str(" max-h-none");
    }
    if let Some(custom_class) = &styling.custom_class {
        class.push(' ');
        class.push_str(custom_class);
    }

    let body = match &config.content {
        ContentConfig::Form { .. } => rsx!(FormContent { ctx: ctx.clone() }),
        ContentConfig::Tabbed => rsx!(TabbedContent { ctx: ctx.clone() }),
        ContentConfig::Custom { content: Some(content) } => rsx!(RenderSlot { render: content.clone(), ctx: ctx.clone() }),
        ContentConfig::Custom { content: None } => rsx!(p { "Custom content placeholder" }),
    };

    let footer = if config.actions.buttons.is_empty() {
        None
    } else {
        Some(rsx!(ActionButtons { ctx: ctx.clone() }))
    };

    let dismiss_ctx = ctx.clone();

    rsx!(
        Dialog {
            open,
            on_dismiss: move |reason: DismissReason| {
                dismiss_ctx.dismiss(reason);
            },
            show_close_button: behavior.dismissible,
            full_screen: behavior.full_screen,
            class,
            style: styling.inline_style(),
            header: rsx!(
                if behavior.show_indicator {
                    ConfigIndicator {}
                }
                h2 {
                    class: if behavior.show_indicator { "font-bold text-lg mt-4" } else { "font-bold text-lg" },
                    "{title}"
                }
                if let Some(subtitle) = subtitle {
                    p {
                        class: "text-sm text-base-content/60 mt-1",
                        "{subtitle}"
                    }
                }
            ),
            footer,
            {body}
        }
    )
}
