//! State transitions of one modal instance.
//!
//! Each transition takes the instance's `StateStore`, the effective
//! configuration and the caller context, mutates state through `ModalState`'s
//! named methods and then invokes the configuration callbacks. Nothing here
//! touches the UI, so the same code drives the component and the tests.

use dioxus_logger::tracing;

use super::{
    config::{ButtonAction, ButtonConfig, ClickFn, ContextData, FieldErrors, FieldValue, ModalConfig},
    error::SubmitError,
    state::{ModalState, SubmitStep},
    store::StateStore,
};
use crate::client::component::modal::dialog::DismissReason;

/// Result of a submit attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Another submission was already running; nothing happened.
    Busy,
    /// The form failed validation; `on_submit` was not called.
    Invalid(FieldErrors),
    /// `on_submit` succeeded and the caller's close callback ran.
    Submitted,
    /// `on_submit` failed; the modal stays open.
    Failed(SubmitError),
    /// The modal was torn down before the submission could complete.
    Abandoned,
}

fn torn_down(modal_id: &str, action: &str) {
    tracing::debug!(
        "Ignoring {} for modal '{}': state has been torn down",
        action,
        modal_id
    );
}

pub fn update_field<S: StateStore>(
    store: &S,
    config: &ModalConfig,
    context: &ContextData,
    name: &str,
    value: FieldValue,
) {
    if store
        .modify(|state| state.update_field(name, value.clone()))
        .is_none()
    {
        return torn_down(&config.id, "field update");
    }

    if let Some(on_change) = &config.on_change {
        on_change.call(name, &value, context);
    }
}

pub fn set_active_tab<S: StateStore>(
    store: &S,
    config: &ModalConfig,
    context: &ContextData,
    tab_id: &str,
) {
    if store.modify(|state| state.set_active_tab(tab_id)).is_none() {
        return torn_down(&config.id, "tab change");
    }

    if let Some(on_tab_change) = &config.on_tab_change {
        on_tab_change.call(tab_id, context);
    }
}

pub fn set_error<S: StateStore>(store: &S, config: &ModalConfig, name: &str, message: &str) {
    if store.modify(|state| state.set_error(name, message)).is_none() {
        torn_down(&config.id, "error update");
    }
}

pub fn clear_error<S: StateStore>(store: &S, config: &ModalConfig, name: &str) {
    if store.modify(|state| state.clear_error(name)).is_none() {
        torn_down(&config.id, "error update");
    }
}

/// Single-flight submit.
///
/// Validates form content, awaits `on_submit` and on success hands control to
/// the caller's `on_close`. Failures from `on_submit` are logged and leave the
/// modal open.
pub async fn submit<S: StateStore>(
    store: &S,
    config: &ModalConfig,
    context: &ContextData,
    on_close: impl FnOnce(),
) -> SubmitOutcome {
    let Some(step) = store.modify(|state| state.begin_submit(&config.content)) else {
        torn_down(&config.id, "submit");
        return SubmitOutcome::Abandoned;
    };

    let data = match step {
        SubmitStep::Busy => return SubmitOutcome::Busy,
        SubmitStep::Invalid(errors) => {
            tracing::debug!(
                "Modal '{}' submission blocked by {} invalid field(s)",
                config.id,
                errors.len()
            );
            return SubmitOutcome::Invalid(errors);
        }
        SubmitStep::Proceed(data) => data,
    };

    let result = match &config.on_submit {
        Some(on_submit) => on_submit.call(data, context.clone()).await,
        None => Ok(()),
    };

    if let Err(err) = &result {
        tracing::error!("Modal submission error: {}", err);
    }

    if store
        .modify(|state| state.finish_submit(result.is_ok()))
        .is_none()
    {
        torn_down(&config.id, "submit completion");
        return SubmitOutcome::Abandoned;
    }

    match result {
        Ok(()) => {
            on_close();
            SubmitOutcome::Submitted
        }
        Err(err) => SubmitOutcome::Failed(err),
    }
}

/// Runs the configuration's `on_close`, then the caller's close callback.
pub fn close<S: StateStore>(
    store: &S,
    config: &ModalConfig,
    context: &ContextData,
    on_close: impl FnOnce(),
) {
    if let Some(config_on_close) = &config.on_close {
        config_on_close.call(context);
    }

    if store.modify(ModalState::close).is_none() {
        torn_down(&config.id, "close");
    }

    on_close();
}

/// Closing gate in front of `close`. Returns whether the modal was closed.
pub fn dismiss<S: StateStore>(
    store: &S,
    config: &ModalConfig,
    context: &ContextData,
    reason: DismissReason,
    on_close: impl FnOnce(),
) -> bool {
    let submitting = store.inspect(ModalState::is_submitting).unwrap_or(true);
    let allowed = reason.is_allowed(
        config.behavior.disable_backdrop_click,
        config.behavior.disable_escape_key_down,
    );

    if submitting || !allowed {
        tracing::debug!("Modal '{}' ignored dismissal by {:?}", config.id, reason);
        return false;
    }

    close(store, config, context, on_close);
    true
}

async fn run_handler(config: &ModalConfig, button_id: &str, handler: &ClickFn) -> Result<(), SubmitError> {
    let result = handler.call().await;
    if let Err(err) = &result {
        tracing::error!(
            "Modal '{}' button '{}' handler error: {}",
            config.id,
            button_id,
            err
        );
    }
    result
}

/// Dispatches an action button press. Returns whether the button acted.
///
/// Disabled buttons, inert buttons and every button during a submission are
/// ignored.
pub async fn press<S: StateStore>(
    store: &S,
    config: &ModalConfig,
    context: &ContextData,
    button: &ButtonConfig,
    on_close: impl FnOnce(),
) -> bool {
    let submitting = store.inspect(ModalState::is_submitting).unwrap_or(true);
    if button.disabled || submitting {
        return false;
    }

    match &button.action {
        None => false,
        Some(ButtonAction::Submit) => {
            submit(store, config, context, on_close).await;
            true
        }
        Some(ButtonAction::Close) => {
            close(store, config, context, on_close);
            true
        }
        Some(ButtonAction::Handler(handler)) => {
            let _ = run_handler(config, &button.id, handler).await;
            true
        }
    }
}
