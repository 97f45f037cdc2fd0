use std::rc::Rc;

use dioxus::prelude::{dioxus_core::spawn_forever, *};
use dioxus_logger::tracing;

use super::{
    config::{ButtonConfig, ContextData, FieldErrors, FieldValue, ModalConfig, ModalFormData},
    controller,
    state::ModalState,
};
use crate::client::component::modal::dialog::DismissReason;

/// Runtime context of one open modal, handed explicitly to every renderer.
///
/// Reads subscribe the calling component to state changes; mutators route
/// through the controller so configuration callbacks fire consistently.
#[derive(Clone, PartialEq)]
pub struct ModalContext {
    config: Rc<ModalConfig>,
    context: Rc<ContextData>,
    state: Signal<ModalState>,
    on_close: EventHandler<()>,
}

impl ModalContext {
    pub fn new(
        config: Rc<ModalConfig>,
        context: Rc<ContextData>,
        state: Signal<ModalState>,
        on_close: EventHandler<()>,
    ) -> Self {
        Self {
            config,
            context,
            state,
            on_close,
        }
    }

    pub fn config(&self) -> &ModalConfig {
        &self.config
    }

    pub fn context(&self) -> &ContextData {
        &self.context
    }

    pub fn form_data(&self) -> ModalFormData {
        self.state.read().form_data().clone()
    }

    pub fn value(&self, name: &str) -> Option<FieldValue> {
        self.state.read().value(name).cloned()
    }

    pub fn errors(&self) -> FieldErrors {
        self.state.read().errors().clone()
    }

    pub fn error(&self, name: &str) -> Option<String> {
        self.state.read().error(name).map(str::to_string)
    }

    pub fn is_submitting(&self) -> bool {
        self.state.read().is_submitting()
    }

    pub fn active_tab(&self) -> String {
        self.state.read().active_tab().to_string()
    }

    pub fn update_field(&self, name: &str, value: impl Into<FieldValue>) {
        controller::update_field(&self.state, &self.config, &self.context, name, value.into());
    }

    pub fn set_error(&self, name: &str, message: &str) {
        controller::set_error(&self.state, &self.config, name, message);
    }

    pub fn clear_error(&self, name: &str) {
        controller::clear_error(&self.state, &self.config, name);
    }

    pub fn set_active_tab(&self, tab_id: &str) {
        controller::set_active_tab(&self.state, &self.config, &self.context, tab_id);
    }

    /// Starts a submission that outlives this component, so a modal closed
    /// mid-submit still lets `on_submit` resolve.
    pub fn handle_submit(&self) {
        let ModalContext {
            config,
            context,
            state,
            on_close,
        } = self.clone();

        spawn_forever(async move {
            let outcome =
                controller::submit(&state, &config, &context, move || on_close.call(())).await;
            tracing::debug!("Modal '{}' submit finished: {:?}", config.id, outcome);
        });
    }

    pub fn handle_close(&self) {
        let on_close = self.on_close;
        controller::close(&self.state, &self.config, &self.context, move || {
            on_close.call(())
        });
    }

    /// Applies the closing gate to a dismissal attempt from the dialog shell.
    pub fn dismiss(&self, reason: DismissReason) -> bool {
        let on_close = self.on_close;
        controller::dismiss(&self.state, &self.config, &self.context, reason, move || {
            on_close.call(())
        })
    }

    pub fn press(&self, button: ButtonConfig) {
        let ModalContext {
            config,
            context,
            state,
            on_close,
        } = self.clone();

        spawn_forever(async move {
            controller::press(&state, &config, &context, &button, move || on_close.call(())).await;
        });
    }
}
