use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use super::{
    actions::{arrange_buttons, bar_classes, button_disabled, shows_spinner, ButtonArrangement},
    config::{
        ActionLayout, ActionsConfig, BehaviorConfig, ButtonAction, ButtonConfig, ButtonPosition,
        ContentConfig, ContextData, DynamicText, FieldConfig, FieldType, FieldValue, ModalConfig,
        ModalFormData, Pattern, RuleFn, SubmitFn, TabConfig, TabsConfig, ValidationRules,
    },
    controller::{self, SubmitOutcome},
    error::{ConfigError, SubmitError},
    overrides::{merge_config, ModalOverrides},
    state::{InitSeed, ModalPhase, ModalState},
    store::StateStore,
    tabbed::{active_index, visible_tabs},
    validation::{validate_field, validate_form},
};
use crate::client::{
    component::modal::DismissReason,
    config::{add_role_config, complex_document_config, contact::contact_request},
};

mod demo_configs;
mod reinitialize;
mod set_active_tab;
mod submit;
mod tabs;
mod validate_config;
mod validate_field;

fn text_field(name: &str, label: &str) -> FieldConfig {
    FieldConfig {
        id: format!("{}-field", name),
        name: name.to_string(),
        label: label.to_string(),
        ..Default::default()
    }
}

fn required_field(name: &str, label: &str) -> FieldConfig {
    FieldConfig {
        required: true,
        ..text_field(name, label)
    }
}

fn form_config(id: &str, fields: Vec<FieldConfig>) -> ModalConfig {
    ModalConfig {
        id: id.to_string(),
        title: "Test".into(),
        content: ContentConfig::Form { fields },
        ..Default::default()
    }
}

fn tab(id: &str) -> TabConfig {
    TabConfig {
        id: id.to_string(),
        label: id.to_uppercase(),
        ..Default::default()
    }
}

fn tabbed_config(id: &str, tabs: Vec<TabConfig>, default_tab: Option<&str>) -> ModalConfig {
    ModalConfig {
        id: id.to_string(),
        content: ContentConfig::Tabbed,
        tabs: Some(TabsConfig {
            items: tabs,
            default_tab: default_tab.map(str::to_string),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn button(id: &str, action: Option<ButtonAction>) -> ButtonConfig {
    ButtonConfig {
        id: id.to_string(),
        label: id.to_uppercase(),
        action,
        ..Default::default()
    }
}

fn store_for(config: &ModalConfig) -> Rc<RefCell<ModalState>> {
    Rc::new(RefCell::new(ModalState::new(&InitSeed::from_config(config))))
}

fn form_data(pairs: &[(&str, FieldValue)]) -> ModalFormData {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}
