use dioxus_logger::tracing;

use crate::client::component::modal_system::config::{
    ActionLayout, ActionsConfig, BehaviorConfig, ButtonAction, ButtonColor, ButtonConfig,
    ButtonVariant, ContentConfig, FieldConfig, FieldType, ModalConfig, ModalKind, ModalSize,
    StylingConfig, ValidationRules,
};

pub const ADD_ROLE_MODAL_ID: &str = "add-role-modal";

/// Compact form for creating a role: a required name and an optional description.
pub fn add_role_config() -> ModalConfig {
    ModalConfig {
        id: ADD_ROLE_MODAL_ID.to_string(),
        kind: ModalKind::Simple,
        title: "Add Role".into(),
        content: ContentConfig::Form {
            fields: vec![
                FieldConfig {
                    id: "role-name".to_string(),
                    name: "name".to_string(),
                    label: "Role Name".to_string(),
                    field_type: FieldType::Text,
                    placeholder: Some("Enter role name".to_string()),
                    required: true,
                    validation: Some(ValidationRules {
                        required: true,
                        min_length: Some(2),
                        max_length: Some(50),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                FieldConfig {
                    id: "role-description".to_string(),
                    name: "description".to_string(),
                    label: "Description".to_string(),
                    field_type: FieldType::Textarea,
                    placeholder: Some("Enter description of the role...".to_string()),
                    validation: Some(ValidationRules {
                        max_length: Some(500),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
            ],
        },
        actions: ActionsConfig {
            layout: ActionLayout::Left,
            buttons: vec![
                ButtonConfig {
                    id: "save-button".to_string(),
                    label: "SAVE".to_string(),
                    variant: ButtonVariant::Contained,
                    color: ButtonColor::Primary,
                    action: Some(ButtonAction::Submit),
                    ..Default::default()
                },
                ButtonConfig {
                    id: "cancel-button".to_string(),
                    label: "CANCEL".to_string(),
                    variant: ButtonVariant::Text,
                    color: ButtonColor::Primary,
                    action: Some(ButtonAction::Close),
                    ..Default::default()
                },
            ],
            ..Default::default()
        },
        behavior: BehaviorConfig {
            dismissible: true,
            show_indicator: true,
            ..Default::default()
        },
        styling: Some(StylingConfig {
            max_width: Some(ModalSize::Xs),
            ..Default::default()
        }),
        ..Default::default()
    }
    .with_close(|_| tracing::info!("Add role modal cancelled"))
    .with_submit(|data, _context| async move {
        tracing::info!("Role form submitted: {:?}", data);
        simulate_save().await;
        tracing::info!("Role created successfully");
        Ok(())
    })
}

#[cfg(feature = "web")]
async fn simulate_save() {
    gloo_timers::future::TimeoutFuture::new(1_000).await;
}

#[cfg(not(feature = "web"))]
async fn simulate_save() {}
