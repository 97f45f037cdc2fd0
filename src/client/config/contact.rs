use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::component::modal_system::{
        config::{
            ActionLayout, ActionsConfig, BehaviorConfig, ButtonAction, ButtonConfig,
            ButtonPosition, ButtonVariant, ContentConfig, FieldConfig, FieldOption, FieldType,
            ModalConfig, ModalFormData, ModalSize, Pattern, StylingConfig, ValidationRules,
        },
        SubmitError,
    },
    model::form::ContactRequestDto,
};

pub const CONTACT_MODAL_ID: &str = "contact-form-modal";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Builds the request body from the submitted form values.
pub fn contact_request(data: &ModalFormData) -> ContactRequestDto {
    let text = |name: &str| data.get(name).map(ToString::to_string).unwrap_or_default();

    ContactRequestDto {
        name: text("name"),
        email: text("email"),
        message: text("message"),
    }
}

fn contact_fields() -> Vec<FieldConfig> {
    let email_pattern = Pattern::new(EMAIL_PATTERN).ok();

    vec![
        FieldConfig {
            id: "contact-name".to_string(),
            name: "name".to_string(),
            label: "Name".to_string(),
            placeholder: Some("Your name".to_string()),
            required: true,
            validation: Some(ValidationRules {
                min_length: Some(2),
                ..Default::default()
            }),
            ..Default::default()
        },
        FieldConfig {
            id: "contact-email".to_string(),
            name: "email".to_string(),
            label: "Email".to_string(),
            field_type: FieldType::Email,
            placeholder: Some("you@example.com".to_string()),
            required: true,
            validation: Some(ValidationRules {
                pattern: email_pattern,
                ..Default::default()
            }),
            ..Default::default()
        },
        FieldConfig {
            id: "contact-priority".to_string(),
            name: "priority".to_string(),
            label: "Priority".to_string(),
            field_type: FieldType::Select,
            options: vec![
                FieldOption::new("Low", "low"),
                FieldOption::new("Medium", "medium"),
                FieldOption::new("High", "high"),
            ],
            default_value: Some("medium".into()),
            ..Default::default()
        },
        FieldConfig {
            id: "contact-category".to_string(),
            name: "category".to_string(),
            label: "Category".to_string(),
            field_type: FieldType::Radio,
            options: vec![
                FieldOption::new("Bug", "bug"),
                FieldOption::new("Feature", "feature"),
                FieldOption::new("Question", "question"),
                FieldOption::new("Other", "other"),
            ],
            default_value: Some("question".into()),
            ..Default::default()
        },
        FieldConfig {
            id: "contact-message".to_string(),
            name: "message".to_string(),
            label: "Message".to_string(),
            field_type: FieldType::Textarea,
            placeholder: Some("How can we help?".to_string()),
            helper_text: Some("At least 10 characters".to_string()),
            required: true,
            validation: Some(ValidationRules {
                min_length: Some(10),
                max_length: Some(1000),
                ..Default::default()
            }),
            ..Default::default()
        },
        FieldConfig {
            id: "contact-newsletter".to_string(),
            name: "newsletter".to_string(),
            label: "Send me product updates".to_string(),
            field_type: FieldType::Checkbox,
            ..Default::default()
        },
    ]
}

/// Contact form posting to `/api/contact`.
///
/// Server failures are written to `server_error`, which the page renders as a
/// banner; a successful submission clears it.
pub fn contact_config(server_error: Signal<Option<String>>) -> ModalConfig {
    ModalConfig {
        id: CONTACT_MODAL_ID.to_string(),
        title: "Contact Support".into(),
        subtitle: Some("We usually answer within a day".into()),
        content: ContentConfig::Form {
            fields: contact_fields(),
        },
        actions: ActionsConfig {
            layout: ActionLayout::Split,
            buttons: vec![
                ButtonConfig {
                    id: "contact-cancel".to_string(),
                    label: "Cancel".to_string(),
                    variant: ButtonVariant::Outlined,
                    action: Some(ButtonAction::Close),
                    position: ButtonPosition::Left,
                    ..Default::default()
                },
                ButtonConfig {
                    id: "contact-send".to_string(),
                    label: "Send".to_string(),
                    action: Some(ButtonAction::Submit),
                    ..Default::default()
                },
            ],
            ..Default::default()
        },
        behavior: BehaviorConfig {
            disable_backdrop_click: true,
            ..Default::default()
        },
        styling: Some(StylingConfig {
            max_width: Some(ModalSize::Md),
            ..Default::default()
        }),
        ..Default::default()
    }
    .with_open(move |_| {
        let mut server_error = server_error;
        server_error.set(None);
    })
    .with_submit(move |data, _context| {
        let mut server_error = server_error;
        let payload = contact_request(&data);
        async move {
            match send_contact(&payload).await {
                Ok(()) => {
                    server_error.set(None);
                    Ok(())
                }
                Err(err) => {
                    if let SubmitError::Request { message, .. } = &err {
                        server_error.set(Some(message.clone()));
                    }
                    Err(err)
                }
            }
        }
    })
}

#[cfg(feature = "web")]
async fn send_contact(payload: &ContactRequestDto) -> Result<(), SubmitError> {
    let response = crate::client::api::contact::submit_contact(payload)
        .await
        .map_err(|err| SubmitError::Request {
            status: err.status,
            message: err.message,
        })?;
    tracing::info!("Contact request accepted: {}", response.ticket_id);
    Ok(())
}

#[cfg(not(feature = "web"))]
async fn send_contact(payload: &ContactRequestDto) -> Result<(), SubmitError> {
    tracing::warn!("Contact request from {} not sent: no HTTP client", payload.email);
    Ok(())
}
