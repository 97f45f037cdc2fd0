use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    component::{
        modal_system::{
            config::{
                ActionsConfig, BehaviorConfig, ButtonAction, ButtonConfig, ButtonVariant,
                ContentConfig, DynamicText, IconName, ModalConfig, ModalSize, StylingConfig,
            },
            ContextData, ModalContext, ModalOverrides, ModalSystem,
        },
        Page, StoryCard,
    },
    config::{add_role_config, complex_document_config, contact_config},
};

const ADD_ROLE_DESCRIPTION: &str = "\
Compact form with a required **Role Name** (2 to 50 characters) and an optional \
description. Submitting simulates a one second save and closes the dialog.";

const COMPLEX_DOCUMENT_DESCRIPTION: &str = "\
Extra-large **tabbed** configuration. Title and subtitle are computed from the \
caller context (`documentTitle`, `status`); the history tab is hidden.";

const CONTACT_DESCRIPTION: &str = "\
Posts to `POST /api/contact`. Use a name containing *error* to get a server \
failure, which the page shows in its own banner while the dialog stays open.";

const JSON_DESCRIPTION: &str = "\
The data part of a configuration can be loaded with `ModalConfig::from_json`; \
callbacks are attached afterwards.";

const CUSTOM_DESCRIPTION: &str = "\
Custom content receives the `ModalContext`. The **Copy link** button runs its \
own asynchronous handler instead of submitting.";

const INTERACTIVE_DESCRIPTION: &str = "\
Pick a configuration and adjust its behaviour through `ModalOverrides`.";

const FEEDBACK_JSON: &str = r##"{
    "id": "feedback-modal",
    "title": "Send Feedback",
    "subtitle": "Loaded from JSON",
    "content": {
        "type": "form",
        "fields": [
            {
                "id": "feedback-rating",
                "name": "rating",
                "label": "Rating",
                "type": "select",
                "required": true,
                "placeholder": "How was it?",
                "options": [
                    { "label": "Great", "value": "great" },
                    { "label": "Okay", "value": "okay" },
                    { "label": "Poor", "value": "poor" }
                ]
            },
            {
                "id": "feedback-comment",
                "name": "comment",
                "label": "Comment",
                "type": "textarea",
                "validation": { "maxLength": 200 }
            },
            {
                "id": "feedback-contact",
                "name": "contactMe",
                "label": "You may contact me",
                "type": "checkbox"
            }
        ]
    },
    "actions": {
        "buttons": [
            { "id": "feedback-close", "label": "Close", "variant": "text", "action": "close" },
            { "id": "feedback-send", "label": "Send", "action": "submit", "endIcon": "check" }
        ]
    },
    "styling": {
        "maxWidth": "sm",
        "border": { "color": "#1e88e5", "width": 2, "style": "solid" }
    }
}"##;

#[component]
pub fn ModalSystemStories() -> Element {
    rsx! {
        Title { "ModalSystem | Modal System" }
        Page {
            class: "max-w-4xl mx-auto",
            heading: "ModalSystem",
            AddRoleStory {}
            ComplexDocumentStory {}
            ContactStory {}
            JsonStory {}
            CustomContentStory {}
            InteractiveStory {}
        }
    }
}

#[component]
fn AddRoleStory() -> Element {
    let mut open = use_signal(|| false);
    let config = use_hook(add_role_config);

    rsx!(
        StoryCard {
            title: "Add Role",
            description: ADD_ROLE_DESCRIPTION,
            button {
                class: "btn btn-primary btn-sm",
                onclick: move |_| open.set(true),
                "Add Role"
            }
        }
        ModalSystem {
            config,
            open: open(),
            on_close: move |_| open.set(false),
        }
    )
}

fn document_context() -> ContextData {
    let mut context = ContextData::new();
    context.insert(
        "documentTitle".to_string(),
        "Business Continuity and Disaster Recovery Plan".into(),
    );
    context.insert("status".to_string(), "IN REVIEW".into());
    context
}

#[component]
fn ComplexDocumentStory() -> Element {
    let mut open = use_signal(|| false);
    let config = use_hook(complex_document_config);

    rsx!(
        StoryCard {
            title: "Complex Document",
            description: COMPLEX_DOCUMENT_DESCRIPTION,
            button {
                class: "btn btn-primary btn-sm",
                onclick: move |_| open.set(true),
                "Open document"
            }
        }
        ModalSystem {
            config,
            open: open(),
            on_close: move |_| open.set(false),
            context: document_context(),
        }
    )
}

#[component]
fn ContactStory() -> Element {
    let mut open = use_signal(|| false);
    let server_error = use_signal(|| None::<String>);
    let config = use_hook(|| contact_config(server_error));

    let overrides = server_error().map(|message| ModalOverrides {
        subtitle: Some(DynamicText::from(format!("Could not send your message: {}", message))),
        ..Default::default()
    });

    rsx!(
        StoryCard {
            title: "Contact Form",
            description: CONTACT_DESCRIPTION,
            button {
                class: "btn btn-primary btn-sm",
                onclick: move |_| open.set(true),
                "Contact support"
            }
            if let Some(message) = server_error() {
                div {
                    role: "alert",
                    class: "alert alert-error text-sm",
                    "{message}"
                }
            }
        }
        ModalSystem {
            config,
            open: open(),
            on_close: move |_| open.set(false),
            overrides,
        }
    )
}

#[component]
fn JsonStory() -> Element {
    let mut open = use_signal(|| false);
    let config = use_hook(|| {
        ModalConfig::from_json(FEEDBACK_JSON).map(|config| {
            config.with_submit(|data, _| async move {
                tracing::info!("Feedback received: {:?}", data);
                Ok(())
            })
        })
    });

    match config {
        Ok(config) => rsx!(
            StoryCard {
                title: "From JSON",
                description: JSON_DESCRIPTION,
                button {
                    class: "btn btn-primary btn-sm",
                    onclick: move |_| open.set(true),
                    "Give feedback"
                }
            }
            ModalSystem {
                config,
                open: open(),
                on_close: move |_| open.set(false),
            }
        ),
        Err(err) => rsx!(
            StoryCard {
                title: "From JSON",
                description: JSON_DESCRIPTION,
                div { class: "alert alert-error", "{err}" }
            }
        ),
    }
}

fn share_panel(ctx: ModalContext) -> Element {
    let owner = ctx
        .context()
        .get("owner")
        .and_then(|value| value.as_str())
        .unwrap_or("nobody")
        .to_string();
    let busy = ctx.is_submitting();

    rsx!(
        div {
            class: "flex flex-col gap-3",
            p { "This board is owned by {owner}." }
            div {
                class: "mockup-code text-xs",
                pre { code { "https://example.com/boards/42" } }
            }
            if busy {
                span { class: "loading loading-dots loading-sm" }
            }
        }
    )
}

fn share_config() -> ModalConfig {
    ModalConfig {
        id: "share-modal".to_string(),
        title: "Share board".into(),
        content: ContentConfig::custom(share_panel),
        actions: ActionsConfig {
            buttons: vec![
                ButtonConfig {
                    id: "share-copy".to_string(),
                    label: "Copy link".to_string(),
                    variant: ButtonVariant::Outlined,
                    start_icon: Some(IconName::Paperclip),
                    action: Some(ButtonAction::handler(|| async {
                        tracing::info!("Share link copied");
                        Ok(())
                    })),
                    ..Default::default()
                },
                ButtonConfig {
                    id: "share-done".to_string(),
                    label: "Done".to_string(),
                    action: Some(ButtonAction::Close),
                    ..Default::default()
                },
            ],
            ..Default::default()
        },
        styling: Some(StylingConfig {
            max_width: Some(ModalSize::Sm),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[component]
fn CustomContentStory() -> Element {
    let mut open = use_signal(|| false);
    let config = use_hook(share_config);

    let mut context = ContextData::new();
    context.insert("owner".to_string(), "Jane Smith".into());

    rsx!(
        StoryCard {
            title: "Custom content",
            description: CUSTOM_DESCRIPTION,
            button {
                class: "btn btn-primary btn-sm",
                onclick: move |_| open.set(true),
                "Share"
            }
        }
        ModalSystem {
            config,
            open: open(),
            on_close: move |_| open.set(false),
            context,
        }
    )
}

#[derive(Clone, Copy, PartialEq)]
enum DemoChoice {
    AddRole,
    Document,
    Share,
}

#[component]
fn InteractiveStory() -> Element {
    let mut open = use_signal(|| false);
    let mut choice = use_signal(|| DemoChoice::AddRole);
    let mut dismissible = use_signal(|| true);
    let mut show_indicator = use_signal(|| true);
    let mut full_screen = use_signal(|| false);

    let configs = use_hook(|| (add_role_config(), complex_document_config(), share_config()));
    let config = match choice() {
        DemoChoice::AddRole => configs.0.clone(),
        DemoChoice::Document => configs.1.clone(),
        DemoChoice::Share => configs.2.clone(),
    };

    let overrides = ModalOverrides {
        behavior: Some(BehaviorConfig {
            dismissible: dismissible(),
            show_indicator: show_indicator(),
            full_screen: full_screen(),
            ..config.behavior.clone()
        }),
        ..Default::default()
    };

    rsx!(
        StoryCard {
            title: "Interactive demo",
            description: INTERACTIVE_DESCRIPTION,
            div {
                class: "flex flex-wrap items-center gap-4",
                select {
                    class: "select select-bordered select-sm",
                    onchange: move |evt| {
                        choice.set(match evt.value().as_str() {
                            "document" => DemoChoice::Document,
                            "share" => DemoChoice::Share,
                            _ => DemoChoice::AddRole,
                        });
                    },
                    option { value: "add-role", selected: choice() == DemoChoice::AddRole, "Add Role" }
                    option { value: "document", selected: choice() == DemoChoice::Document, "Complex Document" }
                    option { value: "share", selected: choice() == DemoChoice::Share, "Custom content" }
                }
                label {
                    class: "label cursor-pointer gap-2",
                    input {
                        r#type: "checkbox",
                        class: "toggle toggle-sm",
                        checked: dismissible(),
                        onchange: move |evt| dismissible.set(evt.checked()),
                    }
                    span { class: "label-text", "Dismissible" }
                }
                label {
                    class: "label cursor-pointer gap-2",
                    input {
                        r#type: "checkbox",
                        class: "toggle toggle-sm",
                        checked: show_indicator(),
                        onchange: move |evt| show_indicator.set(evt.checked()),
                    }
                    span { class: "label-text", "Indicator" }
                }
                label {
                    class: "label cursor-pointer gap-2",
                    input {
                        r#type: "checkbox",
                        class: "toggle toggle-sm",
                        checked: full_screen(),
                        onchange: move |evt| full_screen.set(evt.checked()),
                    }
                    span { class: "label-text", "Full screen" }
                }
                button {
                    class: "btn btn-primary btn-sm",
                    onclick: move |_| open.set(true),
                    "Open"
                }
            }
        }
        ModalSystem {
            config,
            open: open(),
            on_close: move |_| open.set(false),
            context: document_context(),
            overrides,
        }
    )
}
