use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::component::{
    icon::NamedIcon,
    modal_system::{
        config::{
            ActionLayout, ActionsConfig, BadgeValue, BehaviorConfig, ButtonAction, ButtonColor,
            ButtonConfig, ButtonVariant, ContentConfig, DynamicText, IconName, ModalConfig, ModalKind,
            ModalSize, RenderFn, StylingConfig, TabConfig, TabVariant, TabsConfig,
        },
        ModalContext,
    },
};

pub const COMPLEX_DOCUMENT_MODAL_ID: &str = "complex-document-modal";

const PREVIEW_NOTICE: &str = "This feature is part of a Preview Release of FutureFeed Maintain...";

#[component]
fn Section(title: &'static str, children: Element) -> Element {
    rsx!(
        div {
            class: "border border-base-300 rounded-box p-4 mb-4",
            h4 { class: "font-semibold text-sm mb-2", "{title}" }
            {children}
        }
    )
}

#[component]
fn EmptyList(title: &'static str, action: &'static str, message: &'static str) -> Element {
    rsx!(
        Section {
            title,
            div {
                class: "flex justify-end mb-2",
                button {
                    r#type: "button",
                    class: "btn btn-ghost btn-xs text-primary",
                    NamedIcon { name: IconName::Plus, size: 12 }
                    "{action}"
                }
            }
            div {
                class: "grid grid-cols-3 gap-2 text-xs text-base-content/60 mb-1",
                span { "Name" }
                span { "Role" }
                span { "Actions" }
            }
            p { class: "text-center text-sm p-2", "{message}" }
        }
    )
}

fn overview_tab(ctx: ModalContext) -> Element {
    let document = ctx
        .context()
        .get("documentTitle")
        .and_then(|value| value.as_str())
        .unwrap_or("Business Continuity and Disaster Recovery Plan")
        .to_string();

    rsx!(
        div {
            class: "grid grid-cols-1 md:grid-cols-3 gap-6 p-2",
            div {
                div {
                    class: "mb-4",
                    p { class: "text-xs text-base-content/60 mb-1", "Document Title" }
                    input {
                        r#type: "text",
                        class: "input input-bordered input-sm w-full",
                        value: "{document}",
                        readonly: true,
                    }
                }
                Section {
                    title: "RACI",
                    div {
                        class: "flex gap-2",
                        for letter in ["R", "A", "C", "I"] {
                            div {
                                class: "avatar placeholder",
                                div {
                                    class: "bg-primary text-primary-content w-8 rounded-full",
                                    span { class: "text-sm font-bold", "{letter}" }
                                }
                            }
                        }
                    }
                }
                Section {
                    title: "Accountable Oversight",
                    div {
                        class: "flex items-center gap-2",
                        NamedIcon { name: IconName::User, size: 14 }
                        div {
                            p { class: "text-sm font-medium", "Incident Team Lead" }
                            p { class: "text-xs text-base-content/60", "Dimitris Dovinos" }
                        }
                    }
                }
                Section {
                    title: "Notes",
                    textarea {
                        class: "textarea textarea-bordered textarea-sm w-full",
                        rows: "4",
                        placeholder: "Add notes here...",
                    }
                }
            }
            div {
                Section {
                    title: "Live Document",
                    div {
                        class: "h-64 bg-base-200 rounded flex flex-col items-center justify-center gap-3",
                        p { class: "text-sm text-base-content/60", "PDF Preview" }
                        div {
                            class: "flex gap-2",
                            button { r#type: "button", class: "btn btn-square btn-sm", NamedIcon { name: IconName::Eye } }
                            button { r#type: "button", class: "btn btn-square btn-sm", NamedIcon { name: IconName::Pen } }
                        }
                    }
                }
                Section {
                    title: "Attachments",
                    div {
                        class: "flex items-center gap-2 text-sm text-base-content/60",
                        NamedIcon { name: IconName::Paperclip, size: 14 }
                        "No attachments"
                    }
                }
            }
            div {
                Section {
                    title: "Ratings",
                    p { class: "text-sm", "Suitability" }
                    div {
                        class: "rating rating-sm mb-2",
                        for star in 1..=5 {
                            input {
                                r#type: "radio",
                                class: "mask mask-star-2 bg-warning",
                                name: "suitability",
                                checked: star == 3,
                                readonly: true,
                            }
                        }
                    }
                    p { class: "text-sm", "Experience" }
                    p { class: "text-xs text-base-content/60", "No rating yet" }
                    p { class: "text-sm font-semibold mt-2", "Overall Rating" }
                }
                Section {
                    title: "Next Review Date",
                    div {
                        class: "flex items-center gap-2 text-sm",
                        NamedIcon { name: IconName::Calendar, size: 14 }
                        "Sun, Nov 19"
                    }
                }
            }
        }
    )
}

fn connect_tab(_ctx: ModalContext) -> Element {
    rsx!(
        div {
            class: "p-2",
            div { class: "alert alert-info text-sm mb-4", "{PREVIEW_NOTICE}" }
            Section {
                title: "Manage Tags",
                div {
                    class: "flex gap-2 flex-wrap",
                    span { class: "badge badge-primary", "CMMC" }
                    span { class: "badge badge-primary", "ISO 27001" }
                }
            }
            EmptyList { title: "Leaders", action: "Add Leader", message: "No leaders assigned" }
            EmptyList { title: "Followers", action: "Add Follower", message: "No followers assigned" }
        }
    )
}

fn search_panel(action: &'static str, icon: IconName, empty: &'static str) -> Element {
    rsx!(
        div {
            class: "p-2",
            div { class: "alert alert-info text-sm mb-4", "{PREVIEW_NOTICE}" }
            div {
                class: "flex justify-between items-center gap-4 mb-4",
                label {
                    class: "input input-bordered input-sm flex items-center gap-2",
                    NamedIcon { name: IconName::Search, size: 14 }
                    input { r#type: "text", class: "grow", placeholder: "Search..." }
                }
                button {
                    r#type: "button",
                    class: "btn btn-primary btn-sm",
                    NamedIcon { name: icon, size: 14 }
                    "{action}"
                }
            }
            div {
                class: "border border-base-300 rounded-box p-8 text-center text-sm text-base-content/60",
                "{empty}"
            }
        }
    )
}

fn tasks_tab(_ctx: ModalContext) -> Element {
    search_panel("ASSIGN NEW TASK", IconName::Tasks, "No outstanding tasks found")
}

fn evidence_tab(_ctx: ModalContext) -> Element {
    search_panel("ADD EVIDENCE", IconName::Paperclip, "No evidence found")
}

fn tab(id: &str, label: &str, content: fn(ModalContext) -> Element) -> TabConfig {
    TabConfig {
        id: id.to_string(),
        label: label.to_string(),
        content: Some(RenderFn::new(content)),
        ..Default::default()
    }
}

/// Extra-large document view built on tabbed content.
///
/// Reads `documentTitle` and `status` from the caller context.
pub fn complex_document_config() -> ModalConfig {
    ModalConfig {
        id: COMPLEX_DOCUMENT_MODAL_ID.to_string(),
        kind: ModalKind::Tabbed,
        title: DynamicText::computed(|context| {
            context
                .get("documentTitle")
                .and_then(|value| value.as_str())
                .unwrap_or("Business Continuity and Disaster Recovery Plan")
                .to_string()
        }),
        subtitle: Some(DynamicText::computed(
            |context| {
                let status = context
                    .get("status")
                    .and_then(|value| value.as_str())
                    .unwrap_or("DRAFT");
                format!("Plans · {}", status)
            },
        )),
        content: ContentConfig::Tabbed,
        tabs: Some(TabsConfig {
            items: vec![
                tab("overview", "OVERVIEW", overview_tab),
                tab("connect", "CONNECT", connect_tab),
                TabConfig {
                    badge: Some(BadgeValue::Count(0)),
                    ..tab("tasks", "TASK ASSIGNMENTS (CREATE EVIDENCE)", tasks_tab)
                },
                TabConfig {
                    icon: Some(IconName::Paperclip),
                    ..tab("evidence", "EVIDENCE", evidence_tab)
                },
                TabConfig {
                    id: "history".to_string(),
                    label: "HISTORY".to_string(),
                    hidden: true,
                    ..Default::default()
                },
            ],
            default_tab: Some("overview".to_string()),
            variant: TabVariant::Scrollable,
            ..Default::default()
        }),
        actions: ActionsConfig {
            layout: ActionLayout::Right,
            buttons: vec![
                ButtonConfig {
                    id: "close-button".to_string(),
                    label: "CLOSE".to_string(),
                    variant: ButtonVariant::Text,
                    color: ButtonColor::Primary,
                    action: Some(ButtonAction::Close),
                    ..Default::default()
                },
                ButtonConfig {
                    id: "save-button".to_string(),
                    label: "SAVE CHANGES".to_string(),
                    variant: ButtonVariant::Contained,
                    color: ButtonColor::Primary,
                    start_icon: Some(IconName::Save),
                    action: Some(ButtonAction::Submit),
                    ..Default::default()
                },
            ],
            ..Default::default()
        },
        behavior: BehaviorConfig {
            dismissible: true,
            ..Default::default()
        },
        styling: Some(StylingConfig {
            max_width: Some(ModalSize::Xl),
            ..Default::default()
        }),
        ..Default::default()
    }
    .with_tab_change(|tab_id, _| tracing::debug!("Document tab changed to {}", tab_id))
    .with_submit(|_, context| async move {
        tracing::info!("Document saved: {:?}", context.get("documentTitle"));
        Ok(())
    })
}
