use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{Modal, ModalAction, ModalVariant, Page, StoryCard},
        model::{cache::Cache, error::ApiError},
    },
    model::{
        notification::{NotificationDto, NotificationKind},
        user::{DeleteUserResponseDto, UserDto},
    },
};

#[cfg(feature = "web")]
use crate::client::api::{
    notification::{get_notifications, mark_notification_read},
    user::{delete_user, get_users},
};

const VARIANTS: [(ModalVariant, &str, &str); 5] = [
    (ModalVariant::Success, "Success", "Your changes have been saved."),
    (ModalVariant::Warning, "Warning", "You have unsaved changes that will be lost."),
    (ModalVariant::Error, "Error", "The operation could not be completed."),
    (ModalVariant::Info, "Info", "A new version is available."),
    (ModalVariant::Default, "Default", "A plain dialog without an icon."),
];

const VARIANTS_DESCRIPTION: &str = "\
Each **variant** picks an icon, the colour of the top border and the default \
colour of the primary action.";

const LOCKED_DESCRIPTION: &str = "\
With `disable_backdrop_click` and `disable_escape_key_down` set and no close \
button, only the actions can close the dialog.";

const DELETE_DESCRIPTION: &str = "\
Confirmation that calls `DELETE /api/users/{id}` on the mock API. Deleting \
**Error User** returns `USER_HAS_ACTIVE_PROJECTS`.";

const NOTIFICATIONS_DESCRIPTION: &str = "\
Notifications from `GET /api/notifications`. Each opens in the variant that \
matches its type; unread ones can be marked as read.";

#[component]
pub fn ModalStories() -> Element {
    rsx! {
        Title { "Modal | Modal System" }
        Page {
            class: "max-w-4xl mx-auto",
            heading: "Modal",
            VariantStory {}
            LockedStory {}
            DeleteUserStory {}
            NotificationStory {}
        }
    }
}

#[component]
fn VariantStory() -> Element {
    let mut open_variant = use_signal(|| None::<ModalVariant>);

    let current = open_variant();
    let (variant, label, message) = VARIANTS
        .iter()
        .copied()
        .find(|(variant, _, _)| Some(*variant) == current)
        .unwrap_or(VARIANTS[4]);

    rsx!(
        StoryCard {
            title: "Variants",
            description: VARIANTS_DESCRIPTION,
            for (variant, label, _) in VARIANTS {
                button {
                    class: "btn btn-outline btn-sm",
                    onclick: move |_| open_variant.set(Some(variant)),
                    "{label}"
                }
            }
        }
        Modal {
            open: current.is_some(),
            on_close: move |_| open_variant.set(None),
            title: label.to_string(),
            variant,
            primary_action: ModalAction::new("OK", EventHandler::new(move |_| open_variant.set(None))),
            p { "{message}" }
        }
    )
}

#[component]
fn LockedStory() -> Element {
    let mut open = use_signal(|| false);
    let mut answer = use_signal(|| None::<&'static str>);

    rsx!(
        StoryCard {
            title: "Locked dialog",
            description: LOCKED_DESCRIPTION,
            button {
                class: "btn btn-outline btn-sm",
                onclick: move |_| open.set(true),
                "Show terms"
            }
            if let Some(answer) = answer() {
                span { class: "badge badge-ghost", "{answer}" }
            }
        }
        Modal {
            open: open(),
            on_close: move |_| open.set(false),
            title: "Terms of service".to_string(),
            variant: ModalVariant::Info,
            show_close_button: false,
            disable_backdrop_click: true,
            disable_escape_key_down: true,
            primary_action: ModalAction::new(
                "I agree",
                EventHandler::new(move |_| {
                    answer.set(Some("Accepted"));
                    open.set(false);
                }),
            ),
            secondary_action: ModalAction::new(
                "Decline",
                EventHandler::new(move |_| {
                    answer.set(Some("Declined"));
                    open.set(false);
                }),
            ),
            p { "Please read and accept the terms to continue." }
        }
    )
}

#[component]
fn DeleteUserStory() -> Element {
    let mut users = use_signal(Cache::<Vec<UserDto>>::default);
    let mut target = use_signal(|| None::<UserDto>);
    let mut deleting = use_signal(|| false);
    let mut outcome = use_signal(|| None::<Result<DeleteUserResponseDto, ApiError>>);

    #[cfg(feature = "web")]
    use_hook(move || {
        users.set(Cache::Loading);
        spawn(async move {
            let result = get_users().await;
            if let Err(err) = &result {
                tracing::error!("Failed to fetch users: {}", err);
            }
            users.set(Cache::from(result));
        });
    });

    let confirm = move |_| {
        let Some(user) = target() else {
            return;
        };
        if deleting() {
            return;
        }
        deleting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let result = delete_user(&user.id).await;
            match &result {
                Ok(response) => tracing::info!("Deleted user {}", response.user_id),
                Err(err) => tracing::error!("Failed to delete user {}: {}", user.id, err),
            }
            outcome.set(Some(result));
            deleting.set(false);
            target.set(None);
        });

        #[cfg(not(feature = "web"))]
        {
            tracing::warn!("Deleting user {} needs the web client", user.id);
            deleting.set(false);
            target.set(None);
        }
    };

    let list = if let Some(list) = users.read().data() {
        let list = list.clone();
        rsx!(
            table {
                class: "table table-sm",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Role" }
                        th {}
                    }
                }
                tbody {
                    for user in list {
                        tr {
                            key: "{user.id}",
                            td { "{user.name}" }
                            td { "{user.email}" }
                            td { "{user.role:?}" }
                            td {
                                button {
                                    class: "btn btn-error btn-xs",
                                    onclick: {
                                        let user = user.clone();
                                        move |_| {
                                            outcome.set(None);
                                            target.set(Some(user.clone()));
                                        }
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        )
    } else if let Some(err) = users.read().error() {
        rsx!(div { class: "alert alert-error", "Failed to load users: {err}" })
    } else if users.read().is_loading() {
        rsx!(span { class: "loading loading-spinner" })
    } else {
        rsx!(p { class: "text-sm text-base-content/60", "Users load from the mock API in the browser." })
    };

    let outcome_view = match outcome() {
        Some(Ok(response)) => rsx!(div { class: "alert alert-success", "{response.message}" }),
        Some(Err(err)) => rsx!(div { class: "alert alert-error", "Error {err.status}: {err.message}" }),
        None => rsx!(),
    };

    let target_name = target
        .read()
        .as_ref()
        .map(|user| user.name.clone())
        .unwrap_or_default();

    rsx!(
        StoryCard {
            title: "Delete user",
            description: DELETE_DESCRIPTION,
            div {
                class: "flex flex-col gap-4 w-full",
                {list}
                {outcome_view}
            }
        }
        Modal {
            open: target.read().is_some(),
            on_close: move |_| {
                if !deleting() {
                    target.set(None);
                }
            },
            title: "Delete user".to_string(),
            variant: ModalVariant::Error,
            disable_backdrop_click: deleting(),
            disable_escape_key_down: deleting(),
            primary_action: ModalAction::new(
                if deleting() { "Deleting..." } else { "Delete" },
                EventHandler::new(confirm),
            ),
            secondary_action: ModalAction::new(
                "Cancel",
                EventHandler::new(move |_| {
                    if !deleting() {
                        target.set(None);
                    }
                }),
            ),
            p { "Delete {target_name}? This cannot be undone." }
        }
    )
}

fn notification_variant(kind: NotificationKind) -> ModalVariant {
    match kind {
        NotificationKind::Info => ModalVariant::Info,
        NotificationKind::Success => ModalVariant::Success,
        NotificationKind::Warning => ModalVariant::Warning,
        NotificationKind::Error => ModalVariant::Error,
    }
}

#[component]
fn NotificationStory() -> Element {
    let mut notifications = use_signal(Cache::<Vec<NotificationDto>>::default);
    let mut selected = use_signal(|| None::<NotificationDto>);

    #[cfg(feature = "web")]
    use_hook(move || {
        notifications.set(Cache::Loading);
        spawn(async move {
            let result = get_notifications().await;
            if let Err(err) = &result {
                tracing::error!("Failed to fetch notifications: {}", err);
            }
            notifications.set(Cache::from(result));
        });
    });

    let mark_read = move |_| {
        let Some(notification) = selected() else {
            return;
        };
        selected.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            match mark_notification_read(&notification.id).await {
                Ok(read) => {
                    if let Cache::Fetched(list) = &mut *notifications.write() {
                        for entry in list.iter_mut().filter(|entry| entry.id == read.id) {
                            entry.read = read.read;
                        }
                    }
                }
                Err(err) => tracing::error!(
                    "Failed to mark notification {} as read: {}",
                    notification.id,
                    err
                ),
            }
        });

        #[cfg(not(feature = "web"))]
        tracing::warn!("Marking notification {} needs the web client", notification.id);
    };

    let list = if let Some(list) = notifications.read().data() {
        let list = list.clone();
        rsx!(
            ul {
                class: "menu bg-base-200 rounded-box w-full",
                for notification in list {
                    li {
                        key: "{notification.id}",
                        button {
                            onclick: {
                                let notification = notification.clone();
                                move |_| selected.set(Some(notification.clone()))
                            },
                            span {
                                class: if notification.read { "" } else { "font-semibold" },
                                "{notification.title}"
                            }
                            if !notification.read {
                                span { class: "badge badge-primary badge-xs", "new" }
                            }
                        }
                    }
                }
            }
        )
    } else if let Some(err) = notifications.read().error() {
        rsx!(div { class: "alert alert-error", "Failed to load notifications: {err}" })
    } else if notifications.read().is_loading() {
        rsx!(span { class: "loading loading-spinner" })
    } else {
        rsx!(p { class: "text-sm text-base-content/60", "Notifications load from the mock API in the browser." })
    };

    let current = selected();
    let variant = current
        .as_ref()
        .map(|notification| notification_variant(notification.kind))
        .unwrap_or_default();
    let title = current.as_ref().map(|notification| notification.title.clone());
    let message = current
        .as_ref()
        .map(|notification| notification.message.clone())
        .unwrap_or_default();
    let unread = current.as_ref().is_some_and(|notification| !notification.read);

    rsx!(
        StoryCard {
            title: "Notifications",
            description: NOTIFICATIONS_DESCRIPTION,
            {list}
        }
        Modal {
            open: current.is_some(),
            on_close: move |_| selected.set(None),
            title,
            variant,
            primary_action: if unread {
                Some(ModalAction::new("Mark as read", EventHandler::new(mark_read)))
            } else {
                None
            },
            secondary_action: ModalAction::new("Close", EventHandler::new(move |_| selected.set(None))),
            p { "{message}" }
        }
    )
}
