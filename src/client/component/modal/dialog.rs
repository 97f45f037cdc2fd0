use dioxus::prelude::*;

/// Why the dialog asked to be dismissed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissReason {
    BackdropClick,
    EscapeKeyDown,
    CloseButton,
}

impl DismissReason {
    /// Closing gate: backdrop and escape dismissals can each be disabled, the
    /// close button always counts.
    pub fn is_allowed(self, disable_backdrop_click: bool, disable_escape_key_down: bool) -> bool {
        match self {
            DismissReason::BackdropClick => !disable_backdrop_click,
            DismissReason::EscapeKeyDown => !disable_escape_key_down,
            DismissReason::CloseButton => true,
        }
    }
}

/// Dialog chrome: backdrop, box, header, body and optional footer.
///
/// The dialog never closes itself; every dismissal attempt is reported through
/// `on_dismiss` and the owner decides whether to honour it.
#[component]
pub fn Dialog(
    open: bool,
    on_dismiss: EventHandler<DismissReason>,
    header: Element,
    footer: Option<Element>,
    show_close_button: bool,
    #[props(default)] full_screen: bool,
    #[props(default)] class: String,
    #[props(default)] style: String,
    children: Element,
) -> Element {
    // Focus dialog when it opens so escape reaches it
    #[cfg(feature = "web")]
    use_effect(use_reactive!(|open| {
        if open {
            document::eval(r#"document.querySelector('.modal-open')?.focus()"#);
        }
    }));

    let size_class = if full_screen {
        "w-full h-full max-w-none max-h-none m-0 rounded-none"
    } else {
        "w-11/12"
    };

    rsx!(
        div {
            class: if open { "modal modal-open" } else { "modal" },
            tabindex: "-1",
            role: "dialog",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    on_dismiss.call(DismissReason::EscapeKeyDown);
                }
            },
            div {
                class: "modal-box border border-base-300 {size_class} {class}",
                style: "{style}",
                // Header with title and close button
                div {
                    class: "flex justify-between items-start gap-4 mb-4",
                    div {
                        class: "flex-1",
                        {header}
                    }
                    if show_close_button {
                        button {
                            r#type: "button",
                            class: "btn btn-sm btn-circle btn-ghost",
                            aria_label: "close",
                            onclick: move |_| on_dismiss.call(DismissReason::CloseButton),
                            "✕"
                        }
                    }
                }
                // Content
                div {
                    {children}
                }
                if let Some(footer) = footer {
                    div {
                        class: "modal-action",
                        {footer}
                    }
                }
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| on_dismiss.call(DismissReason::BackdropClick),
            }
        }
    )
}
