use dioxus::prelude::*;

use super::{
    config::{RenderFn, TabConfig, TabOrientation, TabVariant},
    context::ModalContext,
};
use crate::client::component::icon::NamedIcon;

/// Tabs that are shown, in declared order.
pub fn visible_tabs(items: &[TabConfig]) -> Vec<&TabConfig> {
    items.iter().filter(|tab| !tab.hidden).collect()
}

/// Display index of the active tab among the visible ones, falling back to
/// the first visible tab when the active id is hidden or unknown.
pub fn active_index(visible: &[&TabConfig], active_tab: &str) -> usize {
    visible
        .iter()
        .position(|tab| tab.id == active_tab)
        .unwrap_or(0)
}

/// Runs a caller render function as its own component, so its hooks live in
/// their own scope instead of the parent's.
#[component]
pub fn RenderSlot(render: RenderFn, ctx: ModalContext) -> Element {
    render.call(ctx)
}

#[component]
pub fn TabbedContent(ctx: ModalContext) -> Element {
    let Some(tabs) = ctx.config().tabs.clone() else {
        return rsx!();
    };

    let visible: Vec<TabConfig> = visible_tabs(&tabs.items).into_iter().cloned().collect();
    let active_tab = ctx.active_tab();
    let active = active_index(&visible.iter().collect::<Vec<_>>(), &active_tab);

    let vertical = tabs.orientation == TabOrientation::Vertical;
    let container_class = if vertical { "flex gap-4" } else { "w-full" };
    let list_class = match (vertical, tabs.variant) {
        (true, _) => "tabs tabs-bordered flex-col items-stretch",
        (false, TabVariant::Scrollable) => "tabs tabs-bordered mb-4 flex-nowrap overflow-x-auto",
        (false, TabVariant::FullWidth) => "tabs tabs-bordered mb-4 w-full grid grid-flow-col",
        (false, TabVariant::Standard) => "tabs tabs-bordered mb-4",
    };

    rsx!(
        div {
            class: "{container_class}",
            div {
                role: "tablist",
                class: "{list_class}",
                {visible.iter().enumerate().map(|(index, tab)| {
                    let ctx = ctx.clone();
                    let tab_id = tab.id.clone();
                    rsx!(
                        button {
                            key: "{tab.id}",
                            r#type: "button",
                            role: "tab",
                            id: "modal-tab-{index}",
                            aria_controls: "modal-tabpanel-{index}",
                            class: if index == active { "tab tab-active gap-2" } else { "tab gap-2" },
                            disabled: tab.disabled,
                            onclick: move |_| ctx.set_active_tab(&tab_id),
                            if let Some(icon) = tab.icon {
                                NamedIcon { name: icon }
                            }
                            "{tab.label}"
                            if let Some(badge) = &tab.badge {
                                span { class: "badge badge-primary badge-sm", "{badge}" }
                            }
                        }
                    )
                })}
            }
            div {
                class: "flex-1",
                {visible.iter().enumerate().map(|(index, tab)| {
                    let body = match &tab.content {
                        Some(content) => rsx!(RenderSlot { render: content.clone(), ctx: ctx.clone() }),
                        None => rsx!(
                            p {
                                class: "text-base-content/60",
                                "Content for {tab.label} tab"
                            }
                        ),
                    };
                    rsx!(
                        div {
                            key: "{tab.id}",
                            role: "tabpanel",
                            id: "modal-tabpanel-{index}",
                            aria_labelledby: "modal-tab-{index}",
                            hidden: index != active,
                            class: "py-2",
                            {body}
                        }
                    )
                })}
            }
        }
    )
}
