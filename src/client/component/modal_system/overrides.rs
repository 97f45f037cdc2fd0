use super::config::{
    ActionsConfig, BehaviorConfig, ChangeFn, ContentConfig, ContextFn, DynamicText, ModalConfig,
    ModalKind, StylingConfig, SubmitFn, TabChangeFn, TabsConfig,
};

/// Partial configuration applied on top of a base `ModalConfig`.
///
/// Every present field replaces the corresponding base field wholesale; nested
/// sections are not merged key by key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalOverrides {
    pub id: Option<String>,
    pub kind: Option<ModalKind>,
    pub title: Option<DynamicText>,
    pub subtitle: Option<DynamicText>,
    pub content: Option<ContentConfig>,
    pub tabs: Option<TabsConfig>,
    pub actions: Option<ActionsConfig>,
    pub behavior: Option<BehaviorConfig>,
    pub styling: Option<StylingConfig>,
    pub on_open: Option<ContextFn>,
    pub on_close: Option<ContextFn>,
    pub on_submit: Option<SubmitFn>,
    pub on_change: Option<ChangeFn>,
    pub on_tab_change: Option<TabChangeFn>,
}

/// Combines a base configuration with optional overrides.
///
/// Without overrides the base is returned unchanged.
pub fn merge_config(base: &ModalConfig, overrides: Option<&ModalOverrides>) -> ModalConfig {
    let mut merged = base.clone();
    let Some(overrides) = overrides else {
        return merged;
    };

    if let Some(id) = &overrides.id {
        merged.id = id.clone();
    }
    if let Some(kind) = overrides.kind {
        merged.kind = kind;
    }
    if let Some(title) = &overrides.title {
        merged.title = title.clone();
    }
    if let Some(subtitle) = &overrides.subtitle {
        merged.subtitle = Some(subtitle.clone());
    }
    if let Some(content) = &overrides.content {
        merged.content = content.clone();
    }
    if let Some(tabs) = &overrides.tabs {
        merged.tabs = Some(tabs.clone());
    }
    if let Some(actions) = &overrides.actions {
        merged.actions = actions.clone();
    }
    if let Some(behavior) = &overrides.behavior {
        merged.behavior = behavior.clone();
    }
    if let Some(styling) = &overrides.styling {
        merged.styling = Some(styling.clone());
    }
    if let Some(on_open) = &overrides.on_open {
        merged.on_open = Some(on_open.clone());
    }
    if let Some(on_close) = &overrides.on_close {
        merged.on_close = Some(on_close.clone());
    }
    if let Some(on_submit) = &overrides.on_submit {
        merged.on_submit = Some(on_submit.clone());
    }
    if let Some(on_change) = &overrides.on_change {
        merged.on_change = Some(on_change.clone());
    }
    if let Some(on_tab_change) = &overrides.on_tab_change {
        merged.on_tab_change = Some(on_tab_change.clone());
    }

    merged
}
