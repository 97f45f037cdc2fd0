//! Declarative modal configuration.
//!
//! A `ModalConfig` describes what a modal shows (form, tabbed or custom content),
//! which action buttons it offers, how it may be dismissed and which caller
//! callbacks run on its lifecycle events. The data part of the schema
//! deserializes from camelCase JSON so server-driven configurations can be
//! loaded with `ModalConfig::from_json`; callbacks and render functions are
//! attached in code and are skipped by serde.

use std::{
    collections::{HashMap, HashSet},
    fmt,
    future::Future,
    pin::Pin,
    rc::Rc,
};

use dioxus::prelude::*;
use dioxus_logger::tracing;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use super::{
    context::ModalContext,
    error::{ConfigError, SubmitError},
};

/// Caller-supplied context handed to every context-aware callback.
pub type ContextData = serde_json::Map<String, serde_json::Value>;

/// Current form values keyed by field name.
pub type ModalFormData = HashMap<String, FieldValue>;

/// Validation messages keyed by field name.
pub type FieldErrors = HashMap<String, String>;

/// Boxed future returned by asynchronous callbacks. Futures run on the UI
/// executor, so they are not required to be `Send`.
pub type LocalFuture<T> = Pin<Box<dyn Future<Output = T>>>;

/// Shared, immutable callback stored in a configuration.
///
/// Equality is pointer identity so configurations stay comparable as
/// component props.
pub struct ConfigFn<F: ?Sized>(Rc<F>);

impl<F: ?Sized> Clone for ConfigFn<F> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<F: ?Sized> PartialEq for ConfigFn<F> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<F: ?Sized> fmt::Debug for ConfigFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigFn({:p})", Rc::as_ptr(&self.0))
    }
}

/// `onOpen` / `onClose` callback.
pub type ContextFn = ConfigFn<dyn Fn(&ContextData)>;
/// `onChange` callback receiving the field name and its new value.
pub type ChangeFn = ConfigFn<dyn Fn(&str, &FieldValue, &ContextData)>;
/// `onTabChange` callback receiving the newly active tab id.
pub type TabChangeFn = ConfigFn<dyn Fn(&str, &ContextData)>;
/// `onSubmit` callback; may complete asynchronously.
pub type SubmitFn = ConfigFn<dyn Fn(ModalFormData, ContextData) -> LocalFuture<Result<(), SubmitError>>>;
/// Action button handler; may complete asynchronously.
pub type ClickFn = ConfigFn<dyn Fn() -> LocalFuture<Result<(), SubmitError>>>;
/// Late-bound title or subtitle.
pub type TextFn = ConfigFn<dyn Fn(&ContextData) -> String>;
/// Render function for custom content and tab panels.
pub type RenderFn = ConfigFn<dyn Fn(ModalContext) -> Element>;
/// Custom validation rule returning a message when the value is rejected.
pub type RuleFn = ConfigFn<dyn Fn(&FieldValue) -> Option<String>>;

impl ContextFn {
    pub fn new(f: impl Fn(&ContextData) + 'static) -> Self {
        let f: Rc<dyn Fn(&ContextData)> = Rc::new(f);
        ConfigFn(f)
    }

    pub fn call(&self, context: &ContextData) {
        (self.0)(context)
    }
}

impl ChangeFn {
    pub fn new(f: impl Fn(&str, &FieldValue, &ContextData) + 'static) -> Self {
        let f: Rc<dyn Fn(&str, &FieldValue, &ContextData)> = Rc::new(f);
        ConfigFn(f)
    }

    pub fn call(&self, name: &str, value: &FieldValue, context: &ContextData) {
        (self.0)(name, value, context)
    }
}

impl TabChangeFn {
    pub fn new(f: impl Fn(&str, &ContextData) + 'static) -> Self {
        let f: Rc<dyn Fn(&str, &ContextData)> = Rc::new(f);
        ConfigFn(f)
    }

    pub fn call(&self, tab_id: &str, context: &ContextData) {
        (self.0)(tab_id, context)
    }
}

impl SubmitFn {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(ModalFormData, ContextData) -> Fut + 'static,
        Fut: Future<Output = Result<(), SubmitError>> + 'static,
    {
        let f: Rc<dyn Fn(ModalFormData, ContextData) -> LocalFuture<Result<(), SubmitError>>> =
            Rc::new(
                move |data: ModalFormData,
                      context: ContextData|
                      -> LocalFuture<Result<(), SubmitError>> {
                    Box::pin(f(data, context))
                },
            );
        ConfigFn(f)
    }

    /// Wraps a synchronous handler.
    pub fn sync(f: impl Fn(&ModalFormData, &ContextData) -> Result<(), SubmitError> + 'static) -> Self {
        Self::new(move |data, context| std::future::ready(f(&data, &context)))
    }

    pub fn call(&self, data: ModalFormData, context: ContextData) -> LocalFuture<Result<(), SubmitError>> {
        (self.0)(data, context)
    }
}

impl ClickFn {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<(), SubmitError>> + 'static,
    {
        let f: Rc<dyn Fn() -> LocalFuture<Result<(), SubmitError>>> =
            Rc::new(move || -> LocalFuture<Result<(), SubmitError>> { Box::pin(f()) });
        ConfigFn(f)
    }

    pub fn call(&self) -> LocalFuture<Result<(), SubmitError>> {
        (self.0)()
    }
}

impl TextFn {
    pub fn new(f: impl Fn(&ContextData) -> String + 'static) -> Self {
        let f: Rc<dyn Fn(&ContextData) -> String> = Rc::new(f);
        ConfigFn(f)
    }

    pub fn call(&self, context: &ContextData) -> String {
        (self.0)(context)
    }
}

impl RenderFn {
    pub fn new(f: impl Fn(ModalContext) -> Element + 'static) -> Self {
        let f: Rc<dyn Fn(ModalContext) -> Element> = Rc::new(f);
        ConfigFn(f)
    }

    pub fn call(&self, ctx: ModalContext) -> Element {
        (self.0)(ctx)
    }
}

impl RuleFn {
    pub fn new(f: impl Fn(&FieldValue) -> Option<String> + 'static) -> Self {
        let f: Rc<dyn Fn(&FieldValue) -> Option<String>> = Rc::new(f);
        ConfigFn(f)
    }

    pub fn call(&self, value: &FieldValue) -> Option<String> {
        (self.0)(value)
    }
}

/// Title or subtitle, either fixed or computed from the caller context at render time.
#[derive(Clone, Debug, PartialEq)]
pub enum DynamicText {
    Literal(String),
    Computed(TextFn),
}

impl DynamicText {
    pub fn computed(f: impl Fn(&ContextData) -> String + 'static) -> Self {
        DynamicText::Computed(TextFn::new(f))
    }

    pub fn resolve(&self, context: &ContextData) -> String {
        match self {
            DynamicText::Literal(text) => text.clone(),
            DynamicText::Computed(f) => f.call(context),
        }
    }
}

impl Default for DynamicText {
    fn default() -> Self {
        DynamicText::Literal(String::new())
    }
}

impl From<&str> for DynamicText {
    fn from(text: &str) -> Self {
        DynamicText::Literal(text.to_string())
    }
}

impl From<String> for DynamicText {
    fn from(text: String) -> Self {
        DynamicText::Literal(text)
    }
}

impl<'de> Deserialize<'de> for DynamicText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(DynamicText::Literal)
    }
}

/// Value held by a single form field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Empty text, zero, NaN and `false` count as empty, matching how an
    /// unchecked box or a blank input is treated by the required check.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::Number(number) => *number == 0.0 || number.is_nan(),
            FieldValue::Bool(flag) => !flag,
        }
    }

    pub fn is_checked(&self) -> bool {
        !self.is_empty()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Number(number) => {
                if number.is_finite() && number.fract() == 0.0 && number.abs() < 1e15 {
                    write!(f, "{}", *number as i64)
                } else {
                    write!(f, "{}", number)
                }
            }
            FieldValue::Bool(flag) => write!(f, "{}", flag),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        FieldValue::Bool(flag)
    }
}

impl From<f64> for FieldValue {
    fn from(number: f64) -> Self {
        FieldValue::Number(number)
    }
}

impl From<i32> for FieldValue {
    fn from(number: i32) -> Self {
        FieldValue::Number(number as f64)
    }
}

/// Compiled regular expression used by the `pattern` rule.
#[derive(Clone, Debug)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(expr: &str) -> Result<Self, regex::Error> {
        Regex::new(expr).map(Pattern)
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.0.is_match(text)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let expr = String::deserialize(deserializer)?;
        Pattern::new(&expr).map_err(serde::de::Error::custom)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Email,
    Password,
    Textarea,
    Select,
    Checkbox,
    Radio,
}

impl FieldType {
    /// Value a field of this type starts with when it has no default.
    pub fn empty_value(&self) -> FieldValue {
        match self {
            FieldType::Checkbox => FieldValue::Bool(false),
            FieldType::Text
            | FieldType::Email
            | FieldType::Password
            | FieldType::Textarea
            | FieldType::Select
            | FieldType::Radio => FieldValue::Text(String::new()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FieldOption {
    pub label: String,
    pub value: FieldValue,
}

impl FieldOption {
    pub fn new(label: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Rules checked by `validate_field`, in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Pattern>,
    #[serde(skip)]
    pub custom: Option<RuleFn>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    pub id: String,
    /// Key of the field in form data and validation errors.
    pub name: String,
    pub label: String,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub helper_text: Option<String>,
    #[serde(default)]
    pub options: Vec<FieldOption>,
    #[serde(default)]
    pub default_value: Option<FieldValue>,
    #[serde(default)]
    pub validation: Option<ValidationRules>,
}

impl FieldConfig {
    pub fn is_required(&self) -> bool {
        self.required || self.validation.as_ref().is_some_and(|rules| rules.required)
    }

    pub fn initial_value(&self) -> FieldValue {
        self.default_value
            .clone()
            .unwrap_or_else(|| self.field_type.empty_value())
    }
}

/// Small counter or label shown next to a tab title.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BadgeValue {
    Count(i64),
    Text(String),
}

impl fmt::Display for BadgeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BadgeValue::Count(count) => write!(f, "{}", count),
            BadgeValue::Text(text) => f.write_str(text),
        }
    }
}

/// Icons that configurations may reference by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    Plus,
    Pen,
    Eye,
    Trash,
    Paperclip,
    Search,
    Calendar,
    User,
    Tasks,
    Star,
    Check,
    Close,
    Save,
    Info,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabConfig {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub badge: Option<BadgeValue>,
    #[serde(default)]
    pub icon: Option<IconName>,
    #[serde(skip)]
    pub content: Option<RenderFn>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TabOrientation {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TabVariant {
    #[default]
    Standard,
    Scrollable,
    FullWidth,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabsConfig {
    pub items: Vec<TabConfig>,
    #[serde(default)]
    pub default_tab: Option<String>,
    #[serde(default)]
    pub orientation: TabOrientation,
    #[serde(default)]
    pub variant: TabVariant,
}

impl TabsConfig {
    /// Declared default tab, falling back to the first tab, then to no tab.
    pub fn initial_tab(&self) -> String {
        self.default_tab
            .clone()
            .filter(|tab| !tab.is_empty())
            .or_else(|| self.items.first().map(|tab| tab.id.clone()))
            .unwrap_or_default()
    }
}

/// What the modal body renders.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentConfig {
    Form {
        fields: Vec<FieldConfig>,
    },
    Tabbed,
    Custom {
        #[serde(skip)]
        content: Option<RenderFn>,
    },
}

impl Default for ContentConfig {
    fn default() -> Self {
        ContentConfig::Custom { content: None }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Form,
    Tabbed,
    Custom,
}

impl ContentConfig {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentConfig::Form { .. } => ContentKind::Form,
            ContentConfig::Tabbed => ContentKind::Tabbed,
            ContentConfig::Custom { .. } => ContentKind::Custom,
        }
    }

    pub fn fields(&self) -> &[FieldConfig] {
        match self {
            ContentConfig::Form { fields } => fields,
            ContentConfig::Tabbed | ContentConfig::Custom { .. } => &[],
        }
    }

    pub fn custom(f: impl Fn(ModalContext) -> Element + 'static) -> Self {
        ContentConfig::Custom {
            content: Some(RenderFn::new(f)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Text,
    Outlined,
    #[default]
    Contained,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonColor {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Error,
    Info,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonPosition {
    Left,
    #[default]
    Right,
}

/// What pressing an action button does.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonAction {
    /// Runs the single-flight submit transition.
    Submit,
    /// Runs the close transition.
    Close,
    /// Runs a caller-supplied handler.
    #[serde(skip)]
    Handler(ClickFn),
}

impl ButtonAction {
    pub fn handler<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<(), SubmitError>> + 'static,
    {
        ButtonAction::Handler(ClickFn::new(f))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonConfig {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub variant: ButtonVariant,
    #[serde(default)]
    pub color: ButtonColor,
    #[serde(default)]
    pub action: Option<ButtonAction>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub loading: bool,
    #[serde(default)]
    pub start_icon: Option<IconName>,
    #[serde(default)]
    pub end_icon: Option<IconName>,
    #[serde(default)]
    pub position: ButtonPosition,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionLayout {
    Left,
    #[default]
    Right,
    Split,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActionsConfig {
    pub buttons: Vec<ButtonConfig>,
    pub layout: ActionLayout,
    pub spacing: Option<u8>,
    pub full_width: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollMode {
    #[default]
    Paper,
    Body,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BehaviorConfig {
    /// Shows the close button in the header.
    pub dismissible: bool,
    pub show_unsaved_warning: bool,
    /// Marks the dialog as config-driven with a badge and a primary border.
    pub show_indicator: bool,
    pub auto_focus: bool,
    pub disable_backdrop_click: bool,
    pub disable_escape_key_down: bool,
    pub full_screen: bool,
    pub scroll: ScrollMode,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            dismissible: true,
            show_unsaved_warning: false,
            show_indicator: false,
            auto_focus: false,
            disable_backdrop_click: false,
            disable_escape_key_down: false,
            full_screen: false,
            scroll: ScrollMode::Paper,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalSize {
    Xs,
    #[default]
    Sm,
    Md,
    Lg,
    Xl,
}

/// CSS length given either as a pixel count or a raw CSS value.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CssLength {
    Pixels(f64),
    Raw(String),
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssLength::Pixels(px) => write!(f, "{}px", px),
            CssLength::Raw(raw) => f.write_str(raw),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BorderStyle {
    pub color: Option<String>,
    pub width: Option<CssLength>,
    pub style: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpacingStyle {
    pub padding: Option<CssLength>,
    pub margin: Option<CssLength>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StylingConfig {
    pub max_width: Option<ModalSize>,
    /// Extra classes appended to the dialog box.
    pub custom_class: Option<String>,
    pub border: Option<BorderStyle>,
    pub spacing: Option<SpacingStyle>,
}

impl StylingConfig {
    /// Inline CSS for the border and spacing overrides.
    pub fn inline_style(&self) -> String {
        let mut style = String::new();
        if let Some(border) = &self.border {
            if let Some(color) = &border.color {
                style.push_str(&format!("border-color: {};", color));
            }
            if let Some(width) = &border.width {
                style.push_str(&format!("border-width: {};", width));
            }
            if let Some(line) = &border.style {
                style.push_str(&format!("border-style: {};", line));
            }
        }
        if let Some(spacing) = &self.spacing {
            if let Some(padding) = &spacing.padding {
                style.push_str(&format!("padding: {};", padding));
            }
            if let Some(margin) = &spacing.margin {
                style.push_str(&format!("margin: {};", margin));
            }
        }
        style
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalKind {
    #[default]
    Simple,
    Tabbed,
}

/// Complete description of one modal.
///
/// Configurations are read-only once handed to a `ModalSystem`; the component
/// keeps form values, errors, the active tab and the submitting flag in its own
/// `ModalState`, so one configuration can back any number of open modals.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalConfig {
    /// Identity of the modal; a new id resets form data and the active tab.
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: ModalKind,
    #[serde(default)]
    pub title: DynamicText,
    #[serde(default)]
    pub subtitle: Option<DynamicText>,
    pub content: ContentConfig,
    #[serde(default)]
    pub tabs: Option<TabsConfig>,
    #[serde(default)]
    pub actions: ActionsConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub styling: Option<StylingConfig>,
    #[serde(skip)]
    pub on_open: Option<ContextFn>,
    #[serde(skip)]
    pub on_close: Option<ContextFn>,
    #[serde(skip)]
    pub on_submit: Option<SubmitFn>,
    #[serde(skip)]
    pub on_change: Option<ChangeFn>,
    #[serde(skip)]
    pub on_tab_change: Option<TabChangeFn>,
}

impl ModalConfig {
    /// Parses and validates a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ModalConfig = serde_json::from_str(json)?;
        config.validate()?;
        if let Some(tab_id) = config.unknown_default_tab() {
            tracing::warn!(
                "Modal '{}' uses unknown default tab '{}'; the first visible tab is shown instead",
                config.id,
                tab_id
            );
        }
        Ok(config)
    }

    /// Checks the structural invariants a `ModalSystem` relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.content {
            ContentConfig::Form { fields } => {
                if fields.is_empty() {
                    return Err(ConfigError::EmptyForm {
                        modal_id: self.id.clone(),
                    });
                }
                let mut names = HashSet::new();
                for field in fields {
                    if !names.insert(field.name.as_str()) {
                        return Err(ConfigError::DuplicateFieldName {
                            modal_id: self.id.clone(),
                            name: field.name.clone(),
                        });
                    }
                }
            }
            ContentConfig::Tabbed => {
                if self.tabs.as_ref().is_none_or(|tabs| tabs.items.is_empty()) {
                    return Err(ConfigError::MissingTabs {
                        modal_id: self.id.clone(),
                    });
                }
            }
            ContentConfig::Custom { .. } => {}
        }

        if let Some(tabs) = &self.tabs {
            let mut ids = HashSet::new();
            for tab in &tabs.items {
                if !ids.insert(tab.id.as_str()) {
                    return Err(ConfigError::DuplicateTabId {
                        modal_id: self.id.clone(),
                        tab_id: tab.id.clone(),
                    });
                }
            }
        }

        let mut button_ids = HashSet::new();
        for button in &self.actions.buttons {
            if !button_ids.insert(button.id.as_str()) {
                return Err(ConfigError::DuplicateButtonId {
                    modal_id: self.id.clone(),
                    button_id: button.id.clone(),
                });
            }
        }

        Ok(())
    }

    /// Declared `default_tab` when no tab has that id.
    pub fn unknown_default_tab(&self) -> Option<&str> {
        let tabs = self.tabs.as_ref()?;
        tabs.default_tab
            .as_deref()
            .filter(|tab_id| !tab_id.is_empty())
            .filter(|tab_id| !tabs.items.iter().any(|tab| tab.id == *tab_id))
    }

    /// Tab the modal starts on, empty when it declares no tabs.
    pub fn initial_tab(&self) -> String {
        self.tabs
            .as_ref()
            .map(TabsConfig::initial_tab)
            .unwrap_or_default()
    }

    pub fn with_open(mut self, f: impl Fn(&ContextData) + 'static) -> Self {
        self.on_open = Some(ContextFn::new(f));
        self
    }

    pub fn with_close(mut self, f: impl Fn(&ContextData) + 'static) -> Self {
        self.on_close = Some(ContextFn::new(f));
        self
    }

    pub fn with_submit<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(ModalFormData, ContextData) -> Fut + 'static,
        Fut: Future<Output = Result<(), SubmitError>> + 'static,
    {
        self.on_submit = Some(SubmitFn::new(f));
        self
    }

    pub fn with_change(mut self, f: impl Fn(&str, &FieldValue, &ContextData) + 'static) -> Self {
        self.on_change = Some(ChangeFn::new(f));
        self
    }

    pub fn with_tab_change(mut self, f: impl Fn(&str, &ContextData) + 'static) -> Self {
        self.on_tab_change = Some(TabChangeFn::new(f));
        self
    }
}
