use thiserror::Error;

/// Wiring mistakes in a modal configuration.
///
/// These indicate a bug in the integrating application rather than a runtime
/// condition, so the `ModalSystem` component refuses to render a configuration
/// that fails `ModalConfig::validate`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A form configuration declared no fields.
    #[error("Modal '{modal_id}' has form content without any fields")]
    EmptyForm { modal_id: String },

    /// Two fields share the same name, which is the key for values and errors.
    #[error("Modal '{modal_id}' declares the field name '{name}' more than once")]
    DuplicateFieldName { modal_id: String, name: String },

    /// Tabbed content without a `tabs` section or with no tab items.
    #[error("Modal '{modal_id}' has tabbed content but declares no tabs")]
    MissingTabs { modal_id: String },

    /// Two tabs share the same id.
    #[error("Modal '{modal_id}' declares the tab id '{tab_id}' more than once")]
    DuplicateTabId { modal_id: String, tab_id: String },

    /// Two action buttons share the same id.
    #[error("Modal '{modal_id}' declares the button id '{button_id}' more than once")]
    DuplicateButtonId { modal_id: String, button_id: String },

    /// The JSON document could not be deserialized into a configuration.
    #[error("Failed to parse modal configuration: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Failure reported by a caller-supplied submit or button handler.
///
/// The controller logs these and keeps the modal open; presenting them to the
/// user is left to the caller's own configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// Request to a backend failed with a status code and message.
    #[error("Request failed with status {status}: {message}")]
    Request { status: u64, message: String },

    /// Any other failure, described by a message.
    #[error("{0}")]
    Failed(String),
}

impl SubmitError {
    /// Creates a `SubmitError::Failed` from anything displayable.
    pub fn failed(message: impl std::fmt::Display) -> Self {
        SubmitError::Failed(message.to_string())
    }
}
