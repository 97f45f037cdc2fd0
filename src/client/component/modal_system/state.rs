use super::{
    config::{ContentConfig, ContentKind, FieldErrors, FieldValue, ModalConfig, ModalFormData},
    validation::validate_form,
};

/// Lifecycle phase of one open modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Idle,
    Submitting,
    /// Close has been handed to the caller.
    Closed,
}

/// Identity of a configuration as far as state initialization is concerned.
///
/// Two configurations with the same key share runtime state; anything else
/// (callbacks, titles, buttons, context) may change freely without wiping input.
#[derive(Clone, Debug, PartialEq)]
pub struct InitKey {
    id: String,
    kind: ContentKind,
    fields: Vec<(String, Option<FieldValue>)>,
}

/// Everything needed to (re)initialize a `ModalState` from a configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct InitSeed {
    key: InitKey,
    form_data: ModalFormData,
    active_tab: String,
}

impl InitSeed {
    pub fn from_config(config: &ModalConfig) -> Self {
        let fields = config.content.fields();

        Self {
            key: InitKey {
                id: config.id.clone(),
                kind: config.content.kind(),
                fields: fields
                    .iter()
                    .map(|field| (field.name.clone(), field.default_value.clone()))
                    .collect(),
            },
            form_data: fields
                .iter()
                .map(|field| (field.name.clone(), field.initial_value()))
                .collect(),
            active_tab: config.initial_tab(),
        }
    }
}

/// What `begin_submit` decided.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitStep {
    /// A submission is already in flight.
    Busy,
    /// Form validation failed; errors have been stored.
    Invalid(FieldErrors),
    /// Submission started with this snapshot of the form data.
    Proceed(ModalFormData),
}

/// Per-instance runtime state of a `ModalSystem`.
///
/// All mutation goes through the named methods below.
#[derive(Clone, Debug, PartialEq)]
pub struct ModalState {
    key: InitKey,
    form_data: ModalFormData,
    errors: FieldErrors,
    active_tab: String,
    phase: ModalPhase,
}

impl ModalState {
    pub fn new(seed: &InitSeed) -> Self {
        Self {
            key: seed.key.clone(),
            form_data: seed.form_data.clone(),
            errors: FieldErrors::new(),
            active_tab: seed.active_tab.clone(),
            phase: ModalPhase::Idle,
        }
    }

    /// Resets form data, errors and the active tab when the configuration
    /// identity changed. Returns whether anything was reset.
    pub fn reinitialize(&mut self, seed: &InitSeed) -> bool {
        if self.key == seed.key {
            return false;
        }

        if seed.key.kind == ContentKind::Form {
            self.form_data = seed.form_data.clone();
        }
        self.errors.clear();
        self.active_tab = seed.active_tab.clone();
        self.key = seed.key.clone();

        true
    }

    pub fn form_data(&self) -> &ModalFormData {
        &self.form_data
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.form_data.get(name)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn active_tab(&self) -> &str {
        &self.active_tab
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == ModalPhase::Submitting
    }

    /// Stores a value and clears that field's error without re-validating.
    pub fn update_field(&mut self, name: &str, value: FieldValue) {
        self.form_data.insert(name.to_string(), value);
        self.errors.remove(name);
    }

    pub fn set_error(&mut self, name: &str, message: impl Into<String>) {
        self.errors.insert(name.to_string(), message.into());
    }

    pub fn clear_error(&mut self, name: &str) {
        self.errors.remove(name);
    }

    pub fn set_active_tab(&mut self, tab_id: &str) {
        self.active_tab = tab_id.to_string();
    }

    /// Enters `Submitting` unless a submission is already running.
    ///
    /// Form content is validated first; on failure the errors replace the
    /// current ones and the phase returns to `Idle`.
    pub fn begin_submit(&mut self, content: &ContentConfig) -> SubmitStep {
        if self.is_submitting() {
            return SubmitStep::Busy;
        }
        self.phase = ModalPhase::Submitting;

        if let ContentConfig::Form { fields } = content {
            let result = validate_form(&self.form_data, fields);
            if !result.is_valid {
                self.errors = result.errors.clone();
                self.phase = ModalPhase::Idle;
                return SubmitStep::Invalid(result.errors);
            }
        }

        SubmitStep::Proceed(self.form_data.clone())
    }

    /// Leaves `Submitting`: a successful submission closes the modal, a failed
    /// one keeps it open.
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.phase = if succeeded {
            ModalPhase::Closed
        } else {
            ModalPhase::Idle
        };
    }

    pub fn close(&mut self) {
        self.phase = ModalPhase::Closed;
    }

    /// Returns a closed modal to `Idle`; form data is kept.
    pub fn reopen(&mut self) {
        if self.phase == ModalPhase::Closed {
            self.phase = ModalPhase::Idle;
        }
    }
}
