use super::config::{FieldConfig, FieldErrors, FieldValue, ModalFormData};

/// Outcome of validating every field of a form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: FieldErrors,
}

/// Validates a single field value, returning the first failing rule's message.
///
/// Rules run in a fixed order: required, minimum length, maximum length,
/// pattern, then the custom rule. Only the required check looks at empty
/// values; an empty optional field passes every other rule. Lengths count
/// characters of the value's display form.
pub fn validate_field(value: Option<&FieldValue>, field: &FieldConfig) -> Option<String> {
    let value = value.filter(|value| !value.is_empty());

    if field.is_required() && value.is_none_or(|value| value.to_string().trim().is_empty()) {
        return Some(format!("{} is required", field.label));
    }

    let (Some(rules), Some(value)) = (field.validation.as_ref(), value) else {
        return None;
    };

    let text = value.to_string();
    let length = text.chars().count();

    if let Some(min) = rules.min_length {
        if length < min {
            return Some(format!("{} must be at least {} characters", field.label, min));
        }
    }

    if let Some(max) = rules.max_length {
        if length > max {
            return Some(format!("{} must be no more than {} characters", field.label, max));
        }
    }

    if let Some(pattern) = &rules.pattern {
        if !pattern.is_match(&text) {
            return Some(format!("{} format is invalid", field.label));
        }
    }

    rules.custom.as_ref().and_then(|rule| rule.call(value))
}

/// Validates every configured field against the current form data.
///
/// Fields absent from `data` are validated as missing.
pub fn validate_form(data: &ModalFormData, fields: &[FieldConfig]) -> ValidationResult {
    let mut errors = FieldErrors::new();

    for field in fields {
        if let Some(message) = validate_field(data.get(&field.name), field) {
            errors.insert(field.name.clone(), message);
        }
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}
