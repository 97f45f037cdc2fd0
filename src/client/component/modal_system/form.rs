use dioxus::prelude::*;

use super::{
    config::{FieldConfig, FieldOption, FieldType, FieldValue},
    context::ModalContext,
};

fn control_class(base: &str, has_error: bool) -> String {
    if has_error {
        format!("{base} {base}-bordered {base}-error w-full")
    } else {
        format!("{base} {base}-bordered w-full")
    }
}

/// Value of the option whose display form matches the submitted string, so
/// numeric and boolean option values survive a round trip through the DOM.
fn option_value(options: &[FieldOption], submitted: String) -> FieldValue {
    options
        .iter()
        .find(|option| option.value.to_string() == submitted)
        .map(|option| option.value.clone())
        .unwrap_or(FieldValue::Text(submitted))
}

/// Renders every configured field of a form modal in declaration order.
#[component]
pub fn FormContent(ctx: ModalContext) -> Element {
    let fields = ctx.config().content.fields().to_vec();

    rsx!(
        form {
            class: "flex flex-col gap-4 mt-2",
            onsubmit: move |evt| evt.prevent_default(),
            for field in fields {
                FormField {
                    key: "{field.id}",
                    ctx: ctx.clone(),
                    field: field.clone(),
                }
            }
        }
    )
}

#[component]
pub fn FormField(ctx: ModalContext, field: FieldConfig) -> Element {
    let value = ctx.value(&field.name).unwrap_or_else(|| field.initial_value());
    let error = ctx.error(&field.name);
    let has_error = error.is_some();
    let helper = error.clone().or_else(|| field.helper_text.clone());
    let required = field.is_required();
    let placeholder = field.placeholder.clone().unwrap_or_default();
    let name = field.name.clone();

    let control = match field.field_type {
        FieldType::Text | FieldType::Email | FieldType::Password => {
            let input_type = match field.field_type {
                FieldType::Email => "email",
                FieldType::Password => "password",
                _ => "text",
            };
            rsx!(
                input {
                    r#type: input_type,
                    id: "{field.id}",
                    name: "{field.name}",
                    class: control_class("input", has_error),
                    placeholder: "{placeholder}",
                    value: "{value}",
                    disabled: field.disabled,
                    required,
                    oninput: move |evt| ctx.update_field(&name, evt.value()),
                }
            )
        }
        FieldType::Textarea => rsx!(
            textarea {
                id: "{field.id}",
                name: "{field.name}",
                class: control_class("textarea", has_error) + " h-32",
                rows: "4",
                placeholder: "{placeholder}",
                value: "{value}",
                disabled: field.disabled,
                required,
                oninput: move |evt| ctx.update_field(&name, evt.value()),
            }
        ),
        FieldType::Select => {
            let options = field.options.clone();
            rsx!(
                select {
                    id: "{field.id}",
                    name: "{field.name}",
                    class: control_class("select", has_error),
                    value: "{value}",
                    disabled: field.disabled,
                    required,
                    onchange: move |evt| ctx.update_field(&name, option_value(&options, evt.value())),
                    if let Some(placeholder) = &field.placeholder {
                        option {
                            value: "",
                            disabled: true,
                            selected: value.is_empty(),
                            "{placeholder}"
                        }
                    }
                    for option in field.options.iter() {
                        option {
                            key: "{option.value}",
                            value: "{option.value}",
                            selected: option.value == value,
                            "{option.label}"
                        }
                    }
                }
            )
        }
        FieldType::Checkbox => rsx!(
            label {
                class: "label cursor-pointer justify-start gap-3",
                input {
                    r#type: "checkbox",
                    id: "{field.id}",
                    name: "{field.name}",
                    class: "checkbox checkbox-primary",
                    checked: value.is_checked(),
                    disabled: field.disabled,
                    onchange: move |evt| ctx.update_field(&name, evt.checked()),
                }
                span { class: "label-text", "{field.label}" }
            }
        ),
        FieldType::Radio => rsx!(
            div {
                class: "flex flex-col gap-2",
                role: "radiogroup",
                {field.options.iter().map(|option| {
                    let ctx = ctx.clone();
                    let name = name.clone();
                    let picked = option.value.clone();
                    let checked = option.value == value;
                    rsx!(
                        label {
                            key: "{option.value}",
                            class: "label cursor-pointer justify-start gap-3",
                            input {
                                r#type: "radio",
                                name: "{field.name}",
                                class: "radio radio-primary",
                                value: "{option.value}",
                                checked,
                                disabled: field.disabled,
                                onchange: move |_| ctx.update_field(&name, picked.clone()),
                            }
                            span { class: "label-text", "{option.label}" }
                        }
                    )
                })}
            }
        ),
    };

    rsx!(
        div {
            class: "form-control w-full flex flex-col gap-2",
            if field.field_type != FieldType::Checkbox {
                label {
                    class: "label",
                    r#for: "{field.id}",
                    span {
                        class: "label-text",
                        "{field.label}"
                        if required {
                            span { class: "text-error ml-1", "*" }
                        }
                    }
                }
            }
            {control}
            if let Some(helper) = helper {
                div {
                    class: if has_error { "text-error text-sm mt-1" } else { "text-base-content/60 text-sm mt-1" },
                    "{helper}"
                }
            }
        }
    )
}
