use pretty_assertions::assert_eq;

use super::*;

/// Tests initial state.
///
/// Verifies that every field starts with its default or the empty value of
/// its type and that the default tab is active.
///
/// Expected: defaults, "" and false; active tab from the configuration
#[test]
fn seeds_every_field() {
    let config = form_config(
        "settings",
        vec![
            FieldConfig {
                default_value: Some("medium".into()),
                ..text_field("priority", "Priority")
            },
            text_field("notes", "Notes"),
            FieldConfig {
                field_type: FieldType::Checkbox,
                ..text_field("newsletter", "Newsletter")
            },
        ],
    );

    let state = ModalState::new(&InitSeed::from_config(&config));

    assert_eq!(
        state.form_data(),
        &form_data(&[
            ("priority", "medium".into()),
            ("notes", "".into()),
            ("newsletter", false.into()),
        ])
    );
    assert_eq!(state.phase(), ModalPhase::Idle);
}

/// Tests a configuration with the same identity.
///
/// Verifies that changing callbacks, titles or context does not wipe input.
///
/// Expected: false, input kept
#[test]
fn same_identity_keeps_state() {
    let config = form_config("profile", vec![text_field("name", "Name")]);
    let store = store_for(&config);
    controller::update_field(&store, &config, &ContextData::new(), "name", "Typed".into());

    let retitled = ModalConfig {
        title: "Another title".into(),
        ..config.clone()
    }
    .with_submit(|_, _| async { Ok(()) });

    let reset = store.modify(|state| state.reinitialize(&InitSeed::from_config(&retitled)));

    assert_eq!(reset, Some(false));
    assert_eq!(store.borrow().value("name"), Some(&FieldValue::from("Typed")));
}

/// Tests a configuration with a new id.
///
/// Verifies that form data, errors and the active tab are reset.
///
/// Expected: true, fresh data, no errors
#[test]
fn new_identity_resets_state() {
    let config = form_config("profile", vec![required_field("name", "Name")]);
    let store = store_for(&config);
    controller::update_field(&store, &config, &ContextData::new(), "name", "Typed".into());
    controller::set_error(&store, &config, "name", "Taken");

    let other = form_config(
        "account",
        vec![FieldConfig {
            default_value: Some("guest".into()),
            ..text_field("login", "Login")
        }],
    );

    let reset = store.modify(|state| state.reinitialize(&InitSeed::from_config(&other)));

    assert_eq!(reset, Some(true));
    let state = store.borrow();
    assert_eq!(state.form_data(), &form_data(&[("login", "guest".into())]));
    assert!(state.errors().is_empty());
}

/// Tests changed field defaults under the same id.
///
/// Verifies that a new default value counts as a new identity.
///
/// Expected: the new default replaces the typed value
#[test]
fn changed_defaults_reset_state() {
    let config = form_config("profile", vec![text_field("name", "Name")]);
    let store = store_for(&config);
    controller::update_field(&store, &config, &ContextData::new(), "name", "Typed".into());

    let with_default = form_config(
        "profile",
        vec![FieldConfig {
            default_value: Some("Preset".into()),
            ..text_field("name", "Name")
        }],
    );
    store.modify(|state| state.reinitialize(&InitSeed::from_config(&with_default)));

    assert_eq!(store.borrow().value("name"), Some(&FieldValue::from("Preset")));
}

/// Tests the active tab after an identity change.
///
/// Verifies that the new configuration's default tab becomes active.
///
/// Expected: "summary"
#[test]
fn resets_active_tab() {
    let config = tabbed_config("doc", vec![tab("overview"), tab("details")], None);
    let store = store_for(&config);
    controller::set_active_tab(&store, &config, &ContextData::new(), "details");

    let other = tabbed_config("report", vec![tab("intro"), tab("summary")], Some("summary"));
    store.modify(|state| state.reinitialize(&InitSeed::from_config(&other)));

    assert_eq!(store.borrow().active_tab(), "summary");
}
