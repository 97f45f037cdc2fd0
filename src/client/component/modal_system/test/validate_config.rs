use pretty_assertions::assert_eq;

use super::*;

/// Tests duplicate field names.
///
/// Verifies that a repeated name is reported with the modal id.
///
/// Expected: ConfigError::DuplicateFieldName
#[test]
fn duplicate_field_name() {
    let config = form_config("profile", vec![text_field("name", "Name"), text_field("name", "Other")]);

    assert_eq!(
        config.validate(),
        Err(ConfigError::DuplicateFieldName {
            modal_id: "profile".to_string(),
            name: "name".to_string(),
        })
    );
}

/// Tests tabbed content without tabs.
///
/// Verifies that a missing or empty `tabs` section is rejected.
///
/// Expected: ConfigError::MissingTabs twice
#[test]
fn tabbed_without_tabs() {
    let missing = ModalConfig {
        id: "doc".to_string(),
        content: ContentConfig::Tabbed,
        ..Default::default()
    };
    let empty = tabbed_config("doc", Vec::new(), None);

    let expected = Err(ConfigError::MissingTabs {
        modal_id: "doc".to_string(),
    });
    assert_eq!(missing.validate(), expected);
    assert_eq!(empty.validate(), expected);
}

/// Tests tab ids.
///
/// Verifies that two tabs may not share an id.
///
/// Expected: ConfigError::DuplicateTabId
#[test]
fn duplicate_tab_id() {
    let duplicate = tabbed_config("doc", vec![tab("a"), tab("a")], None);

    assert_eq!(
        duplicate.validate(),
        Err(ConfigError::DuplicateTabId {
            modal_id: "doc".to_string(),
            tab_id: "a".to_string(),
        })
    );
}

/// Tests a default tab that names no declared tab.
///
/// Verifies that the configuration is still accepted, the unknown id is
/// reported and the first visible tab is shown.
///
/// Expected: Ok, Some("b"), display index 0
#[test]
fn unknown_default_tab_falls_back() {
    let config = tabbed_config("doc", vec![tab("a"), tab("c")], Some("b"));

    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.unknown_default_tab(), Some("b"));

    let state = ModalState::new(&InitSeed::from_config(&config));
    let items = config.tabs.as_ref().map(|tabs| tabs.items.clone()).unwrap_or_default();
    assert_eq!(active_index(&visible_tabs(&items), state.active_tab()), 0);

    let known = tabbed_config("doc", vec![tab("a"), tab("c")], Some("c"));
    assert_eq!(known.unknown_default_tab(), None);
}

/// Tests button ids.
///
/// Verifies that two buttons may not share an id.
///
/// Expected: ConfigError::DuplicateButtonId
#[test]
fn duplicate_button_id() {
    let config = ModalConfig {
        id: "actions".to_string(),
        actions: ActionsConfig {
            buttons: vec![button("save", None), button("save", Some(ButtonAction::Submit))],
            ..Default::default()
        },
        ..Default::default()
    };

    assert_eq!(
        config.validate(),
        Err(ConfigError::DuplicateButtonId {
            modal_id: "actions".to_string(),
            button_id: "save".to_string(),
        })
    );
}

/// Tests a minimal configuration.
///
/// Verifies that custom content with nothing else configured is valid.
///
/// Expected: Ok
#[test]
fn default_configuration_is_valid() {
    assert_eq!(ModalConfig::default().validate(), Ok(()));
}
