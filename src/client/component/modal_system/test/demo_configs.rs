use pretty_assertions::assert_eq;

use super::*;

/// Tests the Add Role configuration.
///
/// Verifies the role name rules and that a valid submission passes the
/// exact form data to `on_submit` and closes the modal.
///
/// Expected: required and length messages, then {name: "Admin", description: ""}
#[tokio::test]
async fn add_role_submits_name_and_description() {
    let received = Rc::new(RefCell::new(None));
    let overrides = ModalOverrides {
        on_submit: Some(SubmitFn::sync({
            let received = received.clone();
            move |data, _| {
                *received.borrow_mut() = Some(data.clone());
                Ok(())
            }
        })),
        ..Default::default()
    };
    let config = merge_config(&add_role_config(), Some(&overrides));
    assert_eq!(config.validate(), Ok(()));
    let store = store_for(&config);
    let context = ContextData::new();
    let closes = Cell::new(0);

    let empty = controller::submit(&store, &config, &context, || closes.set(closes.get() + 1)).await;
    assert_eq!(
        empty,
        SubmitOutcome::Invalid(
            [("name".to_string(), "Role Name is required".to_string())]
                .into_iter()
                .collect()
        )
    );

    controller::update_field(&store, &config, &context, "name", "A".into());
    let short = controller::submit(&store, &config, &context, || closes.set(closes.get() + 1)).await;
    assert_eq!(
        store.borrow().error("name"),
        Some("Role Name must be at least 2 characters")
    );
    assert!(matches!(short, SubmitOutcome::Invalid(_)));

    controller::update_field(&store, &config, &context, "name", "Admin".into());
    let valid = controller::submit(&store, &config, &context, || closes.set(closes.get() + 1)).await;

    assert_eq!(valid, SubmitOutcome::Submitted);
    assert_eq!(closes.get(), 1);
    assert_eq!(
        received.borrow_mut().take(),
        Some(form_data(&[("name", "Admin".into()), ("description", "".into())]))
    );
}

/// Tests the Complex Document configuration.
///
/// Verifies it is valid, starts on the overview tab, hides history and
/// computes its title and subtitle from the caller context.
///
/// Expected: four visible tabs and context-driven texts
#[test]
fn complex_document_layout() {
    let config = complex_document_config();
    assert_eq!(config.validate(), Ok(()));

    let state = ModalState::new(&InitSeed::from_config(&config));
    assert_eq!(state.active_tab(), "overview");

    let tabs = config.tabs.as_ref().expect("tabs");
    let ids: Vec<&str> = visible_tabs(&tabs.items).iter().map(|tab| tab.id.as_str()).collect();
    assert_eq!(ids, vec!["overview", "connect", "tasks", "evidence"]);

    let mut context = ContextData::new();
    context.insert("documentTitle".to_string(), "Incident Plan".into());
    context.insert("status".to_string(), "APPROVED".into());
    assert_eq!(config.title.resolve(&context), "Incident Plan");
    assert_eq!(
        config.subtitle.as_ref().map(|subtitle| subtitle.resolve(&context)),
        Some("Plans · APPROVED".to_string())
    );
}

/// Tests the contact request built from form data.
///
/// Verifies that text values are copied and missing keys become empty.
///
/// Expected: name and message copied, empty email
#[test]
fn contact_request_from_form_data() {
    let data = form_data(&[
        ("name", "Sarah Wilson".into()),
        ("message", "Please enable premium features".into()),
        ("newsletter", true.into()),
    ]);

    let request = contact_request(&data);

    assert_eq!(request.name, "Sarah Wilson");
    assert_eq!(request.email, "");
    assert_eq!(request.message, "Please enable premium features");
}
