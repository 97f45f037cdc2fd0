use std::time::Duration;

use pretty_assertions::assert_eq;

use super::*;

fn role_config() -> ModalConfig {
    form_config(
        "role",
        vec![required_field("name", "Role Name"), text_field("description", "Description")],
    )
}

/// Tests submitting an invalid form.
///
/// Verifies that validation errors are stored, `on_submit` is not called and
/// the modal is not closed.
///
/// Expected: Invalid with the required message, phase Idle
#[tokio::test]
async fn invalid_form_blocks_submission() {
    let calls = Rc::new(Cell::new(0));
    let config = role_config().with_submit({
        let calls = calls.clone();
        move |_, _| {
            calls.set(calls.get() + 1);
            async { Ok(()) }
        }
    });
    let store = store_for(&config);
    let closed = Cell::new(false);

    let outcome = controller::submit(&store, &config, &ContextData::new(), || closed.set(true)).await;

    let SubmitOutcome::Invalid(errors) = outcome else {
        panic!("expected Invalid, got {:?}", outcome);
    };
    assert_eq!(errors["name"], "Role Name is required");
    assert_eq!(store.borrow().error("name"), Some("Role Name is required"));
    assert_eq!(store.borrow().phase(), ModalPhase::Idle);
    assert_eq!(calls.get(), 0);
    assert!(!closed.get());
}

/// Tests a successful submission.
///
/// Verifies that `on_submit` receives the form data and the caller context,
/// then the caller's close callback runs once.
///
/// Expected: Submitted, data passed through, phase Closed
#[tokio::test]
async fn submits_and_closes() {
    let received = Rc::new(RefCell::new(None));
    let config = role_config().with_submit({
        let received = received.clone();
        move |data, context| {
            *received.borrow_mut() = Some((data, context));
            async { Ok(()) }
        }
    });
    let store = store_for(&config);
    let mut context = ContextData::new();
    context.insert("team".to_string(), "ops".into());
    controller::update_field(&store, &config, &context, "name", "Admin".into());
    let closes = Cell::new(0);

    let outcome = controller::submit(&store, &config, &context, || closes.set(closes.get() + 1)).await;

    assert_eq!(outcome, SubmitOutcome::Submitted);
    assert_eq!(closes.get(), 1);
    assert_eq!(store.borrow().phase(), ModalPhase::Closed);
    let (data, seen_context) = received.borrow_mut().take().expect("on_submit called");
    assert_eq!(
        data,
        form_data(&[("name", "Admin".into()), ("description", "".into())])
    );
    assert_eq!(seen_context, context);
}

/// Tests a failing submit handler.
///
/// Verifies that the error is returned, the modal stays open, the submitting
/// flag is released and a retry can succeed.
///
/// Expected: Failed then Submitted
#[tokio::test]
async fn failure_keeps_modal_open() {
    let attempts = Rc::new(Cell::new(0));
    let config = role_config().with_submit({
        let attempts = attempts.clone();
        move |_, _| {
            attempts.set(attempts.get() + 1);
            let first = attempts.get() == 1;
            async move {
                if first {
                    Err(SubmitError::Request {
                        status: 500,
                        message: "Internal server error".to_string(),
                    })
                } else {
                    Ok(())
                }
            }
        }
    });
    let store = store_for(&config);
    let context = ContextData::new();
    controller::update_field(&store, &config, &context, "name", "Admin".into());
    let closes = Cell::new(0);

    let first = controller::submit(&store, &config, &context, || closes.set(closes.get() + 1)).await;

    assert_eq!(
        first,
        SubmitOutcome::Failed(SubmitError::Request {
            status: 500,
            message: "Internal server error".to_string(),
        })
    );
    assert_eq!(closes.get(), 0);
    assert!(!store.borrow().is_submitting());

    let second = controller::submit(&store, &config, &context, || closes.set(closes.get() + 1)).await;

    assert_eq!(second, SubmitOutcome::Submitted);
    assert_eq!(closes.get(), 1);
    assert_eq!(attempts.get(), 2);
}

/// Tests single-flight submission.
///
/// Verifies that a second submit while the first is awaiting `on_submit`
/// returns immediately without calling the handler again.
///
/// Expected: one handler call, Submitted and Busy
#[tokio::test]
async fn concurrent_submit_is_busy() {
    let calls = Rc::new(Cell::new(0));
    let config = role_config().with_submit({
        let calls = calls.clone();
        move |_, _| {
            calls.set(calls.get() + 1);
            async {
                tokio::time::sleep(Duration::from_millis(20)).await;
                Ok(())
            }
        }
    });
    let store = store_for(&config);
    let context = ContextData::new();
    controller::update_field(&store, &config, &context, "name", "Admin".into());
    let closes = Cell::new(0);

    let (first, second) = tokio::join!(
        controller::submit(&store, &config, &context, || closes.set(closes.get() + 1)),
        controller::submit(&store, &config, &context, || closes.set(closes.get() + 1)),
    );

    assert_eq!(first, SubmitOutcome::Submitted);
    assert_eq!(second, SubmitOutcome::Busy);
    assert_eq!(calls.get(), 1);
    assert_eq!(closes.get(), 1);
}

/// Tests submission without a handler.
///
/// Verifies that a valid form closes even when `on_submit` is absent.
///
/// Expected: Submitted
#[tokio::test]
async fn missing_handler_still_closes() {
    let config = role_config();
    let store = store_for(&config);
    let context = ContextData::new();
    controller::update_field(&store, &config, &context, "name", "Admin".into());
    let closed = Cell::new(false);

    let outcome = controller::submit(&store, &config, &context, || closed.set(true)).await;

    assert_eq!(outcome, SubmitOutcome::Submitted);
    assert!(closed.get());
}

/// Tests submission of non-form content.
///
/// Verifies that custom content skips validation and submits an empty map.
///
/// Expected: Submitted with empty data
#[tokio::test]
async fn custom_content_skips_validation() {
    let received = Rc::new(RefCell::new(None));
    let config = ModalConfig {
        id: "custom".to_string(),
        ..Default::default()
    }
    .with_submit({
        let received = received.clone();
        move |data, _| {
            *received.borrow_mut() = Some(data);
            async { Ok(()) }
        }
    });
    let store = store_for(&config);

    let outcome = controller::submit(&store, &config, &ContextData::new(), || ()).await;

    assert_eq!(outcome, SubmitOutcome::Submitted);
    assert_eq!(received.borrow_mut().take(), Some(ModalFormData::new()));
}

/// Tests a submission that outlives its modal.
///
/// Verifies that when the state is dropped while `on_submit` is pending, the
/// late completion is ignored and the caller is not asked to close.
///
/// Expected: Abandoned, close callback not called
#[tokio::test]
async fn late_completion_after_teardown() {
    let holder = Rc::new(RefCell::new(None::<Rc<RefCell<ModalState>>>));
    let config = role_config().with_submit({
        let holder = holder.clone();
        move |_, _| {
            let holder = holder.clone();
            async move {
                holder.borrow_mut().take();
                Ok(())
            }
        }
    });
    let store = store_for(&config);
    store.modify(|state| state.update_field("name", "Admin".into()));
    let weak = Rc::downgrade(&store);
    *holder.borrow_mut() = Some(store);
    let closed = Cell::new(false);

    let outcome = controller::submit(&weak, &config, &ContextData::new(), || closed.set(true)).await;

    assert_eq!(outcome, SubmitOutcome::Abandoned);
    assert!(!closed.get());
    assert!(weak.upgrade().is_none());
}
