use pretty_assertions::assert_eq;

use super::*;

/// Tests switching tabs.
///
/// Verifies that the active tab changes and `on_tab_change` receives the new
/// id and the caller context.
///
/// Expected: active tab "details", one callback for "details"
#[test]
fn switches_and_notifies() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let config = tabbed_config("doc", vec![tab("overview"), tab("details")], None).with_tab_change({
        let seen = seen.clone();
        move |tab_id, _| seen.borrow_mut().push(tab_id.to_string())
    });
    let store = store_for(&config);

    controller::set_active_tab(&store, &config, &ContextData::new(), "details");

    assert_eq!(store.borrow().active_tab(), "details");
    assert_eq!(*seen.borrow(), vec!["details".to_string()]);
}

/// Tests that switching tabs leaves validation alone.
///
/// Verifies that existing errors survive a tab change.
///
/// Expected: the error is still present
#[test]
fn keeps_errors() {
    let config = tabbed_config("doc", vec![tab("overview"), tab("details")], None);
    let store = store_for(&config);
    controller::set_error(&store, &config, "title", "Title is required");

    controller::set_active_tab(&store, &config, &ContextData::new(), "details");

    assert_eq!(store.borrow().error("title"), Some("Title is required"));
}
