use pretty_assertions::assert_eq;

use super::*;

/// Tests the initial tab.
///
/// Verifies the fallback chain: declared default, first tab, no tab.
///
/// Expected: "details", "overview", ""
#[test]
fn initial_tab_fallbacks() {
    let with_default = tabbed_config("a", vec![tab("overview"), tab("details")], Some("details"));
    let without_default = tabbed_config("b", vec![tab("overview"), tab("details")], None);
    let empty_default = tabbed_config("c", vec![tab("overview")], Some(""));

    assert_eq!(with_default.initial_tab(), "details");
    assert_eq!(without_default.initial_tab(), "overview");
    assert_eq!(empty_default.initial_tab(), "overview");
    assert_eq!(ModalConfig::default().initial_tab(), "");
}

/// Tests hidden tabs.
///
/// Verifies that hidden tabs are left out in declared order.
///
/// Expected: overview, evidence
#[test]
fn hidden_tabs_are_skipped() {
    let items = vec![
        tab("overview"),
        TabConfig {
            hidden: true,
            ..tab("history")
        },
        tab("evidence"),
    ];

    let ids: Vec<&str> = visible_tabs(&items).iter().map(|tab| tab.id.as_str()).collect();

    assert_eq!(ids, vec!["overview", "evidence"]);
}

/// Tests the displayed index of the active tab.
///
/// Verifies that the index counts visible tabs only and falls back to the
/// first tab for unknown or hidden ids.
///
/// Expected: 1, 0, 0
#[test]
fn active_index_among_visible() {
    let items = vec![
        tab("overview"),
        TabConfig {
            hidden: true,
            ..tab("history")
        },
        tab("evidence"),
    ];
    let visible = visible_tabs(&items);

    assert_eq!(active_index(&visible, "evidence"), 1);
    assert_eq!(active_index(&visible, "history"), 0);
    assert_eq!(active_index(&visible, "missing"), 0);
}
