use super::*;

/// Tests the closing gate with nothing disabled.
///
/// Verifies that every dismissal reason is allowed.
///
/// Expected: true for all reasons
#[test]
fn allows_everything_by_default() {
    assert!(DismissReason::BackdropClick.is_allowed(false, false));
    assert!(DismissReason::EscapeKeyDown.is_allowed(false, false));
    assert!(DismissReason::CloseButton.is_allowed(false, false));
}

/// Tests the closing gate with both flags set.
///
/// Verifies that backdrop and escape are refused independently while the
/// close button is always allowed.
///
/// Expected: only the close button passes when both are disabled
#[test]
fn flags_are_independent() {
    assert!(!DismissReason::BackdropClick.is_allowed(true, false));
    assert!(DismissReason::EscapeKeyDown.is_allowed(true, false));
    assert!(DismissReason::BackdropClick.is_allowed(false, true));
    assert!(!DismissReason::EscapeKeyDown.is_allowed(false, true));
    assert!(DismissReason::CloseButton.is_allowed(true, true));
}
