use super::*;

/// Tests variant colours.
///
/// Verifies the top border colour and default action colour of each variant.
///
/// Expected: palette colour and matching button colour
#[test]
fn variant_colours() {
    let cases = [
        (ModalVariant::Success, theme::SUCCESS, ButtonColor::Success),
        (ModalVariant::Warning, theme::WARNING, ButtonColor::Warning),
        (ModalVariant::Error, theme::ERROR, ButtonColor::Error),
        (ModalVariant::Info, theme::INFO, ButtonColor::Info),
        (ModalVariant::Default, theme::PRIMARY, ButtonColor::Primary),
    ];

    for (variant, accent, color) in cases {
        assert_eq!(variant.accent(), accent, "{:?}", variant);
        assert_eq!(variant.action_color(), color, "{:?}", variant);
    }
}

/// Tests button classes.
///
/// Verifies the daisyUI classes for each button variant.
///
/// Expected: filled, outlined and ghost classes
#[test]
fn button_classes() {
    assert_eq!(
        theme::button_class(ButtonVariant::Contained, ButtonColor::Error),
        "btn btn-error"
    );
    assert_eq!(
        theme::button_class(ButtonVariant::Outlined, ButtonColor::Primary),
        "btn btn-outline btn-primary"
    );
    assert_eq!(
        theme::button_class(ButtonVariant::Text, ButtonColor::Info),
        "btn btn-ghost text-info"
    );
}

/// Tests modal widths.
///
/// Verifies that each size maps to its maximum width class.
///
/// Expected: 444px for xs up to 1536px for xl
#[test]
fn width_classes() {
    assert_eq!(theme::modal_width_class(ModalSize::Xs), "max-w-[444px]");
    assert_eq!(theme::modal_width_class(ModalSize::Sm), "max-w-[600px]");
    assert_eq!(theme::modal_width_class(ModalSize::Xl), "max-w-[1536px]");
}
