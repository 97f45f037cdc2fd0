use pretty_assertions::assert_eq;

use super::*;

fn rules(rules: ValidationRules) -> FieldConfig {
    FieldConfig {
        validation: Some(rules),
        ..text_field("name", "Name")
    }
}

/// Tests the required check on a missing value.
///
/// Verifies that a required field with no value reports the label.
///
/// Expected: Some("Name is required")
#[test]
fn missing_required_value() {
    let field = required_field("name", "Name");

    assert_eq!(validate_field(None, &field), Some("Name is required".to_string()));
}

/// Tests the required check on blank input.
///
/// Verifies that empty text, whitespace, an unchecked box and zero all count
/// as missing for a required field.
///
/// Expected: "Name is required" for every value
#[test]
fn blank_values_fail_required() {
    let field = required_field("name", "Name");

    for value in [
        FieldValue::from(""),
        FieldValue::from("   "),
        FieldValue::from(false),
        FieldValue::from(0),
    ] {
        assert_eq!(
            validate_field(Some(&value), &field),
            Some("Name is required".to_string()),
            "value {:?}",
            value
        );
    }
}

/// Tests the required flag carried by the rules.
///
/// Verifies that `validation.required` alone makes the field required.
///
/// Expected: Some("Name is required")
#[test]
fn required_from_rules() {
    let field = rules(ValidationRules {
        required: true,
        ..Default::default()
    });

    assert_eq!(
        validate_field(Some(&"".into()), &field),
        Some("Name is required".to_string())
    );
}

/// Tests length bounds.
///
/// Verifies the minimum and maximum messages and that the bounds themselves
/// are accepted.
///
/// Expected: messages below 2 and above 4 characters, None in between
#[test]
fn length_bounds() {
    let field = rules(ValidationRules {
        min_length: Some(2),
        max_length: Some(4),
        ..Default::default()
    });

    assert_eq!(
        validate_field(Some(&"a".into()), &field),
        Some("Name must be at least 2 characters".to_string())
    );
    assert_eq!(validate_field(Some(&"ab".into()), &field), None);
    assert_eq!(validate_field(Some(&"abcd".into()), &field), None);
    assert_eq!(
        validate_field(Some(&"abcde".into()), &field),
        Some("Name must be no more than 4 characters".to_string())
    );
}

/// Tests that lengths count characters.
///
/// Verifies that multi-byte characters count once each.
///
/// Expected: None for a three character accented name under max 3
#[test]
fn length_counts_characters() {
    let field = rules(ValidationRules {
        max_length: Some(3),
        ..Default::default()
    });

    assert_eq!(validate_field(Some(&"Zoë".into()), &field), None);
}

/// Tests the pattern rule.
///
/// Verifies that a non-matching value reports an invalid format.
///
/// Expected: Some("Name format is invalid") then None for a match
#[test]
fn pattern_rule() {
    let field = rules(ValidationRules {
        pattern: Pattern::new(r"^[a-z]+$").ok(),
        ..Default::default()
    });

    assert_eq!(
        validate_field(Some(&"Abc1".into()), &field),
        Some("Name format is invalid".to_string())
    );
    assert_eq!(validate_field(Some(&"abc".into()), &field), None);
}

/// Tests rule ordering.
///
/// Verifies that the length rule is reported before the pattern rule and the
/// custom rule when all of them fail.
///
/// Expected: the minimum length message
#[test]
fn first_failing_rule_wins() {
    let field = FieldConfig {
        required: true,
        ..rules(ValidationRules {
            min_length: Some(5),
            pattern: Pattern::new(r"^\d+$").ok(),
            custom: Some(RuleFn::new(|_| Some("custom".to_string()))),
            ..Default::default()
        })
    };

    assert_eq!(
        validate_field(Some(&"ab".into()), &field),
        Some("Name must be at least 5 characters".to_string())
    );
}

/// Tests the custom rule.
///
/// Verifies that the custom rule sees the value and its message is returned.
///
/// Expected: Some("Admin is reserved") for "admin", None otherwise
#[test]
fn custom_rule() {
    let field = rules(ValidationRules {
        custom: Some(RuleFn::new(|value| {
            (value.to_string() == "admin").then(|| "Admin is reserved".to_string())
        })),
        ..Default::default()
    });

    assert_eq!(
        validate_field(Some(&"admin".into()), &field),
        Some("Admin is reserved".to_string())
    );
    assert_eq!(validate_field(Some(&"editor".into()), &field), None);
}

/// Tests an optional empty field.
///
/// Verifies that rules other than required are skipped for empty values.
///
/// Expected: None
#[test]
fn optional_empty_skips_rules() {
    let field = rules(ValidationRules {
        min_length: Some(3),
        pattern: Pattern::new(r"^x$").ok(),
        custom: Some(RuleFn::new(|_| Some("never".to_string()))),
        ..Default::default()
    });

    assert_eq!(validate_field(Some(&"".into()), &field), None);
    assert_eq!(validate_field(None, &field), None);
}

/// Tests validation of numbers.
///
/// Verifies that integral numbers are measured without a fraction.
///
/// Expected: "12345" passes max 5
#[test]
fn numbers_use_display_form() {
    let field = rules(ValidationRules {
        max_length: Some(5),
        ..Default::default()
    });

    assert_eq!(validate_field(Some(&FieldValue::from(12345)), &field), None);
    assert_eq!(FieldValue::from(2.5).to_string(), "2.5");
}
