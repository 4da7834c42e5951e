//! Custom failure descriptions on leaf and compound rules.

use arbiter::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn override_replaces_default_message() {
    let error = length(3, 5)
        .with_message("username must be 3 to 5 characters")
        .validate("ab")
        .unwrap_err();

    assert_eq!(error.message, "username must be 3 to 5 characters");
    assert_eq!(error.code, "length");
    assert_eq!(error.param("min"), Some("3"));
}

#[test]
fn last_override_wins() {
    let error = min(10).with_message("a").with_message("b").validate(&1).unwrap_err();
    assert_eq!(error.message, "b");
}

#[rstest]
#[case::max(max(5).with_message("").validate(&9), "value is greater than maximum")]
#[case::min(min(5).with_message("").validate(&1), "value is less than minimum")]
#[case::odd(odd().with_message("").validate(&4), "value must be odd")]
fn empty_override_keeps_default(
    #[case] result: Result<(), ValidationError>,
    #[case] expected: &str,
) {
    assert_eq!(result.unwrap_err().message, expected);
}

#[test]
fn empty_override_keeps_previous_override() {
    let error = max(5).with_message("too big").with_message("").validate(&9).unwrap_err();
    assert_eq!(error.message, "too big");
}

#[test]
fn default_message_is_kept_as_nested() {
    let error = email().with_message("bad email").validate("nope").unwrap_err();

    assert_eq!(error.nested.len(), 1);
    assert_eq!(error.nested[0].message, "invalid email format");
    assert_eq!(error.total_error_count(), 2);
}

#[test]
fn code_override_keeps_message() {
    let error = even::<u8>().with_code("parity").validate(&3).unwrap_err();

    assert_eq!(error.code, "parity");
    assert_eq!(error.message, "value must be even");
}

#[test]
fn override_on_passing_rule_is_silent() {
    assert!(between(1, 10).with_message("never shown").validate(&5).is_ok());
}

#[test]
fn override_does_not_mask_unsupported() {
    let error = multiple_of(0).with_message("custom").validate(&10).unwrap_err();

    assert!(error.is_unsupported());
    assert_eq!(error.message, "base cannot be zero");
}

#[test]
fn override_on_compound_rule() {
    let rule = all_of![length(8, 64), special_chars(true)].with_message("weak secret");
    let error = rule.validate("abcdefgh").unwrap_err();

    assert_eq!(error.message, "weak secret");
    assert_eq!(error.code, "condition");
    assert_eq!(error.nested[0].code, "condition");
    assert_eq!(error.nested[0].nested[0].code, "special_chars");
}

#[test]
fn override_inside_compound_rule() {
    let rule = any_of![
        ipv4().with_message("not v4"),
        ipv6().with_message("not v6"),
    ];
    let error = rule.validate("localhost").unwrap_err();

    let messages: Vec<_> = error.nested.iter().map(|e| e.message.as_ref()).collect();
    assert_eq!(messages, ["not v4", "not v6"]);
}

#[test]
fn override_survives_field_binding() {
    let age = 12;
    let error = validate_struct(Some(&age), "age is required", &[&field!(
        "age" => &age,
        min(18).with_message("must be an adult")
    )])
    .unwrap_err();

    assert_eq!(error.message, "must be an adult");
    assert_eq!(error.field.as_deref(), Some("age"));
}
