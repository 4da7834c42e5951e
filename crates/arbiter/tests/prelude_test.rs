//! Every rule family is reachable through the prelude.

use arbiter::prelude::*;

#[test]
fn numeric_rules() {
    assert!(validate!(&42, min(0), max(100), between(1, 50), positive()).is_ok());
    assert!(validate!(&-3, negative(), odd()).is_ok());
    assert!(validate!(&13u64, prime(), multiple_of(13u64)).is_ok());
    assert!(divisible_by(0.5).validate(&2.5).is_ok());
    assert!(precision::<f64>(2).validate(&1.25).is_ok());
    assert!(precision::<f64>(2).validate(&1.255).is_err());
}

#[test]
fn generic_rules() {
    assert!(in_list(vec!["red", "green"]).validate(&"red").is_ok());
    assert!(not_in(vec![0, 1]).validate(&2).is_ok());
    assert!(length(1, 3).validate(&vec![1, 2]).is_ok());
    assert!(required::<str>().validate("x").is_ok());
    assert!(zero::<i32>().validate(&0).is_ok());
    assert!(non_zero::<f64>().validate(&0.1).is_ok());
    assert!(not_nil::<i32>().validate(&Some(1)).is_ok());
    assert!(nil::<i32>().validate(&None).is_ok());
}

#[test]
fn string_rules() {
    assert!(
        validate!(
            "Hello, World",
            starts_with("Hello"),
            ends_with("World"),
            contains(", "),
            not_contains("!"),
            special_chars(true)
        )
        .is_ok()
    );
    assert!(validate!("ABC", uppercase_only()).is_ok());
    assert!(validate!("abc", lowercase_only(), half_width_only()).is_ok());
    assert!(validate!("中文", chinese_only()).is_ok());
    assert!(validate!("ＡＢＣ", full_width_only()).is_ok());
}

#[test]
fn pattern_rules() {
    assert!(email().validate("user@example.com").is_ok());
    assert!(phone().validate("+8613800138000").is_ok());
    assert!(regex(r"^\d{3}$").unwrap().validate("123").is_ok());
    assert!(matches!(regex("("), Err(RuleError::InvalidPattern { .. })));

    let cache = PatternCache::new();
    assert!(cache.rule("^a+$").unwrap().validate("aaa").is_ok());
    assert_eq!(cache.len(), 1);
}

#[test]
fn security_rules() {
    assert!(password_strength().validate("Passw0rd!").is_ok());
    assert!(password_complex().validate("Tr1cky-Horse-42").is_ok());
    assert!(xss().validate("<script>alert(1)</script>").is_err());
    assert!(sql_injection().validate("1 OR 1=1").is_err());
}

#[test]
fn file_rules() {
    let png = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    assert!(file_size(1, 1024).validate(png.as_slice()).is_ok());
    assert!(file_type([b"\x89PNG".as_slice()]).validate(png.as_slice()).is_ok());
    assert_eq!(sniff_mime_type(png), Some("image/png"));
    assert!(file_mime_type(["image/png"]).validate(png.as_slice()).is_ok());
    assert!(file_extension(["png", ".jpg"]).validate("photo.JPG").is_ok());
}

#[cfg(feature = "network")]
#[test]
fn network_rules() {
    assert!(ip().validate("10.0.0.1").is_ok());
    assert!(ipv4().validate("::1").is_err());
    assert!(ipv6().validate("::1").is_ok());
    assert!(domain().validate("example.com").is_ok());
    assert!(port().validate("8080").is_ok());
    assert!(mac_address().validate("00:1a:2b:3c:4d:5e").is_ok());
    assert!(subnet_mask().validate("255.255.255.0").is_ok());
    assert!(url().validate("https://example.com/path").is_ok());
    assert!(uuid().validate("550e8400-e29b-41d4-a716-446655440000").is_ok());
}

#[cfg(feature = "temporal")]
#[test]
fn time_rules() {
    use chrono::NaiveDate;

    let saturday = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
    let monday = NaiveDate::from_ymd_opt(2025, 3, 17).unwrap();

    assert!(before(monday).validate(&saturday).is_ok());
    assert!(after(saturday).validate(&monday).is_ok());
    assert!(time_between(saturday, monday).validate(&monday).is_ok());
    assert!(weekend().validate(&saturday).is_ok());
    assert!(workday().validate(&monday).is_ok());
    assert!(holiday([saturday]).validate(&saturday).is_ok());
    assert!(date_format("%Y-%m-%d").unwrap().validate("2025-03-15").is_ok());
    assert!(time_format("%H:%M").unwrap().validate("25:00").is_err());
    assert!(datetime_format("%Y-%m-%d %H:%M:%S").unwrap().validate("2025-03-15 08:00:00").is_ok());
}

#[test]
fn combinators() {
    struct Account {
        plan: String,
        seats: u32,
    }

    let seats = dependency("plan", "seats", between(1u32, 5u32), |a: &Account| &a.seats);
    let account = Account { plan: "team".into(), seats: 9 };
    assert_eq!(seats.validate(&account).unwrap_err().code, "between");
    assert_eq!(account.plan, "team");

    let contact = mutual_exclude_eq(["email", "phone"], vec![1, 2]);
    assert!(contact.validate(&1).is_ok());
    assert!(contact.validate(&3).is_err());

    let loose = mutual_exclude(["a", "b"], vec!["X".to_string()], |a: &String, b: &String| {
        a.eq_ignore_ascii_case(b)
    });
    assert!(loose.validate(&"x".to_string()).is_ok());
}

#[test]
fn orchestration_emits_tracing_events() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let value = 3;
        let result = validate_struct(Some(&value), "value is required", &[&field!(
            "value" => &value,
            even()
        )]);
        assert!(result.is_err());
    });
}
