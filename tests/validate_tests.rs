// tests/validate_tests.rs
use credential_vault::{validate, FormatIssue, FormatRules};

#[test]
fn test_validate_accepts_and_rejects_by_format() {
    assert!(!validate(""));
    assert!(!validate("abc"));
    assert!(validate(&format!("sk-{}", "a".repeat(20))));
    assert!(validate("sk-testkey1234567890"));
}

#[test]
fn test_validate_boundaries() {
    assert!(!validate("sk-testkey123456789")); // 19 chars
    assert!(validate("sk-testkey1234567890")); // 20 chars
    assert!(!validate("pk-testkey1234567890"));
    assert!(!validate("SK-testkey1234567890"));
    assert!(!validate(" sk-testkey1234567890"));
}

#[test]
fn test_check_reports_the_reason() {
    let rules = FormatRules::default();

    assert_eq!(rules.check(""), Err(FormatIssue::Empty));
    assert_eq!(
        rules.check("abc"),
        Err(FormatIssue::MissingPrefix {
            expected: "sk-".into()
        })
    );
    assert_eq!(
        rules.check("sk-short"),
        Err(FormatIssue::TooShort { min: 20, actual: 8 })
    );
    assert_eq!(rules.check("sk-testkey1234567890"), Ok(()));
}

#[test]
fn test_length_counts_utf16_units_not_bytes() {
    let rules = FormatRules::default();
    // 3 + 10 two-byte chars: 13 units, 23 bytes
    assert_eq!(
        rules.check("sk-éééééééééé"),
        Err(FormatIssue::TooShort { min: 20, actual: 13 })
    );
}

#[test]
fn test_astral_characters_count_as_two_units() {
    let rules = FormatRules::default();
    // 12 chars, 21 UTF-16 units
    let keys = format!("sk-{}", "🔑".repeat(9));
    assert!(rules.validate(&keys));
    assert!(validate(&keys));

    // 8 chars, 13 UTF-16 units
    assert_eq!(
        rules.check(&format!("sk-{}", "🔑".repeat(5))),
        Err(FormatIssue::TooShort { min: 20, actual: 13 })
    );
}

#[test]
fn test_custom_rules() {
    let rules = FormatRules {
        prefix: "gsk_".into(),
        min_length: 8,
    };
    assert!(rules.validate("gsk_1234"));
    assert!(!rules.validate("sk-testkey1234567890"));
    assert_eq!(
        FormatIssue::TooShort { min: 8, actual: 5 }.to_string(),
        "credential must be at least 8 characters (got 5)"
    );
}
