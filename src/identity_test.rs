use super::*;

// =============================================================================
// normalize_email
// =============================================================================

#[test]
fn normalize_email_trims_and_lowercases() {
    assert_eq!(normalize_email("  Alice@Example.COM  "), Some("alice@example.com".to_owned()));
}

#[test]
fn normalize_email_accepts_plain_address() {
    assert_eq!(normalize_email("bob@x.com"), Some("bob@x.com".to_owned()));
}

#[test]
fn normalize_email_rejects_missing_at() {
    assert_eq!(normalize_email("not-an-email"), None);
}

#[test]
fn normalize_email_rejects_empty_local_part() {
    assert_eq!(normalize_email("@x.com"), None);
}

#[test]
fn normalize_email_rejects_empty_domain() {
    assert_eq!(normalize_email("bob@"), None);
}

#[test]
fn normalize_email_rejects_double_at() {
    assert_eq!(normalize_email("bob@x@y.com"), None);
}

#[test]
fn normalize_email_rejects_blank() {
    assert_eq!(normalize_email("   "), None);
}

// =============================================================================
// validate_password
// =============================================================================

fn failed_rules(password: &str) -> Vec<PasswordRule> {
    match validate_password(password) {
        Ok(()) => Vec::new(),
        Err(AuthError::WeakPassword(failed)) => failed,
        Err(other) => panic!("unexpected error: {other}"),
    }
}

#[test]
fn strong_password_passes() {
    assert!(validate_password("Abc123!").is_ok());
}

#[test]
fn missing_uppercase_is_reported() {
    assert!(failed_rules("abc123!").contains(&PasswordRule::Uppercase));
}

#[test]
fn missing_lowercase_is_reported() {
    assert!(failed_rules("ABC123!").contains(&PasswordRule::Lowercase));
}

#[test]
fn missing_number_is_reported() {
    assert!(failed_rules("Abcdef!").contains(&PasswordRule::Number));
}

#[test]
fn missing_special_is_reported() {
    assert!(failed_rules("Abc1234").contains(&PasswordRule::Special));
}

#[test]
fn short_password_is_reported() {
    assert!(failed_rules("Ab1!").contains(&PasswordRule::Length));
}

#[test]
fn every_failed_rule_is_reported_at_once() {
    let failed = failed_rules("");
    assert_eq!(
        failed,
        vec![
            PasswordRule::Uppercase,
            PasswordRule::Lowercase,
            PasswordRule::Number,
            PasswordRule::Special,
            PasswordRule::Length,
        ]
    );
}

#[test]
fn weak_password_error_lists_rule_names() {
    let err = validate_password("abc").expect_err("weak password");
    let message = err.to_string();
    assert!(message.contains("uppercase"));
    assert!(message.contains("number"));
    assert!(message.contains("special"));
    assert!(message.contains("length"));
    assert!(!message.contains("lowercase"));
}

// =============================================================================
// avatar_for_email
// =============================================================================

#[test]
fn avatar_is_deterministic() {
    assert_eq!(avatar_for_email("bob@x.com"), avatar_for_email("bob@x.com"));
}

#[test]
fn avatar_ignores_case_and_whitespace() {
    assert_eq!(avatar_for_email(" Bob@X.com "), avatar_for_email("bob@x.com"));
}

#[test]
fn avatar_differs_per_account() {
    assert_ne!(avatar_for_email("bob@x.com"), avatar_for_email("alice@x.com"));
}

#[test]
fn avatar_is_a_gravatar_identicon_url() {
    let url = avatar_for_email("bob@x.com");
    assert!(url.starts_with("https://www.gravatar.com/avatar/"));
    assert!(url.ends_with("?d=identicon"));

    let hash = url
        .trim_start_matches("https://www.gravatar.com/avatar/")
        .trim_end_matches("?d=identicon");
    assert_eq!(hash.len(), 64);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
}
