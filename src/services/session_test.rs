use super::*;
use tempfile::TempDir;

fn temp_ledger() -> (Ledger, TempDir) {
    let dir = TempDir::new().expect("temp dir");
    let ledger = Ledger::open(dir.path(), "session-tests");
    (ledger, dir)
}

// =============================================================================
// mark_active / current / clear
// =============================================================================

#[test]
fn starts_anonymous() {
    let (ledger, _dir) = temp_ledger();
    assert_eq!(current(&ledger), None);
}

#[test]
fn mark_active_sets_current() {
    let (ledger, _dir) = temp_ledger();
    mark_active(&ledger, "u1");
    assert_eq!(current(&ledger), Some("u1".to_owned()));
}

#[test]
fn mark_active_twice_is_idempotent() {
    let (ledger, _dir) = temp_ledger();
    mark_active(&ledger, "u1");
    mark_active(&ledger, "u1");
    assert_eq!(current(&ledger), Some("u1".to_owned()));
}

#[test]
fn mark_active_replaces_previous_account() {
    let (ledger, _dir) = temp_ledger();
    mark_active(&ledger, "u1");
    mark_active(&ledger, "u2");
    assert_eq!(current(&ledger), Some("u2".to_owned()));
}

#[test]
fn clear_returns_to_anonymous() {
    let (ledger, _dir) = temp_ledger();
    mark_active(&ledger, "u1");
    clear(&ledger);
    assert_eq!(current(&ledger), None);
}

#[test]
fn clear_when_anonymous_is_a_noop() {
    let (ledger, _dir) = temp_ledger();
    clear(&ledger);
    assert_eq!(current(&ledger), None);
}

// =============================================================================
// guard
// =============================================================================

#[test]
fn guard_redirects_protected_view_when_anonymous() {
    let (ledger, _dir) = temp_ledger();
    assert_eq!(guard(&ledger, true), GuardResult::Redirect);
}

#[test]
fn guard_allows_protected_view_when_authenticated() {
    let (ledger, _dir) = temp_ledger();
    mark_active(&ledger, "u1");
    assert_eq!(guard(&ledger, true), GuardResult::Allow);
}

#[test]
fn guard_always_allows_unprotected_views() {
    let (ledger, _dir) = temp_ledger();
    assert_eq!(guard(&ledger, false), GuardResult::Allow);
    mark_active(&ledger, "u1");
    assert_eq!(guard(&ledger, false), GuardResult::Allow);
}

#[test]
fn guard_redirects_again_after_clear() {
    let (ledger, _dir) = temp_ledger();
    mark_active(&ledger, "u1");
    clear(&ledger);
    assert_eq!(guard(&ledger, true), GuardResult::Redirect);
}
