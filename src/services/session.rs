//! Session guard — active-account tracking and protected-view decisions.
//!
//! DESIGN
//! ======
//! Two states: Anonymous (no stored account id) and Authenticated (one
//! stored account id). `mark_active` and `clear` are the only transitions;
//! a provider-reported session loss arrives as a cleared session through
//! the account reducer. The guard only decides — navigation is the
//! caller's job.

use crate::ledger::Ledger;

/// Ledger key holding the active account id.
pub const SESSION_KEY: &str = "session.activeAccountId";

/// Decision returned by [`guard`] when a view loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardResult {
    /// The view may render.
    Allow,
    /// The view is protected and no session exists; send the user to sign in.
    Redirect,
}

/// Record `account_id` as the active session. Idempotent.
pub fn mark_active(ledger: &Ledger, account_id: &str) {
    ledger.set(SESSION_KEY, &account_id);
}

/// Drop the active session, returning to the anonymous state.
pub fn clear(ledger: &Ledger) {
    ledger.remove(SESSION_KEY);
}

/// The active account id, or `None` when anonymous.
#[must_use]
pub fn current(ledger: &Ledger) -> Option<String> {
    ledger.get(SESSION_KEY)
}

/// Decide whether a view may render.
///
/// Returns [`GuardResult::Redirect`] iff the view is protected and no
/// session exists; unprotected views always render.
#[must_use]
pub fn guard(ledger: &Ledger, is_protected: bool) -> GuardResult {
    if is_protected && current(ledger).is_none() {
        GuardResult::Redirect
    } else {
        GuardResult::Allow
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
