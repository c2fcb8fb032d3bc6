//! Profile registry — display profiles keyed by account id.
//!
//! DESIGN
//! ======
//! The registry is the single merge point for the three possible sources of
//! a name or avatar: explicitly supplied, previously stored, and derived
//! default. Precedence is supplied non-empty > stored > derived. Profiles
//! are never auto-deleted; they survive sign-out.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ledger::Ledger;

/// Ledger key holding the account id → profile map.
pub const PROFILES_KEY: &str = "profiles";

/// Display profile for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredProfile {
    /// Stable account identifier, typically a normalized email.
    pub account_id: String,
    /// Non-empty display name.
    pub display_name: String,
    /// Avatar URI; empty means "no avatar".
    pub avatar_ref: String,
}

/// Persisted per-account record inside the `profiles` map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileRecord {
    name: String,
    #[serde(default)]
    avatar_ref: String,
}

/// Merge the supplied fields into the profile for `account_id`, creating it
/// if absent, and return the resulting profile.
///
/// Unset or empty fields keep their prior values; a never-set name falls
/// back to the local part of the account id.
pub fn upsert(
    ledger: &Ledger,
    account_id: &str,
    name: Option<&str>,
    avatar_ref: Option<&str>,
) -> StoredProfile {
    let mut map: BTreeMap<String, ProfileRecord> = ledger.get(PROFILES_KEY).unwrap_or_default();
    let existing = map.get(account_id);

    let resolved_name = first_non_empty(name, existing.map(|r| r.name.as_str()))
        .unwrap_or_else(|| local_part(account_id));
    let resolved_avatar =
        first_non_empty(avatar_ref, existing.map(|r| r.avatar_ref.as_str())).unwrap_or_default();

    map.insert(
        account_id.to_owned(),
        ProfileRecord { name: resolved_name.clone(), avatar_ref: resolved_avatar.clone() },
    );
    ledger.set(PROFILES_KEY, &map);

    StoredProfile {
        account_id: account_id.to_owned(),
        display_name: resolved_name,
        avatar_ref: resolved_avatar,
    }
}

/// The stored profile for `account_id`, or `None` if never upserted.
#[must_use]
pub fn get(ledger: &Ledger, account_id: &str) -> Option<StoredProfile> {
    let map: BTreeMap<String, ProfileRecord> = ledger.get(PROFILES_KEY)?;
    let record = map.get(account_id)?;
    Some(StoredProfile {
        account_id: account_id.to_owned(),
        display_name: record.name.clone(),
        avatar_ref: record.avatar_ref.clone(),
    })
}

fn first_non_empty(supplied: Option<&str>, stored: Option<&str>) -> Option<String> {
    [supplied, stored]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .map(str::to_owned)
}

fn local_part(account_id: &str) -> String {
    account_id
        .split('@')
        .next()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("user")
        .to_owned()
}

#[cfg(test)]
#[path = "profiles_test.rs"]
mod tests;
