//! Favorites set — deduplicated, order-preserving favorited items.
//!
//! DESIGN
//! ======
//! Set semantics keyed by item id over an ordered list: insertion order is
//! first-add order and survives reloads, and re-adding a removed item
//! appends at the end. Items are captured at add time and never mutated in
//! place; toggling off and on re-captures whatever the caller passes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ledger::Ledger;

/// Ledger key holding the ordered favorites list.
pub const FAVORITES_KEY: &str = "favorites";

/// A favorited catalog item as captured when it was added.
///
/// `title` and `description` are markup-free by construction; stripping
/// happens where the item is built from catalog data, before it gets here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteItem {
    /// Catalog-assigned identifier.
    pub item_id: String,
    pub title: String,
    /// Image URI; empty when the catalog had none.
    #[serde(default)]
    pub image_ref: String,
    /// Genre/category labels in provider order, duplicates as given.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    /// Link to more info; empty when the catalog had none.
    #[serde(default)]
    pub external_ref: String,
}

/// Resulting state after a [`toggle`], for UI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub now_favorite: bool,
}

/// Whether `item_id` is currently favorited.
#[must_use]
pub fn is_favorite(ledger: &Ledger, item_id: &str) -> bool {
    load(ledger).iter().any(|f| f.item_id == item_id)
}

/// Append `item` to the favorites unless its id is already present.
pub fn add(ledger: &Ledger, item: FavoriteItem) {
    let mut favorites = load(ledger);
    if favorites.iter().any(|f| f.item_id == item.item_id) {
        return;
    }
    debug!(item_id = %item.item_id, title = %item.title, "favorite added");
    favorites.push(item);
    ledger.set(FAVORITES_KEY, &favorites);
}

/// Remove the favorite with `item_id`. Removing an absent id is a no-op.
pub fn remove(ledger: &Ledger, item_id: &str) {
    let mut favorites = load(ledger);
    let before = favorites.len();
    favorites.retain(|f| f.item_id != item_id);
    if favorites.len() == before {
        return;
    }
    debug!(item_id, "favorite removed");
    ledger.set(FAVORITES_KEY, &favorites);
}

/// Flip the favorite state of `item` and report the resulting state.
///
/// This is the entry point UI code should use: two toggles with the same
/// item id always net back to the original state.
pub fn toggle(ledger: &Ledger, item: FavoriteItem) -> ToggleOutcome {
    if is_favorite(ledger, &item.item_id) {
        remove(ledger, &item.item_id);
        ToggleOutcome { now_favorite: false }
    } else {
        add(ledger, item);
        ToggleOutcome { now_favorite: true }
    }
}

/// The current favorites in insertion order; empty before any writes.
#[must_use]
pub fn list(ledger: &Ledger) -> Vec<FavoriteItem> {
    load(ledger)
}

fn load(ledger: &Ledger) -> Vec<FavoriteItem> {
    ledger.get(FAVORITES_KEY).unwrap_or_default()
}

#[cfg(test)]
#[path = "favorites_test.rs"]
mod tests;
