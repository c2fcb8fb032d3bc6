//! SamFlix client core — durable local preferences behind a small KV ledger.
//!
//! ARCHITECTURE
//! ============
//! UI events call an external collaborator first (identity provider or
//! catalog API); on success the ledger-backed services reconcile local
//! state, and views re-read that state for rendering. The store itself
//! never performs network I/O — `identity` and `catalog` exist only to
//! define the collaborator boundary the rest of the crate consumes.
//!
//! All reads are snapshots: state may be stale immediately after return,
//! and every write is best-effort against the underlying storage.

pub mod catalog;
pub mod identity;
pub mod ledger;
pub mod services;

pub use ledger::Ledger;
pub use services::favorites::{FavoriteItem, ToggleOutcome};
pub use services::profiles::StoredProfile;
pub use services::session::GuardResult;
