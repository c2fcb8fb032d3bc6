//! Ledger-backed domain services.
//!
//! ARCHITECTURE
//! ============
//! Each service module owns one persisted key and takes the ledger by
//! reference, so callers decide where state lives and nothing reads
//! ambient globals. `account` sits above the others and is the only
//! module that reacts to identity collaborator events.

pub mod account;
pub mod favorites;
pub mod profiles;
pub mod session;
