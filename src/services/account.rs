//! Account flows — provider calls followed by store reconciliation.
//!
//! DESIGN
//! ======
//! Flows mirror the UI entry points: validate input, call the identity
//! collaborator, then apply the resulting event to the ledger-backed
//! state. A provider failure leaves local state untouched.
//!
//! Sign-out clears the session key only. Favorites and profiles are kept
//! so they are waiting when the same account signs back in.

use tracing::info;

use crate::identity::{self, AuthError, AuthEvent, IdentityProvider};
use crate::ledger::Ledger;
use crate::services::profiles::StoredProfile;
use crate::services::{profiles, session};

/// Apply one collaborator event to the ledger-backed state.
///
/// This is the only place auth events touch the store: account creation
/// registers a default profile, authentication merges federated profile
/// data and activates the session, and sign-out clears the session key.
pub fn apply_auth_event(ledger: &Ledger, event: &AuthEvent) {
    match event {
        AuthEvent::AccountCreated { account_id } => {
            profiles::upsert(ledger, account_id, None, None);
        }
        AuthEvent::Authenticated { account_id, display_name, avatar_ref } => {
            profiles::upsert(ledger, account_id, display_name.as_deref(), avatar_ref.as_deref());
            session::mark_active(ledger, account_id);
        }
        AuthEvent::SignedOut => {
            session::clear(ledger);
        }
    }
}

/// React to a provider session-change notification.
///
/// `None` means the provider reports no active session; the guard will
/// send protected views back to sign-in on their next load.
pub fn observe_session(ledger: &Ledger, active: Option<identity::AuthSession>) {
    let event = match active {
        Some(session) => AuthEvent::Authenticated {
            account_id: session.account_id,
            display_name: session.display_name,
            avatar_ref: session.avatar_ref,
        },
        None => AuthEvent::SignedOut,
    };
    apply_auth_event(ledger, &event);
}

/// Create an account with the provider and register its profile.
///
/// The supplied name (when non-empty) and a derived identicon avatar
/// enrich the default profile. The new account is not signed in; the
/// caller routes the user through sign-in next.
///
/// # Errors
///
/// Returns [`AuthError::InvalidEmail`] or [`AuthError::WeakPassword`]
/// before any provider call, and the provider's error verbatim when
/// account creation fails.
pub async fn sign_up(
    provider: &dyn IdentityProvider,
    ledger: &Ledger,
    email: &str,
    password: &str,
    name: Option<&str>,
) -> Result<StoredProfile, AuthError> {
    let normalized = identity::normalize_email(email).ok_or(AuthError::InvalidEmail)?;
    identity::validate_password(password)?;

    let account_id = provider.create_account(&normalized, password).await?;
    apply_auth_event(ledger, &AuthEvent::AccountCreated { account_id: account_id.clone() });

    let avatar = identity::avatar_for_email(&account_id);
    let profile = profiles::upsert(ledger, &account_id, name, Some(&avatar));
    info!(%account_id, "account created");
    Ok(profile)
}

/// Authenticate with the provider and activate the session.
///
/// Federated display name and avatar, when supplied, merge into the stored
/// profile; an account with no avatar from any source gets a derived
/// identicon.
///
/// # Errors
///
/// Returns [`AuthError::InvalidEmail`] before any provider call, and the
/// provider's error verbatim when authentication fails.
pub async fn sign_in(
    provider: &dyn IdentityProvider,
    ledger: &Ledger,
    email: &str,
    password: &str,
) -> Result<StoredProfile, AuthError> {
    let normalized = identity::normalize_email(email).ok_or(AuthError::InvalidEmail)?;
    let auth = provider.authenticate(&normalized, password).await?;

    apply_auth_event(
        ledger,
        &AuthEvent::Authenticated {
            account_id: auth.account_id.clone(),
            display_name: auth.display_name.clone(),
            avatar_ref: auth.avatar_ref.clone(),
        },
    );

    let profile = match profiles::get(ledger, &auth.account_id) {
        Some(profile) if !profile.avatar_ref.is_empty() => profile,
        _ => {
            let avatar = identity::avatar_for_email(&auth.account_id);
            profiles::upsert(ledger, &auth.account_id, None, Some(&avatar))
        }
    };
    info!(account_id = %auth.account_id, "signed in");
    Ok(profile)
}

/// End the provider session and clear the local one.
///
/// # Errors
///
/// Returns the provider's error when sign-out fails; local state is left
/// untouched in that case so the session can be retried or recovered.
pub async fn sign_out(provider: &dyn IdentityProvider, ledger: &Ledger) -> Result<(), AuthError> {
    provider.sign_out().await?;
    apply_auth_event(ledger, &AuthEvent::SignedOut);
    info!("signed out");
    Ok(())
}

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;
