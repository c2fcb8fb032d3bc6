//! Identity collaborator boundary — events, provider trait, credential checks.
//!
//! ARCHITECTURE
//! ============
//! The identity provider itself is external. This module owns the shapes
//! the preference core consumes: the events a provider emits, the async
//! trait a concrete provider implements, and the client-side credential
//! validation that runs before any provider call.

use std::fmt;

use async_trait::async_trait;
use sha2::{Digest, Sha256};

const MIN_PASSWORD_LEN: usize = 6;
const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";
const AVATAR_URL_PREFIX: &str = "https://www.gravatar.com/avatar";

// =============================================================================
// EVENTS
// =============================================================================

/// Events emitted by the identity collaborator that the store reacts to.
///
/// Provider failures never become events; they surface as [`AuthError`]
/// from the provider call and leave local state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// A new account exists; a default profile should be registered.
    AccountCreated { account_id: String },
    /// A session was established, possibly carrying federated profile data.
    Authenticated {
        account_id: String,
        display_name: Option<String>,
        avatar_ref: Option<String>,
    },
    /// The provider reports no active session.
    SignedOut,
}

/// Session data returned by a successful provider authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub account_id: String,
    /// Federated display name, when the provider supplies one.
    pub display_name: Option<String>,
    /// Federated avatar URL, when the provider supplies one.
    pub avatar_ref: Option<String>,
}

// =============================================================================
// ERRORS
// =============================================================================

/// Password rules checked before an account-creation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    Uppercase,
    Lowercase,
    Number,
    Special,
    Length,
}

impl fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Number => "number",
            Self::Special => "special",
            Self::Length => "length",
        };
        write!(f, "{label}")
    }
}

/// Errors produced at the identity boundary.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("password is missing: {}", format_rules(.0))]
    WeakPassword(Vec<PasswordRule>),
    #[error("provider error: {0}")]
    Provider(String),
}

fn format_rules(rules: &[PasswordRule]) -> String {
    rules.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

// =============================================================================
// PROVIDER TRAIT
// =============================================================================

/// The identity provider surface the account flows consume.
///
/// Implementations wrap whatever SDK or endpoint actually issues sessions;
/// their internals are out of scope here.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an account, returning its stable account id.
    async fn create_account(&self, email: &str, password: &str) -> Result<String, AuthError>;

    /// Verify credentials and establish a session.
    async fn authenticate(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;

    /// End the current session.
    async fn sign_out(&self) -> Result<(), AuthError>;
}

// =============================================================================
// CREDENTIAL CHECKS
// =============================================================================

/// Trim, lowercase, and shape-check an email address.
///
/// Returns `None` for anything that is not `local@domain` with both parts
/// non-empty.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some(normalized)
}

/// Check a candidate password against every [`PasswordRule`].
///
/// # Errors
///
/// Returns [`AuthError::WeakPassword`] listing every rule the password
/// fails, so the caller can report all of them at once.
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    let mut failed = Vec::new();
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        failed.push(PasswordRule::Uppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        failed.push(PasswordRule::Lowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        failed.push(PasswordRule::Number);
    }
    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        failed.push(PasswordRule::Special);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        failed.push(PasswordRule::Length);
    }

    if failed.is_empty() { Ok(()) } else { Err(AuthError::WeakPassword(failed)) }
}

/// Derive a deterministic identicon avatar URL from an email address.
///
/// Used as the fallback when neither the provider nor the registry has an
/// avatar for the account.
#[must_use]
pub fn avatar_for_email(email: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(email.trim().to_ascii_lowercase().as_bytes());
    let digest = hasher.finalize();
    let hex = digest.iter().map(|b| format!("{b:02x}")).collect::<String>();
    format!("{AVATAR_URL_PREFIX}/{hex}?d=identicon")
}

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;
