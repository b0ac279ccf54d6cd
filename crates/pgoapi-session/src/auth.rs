//! Authentication state consulted before every dispatch.
//!
//! Logging in to the game is done elsewhere (PTC or Google OAuth flows);
//! what the batch client needs is a yes/no answer to "do we hold a usable
//! ticket right now?". That answer comes from the [`AuthState`] trait, so
//! callers can plug in their own token store and tests can plug in a
//! fixed value.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::SystemTime;

use crate::SessionError;

/// Answers whether the client currently holds valid credentials.
///
/// # Trait bounds
///
/// - `Send + Sync` → the dispatcher may be shared between tasks.
/// - `'static` → the state outlives any single batch.
///
/// # Example
///
/// ```rust
/// use pgoapi_session::AuthState;
///
/// /// Always authenticated. Only useful against a loopback transport.
/// struct AlwaysAuthenticated;
///
/// impl AuthState for AlwaysAuthenticated {
///     fn is_authenticated(&self) -> bool {
///         true
///     }
/// }
/// ```
pub trait AuthState: Send + Sync + 'static {
    fn is_authenticated(&self) -> bool;
}

impl<T: AuthState> AuthState for Arc<T> {
    fn is_authenticated(&self) -> bool {
        (**self).is_authenticated()
    }
}

// ---------------------------------------------------------------------------
// AuthTicket
// ---------------------------------------------------------------------------

/// Identity provider that issued an access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthProvider {
    /// Pokémon Trainer Club.
    Ptc,
    Google,
}

impl AuthProvider {
    /// Name the RPC envelope uses for this provider.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ptc => "ptc",
            Self::Google => "google",
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An access token obtained from a provider, with its expiry.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthTicket {
    pub provider: AuthProvider,
    pub token: String,
    pub expires_at: SystemTime,
}

impl AuthTicket {
    pub fn new(provider: AuthProvider, token: impl Into<String>, expires_at: SystemTime) -> Self {
        Self {
            provider,
            token: token.into(),
            expires_at,
        }
    }

    /// True once `now` has reached the expiry time.
    pub fn is_expired_at(&self, now: SystemTime) -> bool {
        now >= self.expires_at
    }
}

// Tokens are credentials; keep them out of logs and panic messages.
impl fmt::Debug for AuthTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthTicket")
            .field("provider", &self.provider)
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// AuthSession
// ---------------------------------------------------------------------------

/// In-memory ticket store implementing [`AuthState`].
///
/// Authenticated iff a ticket is present and has not expired. Share it
/// behind an `Arc` between the code that refreshes tokens and the
/// dispatcher that checks them.
#[derive(Debug, Default)]
pub struct AuthSession {
    ticket: RwLock<Option<AuthTicket>>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session that already holds `ticket`.
    pub fn with_ticket(ticket: AuthTicket) -> Self {
        Self {
            ticket: RwLock::new(Some(ticket)),
        }
    }

    /// Stores a freshly obtained ticket, replacing any previous one.
    pub fn login(&self, ticket: AuthTicket) -> Result<(), SessionError> {
        let provider = ticket.provider;
        let mut slot = self
            .ticket
            .write()
            .map_err(|_| SessionError::Poisoned("auth"))?;
        *slot = Some(ticket);
        tracing::info!(%provider, "logged in");
        Ok(())
    }

    /// Drops the current ticket. A no-op when logged out.
    pub fn logout(&self) -> Result<(), SessionError> {
        let mut slot = self
            .ticket
            .write()
            .map_err(|_| SessionError::Poisoned("auth"))?;
        if let Some(ticket) = slot.take() {
            tracing::info!(provider = %ticket.provider, "logged out");
        }
        Ok(())
    }

    /// The current access token, if any (expired or not).
    pub fn token(&self) -> Option<String> {
        self.read(|ticket| ticket.token.clone())
    }

    pub fn provider(&self) -> Option<AuthProvider> {
        self.read(|ticket| ticket.provider)
    }

    pub fn ticket(&self) -> Option<AuthTicket> {
        self.read(AuthTicket::clone)
    }

    fn read<R>(&self, f: impl FnOnce(&AuthTicket) -> R) -> Option<R> {
        let guard = self.ticket.read().unwrap_or_else(PoisonError::into_inner);
        guard.as_ref().map(f)
    }
}

impl AuthState for AuthSession {
    fn is_authenticated(&self) -> bool {
        self.read(|ticket| !ticket.is_expired_at(SystemTime::now()))
            .unwrap_or(false)
    }
}
