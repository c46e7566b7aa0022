//! Process-scoped session: the stored bearer token and the admin guard.
//!
//! The credential check is a local placeholder. There is no server-side
//! login endpoint, so the issued token is only a marker that the operator
//! passed the check; it grants nothing on its own.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use subtle::ConstantTimeEq;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::infra::error::InfraError;

/// Persistent storage for the session token.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<String>, InfraError>;
    fn save(&self, token: &str) -> Result<(), InfraError>;
    fn clear(&self) -> Result<(), InfraError>;
}

/// Keeps the token in memory only.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, InfraError> {
        Ok(self
            .token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, token: &str) -> Result<(), InfraError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), InfraError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

pub struct Session {
    store: Arc<dyn TokenStore>,
    token: RwLock<Option<String>>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Reads the persisted token once. Call at process start.
    pub fn initialize(store: Arc<dyn TokenStore>) -> Result<Arc<Self>, InfraError> {
        let token = store.load()?;
        Ok(Arc::new(Self {
            store,
            token: RwLock::new(token),
        }))
    }

    /// Drops the in-memory token without touching storage.
    pub fn teardown(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn bearer(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn establish(&self, token: String) -> Result<(), InfraError> {
        self.store.save(&token)?;
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token);
        Ok(())
    }

    fn revoke(&self) -> Result<(), InfraError> {
        self.store.clear()?;
        self.teardown();
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated { username: String },
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("not logged in (run `catalog-admin login`)")]
    NotAuthenticated,
    #[error(transparent)]
    Store(#[from] InfraError),
}

/// Gates the admin commands on the presence of a session token.
#[derive(Debug, Clone)]
pub struct AuthGuard {
    session: Arc<Session>,
    credentials: Credentials,
}

impl AuthGuard {
    pub fn new(session: Arc<Session>, credentials: Credentials) -> Self {
        Self {
            session,
            credentials,
        }
    }

    pub fn state(&self) -> AuthState {
        if self.session.is_authenticated() {
            AuthState::Authenticated {
                username: self.credentials.username.clone(),
            }
        } else {
            AuthState::Unauthenticated
        }
    }

    pub fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let user_ok = username.as_bytes().ct_eq(self.credentials.username.as_bytes());
        let pass_ok = password.as_bytes().ct_eq(self.credentials.password.as_bytes());
        if (user_ok & pass_ok).unwrap_u8() == 0 {
            warn!(username, "rejected admin login");
            return Err(AuthError::InvalidCredentials);
        }

        let token = format!("local-{}", Uuid::new_v4().simple());
        self.session.establish(token)?;
        info!(username, "admin session started (local credential check only)");
        Ok(())
    }

    pub fn logout(&self) -> Result<(), AuthError> {
        self.session.revoke()?;
        info!("admin session ended");
        Ok(())
    }

    pub fn require(&self) -> Result<(), AuthError> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(AuthError::NotAuthenticated)
        }
    }
}
