use crate::error::{AuthError, StoreError};
use crate::store::kv::KvBackend;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Storage key for the serialized session.
pub const SESSION_KEY: &str = "ticketapp_session";

/// The single account the mock backend accepts.
pub const DEMO_EMAIL: &str = "demo@test.com";
pub const DEMO_PASSWORD: &str = "password123";

/// The persisted session record.
///
/// `timestamp` is milliseconds since the Unix epoch at login time. Nothing
/// reads it back for expiry; it exists for inspection of the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: String,
    pub timestamp: i64,
}

/// Mock authentication over a key-value backend.
///
/// Authentication state is the presence of [`SESSION_KEY`]: an unparseable
/// stored value still counts as logged in, because the key exists.
pub struct SessionStore<B> {
    backend: B,
}

impl<B: KvBackend> SessionStore<B> {
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Whether a session key exists, regardless of what it holds.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.backend.get(SESSION_KEY), Ok(Some(_)))
    }

    /// The stored session, if present and parseable.
    pub fn current(&self) -> Option<Session> {
        let raw = self.backend.get(SESSION_KEY).ok()??;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!("stored session is unparseable: {err}");
                None
            }
        }
    }

    /// Check credentials against the demo account and establish a session.
    ///
    /// Exact match only; no trimming or case folding.
    pub fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        if email != DEMO_EMAIL || password != DEMO_PASSWORD {
            tracing::debug!("login rejected");
            return Err(AuthError::InvalidCredentials);
        }
        Ok(self.establish()?)
    }

    /// Establish a session without a credential check. Signup never fails on
    /// credentials; any validated form yields the demo session.
    pub fn signup(&self) -> Result<Session, StoreError> {
        self.establish()
    }

    /// Drop the session. Logging out while logged out is a no-op.
    pub fn logout(&self) -> Result<(), StoreError> {
        self.backend.remove(SESSION_KEY)
    }

    fn establish(&self) -> Result<Session, StoreError> {
        let session = Session {
            user: "demo".to_string(),
            timestamp: Utc::now().timestamp_millis(),
        };
        let raw = serde_json::to_string(&session)?;
        self.backend.put(SESSION_KEY, &raw)?;
        tracing::info!(user = %session.user, "session established");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::{DEMO_EMAIL, DEMO_PASSWORD, SESSION_KEY, SessionStore};
    use crate::error::AuthError;
    use crate::store::kv::{KvBackend, MemoryBackend};

    fn store() -> SessionStore<MemoryBackend> {
        SessionStore::new(MemoryBackend::new())
    }

    #[test]
    fn fresh_store_is_unauthenticated() {
        let store = store();
        assert!(!store.is_authenticated());
        assert!(store.current().is_none());
    }

    #[test]
    fn login_with_demo_credentials_succeeds() {
        let store = store();
        let session = store.login(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
        assert_eq!(session.user, "demo");
        assert!(session.timestamp > 0);
        assert!(store.is_authenticated());
        assert_eq!(store.current().unwrap().user, "demo");
    }

    #[test]
    fn login_with_wrong_password_fails_and_stores_nothing() {
        let store = store();
        let err = store.login(DEMO_EMAIL, "letmein").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn login_requires_exact_match() {
        let store = store();
        assert!(store.login("DEMO@TEST.COM", DEMO_PASSWORD).is_err());
        assert!(store.login(" demo@test.com", DEMO_PASSWORD).is_err());
        assert!(store.login(DEMO_EMAIL, "PASSWORD123").is_err());
    }

    #[test]
    fn signup_establishes_demo_session_without_credentials() {
        let store = store();
        let session = store.signup().unwrap();
        assert_eq!(session.user, "demo");
        assert!(store.is_authenticated());
    }

    #[test]
    fn logout_removes_session_and_is_idempotent() {
        let store = store();
        store.login(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
        store.logout().unwrap();
        assert!(!store.is_authenticated());

        store.logout().unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn corrupt_session_value_still_counts_as_authenticated() {
        let kv = MemoryBackend::new();
        kv.put(SESSION_KEY, "{broken").unwrap();

        let store = SessionStore::new(kv);
        assert!(store.is_authenticated());
        assert!(store.current().is_none());
    }
}
