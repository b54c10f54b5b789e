//! Session Store: the only owner of the persisted tokens and cached claims.
//!
//! No expiry check happens locally. A stale token is only discovered when a
//! remote call rejects it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::warn;

use backoffice_auth::{AuthResponse, AuthzError, Permission, PermissionSet, UserInfo, authorize};

use crate::error::StorageError;
use crate::storage::KeyValueStorage;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_INFO_KEY: &str = "user_info";

/// A fully established session.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

impl core::fmt::Debug for Session {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
    authenticated: AtomicBool,
}

impl SessionStore {
    /// Wrap `storage`; the authenticated flag starts from token presence.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let has_token = matches!(storage.get(ACCESS_TOKEN_KEY), Ok(Some(_)));
        Self {
            storage,
            authenticated: AtomicBool::new(has_token),
        }
    }

    /// Persist tokens and claims from a login/refresh response, replacing
    /// whatever was stored before.
    pub fn set_session(&self, response: &AuthResponse) -> Result<Session, StorageError> {
        let user = response.user_info();
        self.storage.set(ACCESS_TOKEN_KEY, &response.access_token)?;
        self.storage.set(REFRESH_TOKEN_KEY, &response.refresh_token)?;
        self.storage
            .set(USER_INFO_KEY, &serde_json::to_string(&user)?)?;
        self.authenticated.store(true, Ordering::SeqCst);

        Ok(Session {
            access_token: response.access_token.clone(),
            refresh_token: response.refresh_token.clone(),
            user,
        })
    }

    /// Remove all three keys. The flag is lowered even if a removal fails.
    pub fn clear_session(&self) -> Result<(), StorageError> {
        self.authenticated.store(false, Ordering::SeqCst);
        let results = [
            self.storage.remove(ACCESS_TOKEN_KEY),
            self.storage.remove(REFRESH_TOKEN_KEY),
            self.storage.remove(USER_INFO_KEY),
        ];
        results.into_iter().collect()
    }

    /// Cached claims, `None` when absent or unreadable.
    pub fn get_session(&self) -> Option<UserInfo> {
        let raw = self.read(USER_INFO_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(error = %e, "stored user info is not valid JSON");
                None
            }
        }
    }

    pub fn get_token(&self) -> Option<String> {
        self.read(ACCESS_TOKEN_KEY)
    }

    pub fn get_refresh_token(&self) -> Option<String> {
        self.read(REFRESH_TOKEN_KEY)
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    /// Permissions of the current session (empty without one).
    pub fn permissions(&self) -> PermissionSet {
        self.get_session()
            .map(|user| user.permission_set())
            .unwrap_or_default()
    }

    /// Local check against the cached `permisos`, no remote call.
    pub fn authorize(&self, required: &Permission) -> Result<(), AuthzError> {
        let user = self.get_session().ok_or(AuthzError::Unauthenticated)?;
        authorize(&user.permission_set(), required)
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                warn!(key, error = %e, "session storage read failed");
                None
            }
        }
    }
}
