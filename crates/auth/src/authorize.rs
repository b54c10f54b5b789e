use std::collections::HashSet;

use thiserror::Error;

use crate::Permission;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("no active session")]
    Unauthenticated,

    #[error("forbidden: missing permission '{0}'")]
    Forbidden(String),
}

/// Permissions granted to the current session.
///
/// Built from the `permisos` claim of the cached user info. Membership is an
/// exact string match on the `recurso:accion` key: there are no wildcards and
/// no implied actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    granted: HashSet<Permission>,
}

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, permission: &Permission) -> bool {
        self.granted.contains(permission)
    }

    pub fn contains_str(&self, key: &str) -> bool {
        self.granted.iter().any(|p| p.as_str() == key)
    }

    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }

    pub fn len(&self) -> usize {
        self.granted.len()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self {
            granted: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = &'a Permission>>(iter: I) -> Self {
        iter.into_iter().cloned().collect()
    }
}

/// Check a locally cached permission set.
///
/// - No IO
/// - No panics
///
/// This is a UX-level check (menu visibility, button enabling). Route access
/// is decided by the remote permission check, see [`crate::guards`].
pub fn authorize(granted: &PermissionSet, required: &Permission) -> Result<(), AuthzError> {
    if granted.contains(required) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden(required.as_str().to_string()))
    }
}
