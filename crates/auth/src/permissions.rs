use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Permission key granted by the identity service.
///
/// Permissions are `recurso:accion` strings (e.g. `"cargo:read"`). The key is
/// kept opaque for comparisons; [`Permission::recurso`] and
/// [`Permission::accion`] split it when a caller needs the parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    /// Action assumed when a route only declares its resource.
    pub const DEFAULT_ACTION: &'static str = "read";

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub const fn new_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Build the key for `recurso` + `accion`.
    pub fn of(recurso: &str, accion: &str) -> Self {
        Self(Cow::Owned(format!("{recurso}:{accion}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn recurso(&self) -> &str {
        self.as_str().split_once(':').map_or(self.as_str(), |(r, _)| r)
    }

    pub fn accion(&self) -> Option<&str> {
        self.as_str().split_once(':').map(|(_, a)| a)
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Permission {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}
