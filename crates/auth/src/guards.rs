//! Route guards as synchronous decision functions.
//!
//! The router composes two independent gates before activating a route:
//! the authentication gate (is there a session at all?) and the permission
//! gate (does the identity service grant the route's `recurso:accion`?).
//! Both gates are pure; the permission result is fetched beforehand and
//! handed in as a [`PermissionCheck`].

use crate::routes::{HOME_ROUTE, LOGIN_ROUTE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Deny and send the user to this path instead.
    Redirect(&'static str),
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}

/// Allow iff a session exists; otherwise redirect to the login screen.
pub fn authentication_gate(has_session: bool) -> GuardDecision {
    if has_session {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(LOGIN_ROUTE)
    }
}

/// Resolved outcome of the remote permission check for a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionCheck {
    /// The route declares no `(recurso, accion)` pair.
    NotRequired,
    Granted,
    Denied,
    /// The check itself failed (transport, decode, server error).
    Failed(String),
}

impl PermissionCheck {
    pub fn from_outcome<E: core::fmt::Display>(outcome: Result<bool, E>) -> Self {
        match outcome {
            Ok(true) => PermissionCheck::Granted,
            Ok(false) => PermissionCheck::Denied,
            Err(e) => PermissionCheck::Failed(e.to_string()),
        }
    }
}

/// Allow iff the route needs no permission or the check granted it.
///
/// Denials and failures both land on the home screen: the user is
/// authenticated, so the login screen is never the target here.
pub fn permission_gate(check: &PermissionCheck) -> GuardDecision {
    match check {
        PermissionCheck::NotRequired | PermissionCheck::Granted => GuardDecision::Allow,
        PermissionCheck::Denied | PermissionCheck::Failed(_) => GuardDecision::Redirect(HOME_ROUTE),
    }
}
