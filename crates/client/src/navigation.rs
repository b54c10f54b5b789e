//! Router: resolves a path, follows redirects and runs the route gates.
//!
//! The gates themselves are pure ([`backoffice_auth::guards`]); the only
//! async step is fetching the permission result before the permission gate
//! decides.

use tracing::{debug, warn};

use backoffice_auth::{
    GuardDecision, LOGIN_ROUTE, PermissionCheck, Resolution, RouteDef, RouteTable,
    authentication_gate, permission_gate,
};

use crate::auth_client::AuthClient;
use crate::error::{ApiError, AuthError};

/// Redirect hops followed before giving up on a navigation.
pub const MAX_REDIRECTS: usize = 5;

/// Result of one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub requested: String,
    /// Path of the screen finally activated.
    pub landed: &'static str,
    pub title: &'static str,
}

impl Navigation {
    /// The requested screen was activated as is.
    pub fn reached(&self, path: &str) -> bool {
        self.landed == backoffice_auth::routes::normalize(path)
    }
}

pub struct Navigator {
    routes: RouteTable,
    auth: AuthClient,
    current: &'static str,
}

impl Navigator {
    pub fn new(auth: AuthClient) -> Self {
        Self::with_routes(RouteTable::standard(), auth)
    }

    pub fn with_routes(routes: RouteTable, auth: AuthClient) -> Self {
        Self {
            routes,
            auth,
            current: LOGIN_ROUTE,
        }
    }

    pub fn auth(&self) -> &AuthClient {
        &self.auth
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Path of the active screen.
    pub fn current(&self) -> &'static str {
        self.current
    }

    pub async fn navigate(&mut self, path: &str) -> Navigation {
        let mut target = path.to_string();

        for _ in 0..=MAX_REDIRECTS {
            let next = match self.routes.resolve(&target) {
                Resolution::Redirect(to) => to,
                Resolution::Page(route) => match self.activate(route).await {
                    GuardDecision::Allow => {
                        let (landed, title) = (route.path, route.title);
                        return self.land(path, landed, title);
                    }
                    GuardDecision::Redirect(to) => to,
                },
            };
            debug!(from = %target, to = next, "redirect");
            target = next.to_string();
        }

        warn!(requested = path, "too many redirects");
        self.land(path, LOGIN_ROUTE, "Login")
    }

    /// Navigate and require the requested screen itself to open.
    ///
    /// Landing on the login screen without a session is `MissingToken`;
    /// any other redirect is `PermissionDenied` for the requested path.
    pub async fn enter(&mut self, path: &str) -> Result<Navigation, ApiError> {
        let nav = self.navigate(path).await;
        if nav.reached(path) {
            return Ok(nav);
        }
        if nav.landed == LOGIN_ROUTE && !self.auth.session().is_authenticated() {
            return Err(AuthError::MissingToken.into());
        }
        Err(ApiError::PermissionDenied(format!(
            "{} (redirigido a {})",
            backoffice_auth::routes::normalize(path),
            nav.landed
        )))
    }

    /// Authentication gate first, then the permission gate.
    async fn activate(&self, route: &RouteDef) -> GuardDecision {
        if route.requires_auth {
            let decision = authentication_gate(self.auth.session().is_authenticated());
            if let GuardDecision::Redirect(_) = decision {
                warn!(route = route.path, "no session");
                return decision;
            }
        }

        let check = match route.data {
            None => PermissionCheck::NotRequired,
            Some(data) => PermissionCheck::from_outcome(
                self.auth
                    .try_check_permission(data.recurso, data.accion())
                    .await,
            ),
        };
        let decision = permission_gate(&check);
        if !decision.is_allowed() {
            warn!(route = route.path, check = ?check, "permission denied");
        }
        decision
    }

    fn land(&mut self, requested: &str, landed: &'static str, title: &'static str) -> Navigation {
        self.current = landed;
        Navigation {
            requested: requested.to_string(),
            landed,
            title,
        }
    }
}
