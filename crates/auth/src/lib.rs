//! `backoffice-auth`: pure authorization boundary of the console.
//!
//! This crate is intentionally decoupled from HTTP and storage: it models the
//! session claims handed out by the identity service, the permission keys
//! (`recurso:accion`), the route table with its guard decisions, the
//! permission-filtered menu and the resource landing cards. Everything here
//! is synchronous and deterministic; fetching a permission result is the
//! client crate's job.

pub mod authorize;
pub mod claims;
pub mod guards;
pub mod menu;
pub mod permissions;
pub mod resources;
pub mod routes;

pub use authorize::{AuthzError, PermissionSet, authorize};
pub use claims::{
    AuthResponse, LoginRequest, PermisoInfo, PermissionResponse, RefreshTokenRequest, RolInfo,
    Role, UserInfo, UserPermissionsResponse, ValidateTokenResponse,
};
pub use guards::{GuardDecision, PermissionCheck, authentication_gate, permission_gate};
pub use menu::{MenuItem, build_menu, default_catalog, has_permission, is_route_active};
pub use permissions::Permission;
pub use resources::{ResourceCard, map_resources};
pub use routes::{DASHBOARD_ROUTE, HOME_ROUTE, LOGIN_ROUTE, Resolution, RouteData, RouteDef, RouteTable};
