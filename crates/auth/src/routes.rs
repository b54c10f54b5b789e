//! Static route table of the console.
//!
//! Every navigable screen is declared here together with the gates that
//! protect it. Child routes of `/dashboard` inherit the authentication gate
//! of the dashboard shell and additionally declare the `(recurso, accion)`
//! pair checked by the permission gate.

use crate::Permission;

pub const LOGIN_ROUTE: &str = "/login";
pub const HOME_ROUTE: &str = "/home";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Permission metadata attached to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteData {
    pub recurso: &'static str,
    /// Defaults to [`Permission::DEFAULT_ACTION`] when not declared.
    pub accion: Option<&'static str>,
}

impl RouteData {
    pub const fn read(recurso: &'static str) -> Self {
        Self {
            recurso,
            accion: Some(Permission::DEFAULT_ACTION),
        }
    }

    pub fn accion(&self) -> &'static str {
        self.accion.unwrap_or(Permission::DEFAULT_ACTION)
    }

    pub fn permission(&self) -> Permission {
        Permission::of(self.recurso, self.accion())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub title: &'static str,
    /// Unconditional redirect (no screen behind this path).
    pub redirect_to: Option<&'static str>,
    /// Authentication gate applies.
    pub requires_auth: bool,
    /// Permission gate applies.
    pub data: Option<RouteData>,
}

impl RouteDef {
    const fn page(path: &'static str, title: &'static str) -> Self {
        Self {
            path,
            title,
            redirect_to: None,
            requires_auth: false,
            data: None,
        }
    }

    const fn protected(path: &'static str, title: &'static str) -> Self {
        Self {
            requires_auth: true,
            ..Self::page(path, title)
        }
    }

    const fn guarded(path: &'static str, title: &'static str, data: RouteData) -> Self {
        Self {
            data: Some(data),
            ..Self::protected(path, title)
        }
    }

    const fn redirect(path: &'static str, to: &'static str) -> Self {
        Self {
            redirect_to: Some(to),
            ..Self::page(path, "")
        }
    }
}

/// Outcome of matching a path against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Page(&'a RouteDef),
    Redirect(&'static str),
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDef>,
    fallback: &'static str,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDef>, fallback: &'static str) -> Self {
        Self { routes, fallback }
    }

    /// The console's routes; unknown paths redirect to the login screen.
    pub fn standard() -> Self {
        Self::new(
            vec![
                RouteDef::redirect("/", LOGIN_ROUTE),
                RouteDef::page(LOGIN_ROUTE, "Login"),
                RouteDef::protected(HOME_ROUTE, "Recursos"),
                RouteDef::protected(DASHBOARD_ROUTE, "Dashboard"),
                RouteDef::guarded("/dashboard/cargos", "Cargos", RouteData::read("cargo")),
                RouteDef::guarded("/dashboard/rrhh", "Recursos Humanos", RouteData::read("rrhh")),
                RouteDef::guarded("/dashboard/reportes", "Reportes", RouteData::read("reportes")),
                RouteDef::guarded("/dashboard/clientes", "Clientes", RouteData::read("clientes")),
                RouteDef::guarded("/dashboard/personal", "Personal", RouteData::read("personal")),
            ],
            LOGIN_ROUTE,
        )
    }

    pub fn routes(&self) -> &[RouteDef] {
        &self.routes
    }

    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        let path = normalize(path);
        match self.routes.iter().find(|r| r.path == path) {
            Some(RouteDef {
                redirect_to: Some(to),
                ..
            }) => Resolution::Redirect(*to),
            Some(route) => Resolution::Page(route),
            None => Resolution::Redirect(self.fallback),
        }
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Strip query/fragment and trailing slashes; always start with `/`.
pub fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default().trim();
    let trimmed = path.trim_matches('/');
    format!("/{trimmed}")
}
