//! Permission-filtered sidebar menu.

use std::borrow::Cow;

use serde::Serialize;

use crate::{Permission, PermissionSet};

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub label: Cow<'static, str>,
    pub route: Cow<'static, str>,
    pub icon: Cow<'static, str>,
    /// `None` means the entry is visible to every authenticated user.
    pub permiso: Option<Permission>,
}

impl MenuItem {
    pub const fn new(
        label: &'static str,
        route: &'static str,
        icon: &'static str,
        permiso: &'static str,
    ) -> Self {
        Self {
            label: Cow::Borrowed(label),
            route: Cow::Borrowed(route),
            icon: Cow::Borrowed(icon),
            permiso: Some(Permission::new_static(permiso)),
        }
    }
}

/// The console's sidebar catalog, in display order.
pub fn default_catalog() -> Vec<MenuItem> {
    vec![
        MenuItem::new("Registro", "/dashboard/registro", "fa-solid fa-pen", "registro:read"),
        MenuItem::new(
            "Seguimiento",
            "/dashboard/seguimiento",
            "fa-solid fa-magnifying-glass",
            "seguimiento:read",
        ),
        MenuItem::new("Historial", "/dashboard/historial", "fa-solid fa-file-lines", "historial:read"),
        MenuItem::new(
            "Notificación",
            "/dashboard/notificacion",
            "fa-solid fa-bell",
            "notificacion:read",
        ),
        MenuItem::new("Servicios", "/dashboard/servicios", "fa-solid fa-plus", "servicios:read"),
        MenuItem::new("Personal", "/dashboard/rrhh", "fa-solid fa-user", "rrhh:read"),
        MenuItem::new("Cliente", "/dashboard/clientes", "fa-solid fa-users", "clientes:read"),
        MenuItem::new("Reportes", "/dashboard/reportes", "fa-solid fa-chart-column", "reportes:read"),
        MenuItem::new("Cargos", "/dashboard/cargos", "fa-solid fa-briefcase", "cargo:read"),
    ]
}

/// Whether `permiso` is satisfied by `granted` (no requirement always is).
pub fn has_permission(permiso: Option<&Permission>, granted: &PermissionSet) -> bool {
    match permiso {
        None => true,
        Some(p) if p.as_str().is_empty() => true,
        Some(p) => granted.contains(p),
    }
}

/// Entries of `catalog` visible with `granted`, in catalog order.
pub fn build_menu(catalog: &[MenuItem], granted: &PermissionSet) -> Vec<MenuItem> {
    catalog
        .iter()
        .filter(|item| has_permission(item.permiso.as_ref(), granted))
        .cloned()
        .collect()
}

/// Highlight rule: exact match or a descendant path of `route`.
pub fn is_route_active(route: &str, current: &str) -> bool {
    if route.is_empty() {
        return false;
    }
    current == route || current.starts_with(&format!("{route}/"))
}
