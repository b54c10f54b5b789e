//! Resource landing cards.
//!
//! The landing page lists every resource the user can reach. Display
//! metadata comes from a fixed table; resources the table does not know get
//! a title-cased label, a generic icon and a `/dashboard/<name>` route.

use serde::Serialize;

const FALLBACK_ICON: &str = "fa-solid fa-folder";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceCard {
    /// Resource name as returned by the identity service.
    pub nombre: String,
    pub nombre_display: String,
    pub icono: String,
    pub ruta: String,
}

/// `(display name, icon, route)` for known resources (lower-cased key).
fn display_config(recurso: &str) -> Option<(&'static str, &'static str, &'static str)> {
    let config = match recurso {
        "cargo" => ("Cargos", "fa-solid fa-briefcase", "/dashboard/cargos"),
        "rrhh" => ("Personal", "fa-solid fa-user-gear", "/dashboard/rrhh"),
        "reportes" => ("Reportes", "fa-solid fa-chart-pie", "/dashboard/reportes"),
        "security" => ("Seguridad", "fa-solid fa-shield-halved", "/dashboard/security"),
        "registro" => ("Registro", "fa-solid fa-pen", "/dashboard/registro"),
        "seguimiento" => ("Seguimiento", "fa-solid fa-chart-line", "/dashboard/seguimiento"),
        "historial" => ("Historial", "fa-solid fa-clock-rotate-left", "/dashboard/historial"),
        "notificacion" => ("Notificación", "fa-solid fa-bell", "/dashboard/notificacion"),
        "servicios" => ("Servicios", "fa-solid fa-plus", "/dashboard/servicios"),
        "clientes" => ("Clientes", "fa-solid fa-users", "/dashboard/clientes"),
        _ => return None,
    };
    Some(config)
}

/// Map each resource name to its card, keeping the input order.
pub fn map_resources<S: AsRef<str>>(recursos: &[S]) -> Vec<ResourceCard> {
    recursos.iter().map(|r| card_for(r.as_ref())).collect()
}

fn card_for(recurso: &str) -> ResourceCard {
    let key = recurso.to_lowercase();
    match display_config(&key) {
        Some((display, icon, route)) => ResourceCard {
            nombre: recurso.to_string(),
            nombre_display: display.to_string(),
            icono: icon.to_string(),
            ruta: route.to_string(),
        },
        None => ResourceCard {
            nombre: recurso.to_string(),
            nombre_display: capitalize(recurso),
            icono: FALLBACK_ICON.to_string(),
            ruta: format!("/dashboard/{key}"),
        },
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_resources_use_display_table() {
        let cards = map_resources(&["cargo", "CLIENTES"]);
        assert_eq!(cards[0].nombre_display, "Cargos");
        assert_eq!(cards[0].ruta, "/dashboard/cargos");
        assert_eq!(cards[1].nombre, "CLIENTES");
        assert_eq!(cards[1].nombre_display, "Clientes");
        assert_eq!(cards[1].icono, "fa-solid fa-users");
    }

    #[test]
    fn unknown_resources_fall_back() {
        let cards = map_resources(&["INVENTARIO"]);
        assert_eq!(
            cards[0],
            ResourceCard {
                nombre: "INVENTARIO".to_string(),
                nombre_display: "Inventario".to_string(),
                icono: FALLBACK_ICON.to_string(),
                ruta: "/dashboard/inventario".to_string(),
            }
        );
    }

    #[test]
    fn empty_name_does_not_panic() {
        let cards = map_resources(&[""]);
        assert_eq!(cards[0].nombre_display, "");
        assert_eq!(cards[0].ruta, "/dashboard/");
    }
}
