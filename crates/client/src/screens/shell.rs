//! Dashboard shell: user header plus the permission-filtered sidebar.

use backoffice_auth::{MenuItem, UserInfo, build_menu, default_catalog, is_route_active};

use crate::session::SessionStore;

pub struct DashboardShell {
    catalog: Vec<MenuItem>,
}

impl Default for DashboardShell {
    fn default() -> Self {
        Self::new(default_catalog())
    }
}

impl DashboardShell {
    pub fn new(catalog: Vec<MenuItem>) -> Self {
        Self { catalog }
    }

    pub fn user(&self, session: &SessionStore) -> Option<UserInfo> {
        session.get_session()
    }

    /// Visible entries for the current session. Rebuilt on every call so a
    /// refreshed session shows up immediately.
    pub fn menu(&self, session: &SessionStore) -> Vec<MenuItem> {
        build_menu(&self.catalog, &session.permissions())
    }

    pub fn is_active(&self, item: &MenuItem, current: &str) -> bool {
        is_route_active(&item.route, current)
    }
}
