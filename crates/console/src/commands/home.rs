//! Landing page, menu and raw navigation.

use anyhow::bail;

use backoffice_client::screens::{DashboardShell, HomeScreen, HomeState};

use crate::app::App;
use crate::output::print_json;

pub async fn home(app: &mut App) -> anyhow::Result<()> {
    app.enter(backoffice_auth::HOME_ROUTE).await?;

    let mut screen = HomeScreen::new(app.auth.clone());
    match screen.activate().await {
        HomeState::Loaded { username, cards } => print_json(&serde_json::json!({
            "username": username,
            "recursos": cards,
        })),
        HomeState::Failed { message } => bail!("{message}"),
        HomeState::Loading => Ok(()),
    }
}

pub fn menu(app: &App, current: Option<&str>) -> anyhow::Result<()> {
    let shell = DashboardShell::default();
    let current = current.unwrap_or(app.navigator.current());
    let entries: Vec<_> = shell
        .menu(app.session())
        .into_iter()
        .map(|item| {
            let active = shell.is_active(&item, current);
            serde_json::json!({
                "label": item.label,
                "route": item.route,
                "icon": item.icon,
                "active": active,
            })
        })
        .collect();
    print_json(&entries)
}

pub async fn navigate(app: &mut App, path: &str) -> anyhow::Result<()> {
    let nav = app.navigator.navigate(path).await;
    print_json(&serde_json::json!({
        "requested": nav.requested,
        "landed": nav.landed,
        "title": nav.title,
    }))
}
