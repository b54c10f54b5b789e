//! Session commands.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing::info;

use backoffice_auth::Permission;
use backoffice_client::screens::LoginScreen;

use crate::app::App;
use crate::cli::LoginArgs;
use crate::output::{print_field_errors, print_json};

pub async fn login(app: &mut App, args: LoginArgs) -> anyhow::Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => read_password()?,
    };

    let mut screen = LoginScreen::new(app.auth.clone());
    screen.username = args.username;
    screen.password = password;

    match screen.submit(&mut app.navigator).await {
        Some(nav) => {
            let user = app.session().get_session();
            print_json(&serde_json::json!({
                "username": user.as_ref().map(|u| u.username.as_str()),
                "landed": nav.landed,
            }))
        }
        None if !screen.field_errors().is_empty() => {
            print_field_errors(screen.field_errors());
            anyhow::bail!("credenciales incompletas")
        }
        None => anyhow::bail!(
            "{}",
            screen.error_message().unwrap_or(backoffice_client::auth_client::LOGIN_FAILED)
        ),
    }
}

pub async fn logout(app: &mut App) -> anyhow::Result<()> {
    app.auth.logout().await?;
    let nav = app.navigator.navigate(backoffice_auth::LOGIN_ROUTE).await;
    info!(landed = nav.landed, "logged out");
    Ok(())
}

pub async fn refresh(app: &App) -> anyhow::Result<()> {
    let session = app.auth.refresh().await?;
    print_json(&session.user)
}

pub fn whoami(app: &App, can: Option<String>) -> anyhow::Result<()> {
    if let Some(key) = can {
        app.session().authorize(&Permission::new(key))?;
        println!("permitido");
        return Ok(());
    }
    let user = app
        .session()
        .get_session()
        .context("no hay una sesión activa")?;
    print_json(&user)
}

pub async fn validate_token(app: &App) -> anyhow::Result<()> {
    let response = app.auth.validate_token().await?;
    print_json(&response)
}

fn read_password() -> anyhow::Result<String> {
    eprint!("Contraseña: ");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
