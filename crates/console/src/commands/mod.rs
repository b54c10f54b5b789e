//! CLI command implementations.
//!
//! Entity commands enter their screen through the navigator first, so a
//! route the user may not open fails the same way it would in the UI.

mod cargo;
mod cliente;
mod home;
mod personal;
mod session;

use anyhow::bail;

use backoffice_client::api::CrudApi;
use backoffice_client::screens::{CrudScreen, DeleteOutcome, SubmitOutcome};
use backoffice_core::Form;

use crate::app::App;
use crate::cli::{Cli, Commands};
use crate::output::{print_field_errors, print_notification};

/// Executes the appropriate command based on CLI arguments.
pub async fn execute(cli: Cli) -> anyhow::Result<()> {
    let mut app = App::from_cli(&cli)?;
    match cli.command {
        Commands::Login(args) => session::login(&mut app, args).await,
        Commands::Logout => session::logout(&mut app).await,
        Commands::Refresh => session::refresh(&app).await,
        Commands::Whoami { can } => session::whoami(&app, can),
        Commands::ValidateToken => session::validate_token(&app).await,
        Commands::Home => home::home(&mut app).await,
        Commands::Menu { current } => home::menu(&app, current.as_deref()),
        Commands::Navigate { path } => home::navigate(&mut app, &path).await,
        Commands::Cargo(cmd) => cargo::execute(&mut app, cmd).await,
        Commands::Cliente(cmd) => cliente::execute(&mut app, cmd).await,
        Commands::Personal(cmd) => personal::execute(&mut app, cmd).await,
    }
}

/// Print the screen's feedback; invalid or failed submissions are errors.
fn report_submit<A, F>(screen: &CrudScreen<A, F>, outcome: SubmitOutcome) -> anyhow::Result<()>
where
    A: CrudApi,
    F: Form<Entity = A::Entity, Request = A::Request>,
{
    if let Some(notification) = screen.notification() {
        print_notification(notification);
    }
    match outcome {
        SubmitOutcome::Saved => Ok(()),
        SubmitOutcome::Invalid => {
            print_field_errors(screen.field_errors());
            bail!("formulario inválido")
        }
        SubmitOutcome::Failed => bail!("la operación falló"),
        SubmitOutcome::Busy => bail!("ya hay un envío en curso"),
    }
}

fn report_delete<A, F>(screen: &CrudScreen<A, F>, outcome: DeleteOutcome) -> anyhow::Result<()>
where
    A: CrudApi,
    F: Form<Entity = A::Entity, Request = A::Request>,
{
    match outcome {
        DeleteOutcome::Cancelled => {
            eprintln!("cancelado");
            Ok(())
        }
        DeleteOutcome::NotFound => bail!("registro no encontrado"),
        DeleteOutcome::Deleted | DeleteOutcome::Failed => {
            if let Some(notification) = screen.notification() {
                print_notification(notification);
            }
            if outcome == DeleteOutcome::Failed {
                bail!("no se pudo eliminar");
            }
            Ok(())
        }
    }
}

/// Stop with the screen's own explanation when its list could not be
/// fetched, instead of reporting the record as missing.
fn require_loaded<A, F>(screen: &CrudScreen<A, F>, loaded: bool) -> anyhow::Result<()>
where
    A: CrudApi,
    F: Form<Entity = A::Entity, Request = A::Request>,
{
    if loaded {
        return Ok(());
    }
    match screen.notification() {
        Some(notification) => bail!("{notification}"),
        None => bail!("no se pudo cargar la lista"),
    }
}

/// Overwrite `target` when a value was given on the command line.
fn set(target: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *target = value;
    }
}
