//! CLI argument parsing and command definitions.
//!
//! - `login` / `logout` / `refresh` / `whoami` / `validate-token`: session
//! - `home`: resource cards of the current user
//! - `menu`: sidebar entries visible to the current user
//! - `navigate`: run a path through the route guards
//! - `cargo` / `cliente` / `personal`: CRUD screens

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use backoffice_core::{CargoId, ClienteId, PersonalId};

/// Back-office console for the RRHH and clientes services.
#[derive(Parser, Debug)]
#[command(name = "backoffice", version, long_about = None, propagate_version = true)]
pub struct Cli {
    /// Identity service base URL
    #[arg(long, env = "BACKOFFICE_AUTH_URL", global = true)]
    pub auth_url: Option<String>,

    /// RRHH service base URL
    #[arg(long, env = "BACKOFFICE_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Session storage file
    #[arg(long, env = "BACKOFFICE_STORAGE_PATH", global = true)]
    pub storage: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Log in and store the session
    Login(LoginArgs),

    /// Drop the local session and invalidate the token remotely
    Logout,

    /// Replace the session using the stored refresh token
    Refresh,

    /// Show the cached user claims
    Whoami {
        /// Only check whether the cached claims grant this `recurso:accion`
        #[arg(long, value_name = "PERMISO")]
        can: Option<String>,
    },

    /// Ask the identity service whether the stored token is still valid
    #[command(name = "validate-token")]
    ValidateToken,

    /// List the resources the user can open
    Home,

    /// Show the sidebar menu for the current session
    Menu {
        /// Highlight the entry matching this path
        #[arg(long)]
        current: Option<String>,
    },

    /// Resolve a path through the route guards
    Navigate { path: String },

    /// Job positions
    #[command(subcommand)]
    Cargo(CargoCommand),

    /// Clients
    #[command(subcommand)]
    Cliente(ClienteCommand),

    /// Employees
    #[command(subcommand)]
    Personal(PersonalCommand),
}

#[derive(Args, Debug, Clone)]
pub struct LoginArgs {
    pub username: String,

    /// Read from stdin when omitted
    #[arg(long, env = "BACKOFFICE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

// =============================================================================
// Cargo
// =============================================================================

#[derive(Subcommand, Debug, Clone)]
pub enum CargoCommand {
    List {
        /// Include the head count of each cargo
        #[arg(long)]
        con_personal: bool,
    },
    Get { id: CargoId },
    Create(CargoFields),
    Update {
        id: CargoId,
        #[command(flatten)]
        fields: CargoFields,
    },
    Delete(DeleteArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CargoFields {
    #[arg(long)]
    pub nombre: Option<String>,
    #[arg(long)]
    pub descripcion: Option<String>,
    #[arg(long)]
    pub sueldo: Option<f64>,
}

// =============================================================================
// Cliente
// =============================================================================

#[derive(Subcommand, Debug, Clone)]
pub enum ClienteCommand {
    List,
    Get { id: ClienteId },
    /// Look a client up by document number
    Documento { numero: String },
    Create(ClienteFields),
    Update {
        id: ClienteId,
        #[command(flatten)]
        fields: ClienteFields,
    },
    Delete(DeleteArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ClienteFields {
    /// DNI, RUC or PASAPORTE
    #[arg(long)]
    pub tipo_documento: Option<String>,
    #[arg(long)]
    pub numero_documento: Option<String>,
    #[arg(long)]
    pub razon_social: Option<String>,
    #[arg(long)]
    pub nombre_comercial: Option<String>,
    #[arg(long)]
    pub telefono: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub direccion: Option<String>,
    #[arg(long)]
    pub contacto_nombre: Option<String>,
    #[arg(long)]
    pub contacto_telefono: Option<String>,
    #[arg(long)]
    pub contacto_email: Option<String>,
    #[arg(long)]
    pub observaciones: Option<String>,
}

// =============================================================================
// Personal
// =============================================================================

#[derive(Subcommand, Debug, Clone)]
pub enum PersonalCommand {
    List,
    Get { id: PersonalId },
    Dni { dni: String },
    /// Employees holding a cargo
    PorCargo { cargo_id: CargoId },
    /// Current lead workers
    Lideres,
    /// Current chief of systems
    Jefe,
    /// Supervisors selectable for a cargo
    Supervisores { cargo_id: CargoId },
    Create(PersonalFields),
    Update {
        id: PersonalId,
        #[command(flatten)]
        fields: PersonalFields,
    },
    Delete(DeleteArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct PersonalFields {
    #[arg(long)]
    pub dni: Option<String>,
    #[arg(long)]
    pub nombres: Option<String>,
    #[arg(long)]
    pub apellido_paterno: Option<String>,
    #[arg(long)]
    pub apellido_materno: Option<String>,
    #[arg(long)]
    pub telefono: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub direccion: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub fecha_nacimiento: Option<String>,
    #[arg(long)]
    pub cargo_id: Option<CargoId>,
    #[arg(long)]
    pub supervisor_id: Option<PersonalId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_overrides() {
        let cli = Cli::parse_from([
            "backoffice",
            "--api-url",
            "http://rrhh:9082/api",
            "whoami",
            "--storage",
            "/tmp/s.json",
        ]);
        assert_eq!(cli.api_url.as_deref(), Some("http://rrhh:9082/api"));
        assert_eq!(cli.storage, Some(PathBuf::from("/tmp/s.json")));
        assert!(matches!(cli.command, Commands::Whoami { can: None }));
    }

    #[test]
    fn parses_cargo_update() {
        let cli = Cli::parse_from(["backoffice", "cargo", "update", "4", "--sueldo", "4100.5"]);
        let Commands::Cargo(CargoCommand::Update { id, fields }) = cli.command else {
            panic!("expected cargo update");
        };
        assert_eq!(id, CargoId::new(4));
        assert_eq!(fields.sueldo, Some(4100.5));
        assert!(fields.nombre.is_none());
    }

    #[test]
    fn parses_personal_create() {
        let cli = Cli::parse_from([
            "backoffice",
            "personal",
            "create",
            "--dni",
            "40000009",
            "--nombres",
            "Carla",
            "--apellido-paterno",
            "Soto",
            "--cargo-id",
            "3",
            "--supervisor-id",
            "2",
        ]);
        let Commands::Personal(PersonalCommand::Create(fields)) = cli.command else {
            panic!("expected personal create");
        };
        assert_eq!(fields.cargo_id, Some(CargoId::new(3)));
        assert_eq!(fields.supervisor_id, Some(PersonalId::new(2)));
    }

    #[test]
    fn rejects_non_positive_ids() {
        assert!(Cli::try_parse_from(["backoffice", "cargo", "get", "0"]).is_err());
        assert!(Cli::try_parse_from(["backoffice", "personal", "get", "abc"]).is_err());
        let cli = Cli::parse_from(["backoffice", "personal", "por-cargo", "4"]);
        assert!(matches!(
            cli.command,
            Commands::Personal(PersonalCommand::PorCargo { cargo_id }) if cargo_id == CargoId::new(4)
        ));
    }

    #[test]
    fn delete_requires_id() {
        assert!(Cli::try_parse_from(["backoffice", "cliente", "delete"]).is_err());
        let cli = Cli::parse_from(["backoffice", "cliente", "delete", "5", "--yes"]);
        assert!(matches!(
            cli.command,
            Commands::Cliente(ClienteCommand::Delete(DeleteArgs { id: 5, yes: true }))
        ));
    }
}
