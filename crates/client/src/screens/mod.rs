//! Headless screens. Each one is a `&mut self` state machine driven from a
//! single task; rendering is left to the caller.

pub mod crud;
pub mod home;
pub mod login;
pub mod notification;
pub mod personal;
pub mod shell;

pub use crud::{CrudScreen, DeleteOutcome, Mode, ScreenMessages, ScreenState, SubmitOutcome};
pub use home::{HomeScreen, HomeState};
pub use login::LoginScreen;
pub use notification::{Confirm, Confirmation, Level, Notification};
pub use personal::PersonalScreen;
pub use shell::DashboardShell;

use backoffice_cargos::CargoForm;
use backoffice_clientes::ClienteForm;

use crate::api::{CargoApi, ClienteApi, PersonalApi};

pub type CargoScreen = CrudScreen<CargoApi, CargoForm>;
pub type ClienteScreen = CrudScreen<ClienteApi, ClienteForm>;
pub type PersonalApiScreen = PersonalScreen<PersonalApi>;
