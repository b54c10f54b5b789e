use backoffice_cargos::CargoForm;
use backoffice_client::api::CargoApi;
use backoffice_client::screens::{CargoScreen, ScreenMessages};
use backoffice_core::CargoId;

use super::{report_delete, report_submit, require_loaded, set};
use crate::app::App;
use crate::cli::{CargoCommand, CargoFields};
use crate::output::{confirmer, print_json};

pub const ROUTE: &str = "/dashboard/cargos";

pub async fn execute(app: &mut App, cmd: CargoCommand) -> anyhow::Result<()> {
    app.enter(ROUTE).await?;
    let api = CargoApi::new(app.http.clone());

    match cmd {
        CargoCommand::List { con_personal: true } => print_json(&api.list_con_personal().await?),
        CargoCommand::List { con_personal: false } => print_json(&api.list().await?),
        CargoCommand::Get { id } => print_json(&api.get(id).await?),
        CargoCommand::Create(fields) => {
            let mut screen = CargoScreen::new(api, ScreenMessages::CARGO);
            screen.start_create();
            apply(screen.form_mut(), fields);
            let outcome = screen.submit().await;
            report_submit(&screen, outcome)
        }
        CargoCommand::Update { id, fields } => {
            let mut screen = CargoScreen::new(api, ScreenMessages::CARGO);
            let loaded = screen.load().await;
            require_loaded(&screen, loaded)?;
            if !screen.edit(id) {
                anyhow::bail!("cargo {id} no encontrado");
            }
            apply(screen.form_mut(), fields);
            let outcome = screen.submit().await;
            report_submit(&screen, outcome)
        }
        CargoCommand::Delete(args) => {
            let mut screen = CargoScreen::new(api, ScreenMessages::CARGO);
            let loaded = screen.load().await;
            require_loaded(&screen, loaded)?;
            let outcome = screen
                .delete(CargoId::new(args.id), confirmer(args.yes).as_ref())
                .await;
            report_delete(&screen, outcome)
        }
    }
}

fn apply(form: &mut CargoForm, fields: CargoFields) {
    set(&mut form.nombre_cargo, fields.nombre);
    set(&mut form.descripcion, fields.descripcion);
    if fields.sueldo.is_some() {
        form.sueldo = fields.sueldo;
    }
}
