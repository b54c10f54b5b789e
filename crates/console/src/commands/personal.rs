use anyhow::bail;

use backoffice_client::api::PersonalApi;
use backoffice_client::screens::PersonalApiScreen;
use backoffice_core::PersonalId;
use backoffice_personal::PersonalForm;

use super::{report_delete, report_submit, require_loaded, set};
use crate::app::App;
use crate::cli::{PersonalCommand, PersonalFields};
use crate::output::{confirmer, print_json};

pub const ROUTE: &str = "/dashboard/personal";

pub async fn execute(app: &mut App, cmd: PersonalCommand) -> anyhow::Result<()> {
    app.enter(ROUTE).await?;
    let api = PersonalApi::new(app.http.clone());

    match cmd {
        PersonalCommand::List => print_json(&api.list().await?),
        PersonalCommand::Get { id } => print_json(&api.get(id).await?),
        PersonalCommand::Dni { dni } => print_json(&api.get_by_dni(&dni).await?),
        PersonalCommand::PorCargo { cargo_id } => {
            print_json(&api.list_by_cargo(cargo_id).await?)
        }
        PersonalCommand::Lideres => print_json(&api.trabajadores_lideres().await?),
        PersonalCommand::Jefe => print_json(&api.jefe_sistemas().await?),
        PersonalCommand::Supervisores { cargo_id } => {
            let mut screen = PersonalApiScreen::new(api);
            screen.init().await;
            screen.select_cargo(Some(cargo_id));
            print_json(screen.supervisor_options())
        }
        PersonalCommand::Create(fields) => {
            let mut screen = PersonalApiScreen::new(api);
            screen.init().await;
            screen.start_create();
            fill(&mut screen, fields)?;
            let outcome = screen.submit().await;
            report_submit(screen.crud(), outcome)
        }
        PersonalCommand::Update { id, fields } => {
            let mut screen = PersonalApiScreen::new(api);
            let loaded = screen.init().await;
            require_loaded(screen.crud(), loaded)?;
            if !screen.edit(id) {
                bail!("personal {id} no encontrado");
            }
            fill(&mut screen, fields)?;
            let outcome = screen.submit().await;
            report_submit(screen.crud(), outcome)
        }
        PersonalCommand::Delete(args) => {
            let mut screen = PersonalApiScreen::new(api);
            let loaded = screen.init().await;
            require_loaded(screen.crud(), loaded)?;
            let outcome = screen
                .delete(PersonalId::new(args.id), confirmer(args.yes).as_ref())
                .await;
            report_delete(screen.crud(), outcome)
        }
    }
}

/// Apply the given fields. A cargo change resets the supervisor, so the
/// supervisor is chosen after the cargo.
fn fill(screen: &mut PersonalApiScreen, mut fields: PersonalFields) -> anyhow::Result<()> {
    let cargo_id = fields.cargo_id.take();
    let supervisor_id = fields.supervisor_id.take();

    apply_text(screen.crud_mut().form_mut(), fields);
    if let Some(cargo_id) = cargo_id {
        screen.select_cargo(Some(cargo_id));
    }
    if let Some(supervisor_id) = supervisor_id {
        if !screen.select_supervisor(Some(supervisor_id)) {
            let cargo = screen
                .crud()
                .form()
                .cargo_id
                .map_or("-", |id| screen.cargo_name(id));
            bail!("el supervisor {supervisor_id} no está disponible para el cargo {cargo}");
        }
    }
    Ok(())
}

fn apply_text(form: &mut PersonalForm, fields: PersonalFields) {
    set(&mut form.dni, fields.dni);
    set(&mut form.nombres, fields.nombres);
    set(&mut form.apellido_paterno, fields.apellido_paterno);
    set(&mut form.apellido_materno, fields.apellido_materno);
    set(&mut form.telefono, fields.telefono);
    set(&mut form.email, fields.email);
    set(&mut form.direccion, fields.direccion);
    set(&mut form.fecha_nacimiento, fields.fecha_nacimiento);
}
