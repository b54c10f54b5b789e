use backoffice_client::api::ClienteApi;
use backoffice_client::screens::{ClienteScreen, ScreenMessages};
use backoffice_clientes::ClienteForm;
use backoffice_core::ClienteId;

use super::{report_delete, report_submit, require_loaded, set};
use crate::app::App;
use crate::cli::{ClienteCommand, ClienteFields};
use crate::output::{confirmer, print_json};

pub const ROUTE: &str = "/dashboard/clientes";

pub async fn execute(app: &mut App, cmd: ClienteCommand) -> anyhow::Result<()> {
    app.enter(ROUTE).await?;
    let api = ClienteApi::new(app.http.clone());

    match cmd {
        ClienteCommand::List => print_json(&api.list().await?),
        ClienteCommand::Get { id } => print_json(&api.get(id).await?),
        ClienteCommand::Documento { numero } => print_json(&api.get_by_documento(&numero).await?),
        ClienteCommand::Create(fields) => {
            let mut screen = ClienteScreen::new(api, ScreenMessages::CLIENTE);
            screen.start_create();
            apply(screen.form_mut(), fields);
            let outcome = screen.submit().await;
            report_submit(&screen, outcome)
        }
        ClienteCommand::Update { id, fields } => {
            let mut screen = ClienteScreen::new(api, ScreenMessages::CLIENTE);
            let loaded = screen.load().await;
            require_loaded(&screen, loaded)?;
            if !screen.edit(id) {
                anyhow::bail!("cliente {id} no encontrado");
            }
            apply(screen.form_mut(), fields);
            let outcome = screen.submit().await;
            report_submit(&screen, outcome)
        }
        ClienteCommand::Delete(args) => {
            let mut screen = ClienteScreen::new(api, ScreenMessages::CLIENTE);
            let loaded = screen.load().await;
            require_loaded(&screen, loaded)?;
            let outcome = screen
                .delete(ClienteId::new(args.id), confirmer(args.yes).as_ref())
                .await;
            report_delete(&screen, outcome)
        }
    }
}

fn apply(form: &mut ClienteForm, fields: ClienteFields) {
    // Document kinds are accepted in any case.
    set(
        &mut form.tipo_documento,
        fields.tipo_documento.map(|t| t.trim().to_uppercase()),
    );
    set(&mut form.numero_documento, fields.numero_documento);
    set(&mut form.razon_social, fields.razon_social);
    set(&mut form.nombre_comercial, fields.nombre_comercial);
    set(&mut form.telefono, fields.telefono);
    set(&mut form.email, fields.email);
    set(&mut form.direccion, fields.direccion);
    set(&mut form.contacto_nombre, fields.contacto_nombre);
    set(&mut form.contacto_telefono, fields.contacto_telefono);
    set(&mut form.contacto_email, fields.contacto_email);
    set(&mut form.observaciones, fields.observaciones);
}
