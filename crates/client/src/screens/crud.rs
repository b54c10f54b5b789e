//! Generic create/edit/delete screen.
//!
//! ```text
//! Idle ──start_create──▶ Creating ─┐
//!   ▲ ──edit(id)───────▶ Editing ──┴─submit─▶ Submitting ─ok──▶ Idle (+ reload)
//!   │                        ▲                    │
//!   │                        └──────── error ─────┘
//!   └── cancel_edit (confirmed)
//! ```
//!
//! Validation errors stay inline on the form and block submission. Server
//! errors become a [`Notification`]; nothing is retried.

use tracing::{error, warn};

use backoffice_core::{Entity, FieldErrors, Form};

use super::notification::{Confirm, Confirmation, Notification};
use crate::api::CrudApi;
use crate::error::ApiError;

type IdOf<A> = <<A as CrudApi>::Entity as Entity>::Id;

/// What a submission does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode<Id> {
    Creating,
    Editing(Id),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState<Id> {
    Idle,
    Creating,
    Editing(Id),
    Submitting(Mode<Id>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Form invalid; nothing was sent.
    Invalid,
    Saved,
    Failed,
    /// A submission is already in flight.
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Cancelled,
    Deleted,
    Failed,
    NotFound,
}

/// Per-entity wording of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenMessages {
    pub load_failed: &'static str,
    pub created: &'static str,
    pub create_failed: &'static str,
    pub updated: &'static str,
    pub update_failed: &'static str,
    pub deleted: &'static str,
    pub delete_failed: &'static str,
    /// Followed by the quoted record label.
    pub delete_question: &'static str,
}

impl ScreenMessages {
    pub const CARGO: ScreenMessages = ScreenMessages {
        load_failed: "No se pudieron cargar los cargos",
        created: "El cargo se registró correctamente",
        create_failed: "No se pudo registrar el cargo",
        updated: "El cargo se actualizó correctamente",
        update_failed: "No se pudo actualizar el cargo",
        deleted: "El cargo se eliminó correctamente",
        delete_failed: "Error al eliminar el cargo",
        delete_question: "¿Deseas eliminar el cargo",
    };

    pub const CLIENTE: ScreenMessages = ScreenMessages {
        load_failed: "No se pudieron cargar los clientes",
        created: "El cliente se registró correctamente",
        create_failed: "No se pudo registrar el cliente",
        updated: "El cliente se actualizó correctamente",
        update_failed: "No se pudo actualizar el cliente",
        deleted: "El cliente se eliminó correctamente",
        delete_failed: "Error al eliminar el cliente",
        delete_question: "¿Deseas eliminar el cliente",
    };

    pub const PERSONAL: ScreenMessages = ScreenMessages {
        load_failed: "No se pudo cargar el personal",
        created: "El personal se registró correctamente",
        create_failed: "No se pudo registrar el personal",
        updated: "El personal se actualizó correctamente",
        update_failed: "No se pudo actualizar el personal",
        deleted: "El personal se eliminó correctamente",
        delete_failed: "Error al eliminar el personal",
        delete_question: "¿Deseas eliminar a",
    };
}

pub struct CrudScreen<A: CrudApi, F> {
    api: A,
    messages: ScreenMessages,
    items: Vec<A::Entity>,
    form: F,
    field_errors: FieldErrors,
    state: ScreenState<IdOf<A>>,
    notification: Option<Notification>,
    loading: bool,
}

impl<A, F> CrudScreen<A, F>
where
    A: CrudApi,
    F: Form<Entity = A::Entity, Request = A::Request>,
{
    pub fn new(api: A, messages: ScreenMessages) -> Self {
        Self {
            api,
            messages,
            items: Vec::new(),
            form: F::default(),
            field_errors: FieldErrors::new(),
            state: ScreenState::Idle,
            notification: None,
            loading: false,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn items(&self) -> &[A::Entity] {
        &self.items
    }

    pub fn find(&self, id: IdOf<A>) -> Option<&A::Entity> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn state(&self) -> ScreenState<IdOf<A>> {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    pub fn dismiss(&mut self) {
        self.notification = None;
    }

    /// Replace the list with the service's current view.
    ///
    /// Returns whether the list was refreshed; on failure the previous list
    /// is kept and an error notification is raised.
    pub async fn load(&mut self) -> bool {
        self.loading = true;
        let result = self.api.list().await;
        self.loading = false;

        match result {
            Ok(items) => {
                self.items = items;
                true
            }
            Err(e) => {
                error!(error = %e, "list load failed");
                self.notify(Notification::error("Error", self.messages.load_failed));
                false
            }
        }
    }

    /// Clear the form for a new record.
    pub fn start_create(&mut self) {
        self.reset_form();
        self.state = ScreenState::Creating;
    }

    /// Populate the form from the listed record `id`.
    pub fn edit(&mut self, id: IdOf<A>) -> bool {
        let Some(entity) = self.find(id) else {
            return false;
        };
        let label = entity.label();
        self.form = F::from_entity(entity);
        self.field_errors = FieldErrors::new();
        self.state = ScreenState::Editing(id);
        self.notify(Notification::info("Modo edición", format!("Editando: {label}")));
        true
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        let mode = match self.state {
            ScreenState::Submitting(_) => return SubmitOutcome::Busy,
            ScreenState::Editing(id) => Mode::Editing(id),
            ScreenState::Idle | ScreenState::Creating => Mode::Creating,
        };

        let request = match self.form.submit() {
            Ok(request) => request,
            Err(errors) => {
                self.field_errors = errors;
                self.notify(Notification::warning(
                    "Formulario incompleto",
                    "Por favor, completa los campos requeridos",
                ));
                return SubmitOutcome::Invalid;
            }
        };
        self.field_errors = FieldErrors::new();

        let previous = self.state;
        self.state = ScreenState::Submitting(mode);
        let result = match mode {
            Mode::Creating => self.api.create(&request).await,
            Mode::Editing(id) => self.api.update(id, &request).await,
        };

        match result {
            Ok(_) => {
                self.reset_form();
                self.state = ScreenState::Idle;
                let notification = match mode {
                    Mode::Creating => Notification::success("¡Registrado!", self.messages.created),
                    Mode::Editing(_) => Notification::success("¡Actualizado!", self.messages.updated),
                };
                self.notify(notification);
                self.load().await;
                SubmitOutcome::Saved
            }
            Err(e) => {
                let fallback = match mode {
                    Mode::Creating => self.messages.create_failed,
                    Mode::Editing(_) => self.messages.update_failed,
                };
                error!(error = %e, "submit failed");
                self.state = previous;
                self.notify(Notification::error("Error", e.user_message(fallback)));
                SubmitOutcome::Failed
            }
        }
    }

    /// Delete the listed record `id` once `confirm` agrees.
    pub async fn delete(&mut self, id: IdOf<A>, confirm: &dyn Confirm) -> DeleteOutcome {
        let Some(entity) = self.find(id) else {
            return DeleteOutcome::NotFound;
        };
        let question = Confirmation {
            title: "¿Estás seguro?".to_string(),
            text: format!("{} \"{}\"?", self.messages.delete_question, entity.label()),
            confirm_label: "Sí, eliminar",
            cancel_label: "Cancelar",
        };
        if !confirm.confirm(&question) {
            return DeleteOutcome::Cancelled;
        }

        match self.api.delete(id).await {
            Ok(()) => {
                self.notify(Notification::success("¡Eliminado!", self.messages.deleted));
                self.load().await;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                if e.is_referential_conflict() {
                    warn!(%id, error = %e, "delete blocked by referencing records");
                } else {
                    error!(%id, error = %e, "delete failed");
                }
                let text = e.user_message(self.messages.delete_failed);
                self.notify(Notification::error("No se pudo eliminar", text));
                DeleteOutcome::Failed
            }
        }
    }

    /// Abandon the current edit once `confirm` agrees.
    pub fn cancel_edit(&mut self, confirm: &dyn Confirm) -> bool {
        let question = Confirmation {
            title: "¿Cancelar edición?".to_string(),
            text: "Los cambios no guardados se perderán".to_string(),
            confirm_label: "Sí, cancelar",
            cancel_label: "Seguir editando",
        };
        if !confirm.confirm(&question) {
            return false;
        }
        self.reset_form();
        self.state = ScreenState::Idle;
        true
    }

    fn reset_form(&mut self) {
        self.form = F::default();
        self.field_errors = FieldErrors::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CargoApi;
    use crate::http::tests::client_for;
    use crate::screens::notification::Level;
    use backoffice_cargos::CargoForm;
    use backoffice_core::{CargoId, FieldError};
    use mockito::Server;

    type CargoScreen = CrudScreen<CargoApi, CargoForm>;

    const LIST: &str = r#"[
        {"cargoId":1,"nombreCargo":"TRABAJADOR LIDER","sueldo":4000},
        {"cargoId":2,"nombreCargo":"ANALISTA","sueldo":3000}
    ]"#;

    fn screen(url: &str) -> CargoScreen {
        CrudScreen::new(CargoApi::new(client_for(url, true)), ScreenMessages::CARGO)
    }

    fn always(answer: bool) -> impl Fn(&Confirmation) -> bool {
        move |_| answer
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_network() {
        let mut server = Server::new_async().await;
        let post = server.mock("POST", "/api/cargo").expect(0).create_async().await;

        let mut screen = screen(&server.url());
        screen.start_create();
        screen.form_mut().nombre_cargo = "A".into();

        assert_eq!(screen.submit().await, SubmitOutcome::Invalid);
        assert!(screen.field_errors().contains("nombreCargo", &FieldError::MinLength { min: 2 }));
        assert!(screen.field_errors().contains("sueldo", &FieldError::Required));
        assert_eq!(screen.notification().unwrap().level, Level::Warning);
        assert_eq!(screen.state(), ScreenState::Creating);
        post.assert_async().await;
    }

    #[tokio::test]
    async fn successful_create_resets_and_reloads() {
        let mut server = Server::new_async().await;
        let post = server
            .mock("POST", "/api/cargo")
            .with_status(201)
            .with_body(r#"{"cargoId":2,"nombreCargo":"ANALISTA","sueldo":3000}"#)
            .create_async()
            .await;
        let list = server
            .mock("GET", "/api/cargo")
            .with_status(200)
            .with_body(LIST)
            .create_async()
            .await;

        let mut screen = screen(&server.url());
        screen.start_create();
        *screen.form_mut() = CargoForm {
            nombre_cargo: "ANALISTA".into(),
            descripcion: String::new(),
            sueldo: Some(3000.0),
        };

        assert_eq!(screen.submit().await, SubmitOutcome::Saved);
        post.assert_async().await;
        list.assert_async().await;
        assert_eq!(screen.state(), ScreenState::Idle);
        assert_eq!(screen.form(), &CargoForm::default());
        assert_eq!(screen.items().len(), 2);
        assert_eq!(screen.notification().unwrap().title, "¡Registrado!");
    }

    #[tokio::test]
    async fn failed_update_returns_to_editing_with_server_message() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/cargo")
            .with_status(200)
            .with_body(LIST)
            .create_async()
            .await;
        server
            .mock("PUT", "/api/cargo/2")
            .with_status(400)
            .with_body(r#"{"error":"Ya existe un cargo con ese nombre"}"#)
            .create_async()
            .await;

        let mut screen = screen(&server.url());
        assert!(screen.load().await);
        assert!(screen.edit(CargoId::new(2)));
        assert_eq!(screen.notification().unwrap().text, "Editando: ANALISTA");

        screen.form_mut().nombre_cargo = "TRABAJADOR LIDER".into();
        assert_eq!(screen.submit().await, SubmitOutcome::Failed);
        assert_eq!(screen.state(), ScreenState::Editing(CargoId::new(2)));
        let note = screen.notification().unwrap();
        assert_eq!(note.level, Level::Error);
        assert_eq!(note.text, "Ya existe un cargo con ese nombre");
        assert_eq!(screen.form().nombre_cargo, "TRABAJADOR LIDER");
    }

    #[tokio::test]
    async fn failed_create_without_message_uses_fallback() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/cargo")
            .with_status(500)
            .create_async()
            .await;

        let mut screen = screen(&server.url());
        screen.form_mut().nombre_cargo = "ANALISTA".into();
        screen.form_mut().sueldo = Some(1.0);
        assert_eq!(screen.submit().await, SubmitOutcome::Failed);
        assert_eq!(screen.state(), ScreenState::Idle);
        assert_eq!(screen.notification().unwrap().text, "No se pudo registrar el cargo");
    }

    #[tokio::test]
    async fn cancelled_delete_sends_nothing() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/cargo")
            .with_status(200)
            .with_body(LIST)
            .create_async()
            .await;
        let delete = server.mock("DELETE", "/api/cargo/2").expect(0).create_async().await;

        let mut screen = screen(&server.url());
        screen.load().await;

        let asked = std::cell::RefCell::new(None);
        let decline = |q: &Confirmation| {
            *asked.borrow_mut() = Some(q.text.clone());
            false
        };
        assert_eq!(screen.delete(CargoId::new(2), &decline).await, DeleteOutcome::Cancelled);
        assert_eq!(
            asked.borrow().as_deref(),
            Some("¿Deseas eliminar el cargo \"ANALISTA\"?")
        );
        delete.assert_async().await;
    }

    #[tokio::test]
    async fn referential_conflict_keeps_list_and_explains() {
        let mut server = Server::new_async().await;
        let list = server
            .mock("GET", "/api/cargo")
            .with_status(200)
            .with_body(LIST)
            .expect(1)
            .create_async()
            .await;
        server
            .mock("DELETE", "/api/cargo/1")
            .with_status(409)
            .with_body(r#"{"message":"No se puede eliminar: hay personal asignado a este cargo"}"#)
            .create_async()
            .await;

        let mut screen = screen(&server.url());
        screen.load().await;
        let outcome = screen.delete(CargoId::new(1), &always(true)).await;

        assert_eq!(outcome, DeleteOutcome::Failed);
        assert_eq!(screen.items().len(), 2);
        let note = screen.notification().unwrap();
        assert_eq!(note.title, "No se pudo eliminar");
        assert!(note.text.contains("personal asignado"));
        list.assert_async().await;
    }

    #[tokio::test]
    async fn rejected_delete_shows_server_text() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/cargo")
            .with_status(200)
            .with_body(LIST)
            .create_async()
            .await;
        let mut screen = screen(&server.url());
        screen.load().await;

        let rejected = server
            .mock("DELETE", "/api/cargo/1")
            .with_status(400)
            .with_body(r#"{"message":"El cargo ya fue dado de baja"}"#)
            .create_async()
            .await;
        assert_eq!(screen.delete(CargoId::new(1), &always(true)).await, DeleteOutcome::Failed);
        assert_eq!(screen.notification().unwrap().text, "El cargo ya fue dado de baja");
        assert_eq!(screen.items().len(), 2);
        rejected.remove_async().await;

        server
            .mock("DELETE", "/api/cargo/1")
            .with_status(500)
            .create_async()
            .await;
        assert_eq!(screen.delete(CargoId::new(1), &always(true)).await, DeleteOutcome::Failed);
        assert_eq!(
            screen.notification().unwrap().text,
            ScreenMessages::CARGO.delete_failed
        );
    }

    #[tokio::test]
    async fn confirmed_delete_reloads() {
        let mut server = Server::new_async().await;
        let list = server
            .mock("GET", "/api/cargo")
            .with_status(200)
            .with_body(LIST)
            .expect(2)
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/api/cargo/2")
            .with_status(204)
            .create_async()
            .await;

        let mut screen = screen(&server.url());
        screen.load().await;
        assert_eq!(
            screen.delete(CargoId::new(2), &always(true)).await,
            DeleteOutcome::Deleted
        );
        assert_eq!(
            screen.delete(CargoId::new(99), &always(true)).await,
            DeleteOutcome::NotFound
        );
        delete.assert_async().await;
        list.assert_async().await;
    }

    #[tokio::test]
    async fn load_failure_keeps_previous_items() {
        let mut server = Server::new_async().await;
        let mut screen = screen(&server.url());
        let ok = server
            .mock("GET", "/api/cargo")
            .with_status(200)
            .with_body(LIST)
            .create_async()
            .await;
        assert!(screen.load().await);
        ok.remove_async().await;
        server
            .mock("GET", "/api/cargo")
            .with_status(503)
            .create_async()
            .await;

        assert!(!screen.load().await);
        assert_eq!(screen.items().len(), 2);
        assert_eq!(screen.notification().unwrap().text, "No se pudieron cargar los cargos");
        screen.dismiss();
        assert!(screen.notification().is_none());
    }

    #[test]
    fn cancel_edit_needs_confirmation() {
        let mut screen = screen("http://127.0.0.1:9");
        screen.form_mut().nombre_cargo = "BORRADOR".into();
        assert!(!screen.cancel_edit(&always(false)));
        assert_eq!(screen.form().nombre_cargo, "BORRADOR");
        assert!(screen.cancel_edit(&always(true)));
        assert_eq!(screen.form(), &CargoForm::default());
        assert_eq!(screen.state(), ScreenState::Idle);
    }
}
