//! Personal screen: the generic CRUD screen plus supervisor selection.
//!
//! The supervisor pools (lead workers and the chief of systems) are fetched
//! independently and refreshed after every successful personal-list reload.
//! Concurrent reloads are neither deduplicated nor ordered; the last response
//! to arrive wins.

use tracing::warn;

use backoffice_cargos::Cargo;
use backoffice_core::{CargoId, PersonalId};
use backoffice_personal::{
    Personal, PersonalForm, PersonalRequest, cargo_name, supervisor_candidates,
};

use super::crud::{CrudScreen, DeleteOutcome, ScreenMessages, SubmitOutcome};
use super::notification::{Confirm, Notification};
use crate::api::{CrudApi, PersonalLookups};

pub struct PersonalScreen<A: CrudApi> {
    crud: CrudScreen<A, PersonalForm>,
    cargos: Vec<Cargo>,
    leaders: Vec<Personal>,
    chief: Option<Personal>,
    supervisor_options: Vec<Personal>,
}

impl<A> PersonalScreen<A>
where
    A: CrudApi<Entity = Personal, Request = PersonalRequest> + PersonalLookups,
{
    pub fn new(api: A) -> Self {
        Self {
            crud: CrudScreen::new(api, ScreenMessages::PERSONAL),
            cargos: Vec::new(),
            leaders: Vec::new(),
            chief: None,
            supervisor_options: Vec::new(),
        }
    }

    pub fn crud(&self) -> &CrudScreen<A, PersonalForm> {
        &self.crud
    }

    pub fn crud_mut(&mut self) -> &mut CrudScreen<A, PersonalForm> {
        &mut self.crud
    }

    pub fn cargos(&self) -> &[Cargo] {
        &self.cargos
    }

    pub fn leaders(&self) -> &[Personal] {
        &self.leaders
    }

    pub fn chief(&self) -> Option<&Personal> {
        self.chief.as_ref()
    }

    /// Supervisors selectable for the cargo currently in the form.
    pub fn supervisor_options(&self) -> &[Personal] {
        &self.supervisor_options
    }

    /// Screen activation: cargos, personal list and both supervisor pools.
    /// Cargo list, then the personal list. Returns whether the personal
    /// list loaded; a cargo failure only leaves its notification.
    pub async fn init(&mut self) -> bool {
        self.load_cargos().await;
        self.load().await
    }

    pub async fn load_cargos(&mut self) -> bool {
        match self.crud.api().cargos().await {
            Ok(cargos) => {
                self.cargos = cargos;
                true
            }
            Err(e) => {
                warn!(error = %e, "cargo list load failed");
                self.crud
                    .notify(Notification::error("Error", "No se pudieron cargar los cargos"));
                false
            }
        }
    }

    /// Reload the personal list, then the supervisor pools.
    pub async fn load(&mut self) -> bool {
        let loaded = self.crud.load().await;
        if loaded {
            self.load_supervisor_pools().await;
        }
        loaded
    }

    /// Refresh leaders and chief. A failed leader fetch keeps the old list;
    /// a failed chief fetch clears it.
    pub async fn load_supervisor_pools(&mut self) {
        match self.crud.api().leaders().await {
            Ok(leaders) => self.leaders = leaders,
            Err(e) => warn!(error = %e, "lead worker list load failed"),
        }
        match self.crud.api().chief().await {
            Ok(chief) => self.chief = chief,
            Err(e) => {
                warn!(error = %e, "chief of systems load failed");
                self.chief = None;
            }
        }
    }

    /// Change the form's cargo. Always clears the chosen supervisor.
    pub fn select_cargo(&mut self, cargo_id: Option<CargoId>) {
        let form = self.crud.form_mut();
        form.cargo_id = cargo_id;
        form.supervisor_id = None;
        self.supervisor_options = match cargo_id {
            None => Vec::new(),
            Some(id) => supervisor_candidates(
                cargo_name(&self.cargos, id),
                &self.leaders,
                self.chief.as_ref(),
            ),
        };
    }

    /// Pick a supervisor among the current options (`None` clears it).
    pub fn select_supervisor(&mut self, supervisor_id: Option<PersonalId>) -> bool {
        if let Some(id) = supervisor_id {
            if !self.supervisor_options.iter().any(|p| p.personal_id == id) {
                return false;
            }
        }
        self.crud.form_mut().supervisor_id = supervisor_id;
        true
    }

    pub fn start_create(&mut self) {
        self.crud.start_create();
        self.supervisor_options.clear();
    }

    /// Edit a listed employee; supervisor options are recomputed for its
    /// cargo before the form is populated.
    pub fn edit(&mut self, id: PersonalId) -> bool {
        let Some(cargo_id) = self.crud.find(id).map(|p| p.cargo_id) else {
            return false;
        };
        self.select_cargo(Some(cargo_id));
        self.crud.edit(id)
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.crud.submit().await;
        if outcome == SubmitOutcome::Saved {
            self.supervisor_options.clear();
            self.load_supervisor_pools().await;
        }
        outcome
    }

    pub async fn delete(&mut self, id: PersonalId, confirm: &dyn Confirm) -> DeleteOutcome {
        let outcome = self.crud.delete(id, confirm).await;
        if outcome == DeleteOutcome::Deleted {
            self.load_supervisor_pools().await;
        }
        outcome
    }

    pub fn cancel_edit(&mut self, confirm: &dyn Confirm) -> bool {
        let cancelled = self.crud.cancel_edit(confirm);
        if cancelled {
            self.supervisor_options.clear();
        }
        cancelled
    }

    /// Display name of a cargo, `"-"` when unknown.
    pub fn cargo_name(&self, id: CargoId) -> &str {
        cargo_name(&self.cargos, id)
    }
}
