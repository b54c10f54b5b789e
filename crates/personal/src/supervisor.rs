//! Supervisor assignment rule.
//!
//! - a `TRABAJADOR LIDER` reports to the single `JEFE DE SISTEMAS`;
//! - the `JEFE DE SISTEMAS` reports to nobody;
//! - every other cargo reports to one of the current `TRABAJADOR LIDER`s.
//!
//! Cargo names are matched exactly, as stored by the RRHH service.

use backoffice_cargos::Cargo;
use backoffice_core::CargoId;

use crate::Personal;

pub const TRABAJADOR_LIDER: &str = "TRABAJADOR LIDER";
pub const JEFE_DE_SISTEMAS: &str = "JEFE DE SISTEMAS";

/// Which pool a cargo draws its supervisor from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupervisorRule {
    /// Supervised by the chief of systems.
    ReportsToChief,
    /// No supervisor at all.
    NoSupervisor,
    /// Supervised by a lead worker.
    ReportsToLeader,
}

impl SupervisorRule {
    pub fn for_cargo(nombre_cargo: &str) -> Self {
        match nombre_cargo {
            TRABAJADOR_LIDER => SupervisorRule::ReportsToChief,
            JEFE_DE_SISTEMAS => SupervisorRule::NoSupervisor,
            _ => SupervisorRule::ReportsToLeader,
        }
    }
}

/// Supervisors selectable for an employee holding `nombre_cargo`.
///
/// `leaders` is the current list of lead workers and `chief` the chief of
/// systems, if one exists.
pub fn supervisor_candidates(
    nombre_cargo: &str,
    leaders: &[Personal],
    chief: Option<&Personal>,
) -> Vec<Personal> {
    match SupervisorRule::for_cargo(nombre_cargo) {
        SupervisorRule::ReportsToChief => chief.cloned().into_iter().collect(),
        SupervisorRule::NoSupervisor => Vec::new(),
        SupervisorRule::ReportsToLeader => leaders.to_vec(),
    }
}

/// Name of the cargo with `id`, or `"-"` when it is not in `cargos`.
pub fn cargo_name(cargos: &[Cargo], id: CargoId) -> &str {
    cargos
        .iter()
        .find(|c| c.cargo_id == id)
        .map_or("-", |c| c.nombre_cargo.as_str())
}
