//! Cargos (job positions) domain module.
//!
//! Records live in the RRHH service; this crate holds the wire model, the
//! request payload and the form rules applied before a create/update.

pub mod cargo;

pub use cargo::{Cargo, CargoForm, CargoRequest};
