//! Personal (employees) domain module.
//!
//! Besides the wire model and form rules, this crate owns the supervisor
//! assignment rule: who may supervise an employee depends on the employee's
//! cargo. The rule is applied when the form is populated; the service does
//! not enforce it transactionally.

pub mod personal;
pub mod supervisor;

pub use personal::{Personal, PersonalForm, PersonalRequest, SupervisorInfo};
pub use supervisor::{
    JEFE_DE_SISTEMAS, SupervisorRule, TRABAJADOR_LIDER, cargo_name, supervisor_candidates,
};
