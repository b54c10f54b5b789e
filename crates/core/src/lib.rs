//! `backoffice-core`: shared building blocks for the back-office console.
//!
//! This crate contains **pure** primitives (no IO, no HTTP, no storage):
//! identifiers, the domain error model and field-level form validation.

pub mod entity;
pub mod error;
pub mod form;
pub mod id;
pub mod timestamp;
pub mod validation;

pub use entity::Entity;
pub use error::DomainError;
pub use form::Form;
pub use id::{CargoId, ClienteId, PersonalId, UsuarioId};
pub use validation::{FieldError, FieldErrors, Validator};
