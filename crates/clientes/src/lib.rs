//! Clientes (external customers) domain module.
//!
//! A cliente is identified on the service by a surrogate id and naturally by
//! its `(tipoDocumento, numeroDocumento)` pair.

pub mod cliente;

pub use cliente::{Cliente, ClienteForm, ClienteRequest, TipoDocumento};
