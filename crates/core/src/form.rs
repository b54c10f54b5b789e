//! Form contract shared by the CRUD screens.

use serde::Serialize;

use crate::{Entity, FieldErrors};

/// Editable form backing a create/update screen.
///
/// A form holds raw user input. It only becomes a request payload once it
/// validates; invalid forms never reach the network.
pub trait Form: Default + Clone {
    /// Record type the form edits.
    type Entity: Entity;
    /// Payload posted (create) or put (update) to the REST service.
    type Request: Serialize + core::fmt::Debug;

    /// Field-level validation of the current input.
    fn validate(&self) -> Result<(), FieldErrors>;

    /// Build the payload. Only called on a form that validated.
    fn to_request(&self) -> Self::Request;

    /// Populate the form from an existing record (edit mode).
    fn from_entity(entity: &Self::Entity) -> Self;

    /// Validate, then build the payload.
    fn submit(&self) -> Result<Self::Request, FieldErrors> {
        self.validate()?;
        Ok(self.to_request())
    }
}
