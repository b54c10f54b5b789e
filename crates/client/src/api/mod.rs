//! REST clients of the RRHH service, one per entity.

mod cargo;
mod cliente;
mod personal;

pub use cargo::CargoApi;
pub use cliente::ClienteApi;
pub use personal::{PersonalApi, PersonalLookups};

use async_trait::async_trait;
use serde::Serialize;

use backoffice_core::Entity;

use crate::error::ApiError;

/// The four operations every CRUD screen drives.
#[async_trait]
pub trait CrudApi: Send + Sync {
    type Entity: Entity + Send + Sync;
    type Request: Serialize + Send + Sync;

    async fn list(&self) -> Result<Vec<Self::Entity>, ApiError>;

    async fn create(&self, request: &Self::Request) -> Result<Self::Entity, ApiError>;

    async fn update(
        &self,
        id: <Self::Entity as Entity>::Id,
        request: &Self::Request,
    ) -> Result<Self::Entity, ApiError>;

    async fn delete(&self, id: <Self::Entity as Entity>::Id) -> Result<(), ApiError>;
}
