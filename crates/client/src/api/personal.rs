use async_trait::async_trait;
use reqwest::StatusCode;

use backoffice_cargos::Cargo;
use backoffice_core::{CargoId, PersonalId};
use backoffice_personal::{Personal, PersonalRequest};

use super::{CargoApi, CrudApi};
use crate::error::ApiError;
use crate::http::{HttpClient, with_segment};

/// Data the personal screen needs besides the personal list itself.
#[async_trait]
pub trait PersonalLookups: Send + Sync {
    async fn cargos(&self) -> Result<Vec<Cargo>, ApiError>;

    /// Holders of the `TRABAJADOR LIDER` cargo.
    async fn leaders(&self) -> Result<Vec<Personal>, ApiError>;

    /// Holder of the `JEFE DE SISTEMAS` cargo, `None` when vacant.
    async fn chief(&self) -> Result<Option<Personal>, ApiError>;
}

/// `/api/personal`
#[derive(Clone)]
pub struct PersonalApi {
    http: HttpClient,
}

impl PersonalApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    fn url(&self, path: &str) -> String {
        self.http.settings().api_endpoint(&format!("personal{path}"))
    }

    pub async fn list(&self) -> Result<Vec<Personal>, ApiError> {
        self.http.get_json(&self.url("")).await
    }

    pub async fn get(&self, id: PersonalId) -> Result<Personal, ApiError> {
        self.http.get_json(&self.url(&format!("/{id}"))).await
    }

    pub async fn get_by_dni(&self, dni: &str) -> Result<Personal, ApiError> {
        let url = with_segment(&self.url("/dni"), dni)?;
        self.http.get_json(&url).await
    }

    pub async fn list_by_cargo(&self, cargo_id: CargoId) -> Result<Vec<Personal>, ApiError> {
        self.http
            .get_json(&self.url(&format!("/cargo/{cargo_id}")))
            .await
    }

    pub async fn trabajadores_lideres(&self) -> Result<Vec<Personal>, ApiError> {
        self.http.get_json(&self.url("/trabajadores-lideres")).await
    }

    /// A 404 means the position is vacant.
    pub async fn jefe_sistemas(&self) -> Result<Option<Personal>, ApiError> {
        match self.http.get_json(&self.url("/jefe-sistemas")).await {
            Ok(chief) => Ok(Some(chief)),
            Err(ApiError::Remote { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn create(&self, request: &PersonalRequest) -> Result<Personal, ApiError> {
        self.http.post_json(&self.url(""), request).await
    }

    pub async fn update(
        &self,
        id: PersonalId,
        request: &PersonalRequest,
    ) -> Result<Personal, ApiError> {
        self.http.put_json(&self.url(&format!("/{id}")), request).await
    }

    pub async fn delete(&self, id: PersonalId) -> Result<(), ApiError> {
        self.http.delete(&self.url(&format!("/{id}"))).await
    }
}

#[async_trait]
impl CrudApi for PersonalApi {
    type Entity = Personal;
    type Request = PersonalRequest;

    async fn list(&self) -> Result<Vec<Personal>, ApiError> {
        PersonalApi::list(self).await
    }

    async fn create(&self, request: &PersonalRequest) -> Result<Personal, ApiError> {
        PersonalApi::create(self, request).await
    }

    async fn update(&self, id: PersonalId, request: &PersonalRequest) -> Result<Personal, ApiError> {
        PersonalApi::update(self, id, request).await
    }

    async fn delete(&self, id: PersonalId) -> Result<(), ApiError> {
        PersonalApi::delete(self, id).await
    }
}

#[async_trait]
impl PersonalLookups for PersonalApi {
    async fn cargos(&self) -> Result<Vec<Cargo>, ApiError> {
        CargoApi::new(self.http.clone()).list().await
    }

    async fn leaders(&self) -> Result<Vec<Personal>, ApiError> {
        self.trabajadores_lideres().await
    }

    async fn chief(&self) -> Result<Option<Personal>, ApiError> {
        self.jefe_sistemas().await
    }
}
