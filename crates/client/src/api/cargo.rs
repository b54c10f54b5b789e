use async_trait::async_trait;

use backoffice_cargos::{Cargo, CargoRequest};
use backoffice_core::CargoId;

use super::CrudApi;
use crate::error::ApiError;
use crate::http::HttpClient;

/// `/api/cargo`
#[derive(Clone)]
pub struct CargoApi {
    http: HttpClient,
}

impl CargoApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    fn url(&self, path: &str) -> String {
        self.http.settings().api_endpoint(&format!("cargo{path}"))
    }

    pub async fn list(&self) -> Result<Vec<Cargo>, ApiError> {
        self.http.get_json(&self.url("")).await
    }

    /// Cargos with their `cantidadPersonal` head count.
    pub async fn list_con_personal(&self) -> Result<Vec<Cargo>, ApiError> {
        self.http.get_json(&self.url("/con-personal")).await
    }

    pub async fn get(&self, id: CargoId) -> Result<Cargo, ApiError> {
        self.http.get_json(&self.url(&format!("/{id}"))).await
    }

    pub async fn create(&self, request: &CargoRequest) -> Result<Cargo, ApiError> {
        self.http.post_json(&self.url(""), request).await
    }

    pub async fn update(&self, id: CargoId, request: &CargoRequest) -> Result<Cargo, ApiError> {
        self.http.put_json(&self.url(&format!("/{id}")), request).await
    }

    pub async fn delete(&self, id: CargoId) -> Result<(), ApiError> {
        self.http.delete(&self.url(&format!("/{id}"))).await
    }
}

#[async_trait]
impl CrudApi for CargoApi {
    type Entity = Cargo;
    type Request = CargoRequest;

    async fn list(&self) -> Result<Vec<Cargo>, ApiError> {
        CargoApi::list(self).await
    }

    async fn create(&self, request: &CargoRequest) -> Result<Cargo, ApiError> {
        CargoApi::create(self, request).await
    }

    async fn update(&self, id: CargoId, request: &CargoRequest) -> Result<Cargo, ApiError> {
        CargoApi::update(self, id, request).await
    }

    async fn delete(&self, id: CargoId) -> Result<(), ApiError> {
        CargoApi::delete(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::tests::client_for;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn create_then_list() {
        let mut server = Server::new_async().await;
        let create = server
            .mock("POST", "/api/cargo")
            .match_header("Authorization", "Bearer access-1")
            .match_body(Matcher::Json(serde_json::json!({
                "nombreCargo": "ANALISTA",
                "descripcion": "Análisis de sistemas",
                "sueldo": 3500.0
            })))
            .with_status(201)
            .with_body(r#"{"cargoId":9,"nombreCargo":"ANALISTA","descripcion":"Análisis de sistemas","sueldo":3500.0,"estado":true}"#)
            .create_async()
            .await;
        let list = server
            .mock("GET", "/api/cargo")
            .with_status(200)
            .with_body(r#"[{"cargoId":9,"nombreCargo":"ANALISTA","descripcion":"Análisis de sistemas","sueldo":3500.0,"estado":true}]"#)
            .create_async()
            .await;

        let api = CargoApi::new(client_for(&server.url(), true));
        let created = api
            .create(&CargoRequest {
                nombre_cargo: "ANALISTA".into(),
                descripcion: "Análisis de sistemas".into(),
                sueldo: 3500.0,
            })
            .await
            .unwrap();
        let all = api.list().await.unwrap();

        create.assert_async().await;
        list.assert_async().await;
        assert!(all.iter().any(|c| c.cargo_id == created.cargo_id));
    }

    #[tokio::test]
    async fn con_personal_carries_counts() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/cargo/con-personal")
            .with_status(200)
            .with_body(r#"[{"cargoId":1,"nombreCargo":"TRABAJADOR LIDER","sueldo":4000,"cantidadPersonal":3}]"#)
            .create_async()
            .await;

        let api = CargoApi::new(client_for(&server.url(), true));
        let cargos = api.list_con_personal().await.unwrap();
        assert_eq!(cargos[0].cantidad_personal, Some(3));
    }

    #[tokio::test]
    async fn update_and_delete_use_id_path() {
        let mut server = Server::new_async().await;
        let put = server
            .mock("PUT", "/api/cargo/2")
            .with_status(200)
            .with_body(r#"{"cargoId":2,"nombreCargo":"JEFE DE SISTEMAS","sueldo":8000}"#)
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/api/cargo/2")
            .with_status(204)
            .create_async()
            .await;

        let api = CargoApi::new(client_for(&server.url(), true));
        let request = CargoRequest {
            nombre_cargo: "JEFE DE SISTEMAS".into(),
            descripcion: String::new(),
            sueldo: 8000.0,
        };
        let updated = api.update(CargoId::new(2), &request).await.unwrap();
        assert_eq!(updated.sueldo, 8000.0);
        api.delete(CargoId::new(2)).await.unwrap();

        put.assert_async().await;
        delete.assert_async().await;
    }
}
