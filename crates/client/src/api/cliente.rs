use async_trait::async_trait;

use backoffice_clientes::{Cliente, ClienteRequest};
use backoffice_core::ClienteId;

use super::CrudApi;
use crate::error::ApiError;
use crate::http::{HttpClient, with_segment};

/// `/api/cliente`
#[derive(Clone)]
pub struct ClienteApi {
    http: HttpClient,
}

impl ClienteApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    fn url(&self, path: &str) -> String {
        self.http.settings().api_endpoint(&format!("cliente{path}"))
    }

    pub async fn list(&self) -> Result<Vec<Cliente>, ApiError> {
        self.http.get_json(&self.url("")).await
    }

    pub async fn get(&self, id: ClienteId) -> Result<Cliente, ApiError> {
        self.http.get_json(&self.url(&format!("/{id}"))).await
    }

    /// Lookup by natural key (document number).
    pub async fn get_by_documento(&self, numero: &str) -> Result<Cliente, ApiError> {
        let url = with_segment(&self.url("/documento"), numero)?;
        self.http.get_json(&url).await
    }

    pub async fn create(&self, request: &ClienteRequest) -> Result<Cliente, ApiError> {
        self.http.post_json(&self.url(""), request).await
    }

    pub async fn update(&self, id: ClienteId, request: &ClienteRequest) -> Result<Cliente, ApiError> {
        self.http.put_json(&self.url(&format!("/{id}")), request).await
    }

    pub async fn delete(&self, id: ClienteId) -> Result<(), ApiError> {
        self.http.delete(&self.url(&format!("/{id}"))).await
    }
}

#[async_trait]
impl CrudApi for ClienteApi {
    type Entity = Cliente;
    type Request = ClienteRequest;

    async fn list(&self) -> Result<Vec<Cliente>, ApiError> {
        ClienteApi::list(self).await
    }

    async fn create(&self, request: &ClienteRequest) -> Result<Cliente, ApiError> {
        ClienteApi::create(self, request).await
    }

    async fn update(&self, id: ClienteId, request: &ClienteRequest) -> Result<Cliente, ApiError> {
        ClienteApi::update(self, id, request).await
    }

    async fn delete(&self, id: ClienteId) -> Result<(), ApiError> {
        ClienteApi::delete(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::tests::client_for;
    use backoffice_clientes::ClienteForm;
    use backoffice_core::Form;
    use mockito::{Matcher, Server};

    const CLIENTE: &str = r#"{"clienteId":5,"tipoDocumento":"RUC","numeroDocumento":"20123456789",
        "razonSocial":"Servicios Andinos SAC","email":"ventas@andinos.pe","estado":true}"#;

    #[tokio::test]
    async fn lookup_by_documento() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/cliente/documento/20123456789")
            .with_status(200)
            .with_body(CLIENTE)
            .create_async()
            .await;

        let api = ClienteApi::new(client_for(&server.url(), true));
        let cliente = api.get_by_documento(" 20123456789 ").await.unwrap();
        mock.assert_async().await;
        assert_eq!(cliente.documento(), "RUC-20123456789");
    }

    #[tokio::test]
    async fn documento_with_reserved_characters_stays_in_the_path() {
        let mut server = Server::new_async().await;
        let as_query = server
            .mock("GET", "/api/cliente/documento/123?tipo=RUC")
            .expect(0)
            .create_async()
            .await;
        let escaped = server
            .mock("GET", "/api/cliente/documento/123%3Ftipo=RUC")
            .with_status(404)
            .with_body(r#"{"message":"Cliente no encontrado"}"#)
            .create_async()
            .await;

        let api = ClienteApi::new(client_for(&server.url(), true));
        let err = api.get_by_documento("123?tipo=RUC").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        escaped.assert_async().await;
        as_query.assert_async().await;

        let err = api.get_by_documento("..").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidKey(_)));
    }

    #[tokio::test]
    async fn create_sends_blank_optionals_as_empty_strings() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/cliente")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "tipoDocumento": "RUC",
                "razonSocial": "Servicios Andinos SAC",
                "nombreComercial": "",
                "observaciones": ""
            })))
            .with_status(201)
            .with_body(CLIENTE)
            .create_async()
            .await;

        let form = ClienteForm {
            tipo_documento: "RUC".into(),
            numero_documento: "20123456789".into(),
            razon_social: "Servicios Andinos SAC".into(),
            ..ClienteForm::default()
        };
        let api = ClienteApi::new(client_for(&server.url(), true));
        let created = api.create(&form.submit().unwrap()).await.unwrap();
        mock.assert_async().await;
        assert_eq!(created.cliente_id, ClienteId::new(5));
    }

    #[tokio::test]
    async fn missing_document_is_remote_404() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/cliente/documento/00000000")
            .with_status(404)
            .with_body(r#"{"message":"Cliente no encontrado"}"#)
            .create_async()
            .await;

        let api = ClienteApi::new(client_for(&server.url(), true));
        let err = api.get_by_documento("00000000").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.user_message("fallback"), "Cliente no encontrado");
    }
}
