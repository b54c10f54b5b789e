//! Bearer-authenticated JSON transport shared by every remote client.

use std::sync::Arc;

use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{ApiError, AuthError};
use crate::session::SessionStore;
use crate::settings::ClientSettings;

/// Build the underlying `reqwest` client with the configured timeout.
pub fn build_http_client(settings: &ClientSettings) -> Result<Client, ApiError> {
    Client::builder()
        .timeout(settings.timeout)
        .build()
        .map_err(|e| ApiError::Transport(format!("failed to create client: {e}")))
}

/// `base` with a user-typed `key` appended as one percent-encoded path
/// segment, so `?`, `#` or `/` in the key stay part of it.
pub(crate) fn with_segment(base: &str, key: &str) -> Result<String, ApiError> {
    let key = key.trim();
    if key.is_empty() || key.chars().all(|c| c == '.') {
        return Err(ApiError::InvalidKey(key.to_string()));
    }
    let mut url =
        Url::parse(base).map_err(|e| ApiError::Transport(format!("invalid url {base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| ApiError::Transport(format!("url cannot take a path: {base}")))?
        .pop_if_empty()
        .push(key);
    Ok(url.to_string())
}

/// Cheap to clone: the connection pool and the session store are shared.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    settings: Arc<ClientSettings>,
    session: Arc<SessionStore>,
}

impl HttpClient {
    pub fn new(settings: ClientSettings, session: Arc<SessionStore>) -> Result<Self, ApiError> {
        let client = build_http_client(&settings)?;
        Ok(Self {
            client,
            settings: Arc::new(settings),
            session,
        })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Current bearer token. Fails locally when there is no session.
    fn token(&self) -> Result<String, ApiError> {
        self.session
            .get_token()
            .ok_or(ApiError::Auth(AuthError::MissingToken))
    }

    fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        Ok(builder.bearer_auth(self.token()?))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!(method = "GET", url, "request");
        let req = self.authorized(self.client.get(url))?;
        let resp = self.send(req, url).await?;
        Ok(resp.json().await?)
    }

    pub async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(method = "POST", url, "request");
        let req = self.authorized(self.client.post(url).json(body))?;
        let resp = self.send(req, url).await?;
        Ok(resp.json().await?)
    }

    pub async fn put_json<B, T>(&self, url: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(method = "PUT", url, "request");
        let req = self.authorized(self.client.put(url).json(body))?;
        let resp = self.send(req, url).await?;
        Ok(resp.json().await?)
    }

    /// DELETE; any response body is ignored.
    pub async fn delete(&self, url: &str) -> Result<(), ApiError> {
        debug!(method = "DELETE", url, "request");
        let req = self.authorized(self.client.delete(url))?;
        self.send(req, url).await?;
        Ok(())
    }

    /// POST without a body using an explicit token instead of the session's.
    pub(crate) async fn post_with_token(&self, url: &str, token: &str) -> Result<(), ApiError> {
        debug!(method = "POST", url, "request");
        let req = self.client.post(url).bearer_auth(token);
        self.send(req, url).await?;
        Ok(())
    }

    /// Unauthenticated POST returning the raw response, success or not.
    pub(crate) async fn post_public<B>(&self, url: &str, body: &B) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        debug!(method = "POST", url, "request");
        Ok(self.client.post(url).json(body).send().await?)
    }

    async fn send(&self, req: RequestBuilder, url: &str) -> Result<Response, ApiError> {
        let resp = req.send().await.map_err(|e| {
            error!(url, error = %e, "request failed");
            ApiError::from(e)
        })?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = error_message(resp).await;
        error!(url, status = status.as_u16(), message = ?message, "remote error");
        Err(remote_error(status, message))
    }
}

fn remote_error(status: StatusCode, message: Option<String>) -> ApiError {
    if status == StatusCode::UNAUTHORIZED {
        ApiError::Auth(AuthError::Rejected {
            status: status.as_u16(),
            message: message.unwrap_or_else(|| "token rejected".to_string()),
        })
    } else {
        ApiError::Remote {
            status: status.as_u16(),
            message,
        }
    }
}

/// Message carried by an error body: `error` first, then `message`.
pub(crate) async fn error_message(resp: Response) -> Option<String> {
    let body = resp.text().await.ok()?;
    message_from_body(&body)
}

fn message_from_body(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["error", "message"].iter().find_map(|field| {
        value
            .get(field)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::session::tests::auth_response;
    use crate::storage::MemoryStorage;
    use mockito::Server;

    /// Client pointed at `server_url` for both services, optionally logged in.
    pub(crate) fn client_for(server_url: &str, logged_in: bool) -> HttpClient {
        let settings = ClientSettings::default()
            .with_auth_url(format!("{server_url}/api/auth"))
            .with_api_url(format!("{server_url}/api"));
        let session = Arc::new(SessionStore::new(Arc::new(MemoryStorage::new())));
        if logged_in {
            session
                .set_session(&auth_response(&["cargo:read", "clientes:read", "rrhh:read"]))
                .unwrap();
        }
        HttpClient::new(settings, session).unwrap()
    }

    #[test]
    fn lookup_keys_become_one_segment() {
        let base = "http://localhost:9082/api/cliente/documento";
        assert_eq!(
            with_segment(base, " 123?tipo=RUC ").unwrap(),
            "http://localhost:9082/api/cliente/documento/123%3Ftipo=RUC"
        );
        assert_eq!(
            with_segment(base, "20/1#x").unwrap(),
            "http://localhost:9082/api/cliente/documento/20%2F1%23x"
        );
        assert!(matches!(with_segment(base, ".."), Err(ApiError::InvalidKey(_))));
        assert!(matches!(with_segment(base, "  "), Err(ApiError::InvalidKey(_))));
    }

    #[test]
    fn message_lookup_order() {
        assert_eq!(
            message_from_body(r#"{"error":"DNI duplicado","message":"Bad Request"}"#).as_deref(),
            Some("DNI duplicado")
        );
        assert_eq!(
            message_from_body(r#"{"message":"Cargo no encontrado"}"#).as_deref(),
            Some("Cargo no encontrado")
        );
        assert_eq!(message_from_body(r#"{"error":""}"#), None);
        assert_eq!(message_from_body("<html>502</html>"), None);
    }

    #[tokio::test]
    async fn sends_bearer_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/cargo")
            .match_header("Authorization", "Bearer access-1")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = client_for(&server.url(), true);
        let url = client.settings().api_endpoint("cargo");
        let list: Vec<Value> = client.get_json(&url).await.unwrap();
        assert!(list.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn missing_token_never_hits_the_network() {
        let mut server = Server::new_async().await;
        let mock = server.mock("GET", "/api/cargo").expect(0).create_async().await;

        let client = client_for(&server.url(), false);
        let url = client.settings().api_endpoint("cargo");
        let err = client.get_json::<Vec<Value>>(&url).await.unwrap_err();
        assert!(matches!(err, ApiError::Auth(AuthError::MissingToken)));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_maps_to_remote_error() {
        let mut server = Server::new_async().await;
        server
            .mock("DELETE", "/api/cargo/4")
            .with_status(400)
            .with_body(r#"{"message":"El cargo tiene personal asignado"}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/api/cargo")
            .with_status(401)
            .create_async()
            .await;

        let client = client_for(&server.url(), true);
        let err = client
            .delete(&client.settings().api_endpoint("cargo/4"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert!(err.is_referential_conflict());

        let err = client
            .get_json::<Vec<Value>>(&client.settings().api_endpoint("cargo"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Auth(AuthError::Rejected { status: 401, .. })));
    }

    #[tokio::test]
    async fn undecodable_body_is_decode_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/cargo")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = client_for(&server.url(), true);
        let err = client
            .get_json::<Vec<Value>>(&client.settings().api_endpoint("cargo"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
