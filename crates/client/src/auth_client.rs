//! Client of the identity service (`/api/auth`).

use serde_json::Value;
use tracing::{info, warn};

use backoffice_auth::{
    AuthResponse, LoginRequest, PermissionResponse, RefreshTokenRequest, UserPermissionsResponse,
    ValidateTokenResponse,
};
use backoffice_core::{FieldErrors, Validator};

use crate::error::{ApiError, AuthError, StorageError};
use crate::http::{HttpClient, error_message};
use crate::session::{Session, SessionStore};

pub const LOGIN_FAILED: &str = "Error en el login";
pub const MIN_PASSWORD_LEN: usize = 6;

/// Login form rules: username required, password required (min 6).
pub fn validate_credentials(username: &str, password: &str) -> Result<(), FieldErrors> {
    let mut v = Validator::new();
    v.text("username", username).required();
    v.text("password", password).required().min_len(MIN_PASSWORD_LEN);
    v.finish()
}

#[derive(Clone)]
pub struct AuthClient {
    http: HttpClient,
}

impl AuthClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn session(&self) -> &SessionStore {
        self.http.session()
    }

    fn endpoint(&self, path: &str) -> String {
        self.http.settings().auth_endpoint(path)
    }

    /// Exchange credentials for a session and persist it.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        validate_credentials(username, password)?;

        let request = LoginRequest {
            username: username.trim().to_string(),
            password: password.to_string(),
        };
        let resp = self.http.post_public(&self.endpoint("login"), &request).await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = error_message_field(resp).await.unwrap_or_else(|| LOGIN_FAILED.to_string());
            warn!(username = %request.username, status, "login rejected");
            return Err(AuthError::InvalidCredentials(message).into());
        }

        let auth: AuthResponse = resp.json().await?;
        let session = self.session().set_session(&auth)?;
        info!(username = %session.user.username, usuario_id = %session.user.usuario_id, "logged in");
        Ok(session)
    }

    /// Replace the session using the stored refresh token.
    ///
    /// Without a stored refresh token nothing is sent.
    pub async fn refresh(&self) -> Result<Session, ApiError> {
        let refresh_token = self
            .session()
            .get_refresh_token()
            .ok_or(AuthError::MissingRefreshToken)?;

        let resp = self
            .http
            .post_public(&self.endpoint("refresh"), &RefreshTokenRequest { refresh_token })
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = error_message(resp)
                .await
                .unwrap_or_else(|| "refresh rejected".to_string());
            warn!(status, "token refresh rejected");
            return Err(AuthError::Rejected { status, message }.into());
        }

        let auth: AuthResponse = resp.json().await?;
        let session = self.session().set_session(&auth)?;
        info!(username = %session.user.username, "session refreshed");
        Ok(session)
    }

    /// Clear the local session, then tell the service to drop the token.
    ///
    /// The remote call is best effort: its failure is logged and ignored.
    /// It is still made when clearing local storage fails; that storage
    /// error is returned afterwards.
    pub async fn logout(&self) -> Result<(), StorageError> {
        let token = self.session().get_token();
        let cleared = self.session().clear_session();
        match &cleared {
            Ok(()) => info!("session cleared"),
            Err(e) => warn!(error = %e, "local session not fully cleared"),
        }

        if let Some(token) = token {
            if let Err(e) = self.remote_logout(&token).await {
                warn!(error = %e, "remote logout failed");
            }
        }
        cleared
    }

    async fn remote_logout(&self, token: &str) -> Result<(), ApiError> {
        // The session is already gone locally, so the token is passed in.
        self.http.post_with_token(&self.endpoint("logout"), token).await
    }

    /// Remote permission check, errors surfaced.
    pub async fn try_check_permission(&self, recurso: &str, accion: &str) -> Result<bool, ApiError> {
        let url = self.endpoint(&format!("check-permission/{recurso}/{accion}"));
        let resp: PermissionResponse = self.http.get_json(&url).await?;
        Ok(resp.has_permission)
    }

    /// Remote permission check; any failure counts as "not permitted".
    pub async fn check_permission(&self, recurso: &str, accion: &str) -> bool {
        match self.try_check_permission(recurso, accion).await {
            Ok(granted) => granted,
            Err(e) => {
                warn!(recurso, accion, error = %e, "permission check failed");
                false
            }
        }
    }

    pub async fn list_user_permissions(&self) -> Result<UserPermissionsResponse, ApiError> {
        self.http.get_json(&self.endpoint("user-permissions")).await
    }

    pub async fn validate_token(&self) -> Result<ValidateTokenResponse, ApiError> {
        self.http.get_json(&self.endpoint("validate-token")).await
    }
}

/// Login failures only surface the body's `message`.
async fn error_message_field(resp: reqwest::Response) -> Option<String> {
    let body: Value = resp.json().await.ok()?;
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}
