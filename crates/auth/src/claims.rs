//! Wire model of the identity service (`/api/auth/*`).
//!
//! Field names follow the service's camelCase JSON. Optional parts of each
//! payload are explicit `Option`s or defaulted collections so a partially
//! populated response still decodes.

use std::borrow::Cow;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use backoffice_core::UsuarioId;

use crate::{Permission, PermissionSet};

/// Role name from the `roles` claim (e.g. `"ADMIN"`). Informational only:
/// access is always decided on permissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&RolInfo> for Role {
    fn from(info: &RolInfo) -> Self {
        Self::new(info.nombre.clone())
    }
}

/// Credentials posted to `/login`.
///
/// `Debug` is implemented by hand so the password never reaches a log line.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl core::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Successful `/login` or `/refresh` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default, with = "backoffice_core::timestamp::option")]
    pub expires_at: Option<NaiveDateTime>,
    pub usuario_id: UsuarioId,
    #[serde(default)]
    pub usuario_security_id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub permisos: Vec<Permission>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

impl AuthResponse {
    /// Claims cached next to the tokens.
    pub fn user_info(&self) -> UserInfo {
        UserInfo {
            usuario_id: self.usuario_id,
            username: self.username.clone(),
            roles: self.roles.clone(),
            permisos: self.permisos.clone(),
        }
    }
}

/// Cached user claims (`user_info` storage key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub usuario_id: UsuarioId,
    pub username: String,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub permisos: Vec<Permission>,
}

impl UserInfo {
    pub fn permission_set(&self) -> PermissionSet {
        self.permisos.iter().collect()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.as_str() == role)
    }
}

/// `/validate-token` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateTokenResponse {
    pub valid: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub usuario_id: Option<UsuarioId>,
    #[serde(default)]
    pub usuario_security_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub roles: Option<Vec<Role>>,
    #[serde(default)]
    pub permisos: Option<Vec<Permission>>,
    #[serde(default, with = "backoffice_core::timestamp::option")]
    pub expires_at: Option<NaiveDateTime>,
}

/// `/check-permission/{recurso}/{accion}` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionResponse {
    pub has_permission: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub recurso: String,
    #[serde(default)]
    pub accion: String,
    #[serde(default)]
    pub usuario_id: Option<UsuarioId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolInfo {
    pub rol_id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermisoInfo {
    pub permiso_id: i64,
    pub recurso: String,
    pub accion: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub permiso_completo: String,
}

impl PermisoInfo {
    pub fn permission(&self) -> Permission {
        if self.permiso_completo.is_empty() {
            Permission::of(&self.recurso, &self.accion)
        } else {
            Permission::new(self.permiso_completo.clone())
        }
    }
}

/// `/user-permissions` response: everything the landing page needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermissionsResponse {
    pub usuario_id: UsuarioId,
    #[serde(default)]
    pub usuario_security_id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub roles: Vec<RolInfo>,
    #[serde(default)]
    pub permisos: Vec<PermisoInfo>,
    #[serde(default)]
    pub recursos: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_login_response() {
        let body = r#"{
            "accessToken": "aaa",
            "refreshToken": "rrr",
            "tokenType": "Bearer",
            "expiresAt": "2024-06-01T12:00:00",
            "usuarioId": 3,
            "usuarioSecurityId": 30,
            "username": "jdoe",
            "roles": ["ADMIN"],
            "permisos": ["cargo:read", "personal:read"]
        }"#;
        let res: AuthResponse = serde_json::from_str(body).unwrap();
        assert_eq!(res.usuario_id, UsuarioId::new(3));
        assert!(res.expires_at.is_some());

        let info = res.user_info();
        assert_eq!(info.username, "jdoe");
        assert!(info.has_role("ADMIN"));
        assert!(info.permission_set().contains_str("personal:read"));
    }

    #[test]
    fn user_info_uses_camel_case_keys() {
        let info = UserInfo {
            usuario_id: UsuarioId::new(1),
            username: "ana".to_string(),
            roles: vec![Role::new("USER")],
            permisos: vec![Permission::new("cargo:read")],
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["usuarioId"], 1);
        assert_eq!(json["permisos"][0], "cargo:read");
    }

    #[test]
    fn login_request_debug_hides_password() {
        let req = LoginRequest {
            username: "ana".to_string(),
            password: "secreto".to_string(),
        };
        let dbg = format!("{req:?}");
        assert!(dbg.contains("ana"));
        assert!(!dbg.contains("secreto"));
    }

    #[test]
    fn permiso_info_falls_back_to_parts() {
        let p: PermisoInfo =
            serde_json::from_str(r#"{"permisoId":1,"recurso":"cargo","accion":"read"}"#).unwrap();
        assert_eq!(p.permission().as_str(), "cargo:read");
    }

    #[test]
    fn role_from_rol_info_keeps_name() {
        let info: RolInfo =
            serde_json::from_str(r#"{"rolId":1,"nombre":"RRHH","descripcion":"Recursos humanos"}"#)
                .unwrap();
        assert_eq!(Role::from(&info).as_str(), "RRHH");
        assert_eq!(serde_json::to_value(Role::from(&info)).unwrap(), "RRHH");
    }
}
