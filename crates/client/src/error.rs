//! Error taxonomy of the client side.

use thiserror::Error;

use backoffice_core::FieldErrors;

/// Message fragments the RRHH service uses when a delete is blocked by rows
/// still pointing at the record.
const REFERENTIAL_HINTS: &[&str] = &[
    "referenc",
    "asociad",
    "asignad",
    "en uso",
    "tiene personal",
    "constraint",
    "foreign key",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("login rejected: {0}")]
    InvalidCredentials(String),

    #[error("no refresh token available")]
    MissingRefreshToken,

    #[error("no access token available")]
    MissingToken,

    #[error("token rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage payload error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("storage lock poisoned")]
    Poisoned,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("remote error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Remote { status: u16, message: Option<String> },

    /// A lookup key that cannot be sent as a path segment.
    #[error("invalid lookup key: {0:?}")]
    InvalidKey(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<FieldErrors> for ApiError {
    fn from(value: FieldErrors) -> Self {
        ApiError::Validation(value)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            ApiError::Decode(value.to_string())
        } else {
            ApiError::Transport(value.to_string())
        }
    }
}

impl ApiError {
    /// Message sent by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Remote { message, .. } => message.as_deref(),
            ApiError::Auth(AuthError::InvalidCredentials(m)) => Some(m),
            ApiError::Auth(AuthError::Rejected { message, .. }) => Some(message),
            _ => None,
        }
    }

    /// Text to show the user: the server's message verbatim, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Remote { status, .. } => Some(*status),
            ApiError::Auth(AuthError::Rejected { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// A delete rejected because the record is still referenced elsewhere.
    ///
    /// The service reports these with the same shape as any other remote
    /// error; only the message text tells them apart.
    pub fn is_referential_conflict(&self) -> bool {
        match self {
            ApiError::Remote {
                message: Some(message),
                ..
            } => {
                let lower = message.to_lowercase();
                REFERENTIAL_HINTS.iter().any(|hint| lower.contains(hint))
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_server_text() {
        let err = ApiError::Remote {
            status: 400,
            message: Some("El DNI ya está registrado".to_string()),
        };
        assert_eq!(err.user_message("No se pudo registrar"), "El DNI ya está registrado");

        let bare = ApiError::Remote {
            status: 500,
            message: None,
        };
        assert_eq!(bare.user_message("No se pudo registrar"), "No se pudo registrar");

        let blank = ApiError::Remote {
            status: 500,
            message: Some("  ".to_string()),
        };
        assert_eq!(blank.user_message("fallback"), "fallback");
    }

    #[test]
    fn referential_conflicts_are_detected_by_message() {
        let conflict = ApiError::Remote {
            status: 400,
            message: Some("No se puede eliminar: el cargo tiene personal asignado".to_string()),
        };
        assert!(conflict.is_referential_conflict());

        let other = ApiError::Remote {
            status: 409,
            message: Some("Versión desactualizada".to_string()),
        };
        assert!(!other.is_referential_conflict());
        assert!(!ApiError::Transport("timeout".into()).is_referential_conflict());
    }

    #[test]
    fn display_includes_status() {
        let err = ApiError::Remote {
            status: 404,
            message: None,
        };
        assert_eq!(err.to_string(), "remote error (404): no message");
    }
}
