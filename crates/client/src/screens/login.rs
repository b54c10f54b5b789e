//! Login screen.

use tracing::warn;

use backoffice_auth::HOME_ROUTE;
use backoffice_core::FieldErrors;

use crate::auth_client::{AuthClient, LOGIN_FAILED, validate_credentials};
use crate::navigation::{Navigation, Navigator};

pub struct LoginScreen {
    auth: AuthClient,
    pub username: String,
    pub password: String,
    field_errors: FieldErrors,
    error_message: Option<String>,
    loading: bool,
}

impl LoginScreen {
    pub fn new(auth: AuthClient) -> Self {
        Self {
            auth,
            username: String::new(),
            password: String::new(),
            field_errors: FieldErrors::new(),
            error_message: None,
            loading: false,
        }
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Log in and move to the resource home. Returns `None` while the form
    /// is invalid, a login is in flight, or the service rejected it.
    pub async fn submit(&mut self, navigator: &mut Navigator) -> Option<Navigation> {
        if self.loading {
            return None;
        }
        if let Err(errors) = validate_credentials(&self.username, &self.password) {
            self.field_errors = errors;
            return None;
        }
        self.field_errors = FieldErrors::new();
        self.error_message = None;

        self.loading = true;
        let result = self.auth.login(&self.username, &self.password).await;
        self.loading = false;

        match result {
            Ok(_) => {
                self.password.clear();
                Some(navigator.navigate(HOME_ROUTE).await)
            }
            Err(e) => {
                warn!(error = %e, "login failed");
                self.error_message = Some(e.user_message(LOGIN_FAILED));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::tests::client_for;
    use backoffice_core::FieldError;
    use mockito::Server;

    #[tokio::test]
    async fn invalid_form_is_flagged_inline() {
        let server = Server::new_async().await;
        let auth = AuthClient::new(client_for(&server.url(), false));
        let mut navigator = Navigator::new(auth.clone());
        let mut screen = LoginScreen::new(auth);
        screen.username = "ana".into();
        screen.password = "123".into();

        assert!(screen.submit(&mut navigator).await.is_none());
        assert!(screen.field_errors().contains("password", &FieldError::MinLength { min: 6 }));
        assert!(screen.error_message().is_none());
    }

    #[tokio::test]
    async fn success_lands_on_home() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/auth/login")
            .with_status(200)
            .with_body(r#"{"accessToken":"a","refreshToken":"r","usuarioId":1,"username":"ana"}"#)
            .create_async()
            .await;

        let auth = AuthClient::new(client_for(&server.url(), false));
        let mut navigator = Navigator::new(auth.clone());
        let mut screen = LoginScreen::new(auth);
        screen.username = "ana".into();
        screen.password = "secret1".into();

        let nav = screen.submit(&mut navigator).await.unwrap();
        assert_eq!(nav.landed, HOME_ROUTE);
        assert!(screen.password.is_empty());
    }

    #[tokio::test]
    async fn rejection_shows_server_message() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/auth/login")
            .with_status(401)
            .with_body(r#"{"message":"Usuario bloqueado"}"#)
            .create_async()
            .await;

        let auth = AuthClient::new(client_for(&server.url(), false));
        let mut navigator = Navigator::new(auth.clone());
        let mut screen = LoginScreen::new(auth);
        screen.username = "ana".into();
        screen.password = "secret1".into();

        assert!(screen.submit(&mut navigator).await.is_none());
        assert_eq!(screen.error_message(), Some("Usuario bloqueado"));
        assert_eq!(navigator.current(), backoffice_auth::LOGIN_ROUTE);
    }
}
