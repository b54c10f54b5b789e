//! Wiring of settings, session and remote clients for one invocation.

use std::sync::Arc;

use anyhow::Context;
use tracing::debug;

use backoffice_client::{AuthClient, ClientSettings, FileStorage, HttpClient, Navigator, SessionStore};

use crate::cli::Cli;

pub struct App {
    pub http: HttpClient,
    pub auth: AuthClient,
    pub navigator: Navigator,
}

impl App {
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let settings = settings(cli);
        debug!(
            auth_url = %settings.auth_url,
            api_url = %settings.api_url,
            storage = %settings.storage_path.display(),
            "settings"
        );

        let storage = FileStorage::open(&settings.storage_path).with_context(|| {
            format!("cannot open session storage {}", settings.storage_path.display())
        })?;
        let session = Arc::new(SessionStore::new(Arc::new(storage)));
        let http = HttpClient::new(settings, session)?;
        let auth = AuthClient::new(http.clone());
        let navigator = Navigator::new(auth.clone());

        Ok(Self {
            http,
            auth,
            navigator,
        })
    }

    pub fn session(&self) -> &SessionStore {
        self.auth.session()
    }

    /// Navigate to a screen and fail unless the guards let us in.
    pub async fn enter(&mut self, route: &str) -> anyhow::Result<()> {
        self.navigator.enter(route).await?;
        Ok(())
    }
}

/// Environment defaults overridden by explicit flags.
fn settings(cli: &Cli) -> ClientSettings {
    let mut settings = ClientSettings::from_env();
    if let Some(url) = &cli.auth_url {
        settings = settings.with_auth_url(url.clone());
    }
    if let Some(url) = &cli.api_url {
        settings = settings.with_api_url(url.clone());
    }
    if let Some(path) = &cli.storage {
        settings = settings.with_storage_path(path.clone());
    }
    settings
}
