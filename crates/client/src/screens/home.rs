//! Resource landing page shown right after login.

use tracing::error;

use backoffice_auth::{ResourceCard, map_resources};

use crate::auth_client::AuthClient;
use crate::error::StorageError;
use crate::navigation::{Navigation, Navigator};

pub const LOAD_FAILED: &str = "Error al cargar los recursos";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeState {
    Loading,
    Loaded {
        username: String,
        cards: Vec<ResourceCard>,
    },
    Failed {
        message: String,
    },
}

pub struct HomeScreen {
    auth: AuthClient,
    state: HomeState,
}

impl HomeScreen {
    pub fn new(auth: AuthClient) -> Self {
        Self {
            auth,
            state: HomeState::Loading,
        }
    }

    pub fn state(&self) -> &HomeState {
        &self.state
    }

    pub fn cards(&self) -> &[ResourceCard] {
        match &self.state {
            HomeState::Loaded { cards, .. } => cards,
            _ => &[],
        }
    }

    /// Fetch the user's resources. Called on activation; never retried on
    /// its own.
    pub async fn activate(&mut self) -> &HomeState {
        self.state = HomeState::Loading;
        self.state = match self.auth.list_user_permissions().await {
            Ok(response) => HomeState::Loaded {
                cards: map_resources(&response.recursos),
                username: response.username,
            },
            Err(e) => {
                error!(error = %e, "resource list load failed");
                HomeState::Failed {
                    message: LOAD_FAILED.to_string(),
                }
            }
        };
        &self.state
    }

    pub async fn retry(&mut self) -> &HomeState {
        self.activate().await
    }

    /// Navigate to a card's route through the guards.
    pub async fn open(&self, card: &ResourceCard, navigator: &mut Navigator) -> Navigation {
        navigator.navigate(&card.ruta).await
    }

    pub async fn logout(&mut self, navigator: &mut Navigator) -> Result<Navigation, StorageError> {
        self.auth.logout().await?;
        Ok(navigator.navigate(backoffice_auth::LOGIN_ROUTE).await)
    }
}
