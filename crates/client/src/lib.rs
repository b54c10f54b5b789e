//! `backoffice-client`
//!
//! **Responsibility:** IO side of the back-office console.
//!
//! This crate provides:
//! - Session persistence (access/refresh tokens + cached claims)
//! - The identity-service client (login, refresh, logout, permission checks)
//! - REST clients for cargos, clientes and personal
//! - A navigator that composes the route guards with the remote permission check
//! - Headless screen state machines (login, resource home, dashboard shell, CRUD)
//!
//! The REST services stay the authority for every record; the console only
//! holds snapshots and never retries on its own.

pub mod api;
pub mod auth_client;
pub mod error;
pub mod http;
pub mod navigation;
pub mod screens;
pub mod session;
pub mod settings;
pub mod storage;

pub use auth_client::AuthClient;
pub use error::{ApiError, AuthError, StorageError};
pub use http::HttpClient;
pub use navigation::{Navigation, Navigator};
pub use session::{Session, SessionStore};
pub use settings::ClientSettings;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
