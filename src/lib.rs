use auth::CredentialStore;
use config::Config;
use session::SessionStore;

pub mod analysis;
pub mod auth;
pub mod config;
pub mod dataset;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod utils;
pub mod views;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub credentials: CredentialStore,
    pub sessions: SessionStore,
}
