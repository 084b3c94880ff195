use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    util::{password::PasswordHasher, token::TokenService},
};

/// State shared by every request handler, immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
    pub tokens: TokenService,
    pub hasher: PasswordHasher,
}

impl AppState {
    /// Wires the credential services from `config` around an open database pool.
    pub fn new(db: DatabaseConnection, config: Arc<Config>) -> Self {
        Self {
            tokens: TokenService::from_config(&config),
            hasher: PasswordHasher::new(config.bcrypt_cost),
            db,
            config,
        }
    }
}
