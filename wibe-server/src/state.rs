use crate::config::AppConfig;
use crate::token::TokenIssuer;

/// Shared, read-only state of the service. Built once at startup.
pub struct AppState {
    issuer: TokenIssuer,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            issuer: TokenIssuer::new(&config.livekit),
        }
    }

    pub fn issuer(&self) -> &TokenIssuer {
        &self.issuer
    }
}
