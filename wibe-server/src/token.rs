use crate::config::LiveKitConfig;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use std::time::Duration;
use thiserror::Error;
use tracing::instrument;
use uuid::Uuid;
use wibe_protocol::token::{AccessClaims, VideoGrants};

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
    #[error("failed to verify token: {0}")]
    Verification(#[source] jsonwebtoken::errors::Error),
    #[error("token expiry out of range")]
    ExpiryOutOfRange,
}

/// Mints and verifies room access tokens signed with the configured API key pair.
///
/// The issuer is immutable once built and shared between all requests.
pub struct TokenIssuer {
    api_key: String,
    ttl: Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenIssuer {
    pub fn new(config: &LiveKitConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            ttl: config.token_ttl(),
            encoding_key: EncodingKey::from_secret(config.api_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.api_secret.as_bytes()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issues a token allowing `identity` to join, publish and subscribe in `room`.
    #[instrument(level = "debug", skip(self), err)]
    pub fn issue(&self, room: &str, identity: &str) -> Result<String, TokenError> {
        let now = jsonwebtoken::get_current_timestamp();
        let exp = now
            .checked_add(self.ttl.as_secs())
            .ok_or(TokenError::ExpiryOutOfRange)?;
        let claims = AccessClaims {
            iss: self.api_key.clone(),
            sub: identity.to_string(),
            iat: now,
            nbf: now,
            exp,
            jti: Uuid::new_v4().to_string(),
            video: VideoGrants::room_participant(room),
        };

        let token = self.sign(&claims)?;
        tracing::debug!(jti = %claims.jti, exp = claims.exp, "Issued access token");
        Ok(token)
    }

    pub fn sign(&self, claims: &AccessClaims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Decodes `token` and checks its signature, issuer and validity window.
    pub fn verify(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.api_key.as_str()]);
        validation.set_required_spec_claims(&["exp", "nbf", "iss", "sub"]);
        validation.validate_nbf = true;

        decode::<AccessClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(TokenError::Verification)
    }
}
