use crate::http::ApiResult;
use crate::http::error::AppError;
use crate::state::AppState;
use axum::Json;
use axum::Router;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::any;
use std::sync::Arc;
use tracing::instrument;
use wibe_protocol::http::{TokenRequest, TokenResponse};

/// Method-agnostic: preflight requests are answered by the CORS middleware before reaching the
/// handler, every other method issues a token.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/token", any(issue_token))
}

#[instrument(level = "debug", skip_all)]
async fn issue_token(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TokenRequest>, QueryRejection>,
) -> ApiResult<TokenResponse> {
    let Query(request) = query.map_err(|err| {
        tracing::debug!(?err, "Failed to parse token request query");
        AppError::InvalidRequest
    })?;
    let (room, identity) = request.validate().ok_or(AppError::InvalidRequest)?;

    let token = state.issuer().issue(room, identity)?;

    Ok(Json(TokenResponse { token }))
}
