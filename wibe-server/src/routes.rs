mod root;
mod token;

use crate::cors::{CorsPolicy, handle_cors};
use crate::state::AppState;
use axum::http::Request;
use axum::{Router, middleware};
use std::sync::Arc;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::debug_span;

pub fn create_app(cors_policy: Arc<CorsPolicy>) -> Router<Arc<AppState>> {
    Router::new()
        .merge(token::routes().layer(middleware::from_fn_with_state(cors_policy, handle_cors)))
        .merge(root::routes())
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &Request<_>| {
                debug_span!(
                    "request",
                    method = %req.method(),
                    uri = %req.uri(),
                    version = ?req.version()
                )
            }),
        )
        .merge(root::untraced_routes())
        .layer(TimeoutLayer::new(crate::config::SERVER_REQUEST_TIMEOUT))
}
