use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/version", get(get::version))
}

pub fn untraced_routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(get::health))
}

mod get {
    use crate::build::VersionInfo;
    use crate::http::ApiResult;
    use axum::Json;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    pub async fn health() -> impl IntoResponse {
        (StatusCode::OK, "OK")
    }

    pub async fn version() -> ApiResult<VersionInfo> {
        Ok(Json(VersionInfo::gather()))
    }
}
