use crate::config::{CORS_ALLOWED_HEADERS, CORS_ALLOWED_METHODS, CorsConfig};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::collections::HashSet;
use std::sync::Arc;

/// Origin allow-list and preflight settings for browser callers.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allowed_origins: HashSet<String>,
    max_age_secs: u64,
}

impl CorsPolicy {
    pub fn new(config: &CorsConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins.iter().cloned().collect(),
            max_age_secs: config.max_age_secs,
        }
    }

    /// Exact-match membership check, no wildcard or suffix matching.
    pub fn is_allowed(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .is_ok_and(|origin| self.allowed_origins.contains(origin))
    }

    /// Sets the CORS headers on `headers`, echoing `origin` only if it is allowed.
    pub fn apply(&self, origin: Option<&HeaderValue>, headers: &mut HeaderMap) {
        match origin {
            Some(origin) if self.is_allowed(origin) => {
                headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
            }
            Some(origin) => {
                tracing::debug!(?origin, "Origin not allowed, omitting allow-origin header");
            }
            None => {}
        }

        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(CORS_ALLOWED_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOWED_HEADERS),
        );
        headers.insert(
            header::ACCESS_CONTROL_MAX_AGE,
            HeaderValue::from(self.max_age_secs),
        );
    }
}

/// Middleware adding CORS headers to every response and answering preflight requests.
///
/// `OPTIONS` requests never reach the wrapped handler.
pub async fn handle_cors(
    State(policy): State<Arc<CorsPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request.headers().get(header::ORIGIN).cloned();

    let mut response = if request.method() == Method::OPTIONS {
        tracing::trace!("Answering preflight request");
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    policy.apply(origin.as_ref(), response.headers_mut());
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn policy() -> CorsPolicy {
        CorsPolicy::new(&CorsConfig::default())
    }

    #[test]
    fn allowed_origin_is_echoed() {
        let mut headers = HeaderMap::new();
        let origin = HeaderValue::from_static("https://wibechat-demo.web.app");
        policy().apply(Some(&origin), &mut headers);

        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&origin)
        );
    }

    #[test]
    fn unknown_origin_is_omitted() {
        let mut headers = HeaderMap::new();
        let origin = HeaderValue::from_static("https://evil.example.com");
        policy().apply(Some(&origin), &mut headers);

        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN), None);
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
            "GET, POST, OPTIONS"
        );
    }

    #[test]
    fn origin_match_is_exact() {
        let policy = policy();
        for origin in [
            "https://wibechat-demo.web.app/",
            "https://WIBECHAT-demo.web.app",
            "http://wibechat-demo.web.app",
            "https://sub.wibechat-demo.web.app",
            "http://localhost:5001",
            "",
        ] {
            assert!(!policy.is_allowed(&HeaderValue::from_static(origin)), "{origin}");
        }
        assert!(policy.is_allowed(&HeaderValue::from_static("http://localhost:5000")));
    }

    #[test]
    fn static_headers_are_always_set() {
        let mut headers = HeaderMap::new();
        policy().apply(None, &mut headers);

        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN), None);
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
            "GET, POST, OPTIONS"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
            "Content-Type"
        );
        assert_eq!(headers.get(header::ACCESS_CONTROL_MAX_AGE).unwrap(), "3600");
    }
}
