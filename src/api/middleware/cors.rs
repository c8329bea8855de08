use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// CORS layer for the read-only API; any origin unless `allowed` lists some
pub fn create_cors_layer(allowed: Option<&str>) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect();

    let origins = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS, Method::HEAD])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("x-request-id"),
        ])
        .allow_credentials(false)
        .max_age(std::time::Duration::from_secs(86400))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    async fn preflight(allowed: Option<&str>, origin: &str) -> Option<HeaderValue> {
        let app = Router::new()
            .route("/v1/stats", get(|| async { "ok" }))
            .layer(create_cors_layer(allowed));

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/v1/stats")
                    .header("origin", origin)
                    .header("access-control-request-method", "GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        response
            .headers()
            .get("access-control-allow-origin")
            .cloned()
    }

    #[tokio::test]
    async fn test_any_origin_by_default() {
        let header = preflight(None, "http://example.org").await;
        assert_eq!(header.unwrap(), "*");
    }

    #[tokio::test]
    async fn test_default_config_allows_any_origin() {
        let config = crate::config::Config::default();
        let header = preflight(
            config.cors_allow_origin.as_deref(),
            "http://dashboard.example",
        )
        .await;
        assert_eq!(header.unwrap(), "*");

        let header = preflight(Some(" , "), "http://dashboard.example").await;
        assert_eq!(header.unwrap(), "*");
    }

    #[tokio::test]
    async fn test_listed_origin_only() {
        let allowed = Some("http://localhost:3000, http://dash.local");
        assert_eq!(
            preflight(allowed, "http://dash.local").await.unwrap(),
            "http://dash.local"
        );
        assert!(preflight(allowed, "http://evil.test").await.is_none());
    }
}
