//! Middleware stack for the API server
//!
//! Request ids, request tracing, a request timeout, and CORS.

use std::time::Duration;

use axum::{
    body::Body,
    http::{header::HeaderName, header, HeaderValue, Method, Request, StatusCode},
    Router,
};
use forum_common::CorsConfig;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, MakeSpan, TraceLayer},
};
use tracing::{info, warn, Level, Span};

use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

fn request_id_header() -> HeaderName {
    HeaderName::from_static(REQUEST_ID_HEADER)
}

/// Apply the middleware stack to the router
///
/// A request passes request id, trace, timeout, and CORS before the handler.
pub fn apply_middleware(
    router: Router<AppState>,
    cors_config: &CorsConfig,
    is_production: bool,
    timeout: Duration,
) -> Router<AppState> {
    // Last layer added is outermost
    router
        .layer(cors_layer(cors_config, is_production))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            timeout,
        ))
        .layer(trace_layer())
        .layer(PropagateRequestIdLayer::new(request_id_header()))
        .layer(SetRequestIdLayer::new(request_id_header(), MakeRequestUuid))
}

/// One `http_request` span per request, tagged with its request id
#[derive(Debug, Clone, Copy)]
struct RequestSpan;

impl MakeSpan<Body> for RequestSpan {
    fn make_span(&mut self, request: &Request<Body>) -> Span {
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown");

        tracing::info_span!(
            "http_request",
            method = %request.method(),
            path = %request.uri().path(),
            request_id = %request_id,
        )
    }
}

fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan> {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

/// Origins the admin UI may call from
///
/// An empty list allows any origin in development and none in production.
fn allowed_origins(config: &CorsConfig, is_production: bool) -> AllowOrigin {
    if config.allowed_origins.is_empty() {
        if is_production {
            warn!("CORS: no allowed origins configured; cross-origin requests will be rejected");
            return AllowOrigin::list(Vec::<HeaderValue>::new());
        }
        warn!("CORS: allowing any origin, set CORS_ALLOWED_ORIGINS to restrict");
        return AllowOrigin::from(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "CORS: ignoring invalid origin");
                None
            }
        })
        .collect();

    info!(count = origins.len(), "CORS: allowing configured origins");
    AllowOrigin::list(origins)
}

fn cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins(config, is_production))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, request_id_header()])
        .expose_headers([request_id_header()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_span_reads_request_id() {
        let request = Request::builder()
            .uri("/api/v1/bans")
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(Body::empty())
            .unwrap();

        // No subscriber is installed, so only check that building the span is safe
        let _span = RequestSpan.make_span(&request);
    }

    #[test]
    fn test_cors_layer_builds_for_each_mode() {
        let open = CorsConfig::default();
        let _ = cors_layer(&open, false);
        let _ = cors_layer(&open, true);

        let listed = CorsConfig {
            allowed_origins: vec!["https://admin.example.com".to_string(), "bad\norigin".to_string()],
        };
        let _ = cors_layer(&listed, true);
    }
}
