use axum::http::{
    header::{HeaderName, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN},
    HeaderValue, Method,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

/// Headers the chat widget's HTTP client sends alongside its requests.
const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// CORS configuration for the query endpoint.
///
/// The chat widget calling this service can be served from anywhere, so the
/// origin is a wildcard.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            HeaderName::from_static("authorization"),
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            HeaderName::from_static("content-type"),
        ])
}

// The CORS protocol only puts allow-headers on preflight responses, but our
// contract is that both CORS headers ride on every response, success and
// error alike, Origin header or not. These fill in whatever the CorsLayer
// didn't set.

pub fn always_allow_origin() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    )
}

pub fn always_allow_headers() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    )
}
