//! CORS layer construction.
//!
//! Translates the declarative [`CorsConfig`] into a `tower_http` layer.
//! Invalid entries are rejected here, at startup, so a bad deployment
//! config never surfaces mid-request.

use analyser_core::config::CorsConfig;
use analyser_core::{AnalyserError, AnalyserResult};
use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

/// Build the CORS layer for the configured policy.
///
/// The CORS protocol forbids a literal `*` together with
/// `Access-Control-Allow-Credentials: true`, so when credentials are on, a
/// wildcard dimension mirrors the request instead. Browsers observe the
/// same thing either way: any caller is accepted.
pub fn cors_layer(config: &CorsConfig) -> AnalyserResult<CorsLayer> {
    let mut layer = CorsLayer::new();

    layer = if config.allows_any_origin() {
        if config.allow_credentials {
            layer.allow_origin(AllowOrigin::mirror_request())
        } else {
            layer.allow_origin(Any)
        }
    } else {
        layer.allow_origin(parse_origins(&config.allow_origins)?)
    };

    layer = if config.allows_any_method() {
        if config.allow_credentials {
            layer.allow_methods(AllowMethods::mirror_request())
        } else {
            layer.allow_methods(Any)
        }
    } else {
        layer.allow_methods(parse_methods(&config.allow_methods)?)
    };

    layer = if config.allows_any_header() {
        if config.allow_credentials {
            layer.allow_headers(AllowHeaders::mirror_request())
        } else {
            layer.allow_headers(Any)
        }
    } else {
        layer.allow_headers(parse_headers(&config.allow_headers)?)
    };

    Ok(layer.allow_credentials(config.allow_credentials))
}

fn parse_origins(origins: &[String]) -> AnalyserResult<Vec<HeaderValue>> {
    origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| {
                AnalyserError::config(format!("invalid CORS origin '{}': {}", origin, e))
            })
        })
        .collect()
}

fn parse_methods(methods: &[String]) -> AnalyserResult<Vec<Method>> {
    methods
        .iter()
        .map(|method| {
            Method::from_bytes(method.as_bytes()).map_err(|e| {
                AnalyserError::config(format!("invalid CORS method '{}': {}", method, e))
            })
        })
        .collect()
}

fn parse_headers(headers: &[String]) -> AnalyserResult<Vec<HeaderName>> {
    headers
        .iter()
        .map(|header| {
            HeaderName::from_bytes(header.as_bytes()).map_err(|e| {
                AnalyserError::config(format!("invalid CORS header '{}': {}", header, e))
            })
        })
        .collect()
}
