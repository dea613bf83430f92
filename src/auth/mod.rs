//! Pre-shared-key authentication for the dashboard API.
//!
//! The SPA sends the key on every request. Comparison is constant-time to
//! mitigate timing attacks.

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;

use crate::errors::{AppError, AppErrorWithRevision};

/// Header the client sends the key in.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Middleware guarding the API routes behind the configured PSK.
///
/// An unset PSK disables the check entirely (dev mode). The `x-api-key`
/// header takes precedence over an `Authorization: Bearer` token.
pub async fn psk_auth_layer(
    expected_psk: Option<String>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = expected_psk else {
        return next.run(request).await;
    };

    match provided_key(&request) {
        Some(provided) if constant_time_compare(&provided, &expected) => next.run(request).await,
        Some(_) => unauthorized("Invalid API key"),
        None => unauthorized("Missing API key"),
    }
}

/// Pull the candidate key out of the request headers.
fn provided_key(request: &Request) -> Option<String> {
    let headers = request.headers();

    if let Some(value) = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok()) {
        return Some(value.to_string());
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|v| v.to_string())
}

/// Constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Reject with a 401 envelope. Auth failures happen before any state is
/// consulted, so the reported revision is always zero.
fn unauthorized(message: &str) -> Response {
    AppErrorWithRevision {
        error: AppError::Unauthorized(message.to_string()),
        revision: 0,
    }
    .into_response()
}
