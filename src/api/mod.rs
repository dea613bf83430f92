//! REST API module.
//!
//! Route handlers for the dashboard contract. Every response body, success
//! or error, carries the state revision current when it was produced.

mod analytics;
mod community;
mod courses;
mod generate;
mod ideas;
mod marketplace;
mod notifications;
mod session;
mod state;
mod ui;
mod webinars;

pub use analytics::*;
pub use community::*;
pub use courses::*;
pub use generate::*;
pub use ideas::*;
pub use marketplace::*;
pub use notifications::*;
pub use session::*;
pub use state::*;
pub use ui::*;
pub use webinars::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Success envelope: `{success, data, revision}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub revision: u64,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T, revision: u64) -> Self {
        Self {
            success: true,
            data,
            revision,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Handler result: success envelope or an error with its failure-time revision.
pub type ApiResult<T> = Result<ApiResponse<T>, crate::errors::AppErrorWithRevision>;

/// Wrap `data` in a success envelope.
pub fn success<T: Serialize>(data: T, revision: u64) -> ApiResult<T> {
    Ok(ApiResponse::new(data, revision))
}

/// Reject with `err`, reporting `revision` in the envelope.
pub fn error<T: Serialize>(err: crate::errors::AppError, revision: u64) -> ApiResult<T> {
    Err(crate::errors::AppErrorWithRevision {
        error: err,
        revision,
    })
}
