use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::warn;

/// Request failure taxonomy. Every handler error collapses into one of these
/// three classes; the HTTP body carries the fixed message for the class while
/// the underlying cause is only logged.
#[derive(Debug)]
pub enum ApiError {
    /// 400 "Invalid Request Message" - category listing failures.
    InvalidRequest(Error),
    /// 404 "Resource Not found" - empty result set after filtering/pagination.
    NotFound(Error),
    /// 422 "unprocessable" - create/delete mutation failures.
    Unprocessable(Error),
}

impl ApiError {
    pub fn invalid_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::InvalidRequest(err.into())
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::NotFound(err.into())
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::Unprocessable(err.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "Invalid Request Message",
            Self::NotFound(_) => "Resource Not found",
            Self::Unprocessable(_) => "unprocessable",
        }
    }

    fn cause(&self) -> &Error {
        match self {
            Self::InvalidRequest(e) | Self::NotFound(e) | Self::Unprocessable(e) => e,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        warn!(
            status = %status.as_u16(),
            cause = %self.cause(),
            "request failed"
        );

        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        }));

        (status, body).into_response()
    }
}
