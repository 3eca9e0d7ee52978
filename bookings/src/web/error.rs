use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bookings_api_types::result::JsonError;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("Error reaching the bookings API {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("Internal HTTP Error {0}")]
    AxumError(#[from] axum::http::Error),
}

impl WebError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            WebError::ReqwestError(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            WebError::ReqwestError(_) => StatusCode::BAD_GATEWAY,
            WebError::AxumError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!("error {}", self);
        let e = format!("{self}");

        (self.as_status_code(), Json(JsonError { error_message: e })).into_response()
    }
}
