use std::{error, fmt::Display, sync::Arc};

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum AppError {
    #[error("System error {0}")]
    SystemError(#[from] SystemError),
    #[error("Request {path} failed with status {status}")]
    BadStatus { path: String, status: u16 },
    #[error("Request context was not available during server rendering")]
    MissingRequestContext,
}

/// Transport and decoding failures, behind an `Arc` so `AppError` stays `Clone`.
#[derive(Clone, Debug)]
pub enum SystemError {
    #[cfg(feature = "ssr")]
    ReqwestError(Arc<reqwest::Error>),
    #[cfg(not(feature = "ssr"))]
    GlooError(Arc<gloo_net::Error>),
    SerdeJson(Arc<serde_json::Error>),
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for SystemError {
    fn from(value: reqwest::Error) -> Self {
        Self::ReqwestError(Arc::new(value))
    }
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for AppError {
    fn from(value: reqwest::Error) -> Self {
        Self::SystemError(value.into())
    }
}

#[cfg(not(feature = "ssr"))]
impl From<gloo_net::Error> for SystemError {
    fn from(value: gloo_net::Error) -> Self {
        Self::GlooError(Arc::new(value))
    }
}

#[cfg(not(feature = "ssr"))]
impl From<gloo_net::Error> for AppError {
    fn from(value: gloo_net::Error) -> Self {
        Self::SystemError(value.into())
    }
}

impl From<serde_json::Error> for SystemError {
    fn from(value: serde_json::Error) -> Self {
        Self::SerdeJson(Arc::new(value))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::SystemError(value.into())
    }
}

impl Display for SystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "ssr")]
            SystemError::ReqwestError(reqwest) => write!(f, "{}", reqwest),
            #[cfg(not(feature = "ssr"))]
            SystemError::GlooError(g) => write!(f, "{}", g),
            SystemError::SerdeJson(json) => write!(f, "{}", json),
        }
    }
}

impl error::Error for SystemError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            #[cfg(feature = "ssr")]
            SystemError::ReqwestError(reqwest) => Some(reqwest.as_ref()),
            #[cfg(not(feature = "ssr"))]
            SystemError::GlooError(gloo) => Some(gloo.as_ref()),
            SystemError::SerdeJson(json) => Some(json.as_ref()),
        }
    }
}

pub(crate) type AppResult<T> = Result<T, AppError>;
