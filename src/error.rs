//! Error Types
//!
//! Client-side validation failures and HTTP failures. The `Display` text of
//! `ValidationError` is shown to the user; `ApiError` only reaches the log.

use thiserror::Error;

/// Rejected before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Todos los campos son obligatorios!")]
    MissingFields,
    /// Creation requires a strictly positive amount.
    #[error("El monto debe ser un numero valido y mayor a 0!")]
    NonPositiveAmount,
    /// Edit only requires a finite number.
    #[error("El monto debe ser un numero valido!")]
    InvalidAmount,
}

/// Failure talking to the products API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("server rejected request with status {status}")]
    Rejected { status: u16 },
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}
