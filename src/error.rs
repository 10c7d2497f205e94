use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

/// Upstream endpoint a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Listing,
    Detail,
    Regency,
}

impl Endpoint {
    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::Listing => "listing",
            Endpoint::Detail => "detail",
            Endpoint::Regency => "regency",
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            Endpoint::Listing => "Failed to load vacancies",
            Endpoint::Detail => "Failed to load vacancy detail",
            Endpoint::Regency => "Failed to load regencies",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream returned status {status} for {endpoint}")]
    Upstream { endpoint: Endpoint, status: u16 },

    #[error("Upstream {endpoint} unreachable: {source}")]
    Unreachable {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    #[error("Malformed {endpoint} response: {source}")]
    Malformed {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid upstream URL: {0}")]
    Url(#[from] url::ParseError),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self {
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Error::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::Upstream { endpoint, status } => {
                tracing::warn!(endpoint = endpoint.as_str(), status, "Upstream request failed");
                (
                    StatusCode::BAD_GATEWAY,
                    endpoint.failure_message().to_string(),
                )
            }
            Error::Unreachable { endpoint, source } => {
                tracing::warn!(endpoint = endpoint.as_str(), error = %source, "Upstream transport error");
                (
                    StatusCode::BAD_GATEWAY,
                    endpoint.failure_message().to_string(),
                )
            }
            Error::Malformed { endpoint, source } => {
                tracing::warn!(endpoint = endpoint.as_str(), error = %source, "Upstream sent invalid JSON");
                (
                    StatusCode::BAD_GATEWAY,
                    format!("{}: malformed upstream response", endpoint.failure_message()),
                )
            }
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred".to_string(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
