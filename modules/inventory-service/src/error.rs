//! Error taxonomy for the inventory API and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use inventory_types::ErrorBody;

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("The request missing '{0}' argument")]
    MissingField(&'static str),

    #[error("{field} is not valid")]
    InvalidDate { field: &'static str, value: String },

    #[error("count is not valid")]
    InvalidCount(String),

    #[error("item not found")]
    NotFound { name: String, expired_date: String },

    #[error("snapshot i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl InventoryError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingField(_)
            | Self::InvalidDate { .. }
            | Self::InvalidCount(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Io(_) | Self::Json(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// `key=value` context for the log line, empty when the message says it all.
    pub fn fields(&self) -> String {
        match self {
            Self::InvalidDate { field, value } => format!("{}={}", field, value),
            Self::InvalidCount(value) => format!("count={}", value),
            Self::NotFound { name, expired_date } => {
                format!("name={} | expired_date={}", name, expired_date)
            }
            _ => String::new(),
        }
    }

    /// Message sent to the caller. Storage faults stay in the log.
    fn public_message(&self) -> String {
        match self {
            Self::Io(_) | Self::Json(_) => "storage unavailable".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::new(self.public_message()))).into_response()
    }
}
