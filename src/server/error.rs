use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use super::forms::FieldError;
use crate::error::QbError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct ValidationBody {
    pub errors: Vec<FieldError>,
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Please provide both season and team.")]
    MissingSeasonOrTeam,

    #[error("Quarterback not found.")]
    QuarterbackNotFound,

    #[error("validation failed")]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    Qb(#[from] QbError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingSeasonOrTeam | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::QuarterbackNotFound => StatusCode::NOT_FOUND,
            ApiError::Qb(err) => match err {
                QbError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
                QbError::UpstreamFetch(_) => StatusCode::BAD_GATEWAY,
                QbError::Persistence(_)
                | QbError::LockPoisoned
                | QbError::BlockingTask(_)
                | QbError::Json(_)
                | QbError::Io(_)
                | QbError::MissingApiKey { .. }
                | QbError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Message safe to show a client. Server-side failures get a generic
    /// message; the detail goes to the log.
    fn public_message(&self) -> String {
        match self {
            ApiError::Qb(QbError::UpstreamFetch(_)) => {
                "Error fetching QB stats from the API.".to_string()
            }
            ApiError::Qb(err) if err.is_persistence() => {
                "Error accessing quarterback data.".to_string()
            }
            ApiError::Qb(QbError::InvalidInput { .. }) => self.to_string(),
            ApiError::Qb(_) => "Internal server error.".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.status_code();
        if code.is_server_error() {
            error!(status = code.as_u16(), error = %self, "request failed");
        }

        match self {
            ApiError::Validation(errors) => (code, Json(ValidationBody { errors })).into_response(),
            other => {
                let body = ErrorBody {
                    error: other.public_message(),
                };
                (code, Json(body)).into_response()
            }
        }
    }
}
