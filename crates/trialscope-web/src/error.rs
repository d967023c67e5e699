//! Handler errors and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;
use trialscope_common::TrialScopeError;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("Error fetching results: {0}")]
    Fetch(#[from] TrialScopeError),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] std::io::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = match &self {
            WebError::Fetch(_) => StatusCode::BAD_GATEWAY,
            WebError::Template(_) | WebError::Csv(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error!(%status, error = %self, "Request failed");
        (status, self.to_string()).into_response()
    }
}
