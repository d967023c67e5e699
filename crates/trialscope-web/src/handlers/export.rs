//! CSV download of a search.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Query;
use tracing::{info, instrument};

use crate::error::WebError;
use crate::export::{trials_to_csv, CSV_FILENAME};
use crate::handlers::SearchForm;
use crate::state::SharedState;

/// GET /export - same parameters as /search, returned as a CSV attachment.
/// No criteria check here: an empty query exports whatever the registry
/// returns first, up to the cap.
#[instrument(skip(state))]
pub async fn export(
    State(state): State<SharedState>,
    Query(form): Query<SearchForm>,
) -> Result<Response, WebError> {
    let result = state.search(&form.criteria()).await?;
    let body = trials_to_csv(&result.trials)?;
    info!(rows = result.trials.len(), bytes = body.len(), "CSV export");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename={}", CSV_FILENAME)),
        ],
        body,
    )
        .into_response())
}
