//! Search form and results page.

use axum::{extract::State, response::Html};
use axum_extra::extract::Query;
use minijinja::context;
use tracing::{info, instrument, warn};
use trialscope_common::{VALID_PHASES, VALID_STATUSES};

use crate::error::WebError;
use crate::handlers::SearchForm;
use crate::state::SharedState;
use crate::templates::{render, RESULTS_PAGE, SEARCH_PAGE};

pub const MISSING_CRITERIA: &str = "Please enter at least one search criterion.";

/// GET / - empty search form
pub async fn index(State(state): State<SharedState>) -> Result<Html<String>, WebError> {
    search_page(&state, &SearchForm::default(), None)
}

/// GET /search - run the search and render the results table
#[instrument(skip(state))]
pub async fn search(
    State(state): State<SharedState>,
    Query(form): Query<SearchForm>,
) -> Result<Html<String>, WebError> {
    let criteria = form.criteria();
    if criteria.is_empty() {
        return search_page(&state, &form, Some(("warning", MISSING_CRITERIA.to_string())));
    }

    let result = match state.search(&criteria).await {
        Ok(result) => result,
        Err(e) => {
            warn!(error = %e, "Search failed");
            let message = WebError::Fetch(e).to_string();
            return search_page(&state, &form, Some(("danger", message)));
        }
    };
    info!(
        returned = result.trials.len(),
        total = result.total_count,
        truncated = result.truncated,
        "Search served"
    );

    render(
        &state.templates,
        RESULTS_PAGE,
        context! {
            phases => VALID_PHASES,
            statuses => VALID_STATUSES,
            form => &form,
            trials => &result.trials,
            total_count => result.total_count,
            truncated => result.truncated,
            max_results => state.max_results,
            table_page_size => state.ui.table_page_size,
            export_query => form.query_string(),
        },
    )
}

/// The form, optionally pre-filled and with a (level, message) alert.
fn search_page(
    state: &SharedState,
    form: &SearchForm,
    alert: Option<(&str, String)>,
) -> Result<Html<String>, WebError> {
    let (level, message) = alert.unzip();
    render(
        &state.templates,
        SEARCH_PAGE,
        context! {
            phases => VALID_PHASES,
            statuses => VALID_STATUSES,
            form => form,
            level => level,
            message => message,
        },
    )
}
