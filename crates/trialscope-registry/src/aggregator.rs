//! Page loop: accumulate trials until the registry runs out of pages or the
//! result cap is reached, then trim and decide whether the result is
//! truncated.

use tracing::{debug, info, instrument};
use trialscope_common::{AggregatedResult, Result, SearchCriteria, Trial};

use crate::parser::parse_study;
use crate::query::build_query_params;
use crate::sources::StudySource;

/// Fetch pages strictly one after another (each needs the previous token).
/// Any page failure aborts the whole search; nothing partial is returned.
#[instrument(skip(source))]
pub async fn fetch_all<S>(
    source: &S,
    criteria: &SearchCriteria,
    max_results: usize,
) -> Result<AggregatedResult>
where
    S: StudySource + ?Sized,
{
    let params = build_query_params(criteria);

    let mut trials: Vec<Trial> = Vec::new();
    let mut page_token: Option<String> = None;
    let mut total_count = 0;
    let mut pages = 0usize;

    while trials.len() < max_results {
        let page = source.fetch_page(&params, page_token.as_deref()).await?;
        pages += 1;

        // Last page's total wins
        total_count = page.total_count;
        // Whole page is kept even past the cap; trimmed below
        trials.extend(page.studies.iter().map(parse_study));

        match page.next_page_token {
            Some(token) if !token.is_empty() => page_token = Some(token),
            _ => break,
        }
        debug!(pages, accumulated = trials.len(), "Fetching next page");
    }

    let result = finish(trials, total_count, max_results);
    info!(
        pages,
        returned = result.trials.len(),
        total = result.total_count,
        truncated = result.truncated,
        "Registry search complete"
    );
    Ok(result)
}

/// Trim to the cap and compute the truncated flag.
///
/// `truncated` is true only when the reported total strictly exceeds what is
/// returned after trimming, even if the cap was reached while fetching.
pub fn finish(mut trials: Vec<Trial>, total_count: usize, max_results: usize) -> AggregatedResult {
    let retrieved = trials.len();
    let truncated_raw = retrieved >= max_results || retrieved < total_count;

    trials.truncate(max_results);
    let truncated = truncated_raw && total_count > trials.len();

    AggregatedResult { trials, total_count, truncated }
}
