//! SearchCriteria → ClinicalTrials.gov v2 query parameters.

use trialscope_common::SearchCriteria;

pub const PARAM_INTERVENTION: &str = "query.intr";
pub const PARAM_CONDITION: &str = "query.cond";
pub const PARAM_TERM: &str = "query.term";
pub const PARAM_STATUS: &str = "filter.overallStatus";

/// Ordered `(name, value)` pairs, sent verbatim as query parameters.
pub type QueryParams = Vec<(&'static str, String)>;

/// Translate criteria into API parameters. Every criterion is optional and
/// applied independently; codes are not validated here.
pub fn build_query_params(criteria: &SearchCriteria) -> QueryParams {
    let mut params = QueryParams::new();

    if let Some(compound) = &criteria.compound {
        params.push((PARAM_INTERVENTION, compound.clone()));
    }

    if let Some(condition) = &criteria.condition {
        params.push((PARAM_CONDITION, condition.clone()));
    }

    if let Some(term) = criteria.phases.as_deref().and_then(phase_term) {
        params.push((PARAM_TERM, term));
    }

    if let Some(statuses) = criteria.statuses.as_deref().filter(|s| !s.is_empty()) {
        params.push((PARAM_STATUS, statuses.join(",")));
    }

    params
}

/// `AREA[Phase]X` for one phase, `AREA[Phase](X OR Y ...)` for several.
fn phase_term(phases: &[String]) -> Option<String> {
    match phases {
        [] => None,
        [single] => Some(format!("AREA[Phase]{}", single)),
        many => Some(format!("AREA[Phase]({})", many.join(" OR "))),
    }
}
