//! HTTP handlers for all web routes.

pub mod search;
pub mod export;
pub mod system;

use serde::{Deserialize, Serialize};
use trialscope_common::SearchCriteria;

/// Query string shared by `/search` and `/export`. `phases` and `statuses`
/// may repeat.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchForm {
    #[serde(default)]
    pub compound: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub phases: Vec<String>,
    #[serde(default)]
    pub statuses: Vec<String>,
}

impl SearchForm {
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria::new(
            &self.compound,
            &self.condition,
            self.phases.clone(),
            self.statuses.clone(),
        )
    }

    /// Re-encode the criteria as a query string, e.g. for the export link.
    pub fn query_string(&self) -> String {
        let criteria = self.criteria();
        let mut qs = url::form_urlencoded::Serializer::new(String::new());
        if let Some(compound) = &criteria.compound {
            qs.append_pair("compound", compound);
        }
        if let Some(condition) = &criteria.condition {
            qs.append_pair("condition", condition);
        }
        for phase in criteria.phases.iter().flatten() {
            qs.append_pair("phases", phase);
        }
        for status in criteria.statuses.iter().flatten() {
            qs.append_pair("statuses", status);
        }
        qs.finish()
    }
}
