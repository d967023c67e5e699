//! Registry page sources.

pub mod clinicaltrials;

use async_trait::async_trait;
use serde::Deserialize;
use trialscope_common::Result;

use crate::query::QueryParams;

/// One page of the registry's JSON envelope.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPage {
    /// Raw study documents, handed to the parser one by one.
    #[serde(default)]
    pub studies: Vec<serde_json::Value>,
    /// Present only when more pages exist.
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub total_count: usize,
}

/// Common interface for anything that can serve registry pages.
#[async_trait]
pub trait StudySource: Send + Sync {
    /// Fetch a single page. `page_token` is `None` for the first page.
    async fn fetch_page(
        &self,
        params: &QueryParams,
        page_token: Option<&str>,
    ) -> Result<StudyPage>;
}
