//! ClinicalTrials.gov v2 API client.
//!
//! API docs: https://clinicaltrials.gov/data-api/api
//! Endpoint: https://clinicaltrials.gov/api/v2/studies
//!
//! Each call requests `pageSize` records with `countTotal=true`; follow-up
//! pages are addressed by the `nextPageToken` of the previous response.

use async_trait::async_trait;
use tracing::{debug, instrument, warn};
use trialscope_common::sandbox::SandboxClient as Client;
use trialscope_common::Result;
use trialscope_config::RegistryConfig;

use super::{StudyPage, StudySource};
use crate::query::QueryParams;

pub struct ClinicalTrialsClient {
    client: Client,
    config: RegistryConfig,
}

impl ClinicalTrialsClient {
    pub fn new(config: RegistryConfig) -> Result<Self> {
        let mut client = Client::new(config.timeout())?;
        client.allow_url_host(&config.base_url)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

#[async_trait]
impl StudySource for ClinicalTrialsClient {
    #[instrument(skip(self, params))]
    async fn fetch_page(
        &self,
        params: &QueryParams,
        page_token: Option<&str>,
    ) -> Result<StudyPage> {
        let mut request = self.client
            .get(&self.config.base_url)?
            .query(params)
            .query(&[
                ("pageSize",   self.config.page_size.to_string()),
                ("countTotal", "true".to_string()),
            ]);

        // An empty token is the same as no token: never send `pageToken=`
        if let Some(token) = page_token.filter(|t| !t.is_empty()) {
            request = request.query(&[("pageToken", token)]);
        }

        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            warn!(%status, "ClinicalTrials.gov request failed");
        }

        let page = resp
            .error_for_status()?
            .json::<StudyPage>()
            .await?;

        debug!(
            n = page.studies.len(),
            total = page.total_count,
            more = page.next_page_token.is_some(),
            "ClinicalTrials.gov page retrieved"
        );
        Ok(page)
    }
}
