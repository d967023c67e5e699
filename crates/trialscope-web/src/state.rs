//! Shared application state for the web server.

use std::sync::Arc;
use minijinja::Environment;
use trialscope_common::{AggregatedResult, SearchCriteria};
use trialscope_config::{Config, UiConfig};
use trialscope_registry::{ClinicalTrialsClient, StudySource};

/// Shared state injected into every Axum handler. Built once at startup,
/// never mutated afterwards.
pub struct AppState {
    pub source: Arc<dyn StudySource>,
    pub max_results: usize,
    pub ui: UiConfig,
    pub templates: Environment<'static>,
}

impl AppState {
    /// State backed by the live ClinicalTrials.gov client.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = ClinicalTrialsClient::new(config.registry.clone())?;
        let max_results = client.config().max_results;
        Self::with_source(Arc::new(client), max_results, config.ui.clone())
    }

    /// State backed by any page source.
    pub fn with_source(
        source: Arc<dyn StudySource>,
        max_results: usize,
        ui: UiConfig,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            source,
            max_results,
            ui,
            templates: crate::templates::environment()?,
        })
    }

    pub async fn search(&self, criteria: &SearchCriteria) -> trialscope_common::Result<AggregatedResult> {
        trialscope_registry::fetch_all(self.source.as_ref(), criteria, self.max_results).await
    }
}

pub type SharedState = Arc<AppState>;
