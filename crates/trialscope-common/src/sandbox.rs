use reqwest::{Client, ClientBuilder};
use std::collections::HashSet;
use std::time::Duration;
use tracing::debug;
use url::Url;
use crate::error::TrialScopeError;

const USER_AGENT: &str = concat!("trialscope/", env!("CARGO_PKG_VERSION"));

/// An HTTP client that only allows requests to approved hosts.
/// Every request it builds carries the configured timeout.
#[derive(Debug, Clone)]
pub struct SandboxClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl SandboxClient {
    /// Creates a client with the default allowlist (the registry and loopback).
    pub fn new(timeout: Duration) -> Result<Self, TrialScopeError> {
        let allowlist = [
            "clinicaltrials.gov", // ClinicalTrials.gov v2 API
            "localhost",
            "127.0.0.1",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let client = ClientBuilder::new()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TrialScopeError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Allows the host of `url`, e.g. a configured registry mirror.
    pub fn allow_url_host(&mut self, url: &str) -> Result<(), TrialScopeError> {
        let parsed = Url::parse(url)
            .map_err(|e| TrialScopeError::Config(format!("Invalid URL {}: {}", url, e)))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| TrialScopeError::Config(format!("URL has no host: {}", url)))?;
        debug!(host, "Adding host to allowlist");
        self.allow_domain(host);
        Ok(())
    }

    /// Validates if a URL is permitted under the current sandbox policy.
    pub fn is_allowed(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        let Some(host) = parsed.host_str() else {
            return false;
        };
        // Exact match, or a subdomain of an allowed domain
        self.allowlist
            .iter()
            .any(|allowed| host == allowed || host.ends_with(&format!(".{}", allowed)))
    }

    /// Exposes the inner `reqwest::Client` builder for GET requests.
    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder, TrialScopeError> {
        if !self.is_allowed(url) {
            return Err(TrialScopeError::SecurityError(format!(
                "Network capabilities capped: domain not in allowlist for URL {}",
                url
            )));
        }

        Ok(self.client.get(url))
    }
}
