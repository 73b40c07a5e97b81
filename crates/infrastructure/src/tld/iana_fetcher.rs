use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use zonewatch_application::ports::TldListFetcher;
use zonewatch_domain::DomainError;

/// Fetches `tlds-alpha-by-domain.txt` over HTTP.
pub struct IanaTldFetcher {
    url: String,
    client: reqwest::Client,
}

impl IanaTldFetcher {
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("zonewatch/", env!("CARGO_PKG_VERSION"), " (tld-sweep)"))
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| DomainError::TldSource(e.to_string()))?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl TldListFetcher for IanaTldFetcher {
    async fn fetch_tld_list(&self) -> Result<String, DomainError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DomainError::TldSource(format!("fetch error for {}: {}", self.url, e)))?;

        if !response.status().is_success() {
            return Err(DomainError::TldSource(format!(
                "HTTP {} for {}",
                response.status().as_u16(),
                self.url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::TldSource(format!("read error for {}: {}", self.url, e)))?;

        debug!(url = %self.url, bytes = body.len(), "TLD list downloaded");
        Ok(body)
    }
}
