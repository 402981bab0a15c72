use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::JobSearchConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum JobSearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// One job listing as returned by the provider. The shape is owned by the
/// provider; this service passes it through untouched.
pub type Listing = serde_json::Value;

/// Job-search provider interface. Handlers depend on this trait so tests can
/// inject a fake instead of calling RapidAPI.
#[async_trait]
pub trait JobSearch: Send + Sync {
    /// Fetch one results page for a query. An empty vec means the provider
    /// answered successfully but had no matching listings.
    async fn search(&self, query: &str, page: u32) -> Result<Vec<Listing>, JobSearchError>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<Listing>,
}

/// JSearch (RapidAPI) client.
#[derive(Clone)]
pub struct JSearchClient {
    client: Client,
    config: JobSearchConfig,
}

impl JSearchClient {
    pub fn new(config: JobSearchConfig) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl JobSearch for JSearchClient {
    async fn search(&self, query: &str, page: u32) -> Result<Vec<Listing>, JobSearchError> {
        let url = format!("https://{}/search", self.config.host);
        let page_param = page.to_string();
        let response = self
            .client
            .get(&url)
            .header("x-rapidapi-key", &self.config.api_key)
            .header("x-rapidapi-host", &self.config.host)
            .query(&[
                ("query", query),
                ("page", page_param.as_str()),
                ("num_pages", "1"),
                ("country", self.config.country.as_str()),
                ("date_posted", self.config.date_posted.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(JobSearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchResponse = response.json().await?;
        debug!(query = %query, page, listings = body.data.len(), "job search completed");
        Ok(body.data)
    }
}
