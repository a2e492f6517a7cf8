use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;

use super::{FetchFailure, dto::HoldingsResponseDto};
use crate::models::Holding;

#[derive(Clone, Debug)]
pub struct HoldingsApi {
    client: Client,
    url: String,
}

impl HoldingsApi {
    pub fn new(url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .with_context(|| "Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch_holdings(&self) -> Result<Vec<Holding>, FetchFailure> {
        let res = self.client.get(&self.url).send().await?;

        if !res.status().is_success() {
            return Err(FetchFailure::Status(res.status()));
        }

        let text = res.text().await?;
        debug!(bytes = text.len(), "received holdings payload");
        let data = serde_json::from_str::<HoldingsResponseDto>(&text)?;

        Ok(data.into_holdings())
    }
}
