use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::app::Result;
use crate::fetcher::{Fetcher, TLD_URL};

/// Bounds the whole network exchange. Database inserts run after the
/// response body is consumed and are not subject to this deadline.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("tldwatch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self) -> Result<String> {
        let response = self.client.get(TLD_URL).send().await?;
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}
