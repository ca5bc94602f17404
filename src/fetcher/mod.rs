pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

/// Published list of all current top-level domains, one per line,
/// `#`-prefixed comment lines allowed.
pub const TLD_URL: &str = "https://data.iana.org/TLD/tlds-alpha-by-domain.txt";

#[async_trait]
pub trait Fetcher {
    /// Fetch the TLD list and return the full response body as text.
    async fn fetch(&self) -> Result<String>;
}
