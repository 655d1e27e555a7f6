use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::error::MasteryError;

/// Anything that can hand back one account's mastery page.
pub trait PageSource {
    fn fetch_page(&self, account: &str) -> Result<String, MasteryError>;
}

pub fn summoner_url(base_url: &str, region: &str, account: &str) -> Result<Url, MasteryError> {
    let url = Url::parse_with_params(base_url, &[("region", region), ("summoner", account)])?;
    Ok(url)
}

/// Fetches pages over blocking HTTP, one request per account.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
    base_url: String,
    region: String,
}

impl HttpPageSource {
    /// `timeout` of `None` waits for the server indefinitely.
    pub fn new(
        base_url: impl Into<String>,
        region: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, MasteryError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            region: region.into(),
        })
    }
}

impl PageSource for HttpPageSource {
    fn fetch_page(&self, account: &str) -> Result<String, MasteryError> {
        let url = summoner_url(&self.base_url, &self.region, account)?;
        tracing::info!("loading {url} ...");

        let response = self.client.get(url).send()?;
        let status = response.status();
        if status.as_u16() >= 400 {
            return Err(MasteryError::Upstream(format!(
                "failed to fetch mastery page for {account}: status {status}"
            )));
        }

        let body = response.bytes()?;
        decode_page(account, body.to_vec())
    }
}

/// Page bodies must be UTF-8; invalid bytes fail the fetch.
pub fn decode_page(account: &str, body: Vec<u8>) -> Result<String, MasteryError> {
    String::from_utf8(body).map_err(|source| MasteryError::InvalidEncoding {
        account: account.to_string(),
        source,
    })
}
