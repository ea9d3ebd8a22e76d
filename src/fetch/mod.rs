// src/fetch/mod.rs

use reqwest::Client;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, instrument, warn};
use url::Url;

use crate::config::{BACKOFF_MS, MAX_RETRIES};
use crate::error::ScrapeError;

async fn get_text_core(client: &Client, url: &Url) -> Result<String, reqwest::Error> {
    debug!("Fetching text from {}", url);
    client
        .get(url.clone())
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
}

/// GET `url` and return the body, retrying with exponential backoff.
pub async fn get_text_with_retry(
    client: &Client,
    url: &Url,
    max_retries: u32,
    initial_backoff_ms: u64,
) -> Result<String, ScrapeError> {
    let mut attempts = 0;
    loop {
        match get_text_core(client, url).await {
            Ok(t) => return Ok(t),
            Err(e) if attempts < max_retries => {
                attempts += 1;
                let backoff = initial_backoff_ms * 2u64.pow(attempts - 1);
                warn!(%url, attempt = attempts, delay_ms = backoff, error = %e, "Retrying");
                sleep(Duration::from_millis(backoff)).await;
            }
            Err(e) => {
                error!(%url, error = %e, "Exhausted retries");
                return Err(ScrapeError::FetchFailure {
                    url: url.to_string(),
                    source: e,
                });
            }
        }
    }
}

/// Fetch the statistics page with the default retry policy.
#[instrument(level = "info", skip(client, url), fields(url = %url))]
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, ScrapeError> {
    let body = get_text_with_retry(client, url, MAX_RETRIES, BACKOFF_MS).await?;
    debug!(bytes = body.len(), "fetched page");
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_host_is_fetch_failure() -> anyhow::Result<()> {
        let client = Client::new();
        // port 9 (discard) on localhost refuses connections on test machines
        let url = Url::parse("http://127.0.0.1:9/")?;
        let err = get_text_with_retry(&client, &url, 1, 1)
            .await
            .expect_err("connection should be refused");
        assert!(matches!(err, ScrapeError::FetchFailure { .. }));
        assert!(err.to_string().contains("127.0.0.1"));
        Ok(())
    }
}
