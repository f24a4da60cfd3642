use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use scraper::{Html, Selector};

const FETCH_TIMEOUT: Duration = Duration::from_secs(1);

pub fn harvest_client() -> Result<Client> {
    Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")
}

// Failures are part of the contract here: an unreachable page and a page
// with no anchors both come back as an empty list.
pub async fn fetch_links(client: &Client, url: &str) -> Vec<String> {
    match try_fetch_links(client, url).await {
        Ok(links) => links,
        Err(e) => {
            log::debug!("failed to fetch links from {}: {:#}", url, e);
            Vec::new()
        }
    }
}

async fn try_fetch_links(client: &Client, url: &str) -> Result<Vec<String>> {
    let body = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to send request to {}", url))?
        .error_for_status()?
        .text()
        .await
        .with_context(|| format!("Failed to read response body from {}", url))?;

    let anchor = Selector::parse("a").expect("static selector");
    let document = Html::parse_document(&body);

    // hrefs are collected verbatim: no resolution against the base url
    Ok(document
        .select(&anchor)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_owned)
        .collect())
}
