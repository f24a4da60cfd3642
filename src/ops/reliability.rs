use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::domain;

use super::harvest;

#[derive(Clone, Debug)]
pub struct DomainLink {
    pub domain: String,
    pub link: String,
}

#[derive(Clone, Debug)]
pub struct CheckOutcome {
    pub reliable: bool,
    pub matched: Option<String>,
}

pub async fn page_domain_links(client: &Client, url: &str) -> (Vec<DomainLink>, HashSet<String>) {
    let links: HashSet<String> = harvest::fetch_links(client, url).await.into_iter().collect();

    let mut pairs = Vec::new();
    let mut domains = HashSet::new();

    for link in links {
        // hrefs with no discoverable domain (fragments, javascript:, ...)
        // are dropped here
        if let Some(domain) = domain::registrable_domain(&link) {
            domains.insert(domain.clone());
            pairs.push(DomainLink { domain, link });
        }
    }

    (pairs, domains)
}

pub async fn page_domains(client: &Client, url: &str) -> HashSet<String> {
    let (_, mut domains) = page_domain_links(client, url).await;

    // the seed page's own domain counts as referenced
    match domain::registrable_domain(url) {
        Some(seed) => {
            domains.insert(seed);
        }
        None => log::debug!("seed url {} has no registrable domain", url),
    }

    for domain in &domains {
        println!("{}", domain);
    }

    domains
}

pub fn load_whitelist(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read whitelist: {}", path.display()))?;

    Ok(content.lines().map(|line| line.trim().to_string()).collect())
}

pub async fn check_reliable(
    client: &Client,
    url: &str,
    whitelist_path: &Path,
) -> Result<CheckOutcome> {
    let domains = page_domains(client, url).await;

    // the whitelist is re-read on every check, never cached
    let whitelist = load_whitelist(whitelist_path)?;

    for domain in domains {
        if whitelist.iter().any(|trusted| trusted == &domain) {
            return Ok(CheckOutcome {
                reliable: true,
                matched: Some(domain),
            });
        }
    }

    Ok(CheckOutcome {
        reliable: false,
        matched: None,
    })
}
