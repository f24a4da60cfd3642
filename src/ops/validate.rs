use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

// Some hosts refuse requests that carry no browser-like identity.
const PROBE_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

fn probe_client() -> Result<Client> {
    Client::builder()
        .user_agent(PROBE_USER_AGENT)
        .timeout(PROBE_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")
}

async fn is_accessible(client: &Client, domain: &str, pb: &ProgressBar) -> bool {
    for probe_url in [format!("https://{}", domain), format!("http://{}", domain)] {
        match client.get(&probe_url).send().await {
            Ok(response) if response.status().is_success() => {
                pb.println(format!(
                    "  {}: {} ({})",
                    "Success".green(),
                    probe_url,
                    response.status()
                ));
                return true;
            }
            Ok(response) => {
                pb.println(format!(
                    "  {}: {} ({})",
                    "Failed".red(),
                    probe_url,
                    response.status()
                ));
            }
            Err(e) if e.is_timeout() => {
                pb.println(format!("  {}: {} (timed out)", "Failed".red(), probe_url));
            }
            Err(e) => {
                pb.println(format!(
                    "  {}: {} ({})",
                    "Failed".red(),
                    probe_url,
                    e.without_url()
                ));
            }
        }
    }

    false
}

pub async fn validate_domains(input: &Path, output: &Path) -> Result<()> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;

    // (1-based line number, trimmed content) for every non-empty line
    let candidates: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    if candidates.is_empty() {
        println!("Input file {} is empty.", input.display());
        return Ok(());
    }

    println!(
        "{}: {} {}",
        "Reading domains from".blue().bold(),
        input.display(),
        format!("({} domains)", candidates.len()).dimmed()
    );

    let client = probe_client()?;

    let pb = ProgressBar::new(candidates.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap()
            .progress_chars("##-"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    let mut reachable = BTreeSet::new();
    let mut failed: Vec<(usize, String)> = Vec::new();

    for (line_no, raw) in candidates {
        let domain = raw.to_lowercase();
        pb.println(format!("Checking: {}", domain));

        if is_accessible(&client, &domain, &pb).await {
            reachable.insert(domain);
        } else {
            failed.push((line_no, raw.to_string()));
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    if reachable.is_empty() {
        println!("{}", "No accessible domains found.".yellow().bold());
        report_failures(&failed);
        return Ok(());
    }

    let mut cleaned = String::new();
    for domain in &reachable {
        cleaned.push_str(domain);
        cleaned.push('\n');
    }

    fs::write(output, cleaned)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    println!(
        "{}: {} {} {}",
        "Writing".purple(),
        reachable.len(),
        "accessible domains to".dimmed(),
        output.display()
    );

    report_failures(&failed);

    Ok(())
}

fn report_failures(failed: &[(usize, String)]) {
    if failed.is_empty() {
        return;
    }

    println!(
        "\n{}:",
        "Lines that failed the accessibility check".yellow().bold()
    );
    for (line_no, content) in failed {
        println!("  Line {}: '{}'", line_no, content);
    }
}
