use std::collections::HashSet;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

mod domain;
mod ops;

use ops::{harvest, reliability, validate};

#[derive(Parser, Debug)]
#[command(version, about = "Checks URLs and domains against a trusted whitelist.", long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether a page references a whitelisted domain.
    Check(CheckArgs),

    /// List the registrable domains referenced by a page.
    Domains(DomainsArgs),

    /// Probe domains for reachability and keep the ones that respond.
    Clean(CleanArgs),
}

#[derive(Debug, clap::Args)]
struct CheckArgs {
    /// The page URL to check.
    url: String,

    #[arg(
        short,
        long,
        help = "Path to the whitelist file.",
        default_value = "whitelist.txt"
    )]
    whitelist: PathBuf,
}

#[derive(Debug, clap::Args)]
struct DomainsArgs {
    /// The page URL to crawl.
    url: String,

    #[arg(short, long, help = "Show which link produced each domain.")]
    links: bool,

    #[arg(
        short,
        long,
        help = "Print only the first label of each domain.",
        conflicts_with = "links"
    )]
    root: bool,
}

#[derive(Debug, clap::Args)]
struct CleanArgs {
    #[arg(
        short,
        long,
        help = "Input file of candidate domains, one per line.",
        default_value = "whitelist.txt"
    )]
    input: PathBuf,

    #[arg(
        short,
        long,
        help = "Output file for accessible domains.",
        default_value = "cleaned.txt"
    )]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[tokio::main(flavor = "current_thread")]
async fn run() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::Check(check_args) => {
            let client = harvest::harvest_client()?;
            let outcome =
                reliability::check_reliable(&client, &check_args.url, &check_args.whitelist)
                    .await?;

            match outcome.matched {
                Some(matched) => println!(
                    "{}: {} {}",
                    "Reliable".green().bold(),
                    check_args.url,
                    format!("(matched {})", matched).dimmed()
                ),
                None => println!("{}: {}", "Not reliable".red().bold(), check_args.url),
            }
        }

        Commands::Domains(domains_args) => {
            let client = harvest::harvest_client()?;

            if domains_args.links {
                let (pairs, _) = reliability::page_domain_links(&client, &domains_args.url).await;
                for pair in pairs {
                    println!("{} {} {}", pair.domain, "<-".dimmed(), pair.link);
                }
            } else if domains_args.root {
                let (pairs, _) = reliability::page_domain_links(&client, &domains_args.url).await;

                let mut roots: HashSet<String> = pairs
                    .iter()
                    .filter_map(|pair| domain::root_name(&pair.link))
                    .collect();
                if let Some(seed) = domain::root_name(&domains_args.url) {
                    roots.insert(seed);
                }

                for root in roots {
                    println!("{}", root);
                }
            } else {
                reliability::page_domains(&client, &domains_args.url).await;
            }
        }

        Commands::Clean(clean_args) => {
            validate::validate_domains(&clean_args.input, &clean_args.output).await?;
        }
    }

    Ok(())
}
