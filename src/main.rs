//! Linktrack command-line entry point
//!
//! Loads a page catalog, fetches each page and prints the anchor markup
//! discovered on it. A single URL can be fetched instead with `--url`.

use anyhow::{bail, Context};
use clap::Parser;
use linktrack::config::Config;
use linktrack::fetcher::{build_http_client, refresh_links, try_fetch_links};
use linktrack::FetchError;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Linktrack: discover the anchor tags referenced by tracked pages
#[derive(Parser, Debug)]
#[command(name = "linktrack")]
#[command(version)]
#[command(about = "Discover anchor tags on tracked web pages", long_about = None)]
struct Cli {
    /// Path to the catalog file (one "name;url" entry per line)
    #[arg(value_name = "CATALOG")]
    catalog: Option<PathBuf>,

    /// Fetch a single URL instead of a catalog
    #[arg(long, value_name = "URL", conflicts_with = "catalog")]
    url: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => linktrack::config::load_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(url) = &cli.url {
        fetch_single(&config, url)?;
        return Ok(());
    }

    let catalog_path = cli
        .catalog
        .or_else(|| config.catalog.default_path.as_ref().map(PathBuf::from));
    match catalog_path {
        Some(path) => {
            fetch_catalog(&config, &path)
                .with_context(|| format!("Failed to process catalog {}", path.display()))?;
            Ok(())
        }
        None => bail!("No catalog path given and no catalog.default-path configured"),
    }
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linktrack=info,warn"),
            1 => EnvFilter::new("linktrack=debug,info"),
            2 => EnvFilter::new("linktrack=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Fetches one URL and prints its anchors
fn fetch_single(config: &Config, url: &str) -> linktrack::Result<()> {
    let client = build_http_client(&config.fetcher).map_err(FetchError::Client)?;

    match try_fetch_links(&client, url) {
        Ok(links) => {
            println!("{} link(s) on {}", links.len(), url);
            for link in &links {
                println!("  {}", link);
            }
        }
        Err(e) => tracing::warn!("Fetch failed for {}: {}", url, e),
    }

    Ok(())
}

/// Loads a catalog, fetches every record and prints the results
fn fetch_catalog(config: &Config, path: &Path) -> linktrack::Result<()> {
    let client = build_http_client(&config.fetcher).map_err(FetchError::Client)?;

    let catalog = linktrack::try_load_pages(path)?;
    if catalog.skipped > 0 {
        tracing::info!("Skipped {} malformed catalog line(s)", catalog.skipped);
    }

    let mut pages = catalog.pages;
    for record in &mut pages {
        match refresh_links(record, &client) {
            Ok(count) => tracing::info!("{}: {} link(s)", record.name, count),
            Err(e) => tracing::warn!("{}: fetch failed: {}", record.name, e),
        }
    }

    for record in &pages {
        println!("{} ({}): {} link(s)", record.name, record.url, record.links.len());
        for link in &record.links {
            println!("  {}", link);
        }
    }

    Ok(())
}
