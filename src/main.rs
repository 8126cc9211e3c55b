//! Facet-Scout main entry point
//!
//! Thin command-line front end over the search pipeline: parse flags, run one
//! search, and render the values either line-per-value or as a JSON array.

use clap::Parser;
use facet_scout::config::{load_config, SearchConfig};
use facet_scout::facets::KNOWN_FACETS;
use facet_scout::{ScoutError, SearchClient};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Facet-Scout: query Shodan search facets from the command line
#[derive(Parser, Debug)]
#[command(name = "facet-scout")]
#[command(version = "1.0.0")]
#[command(about = "Query Shodan search facets", long_about = None)]
struct Cli {
    /// Search query
    #[arg(short, long, required_unless_present = "list")]
    query: Option<String>,

    /// Facet to aggregate by (see --list)
    #[arg(short, long, default_value = "ip")]
    facet: String,

    /// Print results as a JSON array
    #[arg(long)]
    json: bool,

    /// List all known facets and exit
    #[arg(long)]
    list: bool,

    /// Path to an optional TOML configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if cli.list {
        for facet in KNOWN_FACETS {
            println!("{}", facet);
        }
        return;
    }

    // Clap guarantees the query is present when --list is absent.
    let Some(query) = cli.query.as_deref() else {
        return;
    };

    let config = match load_search_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let client = match SearchClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build search client: {}", e);
            std::process::exit(1);
        }
    };

    match client.search(query, &cli.facet).await {
        Ok(values) => render_results(&values, cli.json),
        Err(e) => {
            report_failure(&e);
            std::process::exit(1);
        }
    }
}

/// Loads the config file if one was given, otherwise uses the defaults
fn load_search_config(
    path: Option<&std::path::Path>,
) -> Result<SearchConfig, facet_scout::ConfigError> {
    match path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
        }
        None => Ok(SearchConfig::default()),
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("facet_scout=info,warn"),
            1 => EnvFilter::new("facet_scout=debug,info"),
            2 => EnvFilter::new("facet_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints the result values, one per line or as a JSON array
fn render_results(values: &[String], json: bool) {
    if json {
        match serde_json::to_string(values) {
            Ok(encoded) => println!("{}", encoded),
            Err(e) => {
                tracing::error!("Failed to encode results as JSON: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        for value in values {
            println!("{}", value);
        }
    }
}

/// Logs each failure kind with its own message and severity
fn report_failure(error: &ScoutError) {
    match error {
        ScoutError::Blocked => {
            tracing::warn!(
                advice = "Try again later or use a different IP",
                "Request blocked by Cloudflare"
            );
        }
        ScoutError::Notice(message) => tracing::info!("{}", message),
        ScoutError::Service(message) => tracing::error!("{}", message),
        ScoutError::Timeout => tracing::error!("Search request timed out"),
        ScoutError::Wildcard => tracing::error!("Wildcard searches are not supported"),
        ScoutError::Http(code) => tracing::error!("HTTP error {}", code),
        ScoutError::NoResults => tracing::error!("No results found"),
        ScoutError::MalformedDocument => tracing::error!("Failed to parse response HTML"),
        other => tracing::error!("{}", other),
    }
}
