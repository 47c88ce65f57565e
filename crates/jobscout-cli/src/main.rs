use anyhow::Result;
use clap::Parser;
use jobscout_cli::commands::scrape::{self, ScrapeOptions};
use jobscout_core::search::{SearchQuery, DEFAULT_BASE_URL, DEFAULT_KEYWORD, DEFAULT_PAGES};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "jobscout")]
#[command(author, version)]
#[command(
    about = "Scrape job listings from search result pages into a CSV file",
    long_about = "jobscout drives a Chrome browser through the result pages of a job search, \
                  reads title, company, location, experience, posting date, skills and URL \
                  from every listing, and writes them to a CSV file."
)]
struct Cli {
    /// Search keyword
    #[arg(short, long, env = "JOBSCOUT_KEYWORD", default_value = DEFAULT_KEYWORD)]
    keyword: String,

    /// Number of result pages to visit
    #[arg(
        short,
        long,
        env = "JOBSCOUT_PAGES",
        default_value_t = DEFAULT_PAGES,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pages: u32,

    /// CSV file to write (parent directories are created)
    #[arg(short, long, env = "JOBSCOUT_OUTPUT", default_value = "data/naukri_jobs.csv")]
    output: PathBuf,

    /// Site root the search URLs are built on
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Run Chrome without a visible window
    #[arg(long)]
    headless: bool,

    /// Path to the Chrome or Chromium binary
    #[arg(long, value_name = "PATH")]
    chrome_path: Option<PathBuf>,

    /// Named persistent profile under ~/.jobscout/profiles (default: temporary profile)
    #[arg(long, value_name = "NAME")]
    profile: Option<String>,

    /// Seconds to wait after navigation before reading the page
    #[arg(long, default_value_t = 3)]
    settle_secs: u64,

    /// Seconds before a page navigation is abandoned
    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let options = ScrapeOptions {
        query: SearchQuery::new(cli.keyword, cli.pages).with_base_url(cli.base_url),
        output: cli.output,
        headless: cli.headless,
        chrome_path: cli.chrome_path,
        profile: cli.profile,
        settle_delay: Duration::from_secs(cli.settle_secs),
        navigation_timeout: Duration::from_secs(cli.timeout_secs),
    };

    scrape::execute(options)?;
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_filter(verbose)))
        .with_target(false)
        .without_time()
        .init();
}

fn log_filter(verbose: bool) -> &'static str {
    if verbose {
        "jobscout=debug,jobscout_cli=debug,jobscout_core=debug,jobscout_browser=debug"
    } else {
        "jobscout=info,jobscout_cli=info,jobscout_core=info,jobscout_browser=warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_shows_core_warnings() {
        assert!(log_filter(false).contains("jobscout_core=info"));
    }

    #[test]
    fn test_verbose_filter_enables_debug_everywhere() {
        let filter = log_filter(true);
        for krate in ["jobscout_cli", "jobscout_core", "jobscout_browser"] {
            assert!(filter.contains(&format!("{}=debug", krate)));
        }
    }
}
