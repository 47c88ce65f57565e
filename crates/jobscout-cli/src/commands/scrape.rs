use crate::reporter::ConsoleReporter;
use anyhow::Result;
use jobscout_browser::{BrowserSession, ChromeFinder, LaunchOptions, ProfileManager};
use jobscout_core::listing::{Extractor, ListingSelectors};
use jobscout_core::scrape::{ScrapeReport, Scraper};
use jobscout_core::search::SearchQuery;
use jobscout_core::sink::{CsvSink, SaveOutcome};
use std::path::PathBuf;
use std::time::Duration;

/// Everything the scrape command needs for one run
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    pub query: SearchQuery,
    pub output: PathBuf,
    pub headless: bool,
    pub chrome_path: Option<PathBuf>,
    pub profile: Option<String>,
    pub settle_delay: Duration,
    pub navigation_timeout: Duration,
}

pub fn execute(options: ScrapeOptions) -> Result<SaveOutcome> {
    // Bad input should fail before a browser window appears
    options.query.validate()?;
    let scraper = Scraper::new(Extractor::new(&ListingSelectors::default())?);

    tracing::info!(
        "Searching '{}' across {} pages",
        options.query.keyword,
        options.query.pages
    );

    let chrome_binary = ChromeFinder::new(options.chrome_path.clone()).find()?;
    tracing::info!("Found Chrome at: {}", chrome_binary.display());

    let profile_manager = match &options.profile {
        Some(name) => {
            let profile_path = dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?
                .join(".jobscout")
                .join("profiles")
                .join(name);
            tracing::info!("Using profile: {}", profile_path.display());
            ProfileManager::persistent(profile_path)?
        }
        None => ProfileManager::temporary()?,
    };

    let launch_options = LaunchOptions::new(chrome_binary, profile_manager.path().to_path_buf())
        .headless(options.headless)
        .navigation_timeout(options.navigation_timeout)
        .settle_delay(options.settle_delay);

    let reporter = ConsoleReporter;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result: Result<ScrapeReport> = runtime.block_on(async {
        let mut session = BrowserSession::launch(&launch_options).await?;
        let outcome = scraper
            .run(&mut session, &options.query, &reporter)
            .await
            .map_err(anyhow::Error::from);
        session.finish(outcome).await
    });

    runtime.shutdown_timeout(Duration::from_millis(100));

    let report = result?;

    let empty_pages = report.empty_pages();
    if !empty_pages.is_empty() {
        tracing::warn!(
            "Pages without listings: {:?} (no results, or the page layout changed)",
            empty_pages
        );
    }

    Ok(CsvSink::save(&report.records, &options.output, &reporter)?)
}
