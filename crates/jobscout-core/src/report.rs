use std::path::Path;

/// Receives progress events from a scrape run
///
/// The scrape loop and the sink only talk to this trait, so callers decide
/// whether events go to the console, the log, or a test buffer.
pub trait Reporter {
    fn page_started(&self, page: u32, url: &str);
    fn page_scraped(&self, page: u32, count: usize);
    fn no_listings(&self, page: u32);
    fn saved(&self, count: usize, path: &Path);
    fn nothing_to_save(&self);
}

/// Sends every event to `tracing`
///
/// The default reporter for library callers that want progress in their log
/// rather than on stdout; the `jobscout` binary prints through its own console
/// reporter instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn page_started(&self, page: u32, url: &str) {
        tracing::info!("Scraping page {} ({})", page, url);
    }

    fn page_scraped(&self, page: u32, count: usize) {
        tracing::info!("Page {}: {} listings", page, count);
    }

    fn no_listings(&self, page: u32) {
        tracing::warn!("No jobs found on page {}", page);
    }

    fn saved(&self, count: usize, path: &Path) {
        tracing::info!("Scraping complete. {} jobs saved to: {}", count, path.display());
    }

    fn nothing_to_save(&self) {
        tracing::warn!("No job data was found");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_all(reporter: &dyn Reporter) {
        reporter.page_started(1, "https://example.com/rust-jobs-1?k=rust");
        reporter.page_scraped(1, 20);
        reporter.no_listings(2);
        reporter.saved(20, Path::new("data/jobs.csv"));
        reporter.nothing_to_save();
    }

    #[test]
    fn test_tracing_reporter_usable_as_trait_object() {
        report_all(&TracingReporter);
    }
}
