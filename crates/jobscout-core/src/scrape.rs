use crate::listing::{Extractor, JobRecord};
use crate::report::Reporter;
use crate::search::SearchQuery;
use crate::Result;
use async_trait::async_trait;

/// Something that can navigate to a URL and hand back the rendered HTML
#[async_trait]
pub trait PageSource {
    async fn load(&mut self, url: &str) -> Result<String>;
}

/// What a single results page produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    Listings(usize),
    Empty,
}

/// Records collected over a run, with the outcome of every visited page
#[derive(Debug, Default)]
pub struct ScrapeReport {
    pub records: Vec<JobRecord>,
    pub pages: Vec<(u32, PageOutcome)>,
}

impl ScrapeReport {
    /// Page numbers that had no listing cards
    pub fn empty_pages(&self) -> Vec<u32> {
        self.pages
            .iter()
            .filter(|(_, outcome)| *outcome == PageOutcome::Empty)
            .map(|(page, _)| *page)
            .collect()
    }
}

/// Walks the result pages of a query one after another
pub struct Scraper {
    extractor: Extractor,
}

impl Scraper {
    pub fn new(extractor: Extractor) -> Self {
        Self { extractor }
    }

    /// Visit every page of the query in order and collect its records
    ///
    /// A page without cards is reported and skipped. A load failure ends the
    /// run and is returned as-is.
    pub async fn run<S, R>(
        &self,
        source: &mut S,
        query: &SearchQuery,
        reporter: &R,
    ) -> Result<ScrapeReport>
    where
        S: PageSource + Send + ?Sized,
        R: Reporter + ?Sized,
    {
        query.validate()?;

        let mut report = ScrapeReport::default();

        for (page_num, url) in query.page_urls()? {
            reporter.page_started(page_num, url.as_str());

            let html = source.load(url.as_str()).await?;
            let records = self.extractor.extract(&html);

            if records.is_empty() {
                reporter.no_listings(page_num);
                report.pages.push((page_num, PageOutcome::Empty));
                continue;
            }

            reporter.page_scraped(page_num, records.len());
            report.pages.push((page_num, PageOutcome::Listings(records.len())));
            report.records.extend(records);
        }

        tracing::debug!(
            "Scrape finished: {} records from {} pages",
            report.records.len(),
            report.pages.len()
        );

        Ok(report)
    }
}
