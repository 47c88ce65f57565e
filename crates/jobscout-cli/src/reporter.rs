use console::style;
use jobscout_core::report::Reporter;
use std::path::Path;

/// Prints run progress to stdout
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn page_started(&self, page: u32, url: &str) {
        tracing::debug!("Page {} URL: {}", page, url);
        println!("\n🔄 Scraping page {}...", page);
    }

    fn page_scraped(&self, page: u32, count: usize) {
        tracing::debug!("Page {} yielded {} listings", page, count);
        println!("   Found {} listings", count);
    }

    fn no_listings(&self, page: u32) {
        println!("{}", style(format!("⚠️  No jobs found on page {}", page)).yellow());
    }

    fn saved(&self, count: usize, path: &Path) {
        println!(
            "\n{} {} jobs saved to: {}",
            style("✅ Scraping complete.").green().bold(),
            count,
            path.display()
        );
    }

    fn nothing_to_save(&self) {
        println!("\n{}", style("⚠️  No job data was found.").yellow());
    }
}
