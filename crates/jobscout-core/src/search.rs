use crate::{Error, Result};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://www.naukri.com";
pub const DEFAULT_KEYWORD: &str = "data analyst";
pub const DEFAULT_PAGES: u32 = 5;

/// A keyword search spread over a fixed number of result pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    pub pages: u32,
    pub base_url: String,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            keyword: DEFAULT_KEYWORD.to_string(),
            pages: DEFAULT_PAGES,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl SearchQuery {
    /// Create a query against the default site
    pub fn new(keyword: impl Into<String>, pages: u32) -> Self {
        Self {
            keyword: keyword.into(),
            pages,
            ..Self::default()
        }
    }

    /// Point the query at a different site root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Reject queries that can never produce a page URL
    pub fn validate(&self) -> Result<()> {
        if self.keyword.trim().is_empty() {
            return Err(Error::InvalidQuery("keyword must not be empty".to_string()));
        }
        if self.pages == 0 {
            return Err(Error::InvalidQuery("pages must be at least 1".to_string()));
        }
        Url::parse(&self.base_url).map_err(|e| {
            Error::InvalidQuery(format!("base URL '{}' is not valid: {}", self.base_url, e))
        })?;
        Ok(())
    }

    /// Keyword as it appears in the URL path
    pub fn slug(&self) -> String {
        slugify(&self.keyword)
    }

    /// Build the search URL for a 1-based page number
    pub fn page_url(&self, page_num: u32) -> Result<Url> {
        let raw = format!(
            "{}/{}-jobs-{}?k={}",
            self.base_url.trim_end_matches('/'),
            self.slug(),
            page_num,
            self.keyword
        );

        Url::parse(&raw).map_err(|e| Error::InvalidQuery(format!("cannot build URL '{}': {}", raw, e)))
    }

    /// All page URLs, first page first
    pub fn page_urls(&self) -> Result<Vec<(u32, Url)>> {
        (1..=self.pages)
            .map(|page_num| self.page_url(page_num).map(|url| (page_num, url)))
            .collect()
    }
}

/// Replace spaces with hyphens
pub fn slugify(keyword: &str) -> String {
    keyword.replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_replaces_spaces_only() {
        assert_eq!(slugify("data analyst"), "data-analyst");
        assert_eq!(slugify("c++ developer"), "c++-developer");
        assert_eq!(slugify("rust"), "rust");
    }

    #[test]
    fn test_page_url_embeds_slug_page_and_keyword() {
        let query = SearchQuery::new("data analyst", 5);
        let url = query.page_url(3).unwrap();

        assert_eq!(
            url.as_str(),
            "https://www.naukri.com/data-analyst-jobs-3?k=data%20analyst"
        );
    }

    #[test]
    fn test_page_url_tolerates_trailing_slash() {
        let query = SearchQuery::new("rust", 1).with_base_url("http://localhost:8080/");
        let url = query.page_url(1).unwrap();

        assert_eq!(url.as_str(), "http://localhost:8080/rust-jobs-1?k=rust");
    }

    #[test]
    fn test_page_urls_cover_every_page_in_order() {
        let query = SearchQuery::new("rust", 3);
        let pages: Vec<u32> = query.page_urls().unwrap().into_iter().map(|(n, _)| n).collect();

        assert_eq!(pages, vec![1, 2, 3]);
    }

    #[test]
    fn test_validate_rejects_zero_pages_and_blank_keyword() {
        assert!(SearchQuery::new("rust", 0).validate().is_err());
        assert!(SearchQuery::new("   ", 2).validate().is_err());
        assert!(SearchQuery::new("rust", 1).with_base_url("not a url").validate().is_err());
        assert!(SearchQuery::default().validate().is_ok());
    }
}
