use super::selectors::ListingSelectors;
use super::types::{join_skills, normalize_experience, JobRecord, NOT_SPECIFIED};
use crate::{Error, Result};
use scraper::{ElementRef, Html, Selector};

/// Reads job records out of a rendered search-results page
pub struct Extractor {
    card: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    experience: Selector,
    posted: Selector,
    skills: Selector,
}

impl Extractor {
    /// Compile the given selectors
    pub fn new(selectors: &ListingSelectors) -> Result<Self> {
        Ok(Self {
            card: compile(&selectors.card)?,
            title: compile(&selectors.title)?,
            company: compile(&selectors.company)?,
            location: compile(&selectors.location)?,
            experience: compile(&selectors.experience)?,
            posted: compile(&selectors.posted)?,
            skills: compile(&selectors.skills)?,
        })
    }

    /// Extract one record per listing card, in document order
    ///
    /// A page without cards yields an empty vector; missing fields inside a
    /// card are filled with [`NOT_SPECIFIED`].
    pub fn extract(&self, html: &str) -> Vec<JobRecord> {
        let document = Html::parse_document(html);

        let records: Vec<JobRecord> = document
            .select(&self.card)
            .map(|card| self.extract_card(card))
            .collect();

        tracing::debug!("Extracted {} listing cards", records.len());
        records
    }

    fn extract_card(&self, card: ElementRef<'_>) -> JobRecord {
        let title_link = card.select(&self.title).next();

        let title = title_link
            .map(|link| element_text(link).trim().to_string())
            .unwrap_or_else(|| NOT_SPECIFIED.to_string());

        let url = title_link
            .and_then(|link| link.value().attr("href"))
            .filter(|href| !href.is_empty())
            .map(|href| href.trim().to_string())
            .unwrap_or_else(|| NOT_SPECIFIED.to_string());

        let experience = match card.select(&self.experience).next() {
            Some(el) => normalize_experience(&element_text(el)),
            None => NOT_SPECIFIED.to_string(),
        };

        let skills = join_skills(card.select(&self.skills).map(element_text));

        JobRecord {
            title,
            company: self.field(card, &self.company),
            location: self.field(card, &self.location),
            experience,
            posted: self.field(card, &self.posted),
            skills,
            url,
        }
    }

    /// Trimmed text of the first match inside the card, or the placeholder
    fn field(&self, card: ElementRef<'_>, selector: &Selector) -> String {
        card.select(selector)
            .next()
            .map(|el| element_text(el).trim().to_string())
            .unwrap_or_else(|| NOT_SPECIFIED.to_string())
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| Error::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Rendered text of an element, leaving out script and style contents
fn element_text(el: ElementRef<'_>) -> String {
    let mut text = String::new();
    push_visible_text(el, &mut text);
    text
}

fn push_visible_text(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_el) = ElementRef::wrap(child) {
            if !matches!(child_el.value().name(), "script" | "style" | "noscript") {
                push_visible_text(child_el, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> Extractor {
        Extractor::new(&ListingSelectors::default()).unwrap()
    }

    #[test]
    fn test_full_card_extracts_every_field() {
        let html = r#"
            <div class="srp-jobtuple-wrapper">
                <a class="title" href=" https://example.com/job/1 "> Data Analyst </a>
                <a class="comp-name">  Acme Corp </a>
                <span class="locWdth">Bengaluru</span>
                <span class="expwdth">2–5 Yrs</span>
                <span class="job-post-day"> 3 Days Ago </span>
                <ul class="tags-gt"><li>Python</li><li> SQL </li><li>Excel</li></ul>
            </div>
        "#;

        let records = extractor().extract(html);

        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0],
            JobRecord {
                title: "Data Analyst".to_string(),
                company: "Acme Corp".to_string(),
                location: "Bengaluru".to_string(),
                experience: "2-5 Yrs".to_string(),
                posted: "3 Days Ago".to_string(),
                skills: "Python, SQL, Excel".to_string(),
                url: "https://example.com/job/1".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_card_is_all_placeholders() {
        let html = r#"<div class="srp-jobtuple-wrapper"><p>nothing here</p></div>"#;

        let records = extractor().extract(html);

        assert_eq!(records, vec![JobRecord::unspecified()]);
    }

    #[test]
    fn test_title_without_href_has_placeholder_url() {
        let html = r#"<div class="srp-jobtuple-wrapper"><a class="title">Analyst</a></div>"#;

        let records = extractor().extract(html);

        assert_eq!(records[0].title, "Analyst");
        assert_eq!(records[0].url, NOT_SPECIFIED);
    }

    #[test]
    fn test_page_without_cards_yields_nothing() {
        let records = extractor().extract("<html><body><h1>No results</h1></body></html>");
        assert!(records.is_empty());
    }

    #[test]
    fn test_fields_are_scoped_to_their_card() {
        let html = r#"
            <div class="srp-jobtuple-wrapper"><a class="title" href="/a">First</a></div>
            <div class="srp-jobtuple-wrapper"><a class="comp-name">Second Co</a></div>
        "#;

        let records = extractor().extract(html);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "First");
        assert_eq!(records[0].company, NOT_SPECIFIED);
        assert_eq!(records[1].title, NOT_SPECIFIED);
        assert_eq!(records[1].company, "Second Co");
    }

    #[test]
    fn test_script_and_style_text_is_ignored() {
        let html = r#"
            <div class="srp-jobtuple-wrapper">
                <span class="locWdth">Pune<script>var x=1;</script></span>
                <a class="comp-name"><style>.c{color:red}</style> Acme <b>Labs</b></a>
            </div>
        "#;

        let records = extractor().extract(html);

        assert_eq!(records[0].location, "Pune");
        assert_eq!(records[0].company, "Acme Labs");
    }

    #[test]
    fn test_invalid_selector_is_rejected() {
        let selectors = ListingSelectors {
            card: "div[".to_string(),
            ..ListingSelectors::default()
        };

        let result = Extractor::new(&selectors);

        assert!(matches!(result, Err(Error::Selector { .. })));
    }
}
