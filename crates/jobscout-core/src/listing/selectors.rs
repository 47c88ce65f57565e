/// CSS selectors locating a listing card and its fields
///
/// Field selectors are evaluated inside each card, never against the whole page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSelectors {
    pub card: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub experience: String,
    pub posted: String,
    pub skills: String,
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self {
            card: ".srp-jobtuple-wrapper".to_string(),
            title: "a.title".to_string(),
            company: "a.comp-name".to_string(),
            location: "span.locWdth".to_string(),
            experience: "span.expwdth".to_string(),
            posted: "span.job-post-day".to_string(),
            skills: "ul.tags-gt li".to_string(),
        }
    }
}
