use serde::Serialize;

/// Placeholder for any field whose source element is missing
pub const NOT_SPECIFIED: &str = "Not specified";

/// Column order of the output table
pub const HEADERS: [&str; 7] = [
    "Title",
    "Company",
    "Location",
    "Experience",
    "Posted",
    "Skills",
    "URL",
];

/// One job posting as read from a listing card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Experience")]
    pub experience: String,
    #[serde(rename = "Posted")]
    pub posted: String,
    #[serde(rename = "Skills")]
    pub skills: String,
    #[serde(rename = "URL")]
    pub url: String,
}

impl JobRecord {
    /// A record with every field set to the placeholder
    pub fn unspecified() -> Self {
        Self {
            title: NOT_SPECIFIED.to_string(),
            company: NOT_SPECIFIED.to_string(),
            location: NOT_SPECIFIED.to_string(),
            experience: NOT_SPECIFIED.to_string(),
            posted: NOT_SPECIFIED.to_string(),
            skills: NOT_SPECIFIED.to_string(),
            url: NOT_SPECIFIED.to_string(),
        }
    }
}

/// Trim, and turn typographic en-dashes into ASCII hyphens
pub fn normalize_experience(raw: &str) -> String {
    raw.trim().replace('\u{2013}', "-")
}

/// Join trimmed skill tags with ", ", or the placeholder when there are none
pub fn join_skills<I, S>(tags: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let skills: Vec<String> = tags
        .into_iter()
        .map(|tag| tag.as_ref().trim().to_string())
        .collect();

    if skills.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        skills.join(", ").trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_en_dash_becomes_hyphen() {
        assert_eq!(normalize_experience("2\u{2013}5 yrs"), "2-5 yrs");
        assert_eq!(normalize_experience(" 0-1 yrs "), "0-1 yrs");
    }

    #[test]
    fn test_join_skills_trims_each_tag() {
        assert_eq!(join_skills(["Python", " SQL ", "Excel"]), "Python, SQL, Excel");
    }

    #[test]
    fn test_join_skills_trims_joined_string() {
        assert_eq!(join_skills(["Python", " "]), "Python,");
    }

    #[test]
    fn test_join_skills_empty_is_placeholder() {
        assert_eq!(join_skills(Vec::<String>::new()), NOT_SPECIFIED);
    }
}
