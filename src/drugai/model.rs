use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry in the model catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRecord {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub citations: u64,
    // Display form, e.g. "5.2k". See `parse_like_count` for the numeric value.
    pub likes: String,
    pub publication_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl ModelRecord {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        tags: &[&str],
        citations: u64,
        likes: impl Into<String>,
        publication_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            citations,
            likes: likes.into(),
            publication_date,
            thumbnail_url: None,
        }
    }

    pub fn like_value(&self) -> f64 {
        parse_like_count(&self.likes)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whole days between the publication date and `today`.
    pub fn age_days(&self, today: NaiveDate) -> f64 {
        (today - self.publication_date).num_days() as f64
    }
}

/// Parses a human-readable magnitude such as `"5.2k"` or `"850"`.
///
/// Every character that is not an ASCII digit or `.` is dropped, then the
/// longest leading decimal number is read (`"1.2.3"` reads as `1.2`). A `k`
/// anywhere in the input (either case) scales by 1000. Input without a
/// leading number yields `NaN`, which catalog validation rejects.
pub fn parse_like_count(raw: &str) -> f64 {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let value = numeric_prefix(&digits).parse::<f64>().unwrap_or(f64::NAN);
    if raw.to_lowercase().contains('k') {
        value * 1000.0
    } else {
        value
    }
}

// Digits, then at most one `.` and the digits after it.
fn numeric_prefix(s: &str) -> &str {
    let mut seen_dot = false;
    let end = s
        .char_indices()
        .find(|&(_, c)| {
            if c == '.' && !seen_dot {
                seen_dot = true;
                false
            } else {
                !c.is_ascii_digit()
            }
        })
        .map_or(s.len(), |(i, _)| i);
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn parses_thousands_suffix() {
        assert_eq!(parse_like_count("5.2k"), 5200.0);
        assert_eq!(parse_like_count("1.9K"), 1900.0);
    }

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_like_count("850"), 850.0);
        assert_eq!(parse_like_count("1,200"), 1200.0);
    }

    #[test]
    fn extra_dots_keep_the_leading_number() {
        assert_eq!(parse_like_count("1.2.3k"), 1200.0);
        assert_eq!(parse_like_count("4..5"), 4.0);
        assert_eq!(parse_like_count(".5k"), 500.0);
    }

    #[test]
    fn garbage_is_nan() {
        assert!(parse_like_count(".").is_nan());
        assert!(parse_like_count("lots").is_nan());
        assert!(parse_like_count("").is_nan());
    }

    #[test]
    fn age_in_days() {
        let record = ModelRecord::new("A", "", &["x"], 0, "1", date("2024-01-01"));
        assert_eq!(record.age_days(date("2024-01-31")), 30.0);
    }

    #[test]
    fn deserializes_camel_case_keys() {
        let json = r#"{
            "title": "GNINA",
            "description": "Docking",
            "tags": ["Molecular Docking"],
            "citations": 300,
            "likes": "3.8k",
            "publicationDate": "2025-03-02",
            "thumbnailUrl": "https://picsum.photos/800/600?random=4"
        }"#;
        let record: ModelRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.publication_date, date("2025-03-02"));
        assert_eq!(record.like_value(), 3800.0);
        assert!(record.has_tag("Molecular Docking"));
        assert!(record.thumbnail_url.is_some());
    }

    #[test]
    fn rejects_invalid_dates() {
        let json = r#"{"title":"x","description":"","tags":["a"],"citations":1,
            "likes":"1","publicationDate":"2024-13-40"}"#;
        assert!(serde_json::from_str::<ModelRecord>(json).is_err());
    }
}
