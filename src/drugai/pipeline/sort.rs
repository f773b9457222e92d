use crate::model::ModelRecord;
use chrono::NaiveDate;
use serde::Serialize;

/// Ranking strategies offered to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SortOption {
    ByLikes,
    ByCitations,
    ByRecency,
    #[default]
    Trending,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::Trending,
        SortOption::ByLikes,
        SortOption::ByCitations,
        SortOption::ByRecency,
    ];

    /// Resolves a user-facing label. Anything unrecognized ranks by recency.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "trending" => SortOption::Trending,
            "likes" | "most likes" => SortOption::ByLikes,
            "citations" | "most citations" => SortOption::ByCitations,
            "recency" | "recent" | "newest publication" | "recently updated" => {
                SortOption::ByRecency
            }
            other => {
                tracing::debug!(label = other, "unknown sort label, ranking by recency");
                SortOption::ByRecency
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::ByLikes => "Most likes",
            SortOption::ByCitations => "Most citations",
            SortOption::ByRecency => "Newest publication",
            SortOption::Trending => "Trending",
        }
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Stable sort of `records` under `option`. `today` anchors record age for
/// the trending score.
pub fn sort<'a>(
    records: &[&'a ModelRecord],
    option: SortOption,
    today: NaiveDate,
) -> Vec<&'a ModelRecord> {
    let mut sorted = records.to_vec();
    match option {
        SortOption::ByLikes => {
            sorted.sort_by(|a, b| b.like_value().total_cmp(&a.like_value()));
        }
        SortOption::ByCitations => {
            sorted.sort_by(|a, b| b.citations.cmp(&a.citations));
        }
        SortOption::ByRecency => {
            sorted.sort_by(|a, b| b.publication_date.cmp(&a.publication_date));
        }
        SortOption::Trending => {
            let scores = trending_scores(records, today);
            let mut order: Vec<usize> = (0..records.len()).collect();
            order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
            sorted = order.into_iter().map(|i| records[i]).collect();
        }
    }
    sorted
}

/// Trending score for each record, parallel to `records`.
///
/// Likes and recency are min-max normalized over `records` (the currently
/// filtered set) and averaged, so every score lies in `[0, 1]`. A dimension
/// with no spread contributes `0`.
pub fn trending_scores(records: &[&ModelRecord], today: NaiveDate) -> Vec<f64> {
    let likes: Vec<f64> = records.iter().map(|r| r.like_value()).collect();
    let ages: Vec<f64> = records.iter().map(|r| r.age_days(today)).collect();
    let (min_likes, max_likes) = bounds(&likes);
    let (min_age, max_age) = bounds(&ages);

    likes
        .iter()
        .zip(&ages)
        .map(|(&l, &age)| {
            let norm_likes = normalize(l - min_likes, max_likes - min_likes);
            let norm_recency = normalize(max_age - age, max_age - min_age);
            (norm_likes + norm_recency) / 2.0
        })
        .collect()
}

fn bounds(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

fn normalize(offset: f64, span: f64) -> f64 {
    if span == 0.0 {
        0.0
    } else {
        (offset / span).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ALL_TAGS};
    use crate::pipeline::filter::filter;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn today() -> NaiveDate {
        date("2025-06-01")
    }

    fn titles(records: &[&ModelRecord]) -> Vec<String> {
        records.iter().map(|r| r.title.clone()).collect()
    }

    #[test]
    fn labels_resolve() {
        assert_eq!(SortOption::from_label("Most likes"), SortOption::ByLikes);
        assert_eq!(SortOption::from_label("citations"), SortOption::ByCitations);
        assert_eq!(
            SortOption::from_label("Newest publication"),
            SortOption::ByRecency
        );
        assert_eq!(SortOption::from_label(" TRENDING "), SortOption::Trending);
    }

    #[test]
    fn unknown_label_falls_back_to_recency() {
        assert_eq!(SortOption::from_label("most views"), SortOption::ByRecency);
        assert_eq!(SortOption::from_label(""), SortOption::ByRecency);
    }

    #[test]
    fn labels_round_trip_through_from_label() {
        for option in SortOption::ALL {
            assert_eq!(SortOption::from_label(option.label()), option);
        }
    }

    #[test]
    fn default_is_trending() {
        assert_eq!(SortOption::default(), SortOption::Trending);
    }

    #[test]
    fn by_citations_descending_and_stable() {
        let catalog = Catalog::builtin().unwrap();
        let all = filter(catalog.records(), ALL_TAGS, "");
        let sorted = sort(&all, SortOption::ByCitations, today());
        for pair in sorted.windows(2) {
            assert!(pair[0].citations >= pair[1].citations);
        }
        // Boltz-1 and RFdiffusion tie at 150; catalog order wins.
        let boltz = sorted.iter().position(|r| r.title.starts_with("Boltz")).unwrap();
        let rfd = sorted.iter().position(|r| r.title == "RFdiffusion").unwrap();
        assert!(boltz < rfd);
    }

    #[test]
    fn by_likes_descending() {
        let catalog = Catalog::builtin().unwrap();
        let all = filter(catalog.records(), ALL_TAGS, "");
        let sorted = sort(&all, SortOption::ByLikes, today());
        for pair in sorted.windows(2) {
            assert!(pair[0].like_value() >= pair[1].like_value());
        }
        assert_eq!(sorted[0].title, "Boltz-1 (AlphaFold3)");
    }

    #[test]
    fn by_recency_descending() {
        let catalog = Catalog::builtin().unwrap();
        let all = filter(catalog.records(), ALL_TAGS, "");
        let sorted = sort(&all, SortOption::ByRecency, today());
        for pair in sorted.windows(2) {
            assert!(pair[0].publication_date >= pair[1].publication_date);
        }
        assert_eq!(sorted[0].title, "GNINA");
        assert_eq!(sorted[14].title, "NetSolP-1.0");
    }

    #[test]
    fn sorting_is_idempotent() {
        let catalog = Catalog::builtin().unwrap();
        let all = filter(catalog.records(), ALL_TAGS, "");
        for option in SortOption::ALL {
            let once = sort(&all, option, today());
            let twice = sort(&once, option, today());
            assert_eq!(titles(&once), titles(&twice), "{}", option);
        }
    }

    #[test]
    fn trending_within_protein_design() {
        let catalog = Catalog::builtin().unwrap();
        let design = filter(catalog.records(), "Protein Design", "");
        let sorted = sort(&design, SortOption::Trending, today());
        assert_eq!(
            titles(&sorted),
            vec!["RFdiffusion", "OmegaFold", "ProteinMPNN", "DiffAb"]
        );
    }

    #[test]
    fn trending_scores_in_unit_interval() {
        let catalog = Catalog::builtin().unwrap();
        let all = filter(catalog.records(), ALL_TAGS, "");
        for score in trending_scores(&all, today()) {
            assert!((0.0..=1.0).contains(&score), "{}", score);
        }
    }

    #[test]
    fn identical_records_score_zero() {
        let d = date("2024-01-01");
        let a = ModelRecord::new("A", "", &["x"], 1, "2k", d);
        let b = ModelRecord::new("B", "", &["x"], 9, "2k", d);
        let scores = trending_scores(&[&a, &b], today());
        assert_eq!(scores, vec![0.0, 0.0]);

        let sorted = sort(&[&a, &b], SortOption::Trending, today());
        assert_eq!(titles(&sorted), vec!["A", "B"]);
    }

    #[test]
    fn trending_bounds_follow_the_filtered_set() {
        let a = ModelRecord::new("A", "", &["x"], 1, "1k", date("2024-01-01"));
        let b = ModelRecord::new("B", "", &["x"], 1, "3k", date("2024-01-01"));
        let c = ModelRecord::new("C", "", &["y"], 1, "9k", date("2024-01-01"));

        let narrow = trending_scores(&[&a, &b], today());
        assert_eq!(narrow, vec![0.0, 0.5]);

        let wide = trending_scores(&[&a, &b, &c], today());
        assert!(wide[1] < 0.5);
    }

    #[test]
    fn empty_input_sorts_to_empty() {
        assert!(sort(&[], SortOption::Trending, today()).is_empty());
        assert!(trending_scores(&[], today()).is_empty());
    }
}
