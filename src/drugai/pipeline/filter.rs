use crate::catalog::ALL_TAGS;
use crate::model::ModelRecord;

/// Narrows `records` to those carrying `active_tag` and containing
/// `search_term` in their title or description. Relative order is kept.
pub fn filter<'a>(
    records: &'a [ModelRecord],
    active_tag: &str,
    search_term: &str,
) -> Vec<&'a ModelRecord> {
    let term = search_term.to_lowercase();
    records
        .iter()
        .filter(|r| matches_tag(r, active_tag) && matches_search(r, &term))
        .collect()
}

pub fn matches_tag(record: &ModelRecord, active_tag: &str) -> bool {
    active_tag == ALL_TAGS || record.has_tag(active_tag)
}

// `term` must already be lower-cased.
fn matches_search(record: &ModelRecord, term: &str) -> bool {
    term.is_empty()
        || record.title.to_lowercase().contains(term)
        || record.description.to_lowercase().contains(term)
}
