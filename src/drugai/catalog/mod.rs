//! # Catalog Store
//!
//! The catalog is the ordered, immutable list of [`ModelRecord`]s every view is
//! computed from. It is loaded exactly once per process and never mutated:
//! filters, sorts and pages borrow from it.
//!
//! ## Sources
//!
//! - [`Catalog::builtin`]: the records shipped with the crate (`models.json`,
//!   embedded at compile time).
//! - [`Catalog::load`]: a JSON file with the same shape, selected through the
//!   `catalog_path` configuration key.
//!
//! ## Invariants
//!
//! Loading validates the record set up front so that the pipeline never has to
//! handle bad data at runtime:
//! - titles are unique (the presentation layer keys rows by title)
//! - every record has at least one tag
//! - every like count parses to a finite, non-negative number
//!
//! Dates are validated by deserialization itself.
//!
//! Cloning a `Catalog` is cheap; all clones share the same records.

use crate::error::{DrugaiError, Result};
use crate::model::ModelRecord;
use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Sentinel tag that matches every record.
pub const ALL_TAGS: &str = "All";

const BUILTIN_JSON: &str = include_str!("models.json");

static BUILTIN: OnceCell<Catalog> = OnceCell::new();

#[derive(Debug, Clone)]
pub struct Catalog {
    records: Arc<[ModelRecord]>,
}

impl Catalog {
    /// Builds a catalog after checking the record invariants.
    pub fn from_records(records: Vec<ModelRecord>) -> Result<Self> {
        validate(&records)?;
        Ok(Self {
            records: records.into(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<ModelRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Read and validate a catalog file. Errors name the file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DrugaiError::Catalog(format!("cannot read {}: {}", path.display(), e))
        })?;
        let catalog = Self::from_json(&content)
            .map_err(|e| DrugaiError::Catalog(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), records = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// The catalog shipped with the crate, parsed on first use.
    pub fn builtin() -> Result<Self> {
        BUILTIN
            .get_or_try_init(|| Self::from_json(BUILTIN_JSON))
            .cloned()
    }

    pub fn records(&self) -> &[ModelRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `["All", ...]` followed by every distinct tag in order of first
    /// appearance.
    pub fn tag_universe(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut tags = vec![ALL_TAGS.to_string()];
        for tag in self.records.iter().flat_map(|r| r.tags.iter()) {
            if seen.insert(tag.as_str()) {
                tags.push(tag.clone());
            }
        }
        tags
    }
}

fn validate(records: &[ModelRecord]) -> Result<()> {
    let mut titles = HashSet::new();
    for record in records {
        if !titles.insert(record.title.as_str()) {
            return Err(DrugaiError::Catalog(format!(
                "duplicate title \"{}\"",
                record.title
            )));
        }
        if record.tags.is_empty() {
            return Err(DrugaiError::Catalog(format!(
                "\"{}\" has no tags",
                record.title
            )));
        }
        let likes = record.like_value();
        if !likes.is_finite() || likes < 0.0 {
            return Err(DrugaiError::Catalog(format!(
                "\"{}\" has an unreadable like count \"{}\"",
                record.title, record.likes
            )));
        }
    }
    Ok(())
}
