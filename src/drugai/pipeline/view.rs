use super::filter::filter;
use super::paginate::paginate;
use super::sort::{sort, SortOption};
use crate::catalog::{Catalog, ALL_TAGS};
use crate::error::{DrugaiError, Result};
use crate::model::ModelRecord;
use chrono::NaiveDate;
use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Everything the pipeline needs to produce one visible page.
///
/// A `ViewState` is a plain value: every change produces a new one. Changing
/// the tag, search term, sort option or page size starts over at page 1;
/// setting a field to the value it already has leaves the page alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    active_tag: String,
    search_term: String,
    sort: SortOption,
    page_size: usize,
    current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            active_tag: ALL_TAGS.to_string(),
            search_term: String::new(),
            sort: SortOption::default(),
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn active_tag(&self) -> &str {
        &self.active_tag
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if tag != self.active_tag {
            self.active_tag = tag;
            self.current_page = 1;
        }
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        if term != self.search_term {
            self.search_term = term;
            self.current_page = 1;
        }
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        if sort != self.sort {
            self.sort = sort;
            self.current_page = 1;
        }
        self
    }

    /// Zero is treated as one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        if page_size != self.page_size {
            self.page_size = page_size;
            self.current_page = 1;
        }
        self
    }

    pub fn previous_page(mut self) -> Self {
        self.current_page = self.current_page.saturating_sub(1).max(1);
        self
    }

    pub fn next_page(mut self, total_pages: usize) -> Self {
        self.current_page = (self.current_page + 1).min(total_pages).max(1);
        self
    }

    pub fn go_to_page(mut self, page: usize, total_pages: usize) -> Result<Self> {
        if page == 0 || page > total_pages {
            return Err(DrugaiError::PageOutOfRange { page, total_pages });
        }
        self.current_page = page;
        Ok(self)
    }
}

/// One rendered page plus the bookkeeping the presentation layer needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResult {
    pub items: Vec<ModelRecord>,
    pub current_page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub sort: SortOption,
    /// Tag universe of the whole catalog, for the tag selector.
    pub tags: Vec<String>,
}

impl PageResult {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// 1-based position of the first item on this page within all matches.
    pub fn first_position(&self) -> usize {
        self.current_page.saturating_sub(1) * self.page_size + 1
    }
}

/// Runs filter → sort → paginate over `catalog` for `view`.
pub fn compute_visible_page(catalog: &Catalog, view: &ViewState, today: NaiveDate) -> PageResult {
    let filtered = filter(catalog.records(), view.active_tag(), view.search_term());
    let sorted = sort(&filtered, view.sort(), today);
    let page = paginate(&sorted, view.page_size(), view.current_page());

    tracing::debug!(
        tag = view.active_tag(),
        search = view.search_term(),
        sort = %view.sort(),
        matches = sorted.len(),
        page = view.current_page(),
        total_pages = page.total_pages,
        "computed visible page"
    );

    PageResult {
        items: page.items.into_iter().cloned().collect(),
        current_page: view.current_page(),
        page_size: view.page_size(),
        total_pages: page.total_pages,
        total_matches: sorted.len(),
        sort: view.sort(),
        tags: catalog.tag_universe(),
    }
}
