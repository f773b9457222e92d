//! # Catalog Pipeline
//!
//! This module holds the **core logic** of drugai: turning the immutable
//! catalog plus a handful of user choices into one page of records.
//!
//! ```text
//! Catalog ──▶ filter ──▶ sort ──▶ paginate ──▶ PageResult
//!               ▲          ▲          ▲
//!               └──────────┴──────────┴──── ViewState (tag, search, sort, page size, page)
//! ```
//!
//! ## Role and Responsibilities
//!
//! - [`filter`]: keep records matching the active tag and search term
//! - [`sort`]: order them by likes, citations, recency, or trending score
//! - [`paginate`]: slice the result into fixed-size pages
//! - [`view`]: the immutable [`ViewState`] and [`compute_visible_page`]
//!
//! ## What the Pipeline Does NOT Do
//!
//! - **Hold state**: the presentation layer owns the current `ViewState` and
//!   rebuilds it on every interaction
//! - **Mutate the catalog**: every stage borrows; derived values such as
//!   trending scores live in their own vectors
//! - **Read the clock**: callers pass `today` so results are reproducible
//!
//! ## Testing Strategy
//!
//! Every stage is a pure function, so tests build a catalog (usually the
//! built-in one) and assert on the output directly. No stores, no mocks.

pub mod filter;
pub mod paginate;
pub mod sort;
pub mod view;

pub use filter::filter;
pub use paginate::{paginate, Page};
pub use sort::{sort, trending_scores, SortOption};
pub use view::{compute_visible_page, PageResult, ViewState};
