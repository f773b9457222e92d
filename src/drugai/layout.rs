//! Viewport-dependent page sizing.
//!
//! Narrow viewports show fewer records per page. Whenever the width crosses
//! the threshold the page size changes, and with it the view resets to page 1
//! (see [`ViewState::with_page_size`](crate::pipeline::ViewState::with_page_size)).

pub const DEFAULT_NARROW_BELOW: u16 = 100;
pub const DEFAULT_NARROW_PAGE_SIZE: usize = 3;
pub const DEFAULT_WIDE_PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Narrow,
    Wide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizes {
    pub narrow: usize,
    pub wide: usize,
}

impl Default for PageSizes {
    fn default() -> Self {
        Self {
            narrow: DEFAULT_NARROW_PAGE_SIZE,
            wide: DEFAULT_WIDE_PAGE_SIZE,
        }
    }
}

impl Layout {
    /// `None` means the width is unknown (e.g. output is not a terminal).
    pub fn for_width(width: Option<u16>, narrow_below: u16) -> Self {
        match width {
            Some(w) if w < narrow_below => Layout::Narrow,
            _ => Layout::Wide,
        }
    }

    pub fn page_size(&self, sizes: &PageSizes) -> usize {
        match self {
            Layout::Narrow => sizes.narrow,
            Layout::Wide => sizes.wide,
        }
    }
}
