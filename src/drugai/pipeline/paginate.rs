/// One slice of a sorted result.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Returns the `current_page`-th (1-indexed) slice of `records`.
///
/// Does not clamp: a page past the end (or page 0) is simply empty. Keeping
/// `current_page` in range is the caller's job.
pub fn paginate<T: Clone>(records: &[T], page_size: usize, current_page: usize) -> Page<T> {
    let total_pages = total_pages(records.len(), page_size);
    if current_page == 0 || page_size == 0 {
        return Page {
            items: Vec::new(),
            total_pages,
        };
    }

    let start = (current_page - 1).saturating_mul(page_size);
    let items = records
        .iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    Page { items, total_pages }
}
