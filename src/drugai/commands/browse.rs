use crate::catalog::{Catalog, ALL_TAGS};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::pipeline::{compute_visible_page, ViewState};
use chrono::NaiveDate;

/// Renders page `page` of `view`. The view is expected to be fresh (page 1);
/// the page count is only known after filtering, so the jump happens here.
pub fn run(
    catalog: &Catalog,
    view: ViewState,
    page: usize,
    today: NaiveDate,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let tag = view.active_tag();
    if tag != ALL_TAGS && !catalog.tag_universe().iter().any(|t| t == tag) {
        result.add_message(CmdMessage::warning(format!(
            "No model is tagged \"{tag}\" (see `drugai tags`)"
        )));
    }

    let mut visible = compute_visible_page(catalog, &view, today);
    if page != view.current_page() {
        let view = view.go_to_page(page, visible.total_pages)?;
        visible = compute_visible_page(catalog, &view, today);
    }

    if visible.total_matches == 0 {
        result.add_message(CmdMessage::info("No models match the current filters."));
    }

    Ok(result.with_page(visible))
}
