use crate::commands::{CmdMessage, CmdResult, DisplayItem, FilterSummary};
use crate::error::Result;
use crate::model::ViewKind;
use crate::session::Session;
use tracing::debug;

/// Lists the visible items of the current view, recomputed from the current filter.
pub fn run(session: &Session, trim_query: bool) -> Result<CmdResult> {
    let cv = session.catalog_view("browsing")?;
    let visible = cv.visible(trim_query);
    debug!(
        view = %session.view(),
        category = %cv.filter.selected,
        query = %cv.filter.query,
        shown = visible.len(),
        "recomputed visible items"
    );

    let listed: Vec<DisplayItem> = visible
        .into_iter()
        .map(|item| DisplayItem {
            liked: cv.likes.contains(item.id),
            item: item.clone(),
        })
        .collect();

    let summary = FilterSummary {
        view: session.view(),
        category: cv.filter.selected.label(&cv.catalog.categories).to_string(),
        query: cv.filter.query.clone(),
        shown: listed.len(),
        total: cv.catalog.items.len(),
        liked: cv.likes.len(),
    };

    let mut result = CmdResult::default()
        .with_listed_items(listed)
        .with_summary(summary);
    if session.view() == ViewKind::Home {
        result.cart_items = Some(cv.cart_items);
    }
    if result.listed_items.is_empty() {
        result.add_message(CmdMessage::info(
            "No results found. Try adjusting your search or filter criteria, or clear the filters.",
        ));
    }
    Ok(result)
}
