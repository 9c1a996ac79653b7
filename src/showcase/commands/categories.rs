use crate::commands::{CategoryEntry, CmdResult};
use crate::error::Result;
use crate::filter::CategorySelector;
use crate::model::ALL_CATEGORIES;
use crate::session::Session;

/// The category bar of the current view: `All` first, then the view's categories.
pub fn run(session: &Session) -> Result<CmdResult> {
    let cv = session.catalog_view("listing categories")?;
    let selected = &cv.filter.selected;

    let mut entries = vec![CategoryEntry {
        id: ALL_CATEGORIES.to_string(),
        name: "All".to_string(),
        items: cv.catalog.items.len(),
        selected: *selected == CategorySelector::All,
    }];
    entries.extend(cv.catalog.categories.iter().map(|c| CategoryEntry {
        id: c.id.clone(),
        name: c.name.clone(),
        items: cv
            .catalog
            .items
            .iter()
            .filter(|item| item.category == c.id)
            .count(),
        selected: matches!(selected, CategorySelector::Only(id) if *id == c.id),
    }));

    Ok(CmdResult::default().with_categories(entries))
}
