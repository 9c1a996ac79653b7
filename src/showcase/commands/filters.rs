use crate::commands::{browse, CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::CategorySelector;
use crate::session::Session;
use tracing::debug;

pub fn select_category(session: &mut Session, input: &str, trim_query: bool) -> Result<CmdResult> {
    let cv = session.catalog_view_mut("filtering")?;
    let selector = CategorySelector::parse(input, &cv.catalog)?;
    debug!(category = %selector, "category selected");
    cv.filter.selected = selector;
    browse::run(session, trim_query)
}

pub fn search(session: &mut Session, query: &str, trim_query: bool) -> Result<CmdResult> {
    let cv = session.catalog_view_mut("searching")?;
    debug!(query, "query changed");
    cv.filter.query = query.to_string();
    browse::run(session, trim_query)
}

/// Restores the default filter: all categories, empty query.
pub fn clear(session: &mut Session, trim_query: bool) -> Result<CmdResult> {
    let cv = session.catalog_view_mut("clearing filters")?;
    let was_default = cv.filter.is_default();
    cv.filter.reset();

    let message = if was_default {
        CmdMessage::info("Filters already clear")
    } else {
        CmdMessage::success("Filters cleared")
    };
    Ok(browse::run(session, trim_query)?.with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShowcaseError;
    use crate::model::ViewKind;
    use crate::store::builtin::BuiltinSource;

    fn open(view: ViewKind) -> Session {
        Session::open(&BuiltinSource::new(), view).unwrap()
    }

    fn ids(result: &CmdResult) -> Vec<u32> {
        result.listed_items.iter().map(|d| d.item.id.0).collect()
    }

    #[test]
    fn category_narrows_listing() {
        let mut session = open(ViewKind::Discover);
        let result = select_category(&mut session, "trending", true).unwrap();
        assert_eq!(ids(&result), vec![1, 4]);
    }

    #[test]
    fn search_combines_with_category() {
        let mut session = open(ViewKind::Discover);
        select_category(&mut session, "recent", true).unwrap();
        let result = search(&mut session, "design", true).unwrap();
        assert_eq!(ids(&result), vec![3]);

        select_category(&mut session, "all", true).unwrap();
        let result = search(&mut session, "design", true).unwrap();
        assert_eq!(ids(&result), vec![2, 3]);
    }

    #[test]
    fn clear_restores_full_catalog() {
        let mut session = open(ViewKind::Discover);
        let empty = search(&mut session, "zzz-no-match", true).unwrap();
        assert!(empty.listed_items.is_empty());

        let result = clear(&mut session, true).unwrap();
        assert_eq!(result.listed_items.len(), 6);
        assert!(result
            .messages
            .iter()
            .any(|m| m.content == "Filters cleared"));
    }

    #[test]
    fn clear_on_default_filter_is_informational() {
        let mut session = open(ViewKind::Library);
        let result = clear(&mut session, true).unwrap();
        assert!(result
            .messages
            .iter()
            .any(|m| m.content == "Filters already clear"));
    }

    #[test]
    fn library_categories_accept_display_names() {
        let mut session = open(ViewKind::Library);
        let result = select_category(&mut session, "data display", true).unwrap();
        assert_eq!(ids(&result), vec![5]);
    }

    #[test]
    fn library_search_includes_tags() {
        let mut session = open(ViewKind::Library);
        let result = search(&mut session, "typescript", true).unwrap();
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn unknown_category_leaves_filter_untouched() {
        let mut session = open(ViewKind::Discover);
        select_category(&mut session, "popular", true).unwrap();
        assert!(matches!(
            select_category(&mut session, "viral", true),
            Err(ShowcaseError::UnknownCategory { .. })
        ));
        let result = browse::run(&session, true).unwrap();
        assert_eq!(ids(&result), vec![2, 5]);
    }

    #[test]
    fn account_view_cannot_filter() {
        let mut session = open(ViewKind::Account);
        assert!(matches!(
            search(&mut session, "x", true),
            Err(ShowcaseError::WrongView { .. })
        ));
    }
}
