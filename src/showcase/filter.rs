//! # Catalog Filter
//!
//! Derives the visible subset of a catalog from a category selector and a free-text query.
//!
//! An item is visible iff both predicates hold:
//!
//! - **Category**: the selector is [`CategorySelector::All`], or the item's category id equals
//!   the selected one.
//! - **Text**: the query is empty, or its lowercase form is a substring of the lowercase title,
//!   description, or any tag.
//!
//! Filtering never reorders and never scores. An empty result is an ordinary outcome. Nothing is
//! cached: callers recompute on every input change.

use crate::error::{Result, ShowcaseError};
use crate::model::{Catalog, CatalogItem, Category, ALL_CATEGORIES};
use std::fmt;

/// Which category a view is narrowed to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelector {
    #[default]
    All,
    Only(String),
}

impl CategorySelector {
    /// Resolves user input against a catalog's categories.
    ///
    /// Accepts `all`, a category id, or a category display name, all case-insensitive.
    pub fn parse(input: &str, catalog: &Catalog) -> Result<Self> {
        let wanted = input.trim().to_lowercase();
        if wanted == ALL_CATEGORIES {
            return Ok(CategorySelector::All);
        }
        catalog
            .categories
            .iter()
            .find(|c| c.id.to_lowercase() == wanted || c.name.to_lowercase() == wanted)
            .map(|c| CategorySelector::Only(c.id.clone()))
            .ok_or_else(|| ShowcaseError::UnknownCategory {
                view: catalog.view,
                category: input.to_string(),
            })
    }

    pub fn matches(&self, item: &CatalogItem) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Only(id) => &item.category == id,
        }
    }

    /// Display name of the selection, looked up in `categories`.
    pub fn label<'a>(&'a self, categories: &'a [Category]) -> &'a str {
        match self {
            CategorySelector::All => "All",
            CategorySelector::Only(id) => categories
                .iter()
                .find(|c| &c.id == id)
                .map(|c| c.name.as_str())
                .unwrap_or(id.as_str()),
        }
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelector::All => f.write_str(ALL_CATEGORIES),
            CategorySelector::Only(id) => f.write_str(id),
        }
    }
}

/// Case-insensitive substring test over title, description and tags.
pub fn text_matches(item: &CatalogItem, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    item.title.to_lowercase().contains(&needle)
        || item.description.to_lowercase().contains(&needle)
        || item
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

/// Returns the visible items, in catalog order.
pub fn filter_items<'a>(
    items: &'a [CatalogItem],
    selector: &CategorySelector,
    query: &str,
) -> Vec<&'a CatalogItem> {
    items
        .iter()
        .filter(|item| selector.matches(item) && text_matches(item, query))
        .collect()
}

/// Transient filter inputs owned by a catalog view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub selected: CategorySelector,
    pub query: String,
}

impl FilterState {
    /// The query actually applied. Trimming is optional: an untrimmed query is matched as typed.
    pub fn effective_query(&self, trim: bool) -> &str {
        if trim {
            self.query.trim()
        } else {
            &self.query
        }
    }

    pub fn apply<'a>(&self, items: &'a [CatalogItem], trim: bool) -> Vec<&'a CatalogItem> {
        filter_items(items, &self.selected, self.effective_query(trim))
    }

    /// The "clear filters" action.
    pub fn reset(&mut self) {
        self.selected = CategorySelector::All;
        self.query.clear();
    }

    pub fn is_default(&self) -> bool {
        self.selected == CategorySelector::All && self.query.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ViewKind;

    fn catalog() -> Catalog {
        Catalog {
            view: ViewKind::Discover,
            categories: vec![
                Category::new("trending", "Trending"),
                Category::new("popular", "Popular"),
                Category::new("recent", "Recent"),
            ],
            items: vec![
                CatalogItem::new(
                    1,
                    "Advanced React Patterns",
                    "Deep dive into advanced React patterns.",
                    "trending",
                    &["React"],
                ),
                CatalogItem::new(
                    2,
                    "UI/UX Design Principles",
                    "Master the fundamentals of interface design.",
                    "popular",
                    &["Design"],
                ),
                CatalogItem::new(3, "Modern CSS", "Grid and Flexbox.", "recent", &["Web Design"]),
                CatalogItem::new(4, "Node.js", "Backend applications.", "trending", &["API"]),
            ],
        }
    }

    fn ids(items: &[&CatalogItem]) -> Vec<u32> {
        items.iter().map(|i| i.id.0).collect()
    }

    #[test]
    fn category_alone_keeps_matching_items_in_order() {
        let c = catalog();
        let selector = CategorySelector::Only("trending".into());
        assert_eq!(ids(&filter_items(&c.items, &selector, "")), vec![1, 4]);
    }

    #[test]
    fn query_matches_title_description_or_tags_ignoring_case() {
        let c = catalog();
        let result = filter_items(&c.items, &CategorySelector::All, "DESIGN");
        assert_eq!(ids(&result), vec![2, 3]);

        let by_description = filter_items(&c.items, &CategorySelector::All, "flexbox");
        assert_eq!(ids(&by_description), vec![3]);
    }

    #[test]
    fn both_predicates_must_hold() {
        let c = catalog();
        let selector = CategorySelector::Only("popular".into());
        assert!(filter_items(&c.items, &selector, "react").is_empty());
        assert_eq!(ids(&filter_items(&c.items, &selector, "design")), vec![2]);
    }

    #[test]
    fn no_match_yields_empty_result() {
        let c = catalog();
        assert!(filter_items(&c.items, &CategorySelector::All, "zzz-no-match").is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let c = catalog();
        let first = ids(&filter_items(&c.items, &CategorySelector::All, "e"));
        let second = ids(&filter_items(&c.items, &CategorySelector::All, "e"));
        assert_eq!(first, second);
    }

    #[test]
    fn results_are_a_subsequence_of_the_catalog() {
        let c = catalog();
        for query in ["", "a", "de", "node", "patterns"] {
            for selector in [
                CategorySelector::All,
                CategorySelector::Only("trending".into()),
                CategorySelector::Only("recent".into()),
            ] {
                let result = ids(&filter_items(&c.items, &selector, query));
                let mut sorted = result.clone();
                sorted.sort();
                assert_eq!(result, sorted, "order changed for {query:?} / {selector}");
            }
        }
    }

    #[test]
    fn untrimmed_query_is_matched_literally() {
        let c = catalog();
        let state = FilterState {
            selected: CategorySelector::All,
            query: "  react ".into(),
        };
        assert!(state.apply(&c.items, false).is_empty());
        assert_eq!(ids(&state.apply(&c.items, true)), vec![1]);
    }

    #[test]
    fn whitespace_query_trims_to_everything() {
        let c = catalog();
        let state = FilterState {
            selected: CategorySelector::All,
            query: "   ".into(),
        };
        assert_eq!(state.apply(&c.items, true).len(), 4);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = FilterState {
            selected: CategorySelector::Only("recent".into()),
            query: "zzz".into(),
        };
        assert!(!state.is_default());
        state.reset();
        assert!(state.is_default());
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn selector_parses_ids_names_and_all() {
        let c = catalog();
        assert_eq!(
            CategorySelector::parse("ALL", &c).unwrap(),
            CategorySelector::All
        );
        assert_eq!(
            CategorySelector::parse("Trending", &c).unwrap(),
            CategorySelector::Only("trending".into())
        );
        assert!(matches!(
            CategorySelector::parse("viral", &c),
            Err(ShowcaseError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn selector_parses_multiword_display_names() {
        let c = Catalog {
            view: ViewKind::Library,
            categories: vec![Category::new("Data Display", "Data Display")],
            items: vec![],
        };
        assert_eq!(
            CategorySelector::parse("data display", &c).unwrap(),
            CategorySelector::Only("Data Display".into())
        );
    }

    #[test]
    fn label_uses_display_name() {
        let c = catalog();
        let selector = CategorySelector::Only("popular".into());
        assert_eq!(selector.label(&c.categories), "Popular");
        assert_eq!(CategorySelector::All.label(&c.categories), "All");
    }
}
