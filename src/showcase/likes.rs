use crate::model::{CatalogItem, ItemId};
use std::collections::BTreeSet;

/// Ids the user has liked in the current view. Has no effect on filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikedSet {
    ids: BTreeSet<ItemId>,
}

impl LikedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the items that ship already liked.
    pub fn seeded(items: &[CatalogItem]) -> Self {
        Self {
            ids: items.iter().filter(|i| i.liked).map(|i| i.id).collect(),
        }
    }

    /// Flips membership of `id` and returns whether it is now liked.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.ids.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut likes = LikedSet::new();
        assert!(likes.toggle(ItemId(3)));
        assert!(likes.contains(ItemId(3)));
        assert!(!likes.toggle(ItemId(3)));
        assert!(!likes.contains(ItemId(3)));
    }

    #[test]
    fn toggle_twice_restores_original_set() {
        let mut likes = LikedSet::new();
        likes.toggle(ItemId(1));
        let before = likes.clone();

        for id in [ItemId(1), ItemId(2)] {
            likes.toggle(id);
            likes.toggle(id);
            assert_eq!(likes, before);
        }
    }

    #[test]
    fn toggles_are_independent_per_id() {
        let mut likes = LikedSet::new();
        likes.toggle(ItemId(1));
        likes.toggle(ItemId(2));
        likes.toggle(ItemId(1));
        assert_eq!(likes.iter().collect::<Vec<_>>(), vec![ItemId(2)]);
        assert_eq!(likes.len(), 1);
    }

    #[test]
    fn seeded_takes_pre_liked_items() {
        let items = vec![
            CatalogItem::new(1, "A", "", "x", &[]).pre_liked(),
            CatalogItem::new(2, "B", "", "x", &[]),
            CatalogItem::new(3, "C", "", "x", &[]).pre_liked(),
        ];
        let likes = LikedSet::seeded(&items);
        assert_eq!(likes.iter().collect::<Vec<_>>(), vec![ItemId(1), ItemId(3)]);
    }
}
