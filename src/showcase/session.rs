//! View-local state.
//!
//! A [`Session`] holds exactly one open view. Opening another view drops the previous state
//! entirely: filters, likes, cart and drafts never survive navigation.

use crate::draft::EditSession;
use crate::error::{Result, ShowcaseError};
use crate::filter::FilterState;
use crate::likes::LikedSet;
use crate::model::{Catalog, CatalogItem, Profile, ViewKind};
use crate::store::CatalogSource;

/// State of a browsable view.
#[derive(Debug, Clone)]
pub struct CatalogView {
    pub catalog: Catalog,
    pub filter: FilterState,
    pub likes: LikedSet,
    pub cart_items: u32,
}

impl CatalogView {
    pub fn new(catalog: Catalog) -> Self {
        let likes = LikedSet::seeded(&catalog.items);
        Self {
            catalog,
            filter: FilterState::default(),
            likes,
            cart_items: 0,
        }
    }

    /// Recomputes the visible items from the current filter.
    pub fn visible(&self, trim_query: bool) -> Vec<&CatalogItem> {
        self.filter.apply(&self.catalog.items, trim_query)
    }
}

#[derive(Debug, Clone)]
enum ViewState {
    Catalog(CatalogView),
    Account(EditSession<Profile>),
}

#[derive(Debug, Clone)]
pub struct Session {
    view: ViewKind,
    state: ViewState,
}

impl Session {
    /// Opens `view` with fresh default state.
    pub fn open<S: CatalogSource>(source: &S, view: ViewKind) -> Result<Self> {
        let state = if view.is_catalog() {
            ViewState::Catalog(CatalogView::new(source.catalog(view)?))
        } else {
            ViewState::Account(EditSession::new(source.profile()?))
        };
        Ok(Self { view, state })
    }

    pub fn view(&self) -> ViewKind {
        self.view
    }

    pub fn catalog_view(&self, action: &'static str) -> Result<&CatalogView> {
        match &self.state {
            ViewState::Catalog(cv) => Ok(cv),
            ViewState::Account(_) => Err(self.wrong_view(action)),
        }
    }

    pub fn catalog_view_mut(&mut self, action: &'static str) -> Result<&mut CatalogView> {
        let view = self.view;
        match &mut self.state {
            ViewState::Catalog(cv) => Ok(cv),
            ViewState::Account(_) => Err(ShowcaseError::WrongView { view, action }),
        }
    }

    pub fn account(&self, action: &'static str) -> Result<&EditSession<Profile>> {
        match &self.state {
            ViewState::Account(edit) => Ok(edit),
            ViewState::Catalog(_) => Err(self.wrong_view(action)),
        }
    }

    pub fn account_mut(&mut self, action: &'static str) -> Result<&mut EditSession<Profile>> {
        let view = self.view;
        match &mut self.state {
            ViewState::Account(edit) => Ok(edit),
            ViewState::Catalog(_) => Err(ShowcaseError::WrongView { view, action }),
        }
    }

    fn wrong_view(&self, action: &'static str) -> ShowcaseError {
        ShowcaseError::WrongView {
            view: self.view,
            action,
        }
    }
}
