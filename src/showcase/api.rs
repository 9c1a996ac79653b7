//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. Every UI client (the CLI
//! commands, the interactive shell) goes through [`ShowcaseApi`].
//!
//! The API facade:
//! - **Owns** the catalog source and the single open [`Session`]
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (raw ids and category names into typed values)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints, and holds no business logic of its own. Configuration is edited through
//! [`commands::config`] directly since it does not depend on an open view.
//!
//! `ShowcaseApi<S: CatalogSource>` is generic over where catalogs come from:
//! `BuiltinSource` in tests, `DirSource` when a catalog directory is configured.

use crate::commands;
use crate::error::Result;
use crate::model::{ItemId, ProfileField, ViewKind};
use crate::session::Session;
use crate::store::CatalogSource;
use tracing::debug;

pub struct ShowcaseApi<S: CatalogSource> {
    source: S,
    session: Session,
    trim_query: bool,
}

impl<S: CatalogSource> ShowcaseApi<S> {
    /// Builds the API with `view` open.
    pub fn new(source: S, view: ViewKind, trim_query: bool) -> Result<Self> {
        let session = Session::open(&source, view)?;
        Ok(Self {
            source,
            session,
            trim_query,
        })
    }

    pub fn current_view(&self) -> ViewKind {
        self.session.view()
    }

    /// Navigates to `view`. The previous view's state is dropped.
    pub fn open_view(&mut self, view: ViewKind) -> Result<commands::CmdResult> {
        let session = Session::open(&self.source, view)?;
        debug!(from = %self.session.view(), to = %view, "navigated");
        self.session = session;
        if view.is_catalog() {
            commands::browse::run(&self.session, self.trim_query)
        } else {
            commands::account::show(&self.session)
        }
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::browse::run(&self.session, self.trim_query)
    }

    pub fn categories(&self) -> Result<commands::CmdResult> {
        commands::categories::run(&self.session)
    }

    pub fn select_category(&mut self, category: &str) -> Result<commands::CmdResult> {
        commands::filters::select_category(&mut self.session, category, self.trim_query)
    }

    pub fn search(&mut self, query: &str) -> Result<commands::CmdResult> {
        commands::filters::search(&mut self.session, query, self.trim_query)
    }

    pub fn clear_filters(&mut self) -> Result<commands::CmdResult> {
        commands::filters::clear(&mut self.session, self.trim_query)
    }

    pub fn toggle_like(&mut self, id: ItemId) -> Result<commands::CmdResult> {
        commands::likes::toggle(&mut self.session, id)
    }

    pub fn liked(&self) -> Result<commands::CmdResult> {
        commands::likes::list(&self.session)
    }

    pub fn add_to_cart(&mut self, id: ItemId) -> Result<commands::CmdResult> {
        commands::cart::add(&mut self.session, id)
    }

    pub fn show_profile(&self) -> Result<commands::CmdResult> {
        commands::account::show(&self.session)
    }

    pub fn begin_edit(&mut self) -> Result<commands::CmdResult> {
        commands::account::begin(&mut self.session)
    }

    pub fn set_field(&mut self, field: ProfileField, value: &str) -> Result<commands::CmdResult> {
        commands::account::set_field(&mut self.session, field, value)
    }

    pub fn save_profile(&mut self) -> Result<commands::CmdResult> {
        commands::account::save(&mut self.session)
    }

    pub fn cancel_edit(&mut self) -> Result<commands::CmdResult> {
        commands::account::cancel(&mut self.session)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{
    CategoryEntry, CmdMessage, CmdResult, DisplayItem, FilterSummary, MessageLevel, ProfileView,
    ShowcasePaths,
};
