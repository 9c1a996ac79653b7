//! # Catalog Sources
//!
//! Catalogs are read-only for the lifetime of a session. The [`CatalogSource`] trait abstracts
//! where they come from so the rest of the crate never cares.
//!
//! ## Implementations
//!
//! - [`builtin::BuiltinSource`]: the fixed demo catalogs compiled into the binary.
//! - [`dir::DirSource`]: JSON files in a directory, one per view, with built-in fallback.
//!
//! ## File Format
//!
//! ```text
//! catalogs/
//! ├── discover.json    # a serialized `Catalog`
//! ├── library.json
//! └── account.json     # a serialized `Profile`
//! ```
//!
//! Any view without a file keeps its built-in catalog.

use crate::error::{Result, ShowcaseError};
use crate::model::{Catalog, Profile, ViewKind};

pub mod builtin;
pub mod dir;

/// Read-only access to the catalogs and the account record.
pub trait CatalogSource {
    /// The catalog of a browsable view.
    fn catalog(&self, view: ViewKind) -> Result<Catalog>;

    /// The account record edited by the account view.
    fn profile(&self) -> Result<Profile>;
}

impl<S: CatalogSource + ?Sized> CatalogSource for Box<S> {
    fn catalog(&self, view: ViewKind) -> Result<Catalog> {
        (**self).catalog(view)
    }

    fn profile(&self) -> Result<Profile> {
        (**self).profile()
    }
}

pub(crate) fn ensure_catalog_view(view: ViewKind) -> Result<()> {
    if view.is_catalog() {
        Ok(())
    } else {
        Err(not_browsable(view))
    }
}

pub(crate) fn not_browsable(view: ViewKind) -> ShowcaseError {
    ShowcaseError::WrongView {
        view,
        action: "browsing",
    }
}
