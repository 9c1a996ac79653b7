use super::builtin::BuiltinSource;
use super::{ensure_catalog_view, CatalogSource};
use crate::error::{Result, ShowcaseError};
use crate::model::{Catalog, Profile, ViewKind};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

const PROFILE_FILENAME: &str = "account.json";

/// Catalogs read from `<dir>/<view>.json`, falling back to the built-in ones.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
    fallback: BuiltinSource,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            fallback: BuiltinSource::new(),
        }
    }

    fn catalog_path(&self, view: ViewKind) -> PathBuf {
        self.root.join(format!("{}.json", view))
    }
}

impl CatalogSource for DirSource {
    fn catalog(&self, view: ViewKind) -> Result<Catalog> {
        ensure_catalog_view(view)?;
        let path = self.catalog_path(view);
        if !path.exists() {
            debug!(%view, path = %path.display(), "no catalog file, using built-in");
            return self.fallback.catalog(view);
        }

        let content = fs::read_to_string(&path)?;
        let catalog: Catalog = serde_json::from_str(&content)?;
        if catalog.view != view {
            return Err(ShowcaseError::InvalidCatalog {
                view,
                reason: format!("{} declares view {}", path.display(), catalog.view),
            });
        }
        catalog.validate()?;
        debug!(%view, items = catalog.items.len(), "loaded catalog file");
        Ok(catalog)
    }

    fn profile(&self) -> Result<Profile> {
        let path = self.root.join(PROFILE_FILENAME);
        if !path.exists() {
            return self.fallback.profile();
        }
        let content = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
