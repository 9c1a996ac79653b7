use crate::config::ShowcaseConfig;
use crate::model::{CatalogItem, Profile, ViewKind};
use std::path::PathBuf;

pub mod account;
pub mod browse;
pub mod cart;
pub mod categories;
pub mod config;
pub mod filters;
pub mod likes;

#[derive(Debug, Clone)]
pub struct ShowcasePaths {
    pub config_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A catalog item as rendered in a listing.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub item: CatalogItem,
    pub liked: bool,
}

/// What the current filter narrowed the catalog to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSummary {
    pub view: ViewKind,
    pub category: String,
    pub query: String,
    pub shown: usize,
    pub total: usize,
    pub liked: usize,
}

/// One entry of a view's category bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub id: String,
    pub name: String,
    pub items: usize,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct ProfileView {
    pub profile: Profile,
    pub draft: Option<Profile>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_items: Vec<DisplayItem>,
    pub summary: Option<FilterSummary>,
    pub categories: Vec<CategoryEntry>,
    pub profile: Option<ProfileView>,
    pub cart_items: Option<u32>,
    pub config: Option<ShowcaseConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_summary(mut self, summary: FilterSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_categories(mut self, categories: Vec<CategoryEntry>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_profile(mut self, profile: ProfileView) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_config(mut self, config: ShowcaseConfig) -> Self {
        self.config = Some(config);
        self
    }
}
