use crate::error::{Result, ShowcaseError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// Identifier of a catalog item, unique within its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim_start_matches('#')
            .parse()
            .map(ItemId)
            .map_err(|_| format!("Invalid item id: {}", s))
    }
}

/// The pages of the demo site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Home,
    Library,
    Discover,
    Playlists,
    Account,
}

impl ViewKind {
    pub fn all() -> &'static [ViewKind] {
        &[
            ViewKind::Home,
            ViewKind::Library,
            ViewKind::Discover,
            ViewKind::Playlists,
            ViewKind::Account,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Home => "home",
            ViewKind::Library => "library",
            ViewKind::Discover => "discover",
            ViewKind::Playlists => "playlists",
            ViewKind::Account => "account",
        }
    }

    /// Catalog views list items; the account view edits a profile instead.
    pub fn is_catalog(&self) -> bool {
        !matches!(self, ViewKind::Account)
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewKind {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        ViewKind::all()
            .iter()
            .copied()
            .find(|v| v.as_str() == lower)
            .ok_or_else(|| ShowcaseError::UnknownView(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Initial like state, used by views that ship pre-liked entries.
    #[serde(default)]
    pub liked: bool,
    /// Display-only payload (rating, duration, price...). Never filtered on.
    #[serde(default)]
    pub details: BTreeMap<String, String>,
}

impl CatalogItem {
    pub fn new(id: u32, title: &str, description: &str, category: &str, tags: &[&str]) -> Self {
        Self {
            id: ItemId(id),
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            liked: false,
            details: BTreeMap::new(),
        }
    }

    pub fn with_detail(mut self, key: &str, value: &str) -> Self {
        self.details.insert(key.to_string(), value.to_string());
        self
    }

    pub fn pre_liked(mut self) -> Self {
        self.liked = true;
        self
    }
}

/// Selector keyword for every category.
pub const ALL_CATEGORIES: &str = "all";

/// The fixed list of browsable items of one view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub view: ViewKind,
    #[serde(default)]
    pub categories: Vec<Category>,
    pub items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Checks that ids are unique and every item uses a declared category.
    ///
    /// Category ids must also be unique ignoring case, and no category may be called `all`,
    /// since selection matches case-insensitively and `all` always means every category.
    pub fn validate(&self) -> Result<()> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if category.id.eq_ignore_ascii_case(ALL_CATEGORIES)
                || category.name.eq_ignore_ascii_case(ALL_CATEGORIES)
            {
                return Err(ShowcaseError::InvalidCatalog {
                    view: self.view,
                    reason: format!("category \"{}\" uses the reserved name all", category.id),
                });
            }
            if !category_ids.insert(category.id.to_lowercase()) {
                return Err(ShowcaseError::InvalidCatalog {
                    view: self.view,
                    reason: format!("duplicate category id \"{}\"", category.id),
                });
            }
        }

        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.id) {
                return Err(ShowcaseError::InvalidCatalog {
                    view: self.view,
                    reason: format!("duplicate item id {}", item.id),
                });
            }
            if !self.categories.iter().any(|c| c.id == item.category) {
                return Err(ShowcaseError::InvalidCatalog {
                    view: self.view,
                    reason: format!(
                        "item {} uses undeclared category \"{}\"",
                        item.id, item.category
                    ),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Update,
    Security,
    Login,
    Billing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub action: String,
    pub when: String,
    pub kind: ActivityKind,
}

/// The editable account record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub plan: String,
    pub join_date: NaiveDate,
    pub last_login: NaiveDate,
    #[serde(default)]
    pub recent_activity: Vec<Activity>,
}

impl Profile {
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
        }
    }

    pub fn set_field(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::Email => self.email = value,
        }
    }
}

/// Profile fields that can be edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Email,
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileField::Name => f.write_str("name"),
            ProfileField::Email => f.write_str("email"),
        }
    }
}

impl FromStr for ProfileField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(ProfileField::Name),
            "email" => Ok(ProfileField::Email),
            other => Err(format!("Unknown profile field: {} (expected name or email)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(items: Vec<CatalogItem>) -> Catalog {
        Catalog {
            view: ViewKind::Discover,
            categories: vec![Category::new("trending", "Trending")],
            items,
        }
    }

    #[test]
    fn parses_views_case_insensitively() {
        assert_eq!("Discover".parse::<ViewKind>().unwrap(), ViewKind::Discover);
        assert_eq!(" playlists ".parse::<ViewKind>().unwrap(), ViewKind::Playlists);
        assert!(matches!(
            "settings".parse::<ViewKind>(),
            Err(ShowcaseError::UnknownView(_))
        ));
    }

    #[test]
    fn item_id_accepts_hash_prefix() {
        assert_eq!("#4".parse::<ItemId>().unwrap(), ItemId(4));
        assert_eq!("12".parse::<ItemId>().unwrap(), ItemId(12));
        assert!("x".parse::<ItemId>().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let c = catalog(vec![
            CatalogItem::new(1, "A", "", "trending", &[]),
            CatalogItem::new(1, "B", "", "trending", &[]),
        ]);
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate item id 1"));
    }

    #[test]
    fn validate_rejects_undeclared_category() {
        let c = catalog(vec![CatalogItem::new(1, "A", "", "recent", &[])]);
        assert!(matches!(
            c.validate(),
            Err(ShowcaseError::InvalidCatalog { .. })
        ));
    }

    #[test]
    fn validate_reserves_all_category() {
        let mut c = catalog(Vec::new());
        c.categories.push(Category::new("ALL", "Everything"));
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("reserved name all"));

        let mut c = catalog(Vec::new());
        c.categories.push(Category::new("everything", "All"));
        assert!(matches!(
            c.validate(),
            Err(ShowcaseError::InvalidCatalog { .. })
        ));
    }

    #[test]
    fn validate_rejects_category_ids_differing_by_case() {
        let mut c = catalog(Vec::new());
        c.categories.push(Category::new("Trending", "Hot"));
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate category id \"Trending\""));
    }

    #[test]
    fn item_deserializes_with_defaults() {
        let json = r#"{"id": 7, "title": "T", "description": "D", "category": "trending"}"#;
        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, ItemId(7));
        assert!(item.tags.is_empty());
        assert!(!item.liked);
        assert!(item.details.is_empty());
    }

    #[test]
    fn profile_fields_round_through_setters() {
        let mut profile = Profile {
            name: "A".into(),
            email: "a@example.com".into(),
            avatar: String::new(),
            plan: "Pro".into(),
            join_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            last_login: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            recent_activity: Vec::new(),
        };
        profile.set_field("EMAIL".parse().unwrap(), "b@example.com".into());
        assert_eq!(profile.field(ProfileField::Email), "b@example.com");
        assert!("plan".parse::<ProfileField>().is_err());
    }
}
