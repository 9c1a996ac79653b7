use crate::model::{ItemId, ViewKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown view: {0}")]
    UnknownView(String),

    #[error("Unknown category \"{category}\" for {view}")]
    UnknownCategory { view: ViewKind, category: String },

    #[error("No item with id {id} in {view}")]
    ItemNotFound { view: ViewKind, id: ItemId },

    #[error("Not editing: start an edit session first")]
    NotEditing,

    #[error("{action} is not available in the {view} view")]
    WrongView { view: ViewKind, action: &'static str },

    #[error("Invalid catalog for {view}: {reason}")]
    InvalidCatalog { view: ViewKind, reason: String },

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
