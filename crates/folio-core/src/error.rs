use crate::deck::PageId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("deck contains no pages")]
    EmptyDeck,

    #[error("duplicate page id: {id}")]
    DuplicatePageId { id: PageId },

    #[error("section marker {label:?} points at unknown page id {id}")]
    UnknownSectionTarget { id: PageId, label: String },

    #[error("unsupported deck format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("deck JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("deck YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
