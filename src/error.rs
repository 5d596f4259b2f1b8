use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid locale: {locale:?}")]
pub struct InvalidLocaleError {
    pub locale: String,
}

impl InvalidLocaleError {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("store i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store data is not valid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("repository backend failed: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    /// Catalog header is incomplete; nothing was written.
    #[error("invalid translation catalog: {0}")]
    InvalidTranslation(String),

    #[error(transparent)]
    InvalidLocale(#[from] InvalidLocaleError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type Result<T> = std::result::Result<T, StorageError>;
