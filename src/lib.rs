pub mod config;
pub mod error;
pub mod model;
pub mod protocol;
pub mod repository;
pub mod services;

pub use error::{InvalidLocaleError, RepositoryError, StorageError};
pub use model::{Catalog, Entry, MessageRecord, Reference};
pub use repository::{InMemoryRepository, JsonFileRepository, MessageRepository};
pub use services::message_storage::MessageStorage;
pub use services::plural::{GettextPluralRules, PluralRuleProvider};
