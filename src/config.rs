use std::path::PathBuf;

pub const STORE_ENV: &str = "CATALOG_CORE_STORE";
pub const LOG_ENV: &str = "CATALOG_CORE_LOG";

const STORE_FILE: &str = "messages.json";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub store_path: PathBuf,
    pub log_filter: String,
}

impl CoreConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves settings through `lookup` so callers can supply their own environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let store_path = match non_empty(STORE_ENV) {
            Some(path) => PathBuf::from(path),
            None => match non_empty("LOCALAPPDATA") {
                Some(local) => PathBuf::from(local).join("CatalogCore").join(STORE_FILE),
                None => std::env::current_dir()
                    .unwrap_or_else(|_| PathBuf::from("."))
                    .join(STORE_FILE),
            },
        };

        let log_filter = non_empty(LOG_ENV)
            .or_else(|| non_empty("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            store_path,
            log_filter,
        }
    }
}
