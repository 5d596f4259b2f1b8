use std::io::{self, BufRead, Write};
use std::panic::AssertUnwindSafe;

use catalog_core::config::CoreConfig;
use catalog_core::{protocol, JsonFileRepository, MessageStorage};
use tracing_subscriber::EnvFilter;

fn main() {
    let config = CoreConfig::from_env();

    // stdout carries responses, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    tracing::info!(store = %config.store_path.display(), "catalog-core started");

    let storage = MessageStorage::new(JsonFileRepository::new(config.store_path));

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read request line");
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let result =
            std::panic::catch_unwind(AssertUnwindSafe(|| protocol::handle(&storage, &line)));

        let response = match result {
            Ok(resp) => resp,
            Err(_) => {
                tracing::error!("request handler panicked");
                serde_json::json!({
                    "status": "error",
                    "message": "internal core error"
                })
                .to_string()
            }
        };

        if writeln!(stdout, "{response}").is_err() {
            break;
        }

        let _ = stdout.flush();
    }
}
