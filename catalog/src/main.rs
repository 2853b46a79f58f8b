#![cfg_attr(test, allow(clippy::disallowed_methods))]
// Forbid unwrap() in production code; a broken terminal should end the
// session with a message, not a panic.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
use std::io;

use catalog::{Console, Library, config::CatalogConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Logs go to stderr so they never interleave with the menu on stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Load configuration from environment variables
    let config = match CatalogConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Loaded configuration: preload_samples={}",
        config.preload_samples
    );

    let mut library = Library::new();
    if config.preload_samples {
        library.preload_samples();
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(&mut library, stdin.lock(), stdout.lock());
    if let Err(e) = console.run() {
        tracing::error!("Console I/O error: {e}");
        std::process::exit(1);
    }
}
