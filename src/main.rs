//! Contact Assistant - Main entry point
//!
//! Loads the address book, runs the interactive command loop, and saves the
//! book when the user exits.

use anyhow::Result;
use contact_assistant::repl::{self, InputHandler};
use contact_assistant::{Config, JsonFileBookRepository, Session, SystemClock};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr; stdout is the conversation with the user
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using address book at {}", config.book_path.display());

    let repository = JsonFileBookRepository::new(&config.book_path);
    let session = match Session::start(
        Box::new(repository),
        Box::new(SystemClock),
        config.search_settings(),
    ) {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    let input = InputHandler::new(config.history_path.clone())?;

    repl::run(session, input)?;

    info!("Contact assistant shutdown complete");
    Ok(())
}
