// src/signal.rs

//! Ctrl+C handling for the streaming `ask` command.

use crate::cancellation::CancellationToken;
use anyhow::{Context, Result};

/// Registers a Ctrl+C (SIGINT/SIGTERM) handler that cancels the returned token.
///
/// # Errors
/// Returns an error if a handler was already installed for this process.
pub fn setup_signal_handler() -> Result<CancellationToken> {
    let token = CancellationToken::new();
    let handler_token = token.clone();

    ctrlc::set_handler(move || {
        log::info!("Ctrl+C received, stopping the answer stream.");
        handler_token.cancel();
    })
    .context("Failed to set Ctrl+C signal handler")?;

    Ok(token)
}
