//! Awaitable yes/no confirmation prompt
//!
//! The underlying prompt blocks its caller until the user answers. [`confirm`]
//! moves that wait onto the blocking pool so async callers can await it.
//! There is no cancellation: once asked, the prompt runs until answered.

use std::io::{BufRead, Write};
use std::sync::Arc;

/// A blocking yes/no question asked of the user
pub trait Prompt: Send + Sync + 'static {
    /// Ask the question and block until the user answers
    fn ask(&self, message: &str) -> bool;
}

impl<F> Prompt for F
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    fn ask(&self, message: &str) -> bool {
        self(message)
    }
}

/// Prompt that asks on stdout and reads the answer from stdin.
///
/// `y` or `yes` (any case) confirms; anything else, including EOF, declines.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&self, message: &str) -> bool {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        answer_from(message, &mut stdin.lock(), &mut stdout.lock())
    }
}

fn answer_from(message: &str, input: &mut impl BufRead, output: &mut impl Write) -> bool {
    if write!(output, "{} [y/N] ", message).and_then(|_| output.flush()).is_err() {
        return false;
    }

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(_) => is_yes(&line),
        Err(e) => {
            tracing::warn!("Failed to read confirmation answer: {}", e);
            false
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Ask `message` through `prompt` and resolve to the user's answer.
///
/// Resolves to `false` if the prompt task panics.
pub async fn confirm<P: Prompt>(prompt: Arc<P>, message: impl Into<String>) -> bool {
    let message = message.into();
    match tokio::task::spawn_blocking(move || prompt.ask(&message)).await {
        Ok(answer) => answer,
        Err(e) => {
            tracing::warn!("Confirmation prompt failed: {}", e);
            false
        }
    }
}
