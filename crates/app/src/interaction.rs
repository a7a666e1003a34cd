//! Confirmation and prompt capability used by the admin console.

use std::io::{self, BufRead, Write};

use mockall::automock;

/// Asks the operator to confirm or supply text.
#[automock]
pub trait Interaction: Send + Sync {
    /// Ask a yes/no question.
    fn confirm(&self, question: &str) -> bool;

    /// Ask for free text. `None` when the operator dismisses the prompt.
    fn prompt(&self, question: &str) -> Option<String>;
}

/// Terminal backed interaction.
///
/// Preset answers skip the terminal entirely, which keeps scripted runs non-interactive.
#[derive(Debug, Clone, Default)]
pub struct TerminalInteraction {
    assume_yes: bool,
    answer: Option<String>,
}

impl TerminalInteraction {
    /// Interaction that answers confirmations with `assume_yes` when set and prompts with
    /// `answer` when present.
    pub fn new(assume_yes: bool, answer: Option<String>) -> Self {
        Self { assume_yes, answer }
    }

    fn read_line(question: &str) -> Option<String> {
        let mut stderr = io::stderr().lock();
        write!(stderr, "{question} ").ok()?;
        stderr.flush().ok()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line).ok()?;

        (read > 0).then(|| line.trim().to_string())
    }
}

impl Interaction for TerminalInteraction {
    fn confirm(&self, question: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        Self::read_line(&format!("{question} [y/N]"))
            .is_some_and(|answer| matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
    }

    fn prompt(&self, question: &str) -> Option<String> {
        if let Some(answer) = &self.answer {
            return Some(answer.clone());
        }

        Self::read_line(question)
    }
}
