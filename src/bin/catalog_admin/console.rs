#![deny(clippy::all, clippy::pedantic)]

use std::io::{self, BufRead, Write};

use catalog_admin::application::manager::Confirm;
use catalog_admin::application::notify::{Notification, Notifier, TracingNotifier};

/// Prints notifications to stderr so stdout stays machine-readable.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("[{}] {}", notification.title(), notification.text);
        TracingNotifier.notify(notification);
    }
}

/// Asks on stderr and reads one answer line from stdin.
#[derive(Debug, Clone, Copy)]
pub struct PromptConfirm {
    assume_yes: bool,
}

impl PromptConfirm {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirm for PromptConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{prompt} [y/N] ");
        let _ = io::stderr().flush();

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_affirmative(&answer),
            Err(_) => false,
        }
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
