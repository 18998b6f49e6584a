//! User-facing notifications.

use std::sync::Mutex;

use crate::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Warning,
    Error,
}

/// Sink for short user-facing messages. Passed to whatever needs to report
/// something, never reached through a global.
pub trait Notifier: Send + Sync {
    fn notify(&self, level: Level, message: &str);

    fn success(&self, message: &str) {
        self.notify(Level::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(Level::Error, message);
    }
}

/// What the caller should do after an API error was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    None,
    /// The session is missing or expired; send the person to the login screen.
    Login,
}

/// Report `err` through `notifier` with a message chosen by status code.
pub fn notify_api_error(notifier: &dyn Notifier, err: &ClientError) -> FollowUp {
    if let ClientError::Request(e) = err {
        if e.is_timeout() {
            notifier.error("Request timed out. Please try again.");
            return FollowUp::None;
        }
        if e.is_connect() {
            notifier.error("Cannot reach the server. Check your connection and try again.");
            return FollowUp::None;
        }
    }

    let Some(status) = err.status() else {
        notifier.error(&format!("Something went wrong: {err}"));
        return FollowUp::None;
    };
    let message = err.api_message();
    match status {
        401 => {
            notifier.error("Please log in to continue");
            return FollowUp::Login;
        }
        403 => notifier.error("You are not allowed to do that"),
        404 => notifier.error(message.unwrap_or("The requested item was not found")),
        400 | 409 | 422 => {
            notifier.error(message.unwrap_or("Invalid request. Please check your input."))
        }
        429 => notifier.error("Too many requests. Please wait a moment and try again."),
        502..=504 => notifier.error("Service temporarily unavailable. Please try again later."),
        s if s >= 500 => notifier.error("Server error. Please try again later."),
        _ => notifier.error(message.unwrap_or("An error occurred. Please try again.")),
    }
    FollowUp::None
}

/// Writes notifications to stdout/stderr, for the CLI.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, level: Level, message: &str) {
        match level {
            Level::Success => println!("✓ {message}"),
            Level::Info => println!("{message}"),
            Level::Warning => eprintln!("! {message}"),
            Level::Error => eprintln!("✗ {message}"),
        }
    }
}

/// Keeps every notification in memory.
#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Mutex<Vec<(Level, String)>>,
}

impl RecordingNotifier {
    pub fn last(&self) -> Option<(Level, String)> {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: Level, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((level, message.to_owned()));
    }
}
