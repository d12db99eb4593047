//! Output notification system
//!
//! Demo output goes through a [`Notifier`] so that it can be printed to the
//! console or captured for inspection.

use std::sync::Arc;

use parking_lot::Mutex;

/// Trait for handling demo output
pub trait Notifier: Send + Sync {
    /// Handle a regular line of output. Empty lines are printed too.
    fn on_output(&self, content: &str);

    /// Handle the title of a new demo section
    fn on_section(&self, title: &str);

    /// Handle error output
    fn on_error(&self, content: &str);
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn on_output(&self, content: &str) {
        (**self).on_output(content);
    }

    fn on_section(&self, title: &str) {
        (**self).on_section(title);
    }

    fn on_error(&self, content: &str) {
        (**self).on_error(content);
    }
}

/// Console notifier writing to stdout and stderr
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ConsoleNotifier {
    fn on_output(&self, content: &str) {
        println!("{content}");
    }

    fn on_section(&self, title: &str) {
        println!("{title}");
    }

    fn on_error(&self, content: &str) {
        eprintln!("{content}");
    }
}

/// Notifier that records every line it receives
#[derive(Default)]
pub struct CaptureNotifier {
    lines: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl CaptureNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Output and section lines, in order
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().clone()
    }

    /// All captured output joined with newlines
    pub fn text(&self) -> String {
        self.lines.lock().join("\n")
    }
}

impl Notifier for CaptureNotifier {
    fn on_output(&self, content: &str) {
        self.lines.lock().push(content.to_string());
    }

    fn on_section(&self, title: &str) {
        self.lines.lock().push(title.to_string());
    }

    fn on_error(&self, content: &str) {
        self.errors.lock().push(content.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_keeps_order() {
        let capture = CaptureNotifier::new();
        capture.on_section("person1");
        capture.on_output("My name is blaine");
        capture.on_output("");
        capture.on_error("oops");
        assert_eq!(capture.lines(), vec!["person1", "My name is blaine", ""]);
        assert_eq!(capture.errors(), vec!["oops"]);
        assert_eq!(capture.text(), "person1\nMy name is blaine\n");
    }
}
