use colored::Colorize;
use domain::notification::{NotificationKind, Notifier};

/// Prints toasts to stderr so they stay out of the transcript on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        let line = match kind {
            NotificationKind::Success => format!("✔ {}", message).green(),
            NotificationKind::Error => format!("✖ {}", message).red(),
            NotificationKind::Info => format!("ℹ {}", message).blue(),
        };
        tracing::debug!(%kind, text = message, "toast");
        eprintln!("{}", line);
    }
}
