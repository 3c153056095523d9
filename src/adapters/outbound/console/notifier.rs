use crate::ports::outbound::{Notification, Notifier, Severity};
use owo_colors::OwoColorize;

/// ConsoleNotifier adapter that prints notices to stderr
///
/// Destructive notices are shown in red, normal ones in green.
pub struct ConsoleNotifier {
    color: bool,
}

impl ConsoleNotifier {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn render(&self, notification: &Notification) -> String {
        let (icon, title) = match notification.severity {
            Severity::Normal => ("✅", notification.title.clone()),
            Severity::Destructive => ("❌", notification.title.clone()),
        };

        if !self.color {
            return format!("{} {}: {}", icon, title, notification.description);
        }

        let title = match notification.severity {
            Severity::Normal => title.green().bold().to_string(),
            Severity::Destructive => title.red().bold().to_string(),
        };
        format!("{} {}: {}", icon, title, notification.description.dimmed())
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        eprintln!("{}", self.render(notification));
    }
}
