//! User-facing notifications.

/// Replacement for the panel's blocking alert: the host decides how a
/// message is shown, tests record it.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Notifier that forwards messages to the log.
///
/// Used where no interactive surface exists, such as the submit CLI.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::info!("{}", message);
    }
}
