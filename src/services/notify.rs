use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPosition {
    Top,
    Bottom,
}

/// User feedback sink. The UI shell decides how toasts and alerts are drawn;
/// the flow only emits them through this trait.
pub trait Notifier: Send + Sync {
    /// Transient notification.
    fn toast(&self, message: &str, level: ToastLevel, position: ToastPosition);

    /// Blocking attention-grabber, used for submission failures.
    fn alert(&self, message: &str);
}

/// Default sink that writes notifications to the log.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn toast(&self, message: &str, level: ToastLevel, position: ToastPosition) {
        match level {
            ToastLevel::Info => info!(?position, "toast: {message}"),
            ToastLevel::Error => error!(?position, "toast: {message}"),
        }
    }

    fn alert(&self, message: &str) {
        error!("alert: {message}");
    }
}
