use crate::toast_log::append_toast_log;
use std::path::PathBuf;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub style: ToastStyle,
    pub title: String,
    pub message: String,
}

impl Toast {
    pub fn failure(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            style: ToastStyle::Failure,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            style: ToastStyle::Success,
            title: title.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Toast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.title)
        } else {
            write!(f, "{}: {}", self.title, self.message)
        }
    }
}

/// Sink for user-visible notifications. Must never block the caller for long.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Prints toasts to stderr and optionally appends them to a toast log.
pub struct ToastNotifier {
    enabled: bool,
    log_file: Option<PathBuf>,
}

impl ToastNotifier {
    pub fn new(enabled: bool, log_file: Option<PathBuf>) -> Self {
        Self { enabled, log_file }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, toast: Toast) {
        if let Some(path) = &self.log_file {
            append_toast_log(path, &toast.to_string());
        }
        if !self.enabled {
            return;
        }
        match toast.style {
            ToastStyle::Success => tracing::info!(title = %toast.title, "toast"),
            ToastStyle::Failure => tracing::warn!(title = %toast.title, "toast"),
        }
        eprintln!("{toast}");
    }
}

/// Collects toasts in memory.
#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().map(|t| t.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push(toast);
        }
    }
}
