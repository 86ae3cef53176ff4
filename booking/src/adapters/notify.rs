//! In-memory notifier
//!
//! `MessageLog` keeps notifications so a caller can render them after the
//! action settles. Each notification is also logged at debug level.

use std::sync::Mutex;

use crate::domain::ports::{Notification, Notifier};

#[derive(Debug, Default)]
struct LogState {
    notifications: Vec<Notification>,
    depth: usize,
    shown: usize,
}

/// Collects the notifications of one action
#[derive(Debug, Default)]
pub struct MessageLog {
    state: Mutex<LogState>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.with_state(|state| state.notifications.clone())
    }

    pub fn has_errors(&self) -> bool {
        self.with_state(|state| state.notifications.iter().any(Notification::is_error))
    }

    /// Whether the loading indicator is currently shown
    pub fn is_loading(&self) -> bool {
        self.with_state(|state| state.depth > 0)
    }

    /// How many times the loading indicator was shown
    pub fn loading_count(&self) -> usize {
        self.with_state(|state| state.shown)
    }

    /// Notifications as one line each
    pub fn render(&self) -> String {
        self.with_state(|state| {
            state
                .notifications
                .iter()
                .map(|n| n.message.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut LogState) -> R) -> R {
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut state)
    }
}

impl Notifier for MessageLog {
    fn notify(&self, notification: Notification) {
        tracing::debug!(level = %notification.level, "{}", notification.message);
        self.with_state(|state| state.notifications.push(notification));
    }

    fn show_loading(&self) {
        self.with_state(|state| {
            state.depth += 1;
            state.shown += 1;
        });
    }

    fn hide_loading(&self) {
        self.with_state(|state| state.depth = state.depth.saturating_sub(1));
    }
}
