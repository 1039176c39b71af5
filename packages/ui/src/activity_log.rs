//! Notifications for auth and profile outcomes.
//!
//! Components render the newest entries as toasts; this module only keeps the
//! list. It is bounded, so old entries fall off.

use dioxus::prelude::*;

/// Entries kept before the oldest are dropped.
pub const MAX_ENTRIES: usize = 50;

#[derive(Clone, Debug, PartialEq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
}

impl ActivityLog {
    pub fn push(&mut self, level: LogLevel, message: &str) {
        if self.entries.len() >= MAX_ENTRIES {
            let overflow = self.entries.len() + 1 - MAX_ENTRIES;
            self.entries.drain(..overflow);
        }
        self.entries.push(LogEntry {
            timestamp: current_time(),
            level,
            message: message.to_string(),
        });
    }

    /// Most recent entry, the one a toast shows.
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn errors(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(|e| e.level == LogLevel::Error)
    }
}

/// The log provided by [`AuthProvider`](crate::AuthProvider), if one is mounted above.
pub fn use_activity_log() -> Option<Signal<ActivityLog>> {
    try_use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    match level {
        LogLevel::Error => tracing::warn!("activity: {message}"),
        _ => tracing::debug!("activity: {message}"),
    }
    log.write().push(level, message);
}

fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_latest() {
        let mut log = ActivityLog::default();
        assert!(log.latest().is_none());

        log.push(LogLevel::Success, "Profile updated");
        log.push(LogLevel::Error, "Email already in use");

        let latest = log.latest().unwrap();
        assert_eq!(latest.level, LogLevel::Error);
        assert_eq!(latest.message, "Email already in use");
        assert_eq!(latest.timestamp.len(), 8);
        assert_eq!(log.errors().count(), 1);
    }

    #[test]
    fn test_log_is_bounded() {
        let mut log = ActivityLog::default();
        for i in 0..MAX_ENTRIES + 5 {
            log.push(LogLevel::Info, &format!("entry {i}"));
        }
        assert_eq!(log.entries.len(), MAX_ENTRIES);
        assert_eq!(log.entries[0].message, "entry 5");
    }
}
