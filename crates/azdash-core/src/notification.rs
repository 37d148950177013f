use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: Instant,
}

/// Transient messages that expire after a fixed TTL.
#[derive(Debug)]
pub struct Notifications {
    ttl: Duration,
    items: VecDeque<Notification>,
}

impl Notifications {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            items: VecDeque::new(),
        }
    }

    pub fn push(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.push_at(level, message, Instant::now());
    }

    pub fn push_at(&mut self, level: NotificationLevel, message: impl Into<String>, at: Instant) {
        let message = message.into();
        match level {
            NotificationLevel::Error => tracing::warn!(%message, "notification"),
            _ => tracing::debug!(%message, "notification"),
        }
        self.items.push_back(Notification {
            level,
            message,
            created_at: at,
        });
    }

    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.items
            .retain(|n| now.saturating_duration_since(n.created_at) < ttl);
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
