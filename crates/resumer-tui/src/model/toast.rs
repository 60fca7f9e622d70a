use std::collections::VecDeque;
use std::time::Duration;

use tokio::time::Instant;

use resumer_core::Notification;

/// Most toasts kept on screen at once; older ones are dropped.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub expires_at: Instant,
}

/// Transient notifications, newest last, each shown for a fixed wall-clock
/// lifetime.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    lifetime: Duration,
}

impl ToastQueue {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            lifetime,
        }
    }

    pub fn push(&mut self, notification: Notification, now: Instant) {
        tracing::info!("{}: {}", notification.title, notification.description);
        self.toasts.push_back(Toast {
            notification,
            expires_at: now + self.lifetime,
        });
        while self.toasts.len() > MAX_VISIBLE {
            self.toasts.pop_front();
        }
    }

    /// Drop toasts whose time is up.
    pub fn expire(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    /// Close the newest toast. Returns false if there was none.
    pub fn dismiss(&mut self) -> bool {
        self.toasts.pop_back().is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.toasts.back().map(|t| &t.notification)
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIFETIME: Duration = Duration::from_secs(5);

    #[test]
    fn toasts_expire_after_lifetime() {
        let start = Instant::now();
        let mut q = ToastQueue::new(LIFETIME);
        q.push(Notification::invalid_file_type(), start);
        q.expire(start + Duration::from_millis(4999));
        assert_eq!(q.len(), 1);
        q.expire(start + LIFETIME);
        assert!(q.is_empty());
    }

    #[test]
    fn repeated_expiry_checks_do_not_shorten_lifetime() {
        let start = Instant::now();
        let mut q = ToastQueue::new(LIFETIME);
        q.push(Notification::invalid_file_type(), start);
        for _ in 0..1000 {
            q.expire(start + Duration::from_secs(1));
        }
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn dismiss_removes_newest() {
        let now = Instant::now();
        let mut q = ToastQueue::new(LIFETIME);
        q.push(Notification::invalid_file_type(), now);
        q.push(Notification::analysis_complete(), now);
        assert!(q.dismiss());
        assert_eq!(q.latest(), Some(&Notification::invalid_file_type()));
        assert!(q.dismiss());
        assert!(!q.dismiss());
    }

    #[test]
    fn keeps_only_the_newest_few() {
        let now = Instant::now();
        let mut q = ToastQueue::new(LIFETIME);
        for i in 0..5 {
            q.push(Notification::not_available(&format!("feature {i}")), now);
        }
        assert_eq!(q.len(), MAX_VISIBLE);
        assert!(q.latest().unwrap().description.contains("feature 4"));
    }
}
