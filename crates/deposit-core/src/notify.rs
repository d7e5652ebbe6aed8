//! Single-slot transient notifications.
//!
//! Exactly one message is live at a time. Posting replaces the message and
//! the pending auto-clear: the previous timer is aborted before a new one
//! starts, so at most one clear is ever scheduled. Each notice carries a
//! sequence number; a timer only clears the notice it was armed for, so a
//! timer that somehow outlives a replacement cannot erase a newer message.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// How long a message stays up without replacement.
pub const DEFAULT_TTL: Duration = Duration::from_millis(4200);

#[derive(Debug)]
struct Notice {
    seq: u64,
    message: String,
}

#[derive(Debug)]
pub struct NotificationSlot {
    current: Arc<Mutex<Option<Notice>>>,
    timer: Option<JoinHandle<()>>,
    seq: u64,
    ttl: Duration,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            current: Arc::new(Mutex::new(None)),
            timer: None,
            seq: 0,
            ttl,
        }
    }

    /// Replace the live message and re-arm the auto-clear. Last write wins.
    pub fn post(&mut self, message: impl Into<String>) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.seq += 1;
        let seq = self.seq;
        *lock(&self.current) = Some(Notice {
            seq,
            message: message.into(),
        });

        let current = Arc::clone(&self.current);
        let ttl = self.ttl;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut slot = lock(&current);
            if slot.as_ref().is_some_and(|notice| notice.seq == seq) {
                *slot = None;
            }
        }));
    }

    pub fn message(&self) -> Option<String> {
        lock(&self.current)
            .as_ref()
            .map(|notice| notice.message.clone())
    }

    pub fn clear(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        *lock(&self.current) = None;
    }
}

impl Default for NotificationSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for NotificationSlot {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

fn lock(current: &Mutex<Option<Notice>>) -> std::sync::MutexGuard<'_, Option<Notice>> {
    // A poisoned slot only ever holds a message; recover it.
    current.lock().unwrap_or_else(PoisonError::into_inner)
}
