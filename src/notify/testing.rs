/// Mock notifier for tests
///
/// Records every delivery attempt and can be switched into a failing mode to
/// exercise the notification-failure path without a real SMTP transport.

use crate::notify::{Notifier, NotifyError};
use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

/// Arguments captured from a notify call
#[derive(Debug, Clone, PartialEq)]
pub struct NotifyCall {
    pub user_id: i64,
    pub subject: String,
    pub body: String,
}

/// Recording notifier with an optional failure mode
#[derive(Default)]
pub struct MockNotifier {
    calls: Mutex<Vec<NotifyCall>>,
    failing: AtomicBool,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent notify attempt fail with a transport error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Get all recorded delivery attempts
    pub fn calls(&self) -> Vec<NotifyCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify(&self, user_id: i64, subject: &str, body: &str) -> Result<(), NotifyError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(NotifyError::Transport("mock transport down".to_string()));
        }
        self.calls.lock().unwrap().push(NotifyCall {
            user_id,
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
