use deploy_tracker::ports::outbound::Severity;
use deploy_tracker::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock Notifier for testing that records every notice
#[derive(Default, Clone)]
pub struct MockNotifier {
    pub notices: Arc<Mutex<Vec<Notification>>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_notices(&self) -> Vec<Notification> {
        self.notices.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub fn last_title(&self) -> Option<String> {
        self.notices.lock().unwrap().last().map(|n| n.title.clone())
    }

    #[allow(dead_code)]
    pub fn destructive_count(&self) -> usize {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.severity == Severity::Destructive)
            .count()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, notification: &Notification) {
        self.notices.lock().unwrap().push(notification.clone());
    }
}
