use std::sync::Mutex;

use crate::services::auth::{notifier::Notifier, processor::AuthMethod};

/// Captures notifications so tests can assert on the side channel.
#[derive(Debug, Default)]
pub(crate) struct RecordingNotifier {
    seen: Mutex<Vec<AuthMethod>>,
}

impl RecordingNotifier {
    pub(crate) fn methods(&self) -> Vec<AuthMethod> {
        self.seen.lock().unwrap().clone()
    }

    pub(crate) fn notifications(&self) -> Vec<&'static str> {
        self.methods().iter().map(|m| m.notification()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, method: AuthMethod) {
        self.seen.lock().unwrap().push(method);
    }
}
