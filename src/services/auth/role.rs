use std::sync::Arc;

use crate::services::auth::{
    notifier::{Notifier, TracingNotifier},
    processor::{AuthMethod, AuthProcessor, delegate},
};

const GUEST_IDENTIFIER: &str = "guest";

/// Accepts the guest identifier. The secret is not checked for guests.
pub struct RoleProcessor {
    notifier: Arc<dyn Notifier>,
    next: Option<Box<dyn AuthProcessor>>,
}

impl RoleProcessor {
    pub fn new() -> Self {
        Self::with_notifier(Arc::new(TracingNotifier))
    }

    pub fn with_notifier(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier,
            next: None,
        }
    }
}

impl Default for RoleProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthProcessor for RoleProcessor {
    fn validate(&self, identifier: &str, secret: &str) -> bool {
        if identifier == GUEST_IDENTIFIER {
            self.notifier.notify(AuthMethod::Role);
            return true;
        }
        delegate(AuthMethod::Role, self.successor(), identifier, secret)
    }

    fn method(&self) -> AuthMethod {
        AuthMethod::Role
    }

    fn successor(&self) -> Option<&dyn AuthProcessor> {
        self.next.as_deref()
    }

    fn set_successor(&mut self, next: Option<Box<dyn AuthProcessor>>) {
        self.next = next;
    }
}
