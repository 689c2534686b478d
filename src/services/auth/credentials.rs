use std::sync::Arc;

use crate::services::auth::{
    notifier::{Notifier, TracingNotifier},
    processor::{AuthMethod, AuthProcessor, delegate},
};

const ADMIN_IDENTIFIER: &str = "admin";
const ADMIN_SECRET: &str = "admin123";

/// Accepts the fixed administrator identifier/secret pair.
pub struct CredentialsProcessor {
    notifier: Arc<dyn Notifier>,
    next: Option<Box<dyn AuthProcessor>>,
}

impl CredentialsProcessor {
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

impl Default for CredentialsProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthProcessor for CredentialsProcessor {
    fn validate(&self, identifier: &str, secret: &str) -> bool {
        if identifier == ADMIN_IDENTIFIER && secret == ADMIN_SECRET {
            self.notifier.notify(AuthMethod::Credentials);
            return true;
        }
        delegate(AuthMethod::Credentials, self.successor(), identifier, secret)
    }

    fn method(&self) -> AuthMethod {
        AuthMethod::Credentials
    }

    fn successor(&self) -> Option<&dyn AuthProcessor> {
        self.next.as_deref()
    }

    fn set_successor(&mut self, next: Option<Box<dyn AuthProcessor>>) {
        self.next = next;
    }
}
