use std::sync::Arc;

use crate::services::auth::{
    notifier::{Notifier, TracingNotifier},
    processor::{AuthMethod, AuthProcessor, delegate},
    second_factor::{AlwaysApprove, SecondFactor},
};

const TWO_STEP_IDENTIFIER: &str = "john";
const TWO_STEP_SECRET: &str = "password";

/// Accepts a fixed identifier/secret pair once the second factor also passes.
pub struct TwoStepProcessor {
    notifier: Arc<dyn Notifier>,
    second_factor: Arc<dyn SecondFactor>,
    next: Option<Box<dyn AuthProcessor>>,
}

impl TwoStepProcessor {
    pub fn new() -> Self {
        Self::with_notifier(Arc::new(TracingNotifier))
    }

    pub fn with_notifier(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier,
            second_factor: Arc::new(AlwaysApprove),
            next: None,
        }
    }

    pub fn with_second_factor(mut self, second_factor: Arc<dyn SecondFactor>) -> Self {
        self.second_factor = second_factor;
        self
    }
}

impl Default for TwoStepProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthProcessor for TwoStepProcessor {
    fn validate(&self, identifier: &str, secret: &str) -> bool {
        // Second factor is only consulted after the first factor matched.
        if identifier == TWO_STEP_IDENTIFIER
            && secret == TWO_STEP_SECRET
            && self.second_factor.verify(identifier)
        {
            self.notifier.notify(AuthMethod::TwoStep);
            return true;
        }
        delegate(AuthMethod::TwoStep, self.successor(), identifier, secret)
    }

    fn method(&self) -> AuthMethod {
        AuthMethod::TwoStep
    }

    fn successor(&self) -> Option<&dyn AuthProcessor> {
        self.next.as_deref()
    }

    fn set_successor(&mut self, next: Option<Box<dyn AuthProcessor>>) {
        self.next = next;
    }
}
