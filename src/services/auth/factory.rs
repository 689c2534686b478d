//! Factory: build a `ProcessorChain` from a configured method order.
use std::sync::Arc;

use crate::services::auth::{
    CredentialsProcessor, RoleProcessor, TwoStepProcessor,
    builder::{ChainError, ProcessorBuilder, ProcessorChain},
    notifier::Notifier,
    processor::{AuthMethod, AuthProcessor},
};

/// Credentials, then two-step, then guest role.
pub fn canonical_order() -> Vec<AuthMethod> {
    vec![AuthMethod::Credentials, AuthMethod::TwoStep, AuthMethod::Role]
}

pub fn build_processor(method: AuthMethod, notifier: Arc<dyn Notifier>) -> Box<dyn AuthProcessor> {
    match method {
        AuthMethod::Credentials => Box::new(CredentialsProcessor::with_notifier(notifier)),
        AuthMethod::TwoStep => Box::new(TwoStepProcessor::with_notifier(notifier)),
        AuthMethod::Role => Box::new(RoleProcessor::with_notifier(notifier)),
    }
}

pub fn build_processor_chain(
    order: &[AuthMethod],
    notifier: Arc<dyn Notifier>,
) -> Result<ProcessorChain, ChainError> {
    order
        .iter()
        .fold(ProcessorBuilder::new(), |builder, method| {
            builder.add(build_processor(*method, notifier.clone()))
        })
        .create()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::test_support::RecordingNotifier;

    #[test]
    fn canonical_chain_resolves_reference_attempts() {
        let notifier = Arc::new(RecordingNotifier::default());
        let chain = build_processor_chain(&canonical_order(), notifier.clone()).unwrap();

        assert!(chain.validate("admin", "admin123"));
        assert!(chain.validate("john", "password"));
        assert!(chain.validate("guest", "guest123"));
        assert!(!chain.validate("user", "password"));

        assert_eq!(
            notifier.notifications(),
            vec![
                "validated by credentials",
                "validated by two-step",
                "validated by guest role",
            ]
        );
    }

    #[test]
    fn empty_order_is_rejected() {
        let err = build_processor_chain(&[], Arc::new(RecordingNotifier::default())).unwrap_err();
        assert_eq!(err, ChainError::Empty);
    }
}
