//! Append-only assembly of processors into an immutable chain.
use thiserror::Error;
use tracing::debug;

use crate::services::auth::processor::{AuthMethod, AuthProcessor};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("processor chain is empty")]
    Empty,
}

/// Collects processors in call order.
///
/// Processors are linked tail-to-head when `create` is called, so the head
/// owns the rest of the chain and each node is owned exactly once.
#[derive(Debug, Default)]
pub struct ProcessorBuilder {
    processors: Vec<Box<dyn AuthProcessor>>,
}

impl ProcessorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `processor` as the new tail.
    pub fn add(mut self, processor: Box<dyn AuthProcessor>) -> Self {
        self.processors.push(processor);
        self
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Link the collected processors and return the chain rooted at the first one.
    ///
    /// Every processor is relinked here, the tail included, so successors set
    /// before `add` are dropped.
    pub fn create(self) -> Result<ProcessorChain, ChainError> {
        let mut head: Option<Box<dyn AuthProcessor>> = None;

        for mut processor in self.processors.into_iter().rev() {
            processor.set_successor(head.take());
            head = Some(processor);
        }

        let head = head.ok_or(ChainError::Empty)?;
        let chain = ProcessorChain { head };
        debug!(len = chain.len(), "processor chain created");

        Ok(chain)
    }
}

/// A finalized chain. It cannot be re-linked.
#[derive(Debug)]
pub struct ProcessorChain {
    head: Box<dyn AuthProcessor>,
}

impl ProcessorChain {
    pub fn validate(&self, identifier: &str, secret: &str) -> bool {
        self.head.validate(identifier, secret)
    }

    pub fn head(&self) -> &dyn AuthProcessor {
        self.head.as_ref()
    }

    /// Number of processors reachable from the head.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Walk the chain from the head and yield each processor's method in order.
    pub fn methods(&self) -> Vec<AuthMethod> {
        self.iter().map(|p| p.method()).collect()
    }

    pub fn iter(&self) -> ChainIter<'_> {
        ChainIter {
            current: Some(self.head()),
        }
    }
}

pub struct ChainIter<'a> {
    current: Option<&'a dyn AuthProcessor>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a dyn AuthProcessor;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = current.successor();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::services::auth::{
        CredentialsProcessor, RoleProcessor, TwoStepProcessor, test_support::RecordingNotifier,
    };

    #[test]
    fn create_without_processors_is_detectable() {
        let builder = ProcessorBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.create().unwrap_err(), ChainError::Empty);
    }

    #[test]
    fn add_keeps_call_order() {
        let chain = ProcessorBuilder::new()
            .add(Box::new(RoleProcessor::new()))
            .add(Box::new(CredentialsProcessor::new()))
            .add(Box::new(TwoStepProcessor::new()))
            .create()
            .unwrap();

        assert_eq!(
            chain.methods(),
            vec![AuthMethod::Role, AuthMethod::Credentials, AuthMethod::TwoStep]
        );
        assert_eq!(chain.head().method(), AuthMethod::Role);
    }

    #[test]
    fn reachable_processors_match_add_calls() {
        for n in 1..=8 {
            let mut builder = ProcessorBuilder::new();
            for _ in 0..n {
                builder = builder.add(Box::new(RoleProcessor::new()));
            }
            assert_eq!(builder.len(), n);

            let chain = builder.create().unwrap();
            assert_eq!(chain.len(), n);
            assert_eq!(chain.iter().count(), n);
            assert!(chain.iter().last().unwrap().successor().is_none());
        }
    }

    #[test]
    fn links_made_before_add_are_replaced() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut tail = CredentialsProcessor::with_notifier(notifier.clone());
        tail.set_successor(Some(Box::new(RoleProcessor::with_notifier(
            notifier.clone(),
        ))));
        let mut middle = TwoStepProcessor::with_notifier(notifier.clone());
        middle.set_successor(Some(Box::new(RoleProcessor::with_notifier(
            notifier.clone(),
        ))));

        let chain = ProcessorBuilder::new()
            .add(Box::new(middle))
            .add(Box::new(tail))
            .create()
            .unwrap();

        assert_eq!(chain.len(), 2);
        assert_eq!(
            chain.methods(),
            vec![AuthMethod::TwoStep, AuthMethod::Credentials]
        );
        assert!(!chain.validate("guest", "guest123"));
        assert!(notifier.methods().is_empty());
    }

    #[test]
    fn first_matching_processor_wins() {
        let notifier = Arc::new(RecordingNotifier::default());
        let chain = ProcessorBuilder::new()
            .add(Box::new(RoleProcessor::with_notifier(notifier.clone())))
            .add(Box::new(RoleProcessor::with_notifier(notifier.clone())))
            .create()
            .unwrap();

        assert!(chain.validate("guest", ""));
        assert_eq!(notifier.methods(), vec![AuthMethod::Role]);
    }
}
