pub mod builder;
pub mod credentials;
pub mod factory;
pub mod notifier;
pub mod processor;
pub mod role;
pub mod second_factor;
pub mod two_step;

#[cfg(test)]
pub(crate) mod test_support;

pub use builder::{ChainError, ProcessorBuilder, ProcessorChain};
pub use credentials::CredentialsProcessor;
pub use factory::{build_processor_chain, canonical_order};
pub use notifier::{Notifier, TracingNotifier};
pub use processor::{AuthMethod, AuthProcessor};
pub use role::RoleProcessor;
pub use second_factor::{AlwaysApprove, SecondFactor};
pub use two_step::TwoStepProcessor;
