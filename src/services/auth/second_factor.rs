//! Second-factor check used by the two-step processor.

/// Verifies the second factor for an identifier whose first factor already matched.
pub trait SecondFactor: Send + Sync {
    fn verify(&self, identifier: &str) -> bool;
}

/// Approves every second factor.
///
/// Keeps parity with the reference flow, where no code is actually collected.
/// Swap in a real implementation with `TwoStepProcessor::with_second_factor`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysApprove;

impl SecondFactor for AlwaysApprove {
    fn verify(&self, _identifier: &str) -> bool {
        true
    }
}
