use tracing::info;

use crate::services::auth::processor::AuthMethod;

/// Side channel for successful validations.
///
/// Processors call `notify` exactly once per accepted request and never on
/// failure. The result of `validate` stays a plain `bool`.
pub trait Notifier: Send + Sync {
    fn notify(&self, method: AuthMethod);
}

/// Default notifier: writes the notification through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, method: AuthMethod) {
        info!(method = %method, "{}", method.notification());
    }
}
