//! Authentication processor interface shared by every link in the chain.
use std::fmt;
use std::str::FromStr;

use tracing::debug;

/// Which processor resolved a request.
///
/// Also used by configuration to describe chain order
/// (`credentials`, `two_step`, `role`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthMethod {
    Credentials,
    TwoStep,
    Role,
}

impl AuthMethod {
    /// Human-readable notification emitted when this method accepts a request.
    pub fn notification(&self) -> &'static str {
        match self {
            AuthMethod::Credentials => "validated by credentials",
            AuthMethod::TwoStep => "validated by two-step",
            AuthMethod::Role => "validated by guest role",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMethod::Credentials => "credentials",
            AuthMethod::TwoStep => "two_step",
            AuthMethod::Role => "role",
        }
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown auth method: {0}")]
pub struct UnknownAuthMethod(pub String);

impl FromStr for AuthMethod {
    type Err = UnknownAuthMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credentials" => Ok(Self::Credentials),
            "two_step" | "two-step" | "twostep" => Ok(Self::TwoStep),
            "role" | "guest" => Ok(Self::Role),
            other => Err(UnknownAuthMethod(other.to_string())),
        }
    }
}

/// A single link in the authentication chain.
///
/// `validate` either resolves the request itself or forwards it unchanged to
/// the successor. A processor without a successor that cannot resolve the
/// request answers `false`.
pub trait AuthProcessor: Send + Sync {
    fn validate(&self, identifier: &str, secret: &str) -> bool;

    fn method(&self) -> AuthMethod;

    fn successor(&self) -> Option<&dyn AuthProcessor>;

    // Replaces any existing link. `ProcessorBuilder::create` relinks every
    // processor it was given, so links made before `add` do not survive.
    fn set_successor(&mut self, next: Option<Box<dyn AuthProcessor>>);
}

impl fmt::Debug for dyn AuthProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthProcessor")
            .field("method", &self.method())
            .field("has_successor", &self.successor().is_some())
            .finish()
    }
}

/// Forward an unresolved request to `next`, or fail at the end of the chain.
pub(crate) fn delegate(
    from: AuthMethod,
    next: Option<&dyn AuthProcessor>,
    identifier: &str,
    secret: &str,
) -> bool {
    match next {
        Some(next) => {
            debug!(from = %from, to = %next.method(), "delegating to next processor");
            next.validate(identifier, secret)
        }
        None => {
            debug!(last = %from, "end of chain, no processor matched");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_configured_method_names() {
        assert_eq!("credentials".parse::<AuthMethod>(), Ok(AuthMethod::Credentials));
        assert_eq!(" Two-Step ".parse::<AuthMethod>(), Ok(AuthMethod::TwoStep));
        assert_eq!("role".parse::<AuthMethod>(), Ok(AuthMethod::Role));
        assert_eq!(
            "sms".parse::<AuthMethod>(),
            Err(UnknownAuthMethod("sms".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for method in [AuthMethod::Credentials, AuthMethod::TwoStep, AuthMethod::Role] {
            assert_eq!(method.to_string().parse::<AuthMethod>(), Ok(method));
        }
    }

    #[test]
    fn delegate_without_successor_is_terminal_failure() {
        assert!(!delegate(AuthMethod::Role, None, "guest", ""));
    }
}
