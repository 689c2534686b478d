/*
 * Responsibility
 * - tracing setup
 * - Config -> processor chain assembly
 * - Run a single attempt or the demonstration attempts
 */
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{AppEnv, Config};
use crate::error::AppError;
use crate::services::auth::{ProcessorChain, TracingNotifier, build_processor_chain};

/// Identifier/secret pair passed to the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub identifier: String,
    pub secret: String,
}

impl Attempt {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }
}

/// The four reference attempts: one per processor, plus one that matches nothing.
pub fn demo_attempts() -> Vec<Attempt> {
    vec![
        Attempt::new("admin", "admin123"),
        Attempt::new("john", "password"),
        Attempt::new("guest", "guest123"),
        Attempt::new("user", "password"),
    ]
}

fn init_tracing(app_env: AppEnv) {
    // RUST_LOG wins; otherwise the environment picks the level.
    // Ex:
    // RUST_LOG=auth_chain=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(app_env.default_log_filter()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Returns whether the single attempt was accepted. Demo mode always returns `true`.
pub fn run(attempt: Option<Attempt>) -> Result<bool, AppError> {
    let config = Config::from_env()?;
    init_tracing(config.app_env);

    let chain = build_chain(&config)?;
    info!(
        "starting in {:?} mode with chain {:?}",
        config.app_env,
        chain.methods()
    );

    match attempt {
        Some(attempt) => Ok(check(&chain, &attempt)),
        None => {
            run_demo(&chain);
            Ok(true)
        }
    }
}

pub fn build_chain(config: &Config) -> Result<ProcessorChain, AppError> {
    let chain = build_processor_chain(&config.chain_order, Arc::new(TracingNotifier))?;
    Ok(chain)
}

/// Validate one attempt and log the outcome.
pub fn check(chain: &ProcessorChain, attempt: &Attempt) -> bool {
    let accepted = chain.validate(&attempt.identifier, &attempt.secret);
    if accepted {
        info!(identifier = %attempt.identifier, "access granted");
    } else {
        warn!(identifier = %attempt.identifier, "access denied");
    }
    accepted
}

/// Run every demonstration attempt, returning each outcome in order.
pub fn run_demo(chain: &ProcessorChain) -> Vec<(Attempt, bool)> {
    demo_attempts()
        .into_iter()
        .map(|attempt| {
            let accepted = check(chain, &attempt);
            (attempt, accepted)
        })
        .collect()
}
