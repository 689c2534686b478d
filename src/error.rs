/*
 * Responsibility
 * - Library-level AppError
 * - Collects config / chain assembly failures; `validate` itself never fails
 */
use thiserror::Error;

use crate::config::ConfigError;
use crate::services::auth::ChainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Chain(#[from] ChainError),
}
