//! Top-level error type.
//!
//! Each area keeps its own error enum; `AppError` wraps them for the places
//! that cross areas, such as startup.

pub use crate::catalog::CatalogError;
pub use crate::config::ConfigError;
pub use crate::state::StateError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("State error: {0}")]
    State(#[from] StateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A global logger was already installed
    #[error("Logger error: {0}")]
    Logger(String),

    /// The network thread's runtime could not be built
    #[error("Failed to create runtime: {0}")]
    RuntimeCreation(String),
}

pub type AppResult<T> = Result<T, AppError>;
