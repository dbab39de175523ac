//! Error types for the engine crate.

use thiserror::Error;

/// Errors that can occur while acquiring a session
#[derive(Error, Debug)]
pub enum EngineError {
    /// The worker-thread pool could not be constructed
    #[error("Failed to start session '{name}': {source}")]
    PoolBuild {
        name: String,
        #[source]
        source: rayon::ThreadPoolBuildError,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, EngineError>;
