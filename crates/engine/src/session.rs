//! The engine session: a named, scoped worker-thread pool.
//!
//! The underlying tabular engine is Rayon; the session wraps a dedicated
//! `ThreadPool` so that parallel scans and aggregations run on threads the
//! pipeline owns, not the global pool. Dropping the session tears the pool
//! down.

use crate::error::{EngineError, Result};
use rayon::ThreadPool;
use tracing::debug;

/// Builder for [`EngineSession`].
///
/// ## Usage
/// ```ignore
/// let session = EngineSession::builder()
///     .app_name("reel-report")
///     .worker_threads(4)
///     .build()?;
/// ```
pub struct SessionBuilder {
    app_name: String,
    worker_threads: usize,
}

impl SessionBuilder {
    fn new() -> Self {
        Self {
            app_name: "engine".to_string(),
            // 0 means "one worker per available core"
            worker_threads: 0,
        }
    }

    /// Set the application name reported by the session.
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    /// Set the number of worker threads. Zero uses all available cores.
    pub fn worker_threads(mut self, n: usize) -> Self {
        self.worker_threads = n;
        self
    }

    /// Acquire the session, starting its worker-thread pool.
    pub fn build(self) -> Result<EngineSession> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.worker_threads)
            .thread_name({
                let name = self.app_name.clone();
                move |i| format!("{name}-worker-{i}")
            })
            .build()
            .map_err(|source| EngineError::PoolBuild {
                name: self.app_name.clone(),
                source,
            })?;

        debug!(
            "Started session '{}' with {} worker threads",
            self.app_name,
            pool.current_num_threads()
        );

        Ok(EngineSession {
            app_name: self.app_name,
            pool,
        })
    }
}

/// Execution context shared by the loader and the report builders.
///
/// Holds the worker-thread pool for the lifetime of a run. Components take
/// `&EngineSession` and route parallel work through [`install`](Self::install)
/// or [`join`](Self::join).
pub struct EngineSession {
    app_name: String,
    pool: ThreadPool,
}

impl EngineSession {
    /// Start building a session.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// The application name this session was acquired with.
    pub fn name(&self) -> &str {
        &self.app_name
    }

    /// Number of worker threads in the pool.
    pub fn worker_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run `op` inside the session pool.
    ///
    /// Rayon parallel iterators used within `op` execute on the session's
    /// workers rather than the global pool.
    pub fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }

    /// Run two closures concurrently on the session pool and return both
    /// results.
    pub fn join<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        self.pool.install(|| rayon::join(a, b))
    }
}

impl Drop for EngineSession {
    fn drop(&mut self) {
        // ThreadPool shuts its workers down when dropped; this just records
        // the release so session lifetime is visible in the logs.
        debug!("Stopped session '{}'", self.app_name);
    }
}
