//! # Engine Crate
//!
//! Execution context for the tabular pipeline.
//!
//! Every component that loads or aggregates data receives an explicit
//! [`EngineSession`] handle instead of reaching for ambient global state.
//! The session is acquired once at process start, shared by reference, and
//! released when the last handle drops, on success and error paths alike.

pub mod error;
pub mod session;

pub use error::{EngineError, Result};
pub use session::{EngineSession, SessionBuilder};
