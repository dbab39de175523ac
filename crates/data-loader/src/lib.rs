//! # Data Loader Crate
//!
//! Schema-validated loading of the MovieLens flat tables.
//!
//! ## Main Components
//!
//! - **schema**: Column layouts for the three input tables
//! - **table**: The tabular value type (`Table`, `Row`, `Value`)
//! - **reader**: CSV loading with per-field null coercion
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{load_csv, ColumnNames, LoadOptions, Schema};
//! use engine::EngineSession;
//! use std::path::Path;
//!
//! let session = EngineSession::builder().app_name("loader").build()?;
//! let names = ColumnNames::default();
//!
//! let ratings = load_csv(
//!     &session,
//!     Path::new("./ml-25m/ratings.csv"),
//!     &Schema::ratings(&names),
//!     LoadOptions { convert_epoch_to_timestamp: true, ..Default::default() },
//! )?;
//!
//! println!("Loaded {} ratings", ratings.len());
//! ```

// Public modules
pub mod error;
pub mod reader;
pub mod schema;
pub mod table;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use reader::{LoadOptions, load_csv};
pub use schema::{Column, ColumnNames, ColumnType, Schema};
pub use table::{Row, Table, Value};
