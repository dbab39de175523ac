//! # Report Crate
//!
//! Builds the two reporting artifacts from the loaded MovieLens tables.
//!
//! ## Main Components
//!
//! - **config**: The pipeline configuration object
//! - **histogram**: Whole-number rating histograms (per movie and dataset-wide)
//! - **lookup**: Movie-title lookup
//! - **genre**: Genre filter plus left join against the links table
//! - **output**: JSON and CSV-directory writers
//! - **orchestrator**: Sequences one full run
//! - **error**: Error types for report building

pub mod config;
pub mod error;
pub mod genre;
pub mod histogram;
pub mod lookup;
pub mod orchestrator;
pub mod output;

// Re-export commonly used types for convenience
pub use config::{InputPaths, OutputPaths, ReportConfig};
pub use error::{ReportError, Result};
pub use genre::{GenreReportRow, capitalize, genre_report};
pub use histogram::{RatingHistogram, histogram_for_all, histogram_for_movie};
pub use lookup::title_of;
pub use orchestrator::ReportOrchestrator;
pub use output::{write_genre_report, write_rating_report};
