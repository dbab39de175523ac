//! Pipeline configuration.
//!
//! One [`ReportConfig`] value is constructed at the entry point and passed
//! down to every component; nothing reads paths or column names from
//! anywhere else. `Default` reproduces the fixed relative layout the
//! pipeline ships with.

use data_loader::ColumnNames;
use std::path::PathBuf;

/// Locations of the three source tables
#[derive(Debug, Clone)]
pub struct InputPaths {
    pub ratings: PathBuf,
    pub movies: PathBuf,
    pub links: PathBuf,
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            ratings: PathBuf::from("./ml-25m/ratings.csv"),
            movies: PathBuf::from("./ml-25m/movies.csv"),
            links: PathBuf::from("./ml-25m/links.csv"),
        }
    }
}

/// Locations of the two output artifacts
#[derive(Debug, Clone)]
pub struct OutputPaths {
    /// The rating-histogram JSON file, overwritten on each run
    pub rating_report: PathBuf,
    /// The genre-report directory, fully replaced on each run
    pub genre_report_dir: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            rating_report: PathBuf::from("./results.json"),
            genre_report_dir: PathBuf::from("./results/"),
        }
    }
}

/// Everything a run needs beyond its two CLI arguments.
///
/// Built once, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub inputs: InputPaths,
    pub outputs: OutputPaths,
    pub columns: ColumnNames,
    /// The JSON key holding the dataset-wide histogram
    pub hist_all_key: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            inputs: InputPaths::default(),
            outputs: OutputPaths::default(),
            columns: ColumnNames::default(),
            hist_all_key: "hist_all".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = ReportConfig::default();
        assert_eq!(config.inputs.ratings, PathBuf::from("./ml-25m/ratings.csv"));
        assert_eq!(config.outputs.rating_report, PathBuf::from("./results.json"));
        assert_eq!(config.hist_all_key, "hist_all");
        assert_eq!(config.columns.movie_id, "movieId");
    }
}
