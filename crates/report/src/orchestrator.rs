//! # Report Orchestrator
//!
//! Sequences one full run of the pipeline:
//! 1. Load the three source tables on the session pool
//! 2. Build the per-movie histogram and look up the movie title
//! 3. Build the dataset-wide histogram
//! 4. Write and verify the rating-report JSON
//! 5. Build the genre report and write the CSV directory
//!
//! Any failure aborts the run where it happens; in particular a JSON
//! write-verification failure stops the genre report from being attempted.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use data_loader::{LoadOptions, Schema, Table, load_csv};
use engine::EngineSession;

use crate::config::ReportConfig;
use crate::error::Result;
use crate::genre::{capitalize, genre_report};
use crate::histogram::{histogram_for_all, histogram_for_movie};
use crate::lookup::title_of;
use crate::output::{write_genre_report, write_rating_report};

/// Main orchestrator wiring loader, builders, and writers together
pub struct ReportOrchestrator {
    session: Arc<EngineSession>,
    config: ReportConfig,
}

impl ReportOrchestrator {
    /// Create an orchestrator over an acquired session and a fixed
    /// configuration.
    pub fn new(session: Arc<EngineSession>, config: ReportConfig) -> Self {
        Self { session, config }
    }

    /// Run the pipeline for one movie id and one raw genre label.
    ///
    /// The label is normalized (capitalized) here; everything downstream
    /// sees the normalized form.
    pub fn run(&self, movie_id: i64, genre: &str) -> Result<()> {
        let start = Instant::now();
        let genre_label = capitalize(genre);
        info!(
            "Starting run on session '{}': movie id {}, genre '{}'",
            self.session.name(),
            movie_id,
            genre_label
        );

        let (ratings, movies, links) = self.load_tables()?;
        info!(
            "Loaded {} ratings, {} movies, {} links",
            ratings.len(),
            movies.len(),
            links.len()
        );

        let movie_hist = histogram_for_movie(&self.session, &ratings, &self.config.columns, movie_id)?;
        let title = title_of(&movies, &self.config.columns, movie_id)?;
        info!(
            "Histogram for '{}': {} whole-number ratings across {} values",
            title,
            movie_hist.total(),
            movie_hist.len()
        );

        let all_hist = histogram_for_all(&self.session, &ratings, &self.config.columns)?;
        info!(
            "Dataset-wide histogram: {} whole-number ratings across {} values",
            all_hist.total(),
            all_hist.len()
        );

        let json_path = &self.config.outputs.rating_report;
        write_rating_report(
            json_path,
            &title,
            &movie_hist,
            &all_hist,
            &self.config.hist_all_key,
        )?;
        info!("File {} was written successfully!", json_path.display());

        let report = genre_report(
            &self.session,
            &movies,
            &links,
            &self.config.columns,
            &genre_label,
        )?;
        info!("Genre report for '{}': {} rows", genre_label, report.len());
        write_genre_report(&self.config.outputs.genre_report_dir, &report)?;

        info!("Run finished in {:.2?}", start.elapsed());
        Ok(())
    }

    /// Load ratings, movies, and links concurrently on the session pool.
    ///
    /// Only the ratings table carries the epoch-to-timestamp conversion.
    fn load_tables(&self) -> Result<(Table, Table, Table)> {
        let columns = &self.config.columns;
        let inputs = &self.config.inputs;
        let session = &self.session;

        let (ratings, (movies, links)) = session.join(
            || {
                load_csv(
                    session,
                    &inputs.ratings,
                    &Schema::ratings(columns),
                    LoadOptions {
                        convert_epoch_to_timestamp: true,
                        ..LoadOptions::default()
                    },
                )
            },
            || {
                rayon::join(
                    || {
                        load_csv(
                            session,
                            &inputs.movies,
                            &Schema::movies(columns),
                            LoadOptions::default(),
                        )
                    },
                    || {
                        load_csv(
                            session,
                            &inputs.links,
                            &Schema::links(columns),
                            LoadOptions::default(),
                        )
                    },
                )
            },
        );

        Ok((ratings?, movies?, links?))
    }
}
