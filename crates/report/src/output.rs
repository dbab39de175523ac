//! Result writers for the two output artifacts.

use crate::error::{ReportError, Result};
use crate::genre::GenreReportRow;
use crate::histogram::RatingHistogram;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Name of the single part file inside the genre-report directory
const PART_FILE: &str = "part-00000.csv";

/// Write the rating report as a UTF-8 JSON object, overwriting `path`.
///
/// The object maps the movie title to its per-movie counts and the
/// `hist_all_key` to the dataset-wide counts, in that insertion order. The
/// file's existence is verified after the write; absence is a fatal
/// [`ReportError::WriteVerification`].
pub fn write_rating_report(
    path: &Path,
    title: &str,
    movie_hist: &RatingHistogram,
    all_hist: &RatingHistogram,
    hist_all_key: &str,
) -> Result<()> {
    let mut payload = serde_json::Map::new();
    payload.insert(
        title.to_string(),
        serde_json::to_value(movie_hist.counts())?,
    );
    payload.insert(
        hist_all_key.to_string(),
        serde_json::to_value(all_hist.counts())?,
    );

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &payload)?;
    writer.flush()?;

    if !path.exists() {
        return Err(ReportError::WriteVerification {
            path: path.display().to_string(),
        });
    }
    debug!("Verified rating report at {}", path.display());
    Ok(())
}

/// Write the genre report into `dir` as a headerless delimited part file.
///
/// Prior contents of the directory are removed entirely; a rerun replaces,
/// never merges. Null ids serialize as empty fields.
pub fn write_genre_report(dir: &Path, rows: &[GenreReportRow]) -> Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => {}
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(err.into()),
    }
    fs::create_dir_all(dir)?;

    let part_path = dir.join(PART_FILE);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&part_path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    debug!("Wrote {} genre rows to {}", rows.len(), part_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::histogram::{histogram_for_all, histogram_for_movie};
    use data_loader::{ColumnNames, Schema, Table, Value};
    use engine::EngineSession;

    fn small_histograms() -> (RatingHistogram, RatingHistogram) {
        let session = EngineSession::builder().worker_threads(2).build().unwrap();
        let names = ColumnNames::default();
        let table = Table::with_rows(
            Schema::ratings(&names),
            vec![
                vec![Value::Int(1), Value::Int(1), Value::Float(4.0), Value::Null],
                vec![Value::Int(2), Value::Int(1), Value::Float(4.0), Value::Null],
                vec![Value::Int(3), Value::Int(2), Value::Float(3.0), Value::Null],
            ],
        );
        let movie = histogram_for_movie(&session, &table, &names, 1).unwrap();
        let all = histogram_for_all(&session, &table, &names).unwrap();
        (movie, all)
    }

    #[test]
    fn test_json_payload_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        let (movie, all) = small_histograms();

        write_rating_report(&path, "Toy Story", &movie, &all, "hist_all").unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw, r#"{"Toy Story":[2],"hist_all":[1,2]}"#);
    }

    #[test]
    fn test_json_overwrites_prior_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        fs::write(&path, "stale").unwrap();
        let (movie, all) = small_histograms();

        write_rating_report(&path, "Toy Story", &movie, &all, "hist_all").unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with('{'));
        assert!(!raw.contains("stale"));
    }

    #[test]
    fn test_csv_rows_and_null_fields() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("results");
        let rows = vec![
            GenreReportRow {
                title: Some("A".to_string()),
                imdb_id: Some(100),
                tmdb_id: Some(200),
            },
            GenreReportRow {
                title: Some("B".to_string()),
                imdb_id: None,
                tmdb_id: None,
            },
        ];

        write_genre_report(&out, &rows).unwrap();

        let raw = fs::read_to_string(out.join("part-00000.csv")).unwrap();
        assert_eq!(raw, "A,100,200\nB,,\n");
    }

    #[test]
    fn test_directory_contents_are_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("results");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("leftover.csv"), "old").unwrap();

        write_genre_report(&out, &[]).unwrap();

        assert!(!out.join("leftover.csv").exists());
        assert!(out.join("part-00000.csv").exists());
    }

    #[test]
    fn test_empty_report_still_writes_part_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("results");

        write_genre_report(&out, &[]).unwrap();

        let raw = fs::read_to_string(out.join("part-00000.csv")).unwrap();
        assert!(raw.is_empty());
    }
}
