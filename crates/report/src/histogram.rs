//! Rating histograms.
//!
//! A histogram counts occurrences of each whole-number rating value,
//! ordered ascending. Half-step ratings (3.5, 4.5, ...) are excluded by the
//! whole-number filter; null fields never match.

use crate::error::{ReportError, Result};
use data_loader::{ColumnNames, Table};
use engine::EngineSession;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Ordered mapping from whole-number rating value to occurrence count.
///
/// Keys are held as integers since only whole-number ratings pass the
/// filter; `entries()` exposes them as the float rating values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RatingHistogram {
    bins: BTreeMap<i64, u64>,
}

impl RatingHistogram {
    /// Counts in ascending rating order, the shape serialized to JSON
    pub fn counts(&self) -> Vec<u64> {
        self.bins.values().copied().collect()
    }

    /// (rating, count) pairs in ascending rating order
    pub fn entries(&self) -> Vec<(f64, u64)> {
        self.bins.iter().map(|(&r, &c)| (r as f64, c)).collect()
    }

    /// Count for one rating value, zero if absent
    pub fn count_for(&self, rating: f64) -> u64 {
        if rating.fract() != 0.0 {
            return 0;
        }
        self.bins.get(&(rating as i64)).copied().unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.bins.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Number of distinct rating values
    pub fn len(&self) -> usize {
        self.bins.len()
    }
}

/// Histogram of whole-number ratings for one movie.
///
/// A movie with no matching ratings yields an empty histogram, not an
/// error.
pub fn histogram_for_movie(
    session: &EngineSession,
    ratings: &Table,
    columns: &ColumnNames,
    movie_id: i64,
) -> Result<RatingHistogram> {
    build_histogram(session, ratings, columns, Some(movie_id))
}

/// Histogram of whole-number ratings across the entire dataset
pub fn histogram_for_all(
    session: &EngineSession,
    ratings: &Table,
    columns: &ColumnNames,
) -> Result<RatingHistogram> {
    build_histogram(session, ratings, columns, None)
}

fn build_histogram(
    session: &EngineSession,
    ratings: &Table,
    columns: &ColumnNames,
    movie_filter: Option<i64>,
) -> Result<RatingHistogram> {
    let movie_idx = ratings
        .column_index(&columns.movie_id)
        .ok_or_else(|| ReportError::MissingColumn {
            name: columns.movie_id.clone(),
        })?;
    let rating_idx = ratings
        .column_index(&columns.rating)
        .ok_or_else(|| ReportError::MissingColumn {
            name: columns.rating.clone(),
        })?;

    let bins = session.install(|| {
        ratings
            .rows()
            .par_iter()
            .fold(BTreeMap::new, |mut bins: BTreeMap<i64, u64>, row| {
                if let Some(wanted) = movie_filter {
                    if row[movie_idx].as_int() != Some(wanted) {
                        return bins;
                    }
                }
                // Whole-number filter: a fractional part excludes the row
                if let Some(rating) = row[rating_idx].as_float() {
                    if rating.fract() == 0.0 {
                        *bins.entry(rating as i64).or_insert(0) += 1;
                    }
                }
                bins
            })
            .reduce(BTreeMap::new, |mut merged, partial| {
                for (rating, count) in partial {
                    *merged.entry(rating).or_insert(0) += count;
                }
                merged
            })
    });

    Ok(RatingHistogram { bins })
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Schema, Table, Value};

    fn test_session() -> EngineSession {
        EngineSession::builder()
            .app_name("histogram-test")
            .worker_threads(2)
            .build()
            .unwrap()
    }

    fn ratings_table(rows: &[(i64, i64, f64)]) -> Table {
        let names = ColumnNames::default();
        let schema = Schema::ratings(&names);
        Table::with_rows(
            schema,
            rows.iter()
                .map(|&(user_id, movie_id, rating)| {
                    vec![
                        Value::Int(user_id),
                        Value::Int(movie_id),
                        Value::Float(rating),
                        Value::Int(1_000_000),
                    ]
                })
                .collect(),
        )
    }

    #[test]
    fn test_fractional_ratings_are_excluded() {
        let session = test_session();
        let names = ColumnNames::default();
        let table = ratings_table(&[(1, 1, 4.0), (2, 1, 3.5), (3, 1, 4.0)]);

        let hist = histogram_for_movie(&session, &table, &names, 1).unwrap();
        assert_eq!(hist.counts(), vec![2]);
        assert_eq!(hist.count_for(4.0), 2);
        assert_eq!(hist.count_for(3.5), 0);
    }

    #[test]
    fn test_movie_filter_restricts_rows() {
        let session = test_session();
        let names = ColumnNames::default();
        let table = ratings_table(&[(1, 1, 4.0), (2, 2, 4.0), (3, 2, 5.0)]);

        let hist = histogram_for_movie(&session, &table, &names, 2).unwrap();
        assert_eq!(hist.entries(), vec![(4.0, 1), (5.0, 1)]);
    }

    #[test]
    fn test_unknown_movie_yields_empty_histogram() {
        let session = test_session();
        let names = ColumnNames::default();
        let table = ratings_table(&[(1, 1, 4.0)]);

        let hist = histogram_for_movie(&session, &table, &names, 99).unwrap();
        assert!(hist.is_empty());
        assert!(hist.counts().is_empty());
    }

    #[test]
    fn test_histogram_for_all_ignores_movie_ids() {
        let session = test_session();
        let names = ColumnNames::default();
        let table = ratings_table(&[
            (1, 1, 4.0),
            (2, 2, 4.0),
            (3, 3, 1.0),
            (4, 4, 2.5),
            (5, 5, 5.0),
        ]);

        let hist = histogram_for_all(&session, &table, &names).unwrap();
        assert_eq!(hist.entries(), vec![(1.0, 1), (4.0, 2), (5.0, 1)]);
        assert_eq!(hist.counts(), vec![1, 2, 1]);
    }

    #[test]
    fn test_keys_ascend() {
        let session = test_session();
        let names = ColumnNames::default();
        let table = ratings_table(&[(1, 1, 5.0), (2, 1, 1.0), (3, 1, 3.0)]);

        let hist = histogram_for_movie(&session, &table, &names, 1).unwrap();
        let keys: Vec<f64> = hist.entries().iter().map(|&(r, _)| r).collect();
        assert_eq!(keys, vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_count_conservation() {
        let session = test_session();
        let names = ColumnNames::default();
        let rows: Vec<(i64, i64, f64)> = (0..100)
            .map(|i| (i, 1, if i % 2 == 0 { 4.0 } else { 3.5 }))
            .collect();
        let table = ratings_table(&rows);

        let hist = histogram_for_movie(&session, &table, &names, 1).unwrap();
        // 50 whole-number rows in the source, 50 counted
        assert_eq!(hist.total(), 50);
    }

    #[test]
    fn test_null_fields_never_match() {
        let session = test_session();
        let names = ColumnNames::default();
        let schema = Schema::ratings(&names);
        let table = Table::with_rows(
            schema,
            vec![
                vec![Value::Int(1), Value::Null, Value::Float(4.0), Value::Null],
                vec![Value::Int(2), Value::Int(1), Value::Null, Value::Null],
                vec![
                    Value::Int(3),
                    Value::Int(1),
                    Value::Float(5.0),
                    Value::Null,
                ],
            ],
        );

        let hist = histogram_for_movie(&session, &table, &names, 1).unwrap();
        assert_eq!(hist.entries(), vec![(5.0, 1)]);

        // Dataset-wide: the null-movie row still counts, the null-rating row
        // still cannot
        let all = histogram_for_all(&session, &table, &names).unwrap();
        assert_eq!(all.entries(), vec![(4.0, 1), (5.0, 1)]);
    }

    #[test]
    fn test_missing_column() {
        let session = test_session();
        let names = ColumnNames::default();
        let table = Table::with_rows(Schema::movies(&names), vec![]);

        let err = histogram_for_all(&session, &table, &names).unwrap_err();
        assert!(matches!(err, ReportError::MissingColumn { name } if name == "rating"));
    }
}
