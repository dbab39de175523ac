//! Title lookup.

use crate::error::{ReportError, Result};
use data_loader::{ColumnNames, Table};

/// Title of the first row matching `movie_id`.
///
/// An unknown movie id is a hard error; the pipeline has no fallback for
/// it. A matching row whose title coerced to null fails the same way,
/// since there is no title to report.
pub fn title_of(movies: &Table, columns: &ColumnNames, movie_id: i64) -> Result<String> {
    let id_idx = movies
        .column_index(&columns.movie_id)
        .ok_or_else(|| ReportError::MissingColumn {
            name: columns.movie_id.clone(),
        })?;
    let title_idx = movies
        .column_index(&columns.title)
        .ok_or_else(|| ReportError::MissingColumn {
            name: columns.title.clone(),
        })?;

    movies
        .rows()
        .iter()
        .find(|row| row[id_idx].as_int() == Some(movie_id))
        .and_then(|row| row[title_idx].as_str().map(str::to_string))
        .ok_or(ReportError::TitleNotFound { movie_id })
}
