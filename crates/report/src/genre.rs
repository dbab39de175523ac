//! The genre report: filter movies by genre label, left-join to links.

use crate::error::{ReportError, Result};
use data_loader::{ColumnNames, Table};
use engine::EngineSession;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;

/// One output row of the genre report.
///
/// Identifiers are optional: a movie without a link row keeps its place in
/// the report with both ids null.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreReportRow {
    pub title: Option<String>,
    pub imdb_id: Option<i64>,
    pub tmdb_id: Option<i64>,
}

/// Normalize a genre label the way the pipeline matches it: first character
/// uppercased, remainder lowercased.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Build the genre report.
///
/// `genre_label` is expected to be already normalized. Matching is substring
/// containment against the genres field, case-sensitive; the left join
/// preserves every matching movie row and fans out when a movie id has
/// several link rows. Row order follows the movies table.
pub fn genre_report(
    session: &EngineSession,
    movies: &Table,
    links: &Table,
    columns: &ColumnNames,
    genre_label: &str,
) -> Result<Vec<GenreReportRow>> {
    let movie_id_idx = column(movies, &columns.movie_id)?;
    let title_idx = column(movies, &columns.title)?;
    let genres_idx = column(movies, &columns.genres)?;
    let link_id_idx = column(links, &columns.movie_id)?;
    let imdb_idx = column(links, &columns.imdb_id)?;
    let tmdb_idx = column(links, &columns.tmdb_id)?;

    // Right side of the join, keyed by movie id. Link rows with a null id
    // can never match and are skipped.
    let mut link_index: HashMap<i64, Vec<(Option<i64>, Option<i64>)>> = HashMap::new();
    for row in links.rows() {
        if let Some(id) = row[link_id_idx].as_int() {
            link_index
                .entry(id)
                .or_default()
                .push((row[imdb_idx].as_int(), row[tmdb_idx].as_int()));
        }
    }

    let rows = session.install(|| {
        movies
            .rows()
            .par_iter()
            .filter(|row| {
                row[genres_idx]
                    .as_str()
                    .is_some_and(|genres| genres.contains(genre_label))
            })
            .flat_map_iter(|row| {
                let title = row[title_idx].as_str().map(str::to_string);
                let matches = row[movie_id_idx]
                    .as_int()
                    .and_then(|id| link_index.get(&id));
                match matches {
                    Some(link_rows) => link_rows
                        .iter()
                        .map(|&(imdb_id, tmdb_id)| GenreReportRow {
                            title: title.clone(),
                            imdb_id,
                            tmdb_id,
                        })
                        .collect::<Vec<_>>(),
                    // Left join: the movie row survives without a link
                    None => vec![GenreReportRow {
                        title,
                        imdb_id: None,
                        tmdb_id: None,
                    }],
                }
            })
            .collect()
    });

    Ok(rows)
}

fn column(table: &Table, name: &str) -> Result<usize> {
    table
        .column_index(name)
        .ok_or_else(|| ReportError::MissingColumn {
            name: name.to_string(),
        })
}
