//! Column layouts for the three MovieLens input tables.
//!
//! Every load goes through an explicit [`Schema`]: an ordered list of named,
//! typed columns. The three fixed layouts (movies, ratings, links) are
//! constructed from a [`ColumnNames`] value so callers can override the
//! column naming in one place without touching the loader.

use serde::{Deserialize, Serialize};

/// The type a column's fields are coerced to on load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    Int,
    Float,
    Str,
    /// Calendar timestamp (UTC); produced by epoch-seconds conversion
    Timestamp,
}

/// A single named, typed column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub ty: ColumnType,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Ordered column layout a file is loaded against.
///
/// Field order in the file must match column order here; rows with fewer
/// fields than `len()` are a schema mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Layout of `movies.csv`: movieId, title, genres
    pub fn movies(names: &ColumnNames) -> Self {
        Self::new(vec![
            Column::new(&names.movie_id, ColumnType::Int),
            Column::new(&names.title, ColumnType::Str),
            Column::new(&names.genres, ColumnType::Str),
        ])
    }

    /// Layout of `ratings.csv`: userId, movieId, rating, timestamp
    ///
    /// The timestamp column is declared as integer epoch seconds; the loader
    /// reinterprets it as a calendar timestamp when asked to.
    pub fn ratings(names: &ColumnNames) -> Self {
        Self::new(vec![
            Column::new(&names.user_id, ColumnType::Int),
            Column::new(&names.movie_id, ColumnType::Int),
            Column::new(&names.rating, ColumnType::Float),
            Column::new(&names.timestamp, ColumnType::Int),
        ])
    }

    /// Layout of `links.csv`: movieId, imdbId, tmdbId
    pub fn links(names: &ColumnNames) -> Self {
        Self::new(vec![
            Column::new(&names.movie_id, ColumnType::Int),
            Column::new(&names.imdb_id, ColumnType::Int),
            Column::new(&names.tmdb_id, ColumnType::Int),
        ])
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of declared columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Declared type of a column by name
    pub fn column_type(&self, name: &str) -> Option<ColumnType> {
        self.columns.iter().find(|c| c.name == name).map(|c| c.ty)
    }
}

/// Column names shared by the three layouts.
///
/// Constructed once (typically inside the pipeline configuration) and never
/// mutated afterwards. `Default` gives the names the public dataset ships
/// with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnNames {
    pub user_id: String,
    pub movie_id: String,
    pub title: String,
    pub genres: String,
    pub rating: String,
    pub timestamp: String,
    pub imdb_id: String,
    pub tmdb_id: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            user_id: "userId".to_string(),
            movie_id: "movieId".to_string(),
            title: "title".to_string(),
            genres: "genres".to_string(),
            rating: "rating".to_string(),
            timestamp: "timestamp".to_string(),
            imdb_id: "imdbId".to_string(),
            tmdb_id: "tmdbId".to_string(),
        }
    }
}
