//! Schema-validated CSV loading.
//!
//! Records are read off disk sequentially, then field coercion fans out
//! across the engine session's worker threads. Coercion failures become
//! null fields; structural problems (missing file, short records) fail the
//! whole load.

use crate::error::{DataLoadError, Result};
use crate::schema::{ColumnType, Schema};
use crate::table::{Row, Table, Value};
use engine::EngineSession;
use rayon::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// The column reinterpreted by epoch-seconds conversion, by its literal name
const EPOCH_COLUMN: &str = "timestamp";

/// Options controlling a single load
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Whether the first line of the file is a header row
    pub has_header: bool,
    /// Reinterpret the integer column named `timestamp` as epoch seconds,
    /// producing calendar timestamps
    pub convert_epoch_to_timestamp: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            convert_epoch_to_timestamp: false,
        }
    }
}

/// Load a delimited file into a [`Table`] against an explicit schema.
///
/// Field order in the file must match the schema's column order. A record
/// with fewer fields than the schema fails the load with
/// [`DataLoadError::SchemaMismatch`]; extra trailing fields are ignored.
/// Individual fields that fail coercion load as [`Value::Null`].
pub fn load_csv(
    session: &EngineSession,
    path: &Path,
    schema: &Schema,
    options: LoadOptions,
) -> Result<Table> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            DataLoadError::FileNotFound {
                path: path.display().to_string(),
                source,
            }
        } else {
            DataLoadError::Io(source)
        }
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(options.has_header)
        .flexible(true)
        .from_reader(BufReader::new(file));

    // Materialize the records before parsing so the structural check can
    // report a row number and the field coercion can run in parallel.
    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|source| DataLoadError::Csv {
            path: path.display().to_string(),
            source,
        })?;
        if record.len() < schema.len() {
            return Err(DataLoadError::SchemaMismatch {
                path: path.display().to_string(),
                row: idx + 1,
                expected: schema.len(),
                found: record.len(),
            });
        }
        records.push(record);
    }

    let out_schema = effective_schema(schema, options);
    let column_types: Vec<ColumnType> = out_schema.columns().iter().map(|c| c.ty).collect();

    let rows: Vec<Row> = session.install(|| {
        records
            .par_iter()
            .map(|record| {
                column_types
                    .iter()
                    .enumerate()
                    .map(|(i, &ty)| Value::parse(ty, &record[i]))
                    .collect()
            })
            .collect()
    });

    debug!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(Table::with_rows(out_schema, rows))
}

/// The schema of the produced table: identical to the declared one unless
/// epoch conversion flips the `timestamp` column to a calendar type.
fn effective_schema(schema: &Schema, options: LoadOptions) -> Schema {
    if !options.convert_epoch_to_timestamp {
        return schema.clone();
    }
    Schema::new(
        schema
            .columns()
            .iter()
            .map(|c| {
                let mut column = c.clone();
                if column.name == EPOCH_COLUMN {
                    column.ty = ColumnType::Timestamp;
                }
                column
            })
            .collect(),
    )
}
