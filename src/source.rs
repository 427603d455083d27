//! Data sources supplying the displayed table.
//!
//! A source exposes ordered column names and rows of display strings. It
//! is polled once per refresh tick, so reads must stay cheap — both
//! file-backed implementations simply re-read the file on every call.

#[cfg(test)]
use mockall::automock;

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use crate::error::{SourceError, SourceResult};

/// Supplies tabular data for display.
#[cfg_attr(test, automock)]
pub trait DataSource: Send {
    /// Human readable name shown in the title bar
    fn name(&self) -> String;
    /// Ordered column names
    fn columns(&self) -> SourceResult<Vec<String>>;
    /// Rows of display strings, one cell per column
    fn rows(&self) -> SourceResult<Vec<Vec<String>>>;
}

/// An immutable view of the table data at one point in time. Replaced,
/// never mutated, on each refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSnapshot {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableSnapshot {
    /// Validates and constructs a snapshot. Column names must be unique
    /// and every row must have exactly one cell per column.
    pub fn new(
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> SourceResult<Self> {
        let mut seen: HashSet<&String> = HashSet::new();

        for column in columns.iter() {
            if !seen.insert(column) {
                return Err(SourceError::Shape(format!(
                    "duplicate column name: {column}"
                )));
            }
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(SourceError::Shape(format!(
                    "row {i} has {} cells, expected {}",
                    row.len(),
                    columns.len()
                )));
            }
        }

        Ok(Self { columns, rows })
    }

    /// Builds a snapshot by querying the given source.
    pub fn from_source(source: &dyn DataSource) -> SourceResult<Self> {
        let columns = source.columns()?;
        let rows = source.rows()?;
        Self::new(columns, rows)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
impl TableSnapshot {
    /// Three row sample table used across unit tests.
    pub fn sample() -> Self {
        Self::new(
            vec!["name".into(), "age".into(), "score".into()],
            vec![
                vec!["Alice".into(), "25".into(), "88.5".into()],
                vec!["Bob".into(), "30".into(), "92.0".into()],
                vec!["Charlie".into(), "35".into(), "77.5".into()],
            ],
        )
        .expect("sample data is well formed")
    }
}

/// Reads a delimited text file (`.csv` or `.tsv`). The first record is
/// treated as the header row.
pub struct CsvFileSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvFileSource {
    pub fn new(path: PathBuf, delimiter: u8) -> Self {
        Self { path, delimiter }
    }

    // flexible readers pass ragged rows through so snapshot validation can
    // report them as shape errors rather than parse errors
    fn reader(&self) -> SourceResult<csv::Reader<fs::File>> {
        let reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_path(&self.path)?;
        Ok(reader)
    }
}

impl DataSource for CsvFileSource {
    fn name(&self) -> String {
        file_display_name(&self.path)
    }

    fn columns(&self) -> SourceResult<Vec<String>> {
        let mut reader = self.reader()?;
        let headers = reader.headers()?;
        Ok(headers.iter().map(|h| h.to_string()).collect())
    }

    fn rows(&self) -> SourceResult<Vec<Vec<String>>> {
        let mut reader = self.reader()?;
        let mut rows = Vec::new();

        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }

        Ok(rows)
    }
}

/// Reads a JSON file holding an array of flat objects. Column order
/// follows the first object; missing keys render as empty cells.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn records(
        &self,
    ) -> SourceResult<Vec<serde_json::Map<String, serde_json::Value>>> {
        let data = fs::read_to_string(&self.path)?;
        let records = serde_json::from_str(&data)?;
        Ok(records)
    }
}

impl DataSource for JsonFileSource {
    fn name(&self) -> String {
        file_display_name(&self.path)
    }

    fn columns(&self) -> SourceResult<Vec<String>> {
        let records = self.records()?;
        Ok(records
            .first()
            .map(|record| record.keys().cloned().collect())
            .unwrap_or_default())
    }

    fn rows(&self) -> SourceResult<Vec<Vec<String>>> {
        let records = self.records()?;
        let columns = records
            .first()
            .map(|record| record.keys().cloned().collect::<Vec<String>>())
            .unwrap_or_default();

        Ok(records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| display_value(record.get(column)))
                    .collect()
            })
            .collect())
    }
}

fn display_value(value: Option<&serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn file_display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Picks a data source implementation based on the file extension.
pub fn source_for_path(path: &Path) -> SourceResult<Box<dyn DataSource>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();

    match extension.as_str() {
        "csv" => Ok(Box::new(CsvFileSource::new(path.to_path_buf(), b','))),
        "tsv" => Ok(Box::new(CsvFileSource::new(path.to_path_buf(), b'\t'))),
        "json" => Ok(Box::new(JsonFileSource::new(path.to_path_buf()))),
        _ => Err(SourceError::Unsupported(path.display().to_string())),
    }
}

#[cfg(test)]
#[path = "./source_tests.rs"]
mod tests;
