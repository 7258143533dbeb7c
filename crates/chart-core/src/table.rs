// File: crates/chart-core/src/table.rs
// Summary: In-memory table of named columns loaded from a headered CSV file.
// Notes:
// - No schema is enforced at load time. A column whose cells are all numeric
//   (or missing) is stored as numbers; any other column keeps its text and only
//   fails when it is read as numbers.

use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

/// Cell spellings treated as a missing value in addition to the empty cell.
const MISSING_MARKERS: &[&str] = &["NA", "N/A", "null", "NULL"];

#[derive(Debug, Error)]
pub enum TableError {
    #[error("i/o error reading table: {0}")]
    Io(#[from] io::Error),
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("no column named '{0}'")]
    NoSuchColumn(String),
    #[error("row {row}, column '{column}': cannot parse '{value}' as a number")]
    Parse { row: usize, column: String, value: String },
    #[error("column '{column}' has {got} values but the table has {expected} rows")]
    LengthMismatch { column: String, expected: usize, got: usize },
}

#[derive(Clone, Debug, PartialEq)]
enum Cells {
    Numeric(Vec<Option<f64>>),
    /// `first_bad` is the 0-based row of the first cell that is not a number.
    Text { raw: Vec<String>, first_bad: usize },
}

impl Cells {
    fn from_raw(raw: Vec<String>) -> Self {
        let mut values = Vec::with_capacity(raw.len());
        for (row, cell) in raw.iter().enumerate() {
            match parse_cell(cell) {
                Some(v) => values.push(v),
                None => return Cells::Text { raw, first_bad: row },
            }
        }
        Cells::Numeric(values)
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Column {
    name: String,
    cells: Cells,
}

/// Rows are addressed by position; every column holds exactly `len()` cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    /// Open and parse a headered CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading table");
        let file = std::fs::File::open(path)?;
        Self::from_reader(io::BufReader::new(file))
    }

    /// Parse a headered CSV stream. Only the record structure is checked here.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, TableError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let names = rdr
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>();
        let mut raw: Vec<Vec<String>> = vec![Vec::new(); names.len()];

        let mut rows = 0usize;
        for rec in rdr.records() {
            let rec = rec?;
            rows += 1;
            for (col, cell) in raw.iter_mut().zip(rec.iter()) {
                col.push(cell.to_string());
            }
        }

        let columns = names
            .into_iter()
            .zip(raw)
            .map(|(name, raw)| Column { name, cells: Cells::from_raw(raw) })
            .collect::<Vec<_>>();
        let text = columns.iter().filter(|c| matches!(c.cells, Cells::Text { .. })).count();
        debug!(rows, columns = columns.len(), text_columns = text, "table parsed");
        Ok(Self { columns, rows })
    }

    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Numeric view of a column. A column holding any non-numeric cell
    /// reports the first such cell as a `Parse` error.
    pub fn column(&self, name: &str) -> Result<&[Option<f64>], TableError> {
        let col = self
            .columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| TableError::NoSuchColumn(name.to_string()))?;
        match &col.cells {
            Cells::Numeric(values) => Ok(values),
            Cells::Text { raw, first_bad } => Err(TableError::Parse {
                row: first_bad + 1,
                column: col.name.clone(),
                value: raw[*first_bad].clone(),
            }),
        }
    }

    /// Raw cells of a column that did not load as numbers.
    pub fn text_column(&self, name: &str) -> Option<&[String]> {
        self.columns.iter().find(|c| c.name == name).and_then(|c| match &c.cells {
            Cells::Text { raw, .. } => Some(raw.as_slice()),
            Cells::Numeric(_) => None,
        })
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Names from `required` that the table lacks, in `required` order.
    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|name| !self.has_column(name))
            .map(|name| name.to_string())
            .collect()
    }

    /// Add a numeric column, replacing any existing column of the same name.
    /// The first column added to a column-less table defines the row count.
    pub fn insert_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<Option<f64>>,
    ) -> Result<(), TableError> {
        let name = name.into();
        if self.columns.is_empty() {
            self.rows = values.len();
        } else if values.len() != self.rows {
            return Err(TableError::LengthMismatch {
                column: name,
                expected: self.rows,
                got: values.len(),
            });
        }
        let cells = Cells::Numeric(values);
        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.cells = cells,
            None => self.columns.push(Column { name, cells }),
        }
        Ok(())
    }
}

/// `Some(None)` for a missing cell, `Some(Some(v))` for a number, `None` when unparseable.
/// NaN in any spelling `f64::from_str` accepts ("NaN", "nan", "NAN", ...) is missing.
fn parse_cell(cell: &str) -> Option<Option<f64>> {
    let cell = cell.trim();
    if cell.is_empty() || MISSING_MARKERS.contains(&cell) {
        return Some(None);
    }
    cell.parse::<f64>().ok().map(|v| (!v.is_nan()).then_some(v))
}
