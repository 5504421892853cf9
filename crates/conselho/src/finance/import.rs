use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::dre::{parse_month, DreLine};

#[derive(Debug)]
pub enum PlanImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    UnknownLine { row: usize, line: String },
    InvalidMonth { row: usize, month: String },
}

impl fmt::Display for PlanImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(f, "failed to read plan file: {error}"),
            Self::Csv(error) => write!(f, "failed to parse plan CSV: {error}"),
            Self::UnknownLine { row, line } => {
                write!(f, "row {row}: unknown statement line '{line}'")
            }
            Self::InvalidMonth { row, month } => {
                write!(f, "row {row}: invalid month '{month}', expected YYYY-MM")
            }
        }
    }
}

impl std::error::Error for PlanImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(error) => Some(error),
            Self::Csv(error) => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PlanImportError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<csv::Error> for PlanImportError {
    fn from(error: csv::Error) -> Self {
        Self::Csv(error)
    }
}

/// One validated row of a `month,line,planned,real` plan file.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRow {
    pub year: i32,
    pub month: u32,
    pub line: DreLine,
    pub planned: f64,
    pub real: f64,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    month: String,
    line: String,
    #[serde(default)]
    planned: Option<f64>,
    #[serde(default)]
    real: Option<f64>,
}

/// Parses a plan CSV. The whole file is validated before anything is
/// applied; the first bad row fails the import.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<PlanRow>, PlanImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for (index, record) in csv_reader.deserialize::<RawRow>().enumerate() {
        let row_number = index + 2; // 1-based, after the header
        let raw = record?;
        let (year, month) = parse_month(&raw.month).ok_or(PlanImportError::InvalidMonth {
            row: row_number,
            month: raw.month.clone(),
        })?;
        let line = DreLine::from_key(&raw.line).ok_or(PlanImportError::UnknownLine {
            row: row_number,
            line: raw.line.clone(),
        })?;
        rows.push(PlanRow {
            year,
            month,
            line,
            planned: raw.planned.unwrap_or(0.0),
            real: raw.real.unwrap_or(0.0),
        });
    }

    Ok(rows)
}

pub fn from_path(path: &Path) -> Result<Vec<PlanRow>, PlanImportError> {
    let file = File::open(path)?;
    from_reader(file)
}
