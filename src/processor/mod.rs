use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use thiserror::Error;

pub mod column;
pub mod hierarchy;
pub mod report;
pub mod schema;
pub mod table;

/// Error type used across the crate
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("no file named {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Duplicate header: {0}")]
    DuplicateHeader(String),

    #[error("Row {row}: expected {expected} fields, got {found}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Row {row}: salary {value:?} is not an integer: {source}")]
    SalaryParse {
        row: usize,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Invalid menu selection: {0:?}")]
    InvalidSelection(String),
}

/// Department name -> distinct division/team names
pub type DepartmentHierarchy = BTreeMap<String, BTreeSet<String>>;

/// Department name -> salary summary
pub type SalaryReport = BTreeMap<String, DepartmentSummary>;

/// Salary and headcount figures for one department
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartmentSummary {
    pub min_salary: i64,
    pub max_salary: i64,
    pub head_count: usize,
    /// Mean salary in hundredths, already rounded; wide enough for any `i64` mean
    pub mean_cents: i128,
}

impl DepartmentSummary {
    /// Mean salary rounded to 2 decimal places
    pub fn mean_salary(&self) -> f64 {
        self.mean_cents as f64 / 100.0
    }
}
