//! # department_report
//!
//! Reads a `;`-delimited employee file and derives one of three views:
//!
//! - the hierarchy of departments and the teams in each
//! - a per-department salary summary (head count, min/max, mean)
//! - that summary written back as a `;`-delimited file
//!
//! # Features
//!
//! - **Columnar loading**: memory-mapped file, cells kept as raw strings per column
//! - **Schema mapping**: department / division / salary picked by position or header name
//! - **Aggregation**: min, max, count and exact 2-place mean per department
//!
//! # Example
//!
//! ```rust,no_run
//! use department_report::{SchemaMapping, Table, build_hierarchy, build_report};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // "staff" resolves to staff.csv
//!     let table = Table::load_csv("staff")?;
//!     let schema = SchemaMapping::default().resolve(&table)?;
//!
//!     for (department, teams) in build_hierarchy(&table, &schema) {
//!         println!("{department}: {teams:?}");
//!     }
//!
//!     let report = build_report(&table, &schema)?;
//!     for (department, summary) in &report {
//!         println!("{department} => {summary:?}");
//!     }
//!
//!     Ok(())
//! }
//! ```

mod helpers;
pub mod menu;
pub mod output;
pub mod processor;

pub use menu::MenuChoice;
pub use processor::{
    DepartmentHierarchy, DepartmentSummary, ProcessorError, SalaryReport,
    hierarchy::build_hierarchy,
    report::build_report,
    schema::{ColumnRef, ResolvedSchema, SchemaMapping},
    table::{Table, resolve_csv_path},
};
