//! Console rendering and delimited export of hierarchies and reports.

use csv::WriterBuilder;
use std::{
    fs::File,
    io::{self, Write},
    path::PathBuf,
};
use tracing::info;

use crate::processor::{
    DepartmentHierarchy, ProcessorError, SalaryReport,
    table::{DELIMITER, resolve_csv_path},
};

/// Header row of an exported report
pub const REPORT_HEADER: [&str; 5] = [
    "Department",
    "Min salary",
    "Max salary",
    "Head count",
    "Mean salary",
];

/// Formats a mean held in hundredths with at least one fractional digit
///
/// `20000` -> `200.0`, `10030` -> `100.3`, `10033` -> `100.33`
pub fn format_mean(cents: i128) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let (whole, frac) = (abs / 100, abs % 100);
    if frac % 10 == 0 {
        format!("{sign}{whole}.{}", frac / 10)
    } else {
        format!("{sign}{whole}.{frac:02}")
    }
}

pub fn write_hierarchy<W: Write>(hierarchy: &DepartmentHierarchy, out: &mut W) -> io::Result<()> {
    for (department, teams) in hierarchy {
        writeln!(out, "Department {department} consists of {} teams:", teams.len())?;
        for team in teams {
            writeln!(out, "----{team}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_report<W: Write>(report: &SalaryReport, out: &mut W) -> io::Result<()> {
    for (department, summary) in report {
        writeln!(
            out,
            "Department: {department} has {} employees",
            summary.head_count
        )?;
        writeln!(
            out,
            "--Salary range {}-{} per month",
            summary.min_salary, summary.max_salary
        )?;
        writeln!(
            out,
            "--Mean salary: {} per month",
            format_mean(summary.mean_cents)
        )?;
        writeln!(out)?;
    }
    Ok(())
}

/// Serializes `report` as `;`-delimited text, one row per department
pub fn write_report_csv<W: Write>(report: &SalaryReport, out: W) -> Result<(), ProcessorError> {
    let mut writer = WriterBuilder::new().delimiter(DELIMITER).from_writer(out);
    writer.write_record(REPORT_HEADER)?;
    for (department, summary) in report {
        writer.write_record([
            department.clone(),
            summary.min_salary.to_string(),
            summary.max_salary.to_string(),
            summary.head_count.to_string(),
            format_mean(summary.mean_cents),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes `report` to `name` (`.csv` appended when missing) and returns the path
pub fn export_report(report: &SalaryReport, name: &str) -> Result<PathBuf, ProcessorError> {
    let path = resolve_csv_path(name);
    let file = File::create(&path)?;
    write_report_csv(report, file)?;
    info!(path = %path.display(), departments = report.len(), "exported report");
    Ok(path)
}
