use std::collections::BTreeMap;
use tracing::debug;

use crate::{
    helpers::stats::SalaryStats,
    processor::{
        DepartmentSummary, ProcessorError, SalaryReport, schema::ResolvedSchema, table::Table,
    },
};

/// Per-department salary summary: min, max, head count and mean
///
/// Salary cells are parsed as integers. The first cell that is not an integer
/// aborts the whole report; no partial result is returned.
///
/// The mean is `sum / head_count` rounded to 2 decimal places, halves away from
/// zero, computed on the exact quotient.
///
/// # Errors
/// [`ProcessorError::SalaryParse`] with the 1-based data row of the bad cell.
///
/// # Example
/// ```rust
/// # use department_report::{SchemaMapping, Table, build_report};
/// let table = Table::from_reader("id;dept;team;salary\n1;A;X;100\n2;A;Y;300\n".as_bytes()).unwrap();
/// let schema = SchemaMapping::default().resolve(&table).unwrap();
/// let report = build_report(&table, &schema).unwrap();
/// assert_eq!(report["A"].mean_salary(), 200.0);
/// ```
pub fn build_report(table: &Table, schema: &ResolvedSchema) -> Result<SalaryReport, ProcessorError> {
    let mut groups: BTreeMap<&str, SalaryStats> = BTreeMap::new();

    if let (Some(departments), Some(salaries)) =
        (table.column(schema.department), table.column(schema.salary))
    {
        // (row, department, parsed salary)
        for (i, (department, salary)) in departments
            .iter_str()
            .zip(salaries.iter_i64())
            .enumerate()
        {
            let v = salary.map_err(|source| ProcessorError::SalaryParse {
                row: i + 1,
                value: salaries.get(i).unwrap_or_default().to_string(),
                source,
            })?;
            groups.entry(department).or_default().push(v);
        }
    }

    let report: SalaryReport = groups
        .into_iter()
        .map(|(department, stats)| (department.to_string(), summarize(&stats)))
        .collect();

    debug!(departments = report.len(), "built salary report");
    Ok(report)
}

fn summarize(stats: &SalaryStats) -> DepartmentSummary {
    DepartmentSummary {
        min_salary: stats.min(),
        max_salary: stats.max(),
        head_count: stats.count(),
        mean_cents: stats.mean_cents(),
    }
}
