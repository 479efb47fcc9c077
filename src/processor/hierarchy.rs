use std::collections::BTreeSet;
use tracing::debug;

use crate::processor::{DepartmentHierarchy, schema::ResolvedSchema, table::Table};

/// Groups division/team names under the department of each row
///
/// Every department that appears in the data gets an entry; each division is
/// listed once per department no matter how many rows repeat it.
///
/// # Example
/// ```rust
/// # use department_report::{SchemaMapping, Table, build_hierarchy};
/// let table = Table::from_reader("id;dept;team;salary\n1;A;X;100\n2;A;Y;300\n".as_bytes()).unwrap();
/// let schema = SchemaMapping::default().resolve(&table).unwrap();
/// let hierarchy = build_hierarchy(&table, &schema);
/// assert_eq!(hierarchy["A"].len(), 2);
/// ```
pub fn build_hierarchy(table: &Table, schema: &ResolvedSchema) -> DepartmentHierarchy {
    let mut out = DepartmentHierarchy::new();

    let (Some(departments), Some(divisions)) =
        (table.column(schema.department), table.column(schema.division))
    else {
        return out;
    };

    for (department, division) in departments.iter_str().zip(divisions.iter_str()) {
        out.entry(department.to_string())
            .or_insert_with(BTreeSet::new)
            .insert(division.to_string());
    }

    debug!(departments = out.len(), "built hierarchy");
    out
}
