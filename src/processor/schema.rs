use std::{convert::Infallible, fmt, str::FromStr};

use crate::processor::{ProcessorError, table::Table};

/// Reference to a column, either by header position or by header name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnRef {
    /// 0-based header position
    Index(usize),
    /// Last declared column
    Last,
    /// Header name
    Name(String),
}

impl ColumnRef {
    /// Header position this reference points at in `table`, if any
    pub fn locate(&self, table: &Table) -> Option<usize> {
        let count = table.column_count();
        match self {
            ColumnRef::Index(idx) => (*idx < count).then_some(*idx),
            ColumnRef::Last => count.checked_sub(1),
            ColumnRef::Name(name) => table.position(name),
        }
    }
}

impl FromStr for ColumnRef {
    type Err = Infallible;

    /// `last` selects the last column, plain digits an index, anything else a name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("last") {
            Ok(ColumnRef::Last)
        } else if let Ok(idx) = s.parse::<usize>() {
            Ok(ColumnRef::Index(idx))
        } else {
            Ok(ColumnRef::Name(s.to_string()))
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnRef::Index(idx) => write!(f, "column #{idx}"),
            ColumnRef::Last => write!(f, "last column"),
            ColumnRef::Name(name) => write!(f, "column {name:?}"),
        }
    }
}

/// Which columns carry the department, division/team and salary of a row
///
/// The default is the positional convention of employee exports:
/// `id; department; division; ...; salary`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaMapping {
    pub department: ColumnRef,
    pub division: ColumnRef,
    pub salary: ColumnRef,
}

impl Default for SchemaMapping {
    fn default() -> Self {
        SchemaMapping {
            department: ColumnRef::Index(1),
            division: ColumnRef::Index(2),
            salary: ColumnRef::Last,
        }
    }
}

/// Column indices of the three roles, checked against one table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSchema {
    pub department: usize,
    pub division: usize,
    pub salary: usize,
}

impl SchemaMapping {
    /// Resolves every role against `table`
    ///
    /// # Errors
    /// [`ProcessorError::Schema`] naming the first role that does not match a column.
    pub fn resolve(&self, table: &Table) -> Result<ResolvedSchema, ProcessorError> {
        let locate = |role: &str, col: &ColumnRef| {
            col.locate(table).ok_or_else(|| {
                ProcessorError::Schema(format!(
                    "{role} role expects {col}, but the table has {} column(s): {:?}",
                    table.column_count(),
                    table.headers()
                ))
            })
        };

        Ok(ResolvedSchema {
            department: locate("department", &self.department)?,
            division: locate("division", &self.division)?,
            salary: locate("salary", &self.salary)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(csv: &str) -> Table {
        Table::from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_default_mapping_is_positional() {
        let t = table("id;dept;team;grade;salary\n1;A;X;3;100\n");
        let resolved = SchemaMapping::default().resolve(&t).unwrap();
        assert_eq!(
            resolved,
            ResolvedSchema {
                department: 1,
                division: 2,
                salary: 4
            }
        );
    }

    #[test]
    fn test_too_few_columns_is_schema_error() {
        let t = table("id;dept\n1;A\n");
        let err = SchemaMapping::default().resolve(&t).unwrap_err();
        match err {
            ProcessorError::Schema(msg) => assert!(msg.contains("division")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_salary_may_share_division_column() {
        let t = table("id;dept;salary\n1;A;100\n");
        let resolved = SchemaMapping::default().resolve(&t).unwrap();
        assert_eq!(resolved.division, resolved.salary);
    }

    #[test]
    fn test_named_mapping() {
        let t = table("salary;team;dept\n100;X;A\n");
        let mapping = SchemaMapping {
            department: "dept".parse().unwrap(),
            division: "team".parse().unwrap(),
            salary: "0".parse().unwrap(),
        };
        let resolved = mapping.resolve(&t).unwrap();
        assert_eq!((resolved.department, resolved.division, resolved.salary), (2, 1, 0));

        let missing = SchemaMapping {
            department: ColumnRef::Name("unit".into()),
            ..mapping
        };
        assert!(matches!(missing.resolve(&t), Err(ProcessorError::Schema(_))));
    }

    #[test]
    fn test_column_ref_from_str() {
        assert_eq!("LAST".parse::<ColumnRef>().unwrap(), ColumnRef::Last);
        assert_eq!(" 3 ".parse::<ColumnRef>().unwrap(), ColumnRef::Index(3));
        assert_eq!(
            "Отдел".parse::<ColumnRef>().unwrap(),
            ColumnRef::Name("Отдел".into())
        );
    }
}
