use csv::ReaderBuilder;
use memmap2::Mmap;
use std::{
    collections::HashSet,
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::processor::{ProcessorError, column::Column, schema::ColumnRef};

/// Field delimiter of input and output files
pub const DELIMITER: u8 = b';';

/// Appends `.csv` to `name` unless it already ends with it
pub fn resolve_csv_path(name: &str) -> PathBuf {
    if name.ends_with(".csv") {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{name}.csv"))
    }
}

/// Column-oriented table of raw string cells
///
/// Columns are kept in header order, so "the second column" or "the last
/// column" has a stable meaning. Every column holds exactly `row_count` cells.
///
/// # Examples
///
/// ```rust
/// # use department_report::Table;
/// let table = Table::from_reader("id;dept\n1;A\n2;B\n".as_bytes()).unwrap();
/// assert_eq!(table.row_count(), 2);
/// assert_eq!(table.headers(), ["id", "dept"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Loads a `;`-delimited file into memory
    ///
    /// `.csv` is appended to `name` when missing. The file is memory mapped and
    /// parsed in one pass; the first record is the header.
    ///
    /// # Errors
    /// Returns a [`ProcessorError`] if:
    /// - the file does not exist ([`ProcessorError::NotFound`])
    /// - the file has no header row or repeats a header name
    /// - a record has a different number of fields than the header
    pub fn load_csv(name: &str) -> Result<Self, ProcessorError> {
        let path = resolve_csv_path(name);
        debug!(path = %path.display(), "resolved input path");
        Self::load_path(&path)
    }

    /// Same as [`Table::load_csv`] but takes the path as is
    pub fn load_path(path: &Path) -> Result<Self, ProcessorError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ProcessorError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ProcessorError::Io(e),
        })?;

        if file.metadata()?.len() == 0 {
            return Err(ProcessorError::Schema(format!(
                "{} has no header row",
                path.display()
            )));
        }

        let mmap = unsafe { Mmap::map(&file)? };
        let table = Self::from_reader(&mmap[..])?;

        info!(
            path = %path.display(),
            rows = table.row_count,
            columns = table.headers.len(),
            "loaded table"
        );
        Ok(table)
    }

    /// Parses `;`-delimited text from any reader
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self, ProcessorError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(true)
            .flexible(true)
            .from_reader(rdr);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() {
            return Err(ProcessorError::Schema("missing header row".into()));
        }
        Self::check_unique(&headers)?;

        let mut columns: Vec<Column> = headers.iter().map(Column::new).collect();
        let mut row_count = 0;

        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            if record.len() != headers.len() {
                // header is line 1, so data row `idx` sits on line idx + 2 absent blank lines
                let row = record
                    .position()
                    .map(|p| p.line() as usize)
                    .unwrap_or(idx + 2);
                return Err(ProcessorError::RowLength {
                    row,
                    expected: headers.len(),
                    found: record.len(),
                });
            }

            for (column, field) in columns.iter_mut().zip(record.iter()) {
                column.push(field);
            }
            row_count += 1;
        }

        Ok(Table {
            headers,
            columns,
            row_count,
        })
    }

    /// Builds a table from already split columns
    ///
    /// # Errors
    /// Fails if a name repeats or the columns differ in length.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, ProcessorError> {
        let headers: Vec<String> = columns.iter().map(|c| c.name().to_string()).collect();
        if headers.is_empty() {
            return Err(ProcessorError::Schema("missing header row".into()));
        }
        Self::check_unique(&headers)?;

        let row_count = columns[0].total_len();
        if let Some(bad) = columns.iter().find(|c| c.total_len() != row_count) {
            return Err(ProcessorError::Schema(format!(
                "column {} has {} cells, expected {}",
                bad.name(),
                bad.total_len(),
                row_count
            )));
        }

        Ok(Table {
            headers,
            columns,
            row_count,
        })
    }

    fn check_unique(headers: &[String]) -> Result<(), ProcessorError> {
        let mut seen = HashSet::with_capacity(headers.len());
        for h in headers {
            if !seen.insert(h.as_str()) {
                return Err(ProcessorError::DuplicateHeader(h.clone()));
            }
        }
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn column(&self, idx: usize) -> Option<&Column> {
        self.columns.get(idx)
    }

    /// Header position of `col_name`
    pub fn position(&self, col_name: &str) -> Option<usize> {
        self.headers.iter().position(|cn| cn == col_name)
    }

    /// Column a [`ColumnRef`] points at, if it exists in this table
    pub fn column_at(&self, col: &ColumnRef) -> Option<&Column> {
        col.locate(self).and_then(|idx| self.columns.get(idx))
    }

    pub fn get_col(&self, col_name: &str) -> Result<&Column, ProcessorError> {
        self.position(col_name)
            .and_then(|idx| self.columns.get(idx))
            .ok_or_else(|| ProcessorError::MissingColumn(col_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_table_from_str(csv: &str) -> Table {
        use std::io::Write;
        use tempfile::NamedTempFile;

        // write CSV to temp file
        let mut tmp = NamedTempFile::with_suffix(".csv").unwrap();
        write!(tmp, "{}", csv).unwrap();

        Table::load_path(tmp.path()).unwrap()
    }

    #[test]
    fn test_row_count() {
        let table = make_table_from_str("id;dept;team;salary\n1;A;X;10\n2;A;Y;20\n3;B;Z;30\n");
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 4);
    }

    #[test]
    fn test_columns_keep_row_order() {
        let table = make_table_from_str("id;dept\n1;B\n2;A\n3;B\n");
        let dept = table.get_col("dept").unwrap();
        assert_eq!(dept.iter_str().collect::<Vec<_>>(), vec!["B", "A", "B"]);
    }

    #[test]
    fn test_resolve_csv_path() {
        assert_eq!(resolve_csv_path("staff"), PathBuf::from("staff.csv"));
        assert_eq!(resolve_csv_path("staff.csv"), PathBuf::from("staff.csv"));
        assert_eq!(resolve_csv_path("staff.CSV"), PathBuf::from("staff.CSV.csv"));
    }

    #[test]
    fn test_crlf_and_quoted_delimiter() {
        let table = Table::from_reader("id;dept\r\n1;\"R;D\"\r\n".as_bytes()).unwrap();
        assert_eq!(table.column(1).unwrap().get(0), Some("R;D"));
    }

    #[test]
    fn test_bom_is_stripped_from_first_header() {
        let table = Table::from_reader("\u{feff}id;dept\n1;A\n".as_bytes()).unwrap();
        assert_eq!(table.headers()[0], "id");
    }

    #[test]
    fn test_short_row_is_rejected() {
        let err = Table::from_reader("id;dept;salary\n1;A;10\n2;B\n".as_bytes()).unwrap_err();
        match err {
            ProcessorError::RowLength {
                row,
                expected,
                found,
            } => {
                assert_eq!(row, 3);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_header_is_rejected() {
        let err = Table::from_reader("id;dept;dept\n1;A;B\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ProcessorError::DuplicateHeader(ref h) if h == "dept"));
    }

    #[test]
    fn test_empty_input_has_no_header() {
        let err = Table::from_reader("".as_bytes()).unwrap_err();
        assert!(matches!(err, ProcessorError::Schema(_)));
    }

    #[test]
    fn test_from_columns_rejects_ragged_columns() {
        let err = Table::from_columns(vec![
            Column::with_cells("a", vec!["1".into(), "2".into()]),
            Column::with_cells("b", vec!["1".into()]),
        ])
        .unwrap_err();
        assert!(matches!(err, ProcessorError::Schema(_)));
    }

    #[test]
    fn test_column_at() {
        let table = make_table_from_str("id;dept;salary\n1;A;10\n");
        assert_eq!(table.column_at(&ColumnRef::Index(1)).unwrap().name(), "dept");
        assert_eq!(table.column_at(&ColumnRef::Last).unwrap().name(), "salary");
        assert_eq!(
            table.column_at(&ColumnRef::Name("id".into())).unwrap().get(0),
            Some("1")
        );
        assert!(table.column_at(&ColumnRef::Index(3)).is_none());
        assert!(table.column_at(&ColumnRef::Name("team".into())).is_none());
    }

    #[test]
    fn test_missing_column() {
        let table = make_table_from_str("id;dept\n1;A\n");
        assert!(matches!(
            table.get_col("salary"),
            Err(ProcessorError::MissingColumn(_))
        ));
    }
}
