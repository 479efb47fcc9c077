use std::num::ParseIntError;

/// One named column of raw cell values, in file row order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    cells: Vec<String>,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Column {
            name: name.into(),
            cells: Vec::new(),
        }
    }

    pub fn with_cells(name: impl Into<String>, cells: Vec<String>) -> Self {
        Column {
            name: name.into(),
            cells,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn push(&mut self, cell: impl Into<String>) {
        self.cells.push(cell.into());
    }

    pub fn iter_str(&self) -> impl Iterator<Item = &str> + '_ {
        self.cells.iter().map(String::as_str)
    }

    /// Cells parsed as integers, lazily; whitespace around the digits is ignored
    pub fn iter_i64(&self) -> impl Iterator<Item = Result<i64, ParseIntError>> + '_ {
        self.cells.iter().map(|cell| cell.trim().parse::<i64>())
    }

    // Random access
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.cells.get(idx).map(String::as_str)
    }

    pub fn total_len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
