//! In-memory view of a worksheet: a header row plus data rows in append order.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column, comparing names trimmed and lowercased.
    pub fn column(&self, name: &str) -> Option<usize> {
        let wanted = name.trim().to_lowercase();
        self.header
            .iter()
            .position(|h| h.trim().to_lowercase() == wanted)
    }

    /// Cell value of `row` at `col`; short rows read as empty cells.
    pub fn cell(row: &[String], col: Option<usize>) -> &str {
        col.and_then(|i| row.get(i)).map(String::as_str).unwrap_or("")
    }
}
