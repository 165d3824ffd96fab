use crate::domain::cell::RawCell;

/// Rows of raw cells under a header line. Rows may be shorter than the header;
/// absent trailing cells read as [`RawCell::Missing`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<RawCell>>,
}

static MISSING: RawCell = RawCell::Missing;

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<RawCell>>) -> Self {
        Self { headers, rows }
    }

    pub fn column(&self, index: usize) -> impl Iterator<Item = &RawCell> + '_ {
        self.rows
            .iter()
            .map(move |row| row.get(index).unwrap_or(&MISSING))
    }
}
