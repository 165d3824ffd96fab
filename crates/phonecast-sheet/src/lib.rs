pub mod delimited;
pub mod error;
pub mod format;
pub mod workbook;

pub use delimited::read_csv;
pub use error::{Result, SheetError};
pub use format::SheetFormat;

use phonecast_core::Table;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Overrides extension-based detection.
    pub format: Option<SheetFormat>,
    /// Worksheet name; the first sheet when unset. Ignored for CSV.
    pub sheet: Option<String>,
    pub has_headers: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            format: None,
            sheet: None,
            has_headers: true,
        }
    }
}

pub fn load_table(path: &Path, options: &LoadOptions) -> Result<Table> {
    let format = match options.format {
        Some(format) => format,
        None => SheetFormat::from_path(path)?,
    };
    debug!(path = %path.display(), ?format, "loading table");

    let table = match format {
        SheetFormat::Csv => delimited::load_csv(path, options.has_headers)?,
        _ => workbook::load_workbook(path, options.sheet.as_deref(), options.has_headers)?,
    };
    debug!(
        columns = table.headers.len(),
        rows = table.rows.len(),
        "table loaded"
    );
    Ok(table)
}

pub(crate) fn column_label(index: usize) -> String {
    format!("Column_{}", index + 1)
}

pub(crate) fn synthetic_headers(width: usize) -> Vec<String> {
    (0..width).map(column_label).collect()
}
