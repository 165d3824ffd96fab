use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("unsupported file type: {0} (supported: csv, xlsx, xlsm, xlsb, xls, ods)")]
    UnsupportedFormat(PathBuf),
    #[error("sheet '{name}' not found; available sheets: {}", available.join(", "))]
    SheetNotFound {
        name: String,
        available: Vec<String>,
    },
    #[error("workbook has no sheets: {0}")]
    NoSheets(PathBuf),
}

pub type Result<T> = std::result::Result<T, SheetError>;
