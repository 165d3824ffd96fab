use crate::error::{Result, SheetError};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Csv,
    Xlsx,
    Xlsm,
    Xlsb,
    Xls,
    Ods,
}

impl SheetFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .ok_or_else(|| SheetError::UnsupportedFormat(path.to_path_buf()))?;

        match extension.as_str() {
            "csv" => Ok(SheetFormat::Csv),
            "xlsx" => Ok(SheetFormat::Xlsx),
            "xlsm" => Ok(SheetFormat::Xlsm),
            "xlsb" => Ok(SheetFormat::Xlsb),
            "xls" => Ok(SheetFormat::Xls),
            "ods" => Ok(SheetFormat::Ods),
            _ => Err(SheetError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}
