use crate::error::{Result, SheetError};
use crate::{column_label, synthetic_headers};
use calamine::{open_workbook_auto, Data, Reader};
use phonecast_core::{RawCell, Table};
use std::path::Path;
use tracing::debug;

pub fn load_workbook(path: &Path, sheet: Option<&str>, has_headers: bool) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names().to_owned();

    let name = match sheet {
        Some(name) => {
            if !sheet_names.iter().any(|candidate| candidate == name) {
                return Err(SheetError::SheetNotFound {
                    name: name.to_string(),
                    available: sheet_names,
                });
            }
            name.to_string()
        }
        None => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| SheetError::NoSheets(path.to_path_buf()))?,
    };
    debug!(sheet = %name, "reading worksheet");

    let range = workbook.worksheet_range(&name)?;
    let mut rows = range.rows().map(|row| row.iter().map(convert_cell).collect::<Vec<_>>());

    let headers = if has_headers {
        match rows.next() {
            Some(cells) => cells
                .iter()
                .enumerate()
                .map(|(index, cell)| header_label(index, cell))
                .collect(),
            None => Vec::new(),
        }
    } else {
        synthetic_headers(range.width())
    };

    Ok(Table::new(headers, rows.collect()))
}

fn convert_cell(cell: &Data) -> RawCell {
    match cell {
        Data::Empty => RawCell::Missing,
        Data::String(value) => RawCell::from(value.as_str()),
        Data::Float(value) => RawCell::Number(*value),
        Data::Int(value) => RawCell::Int(*value),
        Data::Bool(value) => RawCell::Bool(*value),
        Data::Error(err) => RawCell::Error(err.to_string()),
        Data::DateTime(value) => RawCell::Number(value.as_f64()),
        Data::DateTimeIso(value) | Data::DurationIso(value) => RawCell::from(value.as_str()),
    }
}

fn header_label(index: usize, cell: &RawCell) -> String {
    match cell.to_text() {
        Ok(Some(text)) if !text.trim().is_empty() => text.trim().to_string(),
        _ => column_label(index),
    }
}
