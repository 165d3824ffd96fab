use crate::error::Result;
use crate::{column_label, synthetic_headers};
use csv::ReaderBuilder;
use phonecast_core::{RawCell, Table};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub fn load_csv(path: &Path, has_headers: bool) -> Result<Table> {
    let file = File::open(path)?;
    read_csv(file, has_headers)
}

/// Reads comma-separated data. Empty fields become [`RawCell::Missing`].
pub fn read_csv<R: Read>(reader: R, has_headers: bool) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    let mut width = 0;

    for record in rdr.records() {
        let record = record?;
        if has_headers && headers.is_none() {
            headers = Some(
                record
                    .iter()
                    .enumerate()
                    .map(|(index, label)| header_label(index, label))
                    .collect(),
            );
            continue;
        }

        width = width.max(record.len());
        rows.push(record.iter().map(RawCell::from).collect());
    }

    let headers = match headers {
        Some(headers) => headers,
        None => synthetic_headers(width),
    };
    Ok(Table::new(headers, rows))
}

fn header_label(index: usize, raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        column_label(index)
    } else {
        trimmed.to_string()
    }
}
