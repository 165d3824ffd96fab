use crate::domain::{normalize_phone, PhoneAddress, RawCell, Table};
use crate::error::CoreError;
use crate::rules::column::{find_phone_column, ColumnRef};
use serde::Serialize;
use std::collections::HashSet;

pub const DEFAULT_SAMPLE_LIMIT: usize = 5;
pub const MAX_SAMPLE_LIMIT: usize = 100;

/// Result of pulling phone numbers out of a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extraction {
    /// `None` only when the table has no columns.
    pub column: Option<ColumnRef>,
    /// Unique addresses in first-occurrence order.
    pub addresses: Vec<PhoneAddress>,
    /// Raw text of non-blank cells the normalizer rejected.
    pub rejected: Vec<String>,
    pub blank: usize,
    pub total: usize,
    #[serde(skip)]
    available: Vec<String>,
    /// First cells of the column as read, blanks included.
    #[serde(skip)]
    raw_samples: Vec<String>,
}

impl Extraction {
    pub fn duplicates(&self) -> usize {
        self.total - self.blank - self.rejected.len() - self.addresses.len()
    }

    /// Returns the selected column when at least one address was found, or an
    /// error carrying enough context to explain why nothing usable was found.
    pub fn check(&self, sample_limit: usize) -> Result<&ColumnRef, CoreError> {
        let Some(column) = self.column.as_ref() else {
            return Err(CoreError::NoPhoneColumn {
                available: self.available.clone(),
            });
        };

        if self.addresses.is_empty() {
            let source = if self.rejected.is_empty() {
                &self.raw_samples
            } else {
                &self.rejected
            };
            return Err(CoreError::NoValidPhones {
                column: column.name.clone(),
                samples: source.iter().take(sample_limit).cloned().collect(),
            });
        }

        Ok(column)
    }

    pub fn into_addresses(self, sample_limit: usize) -> Result<Vec<PhoneAddress>, CoreError> {
        self.check(sample_limit)?;
        Ok(self.addresses)
    }
}

/// Detects the phone column of `table` and normalizes every cell in it.
///
/// Error cells abort the extraction; they point at broken upstream data rather
/// than at a malformed phone number.
pub fn extract_phones(table: &Table) -> Result<Extraction, CoreError> {
    let mut extraction = Extraction {
        column: None,
        addresses: Vec::new(),
        rejected: Vec::new(),
        blank: 0,
        total: 0,
        available: table.headers.clone(),
        raw_samples: Vec::new(),
    };

    let Some(column) = find_phone_column(&table.headers) else {
        return Ok(extraction);
    };

    let mut seen = HashSet::new();
    for (row, cell) in table.column(column.index).enumerate() {
        extraction.total += 1;
        let text = cell_text(cell, row, &column)?;
        if extraction.raw_samples.len() < MAX_SAMPLE_LIMIT {
            extraction
                .raw_samples
                .push(text.clone().unwrap_or_default());
        }
        let Some(text) = text.filter(|value| !is_blank(value)) else {
            extraction.blank += 1;
            continue;
        };

        match normalize_phone(&text) {
            Some(address) => {
                if seen.insert(address.clone()) {
                    extraction.addresses.push(address);
                }
            }
            None => extraction.rejected.push(text),
        }
    }

    extraction.column = Some(column);
    Ok(extraction)
}

/// Removes repeated addresses, keeping the first occurrence of each.
pub fn dedupe_addresses<I>(addresses: I) -> Vec<PhoneAddress>
where
    I: IntoIterator<Item = PhoneAddress>,
{
    let mut seen = HashSet::new();
    addresses
        .into_iter()
        .filter(|address| seen.insert(address.clone()))
        .collect()
}

// Spreadsheet exports often spell empty cells as "nan" or "None".
fn is_blank(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("nan")
        || trimmed.eq_ignore_ascii_case("none")
}

fn cell_text(
    cell: &RawCell,
    row: usize,
    column: &ColumnRef,
) -> Result<Option<String>, CoreError> {
    cell.to_text().map_err(|err| match err {
        CoreError::UnconvertibleValue(value) => CoreError::UnconvertibleCell {
            row: row + 1,
            column: column.name.clone(),
            value,
        },
        other => other,
    })
}
