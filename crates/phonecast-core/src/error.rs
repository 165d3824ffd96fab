use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("cannot read cell in row {row} of column '{column}' as text: {value}")]
    UnconvertibleCell {
        row: usize,
        column: String,
        value: String,
    },
    #[error("unconvertible cell value: {0}")]
    UnconvertibleValue(String),
    #[error("no phone number column found; available columns: {}", available.join(", "))]
    NoPhoneColumn { available: Vec<String> },
    #[error(
        "no valid phone numbers found in column '{column}'; sample values: {}; expected +966xxxxxxxxx, 966xxxxxxxxx or 05xxxxxxxx",
        samples.join(", ")
    )]
    NoValidPhones {
        column: String,
        samples: Vec<String>,
    },
}
