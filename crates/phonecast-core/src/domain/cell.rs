use crate::error::CoreError;

/// A single spreadsheet value as it came out of the file.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Missing,
    Text(String),
    Number(f64),
    Int(i64),
    Bool(bool),
    /// A formula error such as `#N/A`.
    Error(String),
}

impl RawCell {
    /// Converts the cell to text. `Ok(None)` marks a missing value.
    pub fn to_text(&self) -> Result<Option<String>, CoreError> {
        let text = match self {
            RawCell::Missing => return Ok(None),
            RawCell::Text(value) => value.clone(),
            RawCell::Int(value) => value.to_string(),
            RawCell::Number(value) => {
                if !value.is_finite() {
                    return Ok(None);
                }
                if value.fract() == 0.0 && value.abs() < 1e18 {
                    format!("{}", *value as i64)
                } else {
                    value.to_string()
                }
            }
            RawCell::Bool(value) => value.to_string(),
            RawCell::Error(value) => return Err(CoreError::UnconvertibleValue(value.clone())),
        };
        Ok(Some(text))
    }
}

impl From<&str> for RawCell {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            RawCell::Missing
        } else {
            RawCell::Text(value.to_string())
        }
    }
}

impl From<String> for RawCell {
    fn from(value: String) -> Self {
        if value.is_empty() {
            RawCell::Missing
        } else {
            RawCell::Text(value)
        }
    }
}
