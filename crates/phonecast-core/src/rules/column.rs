use serde::Serialize;

/// Header fragments that mark a phone column, matched against the lower-cased
/// label as substrings.
pub const PHONE_COLUMN_KEYWORDS: [&str; 6] = ["phone", "number", "ext", "mobile", "tel", "whatsapp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "keyword", rename_all = "lowercase")]
pub enum ColumnMatch {
    Keyword(&'static str),
    /// No header matched; the first column was picked and its values are
    /// unverified.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnRef {
    pub index: usize,
    pub name: String,
    pub matched: ColumnMatch,
}

impl ColumnRef {
    pub fn is_fallback(&self) -> bool {
        self.matched == ColumnMatch::Fallback
    }
}

/// Picks the column most likely to hold phone numbers.
///
/// The first header containing a keyword wins. When nothing matches, the first
/// column is returned as a fallback; `None` is reserved for an empty header set.
pub fn find_phone_column<S: AsRef<str>>(columns: &[S]) -> Option<ColumnRef> {
    let first = columns.first()?;

    for (index, column) in columns.iter().enumerate() {
        let label = column.as_ref().to_lowercase();
        if let Some(keyword) = PHONE_COLUMN_KEYWORDS
            .iter()
            .find(|keyword| label.contains(*keyword))
        {
            return Some(ColumnRef {
                index,
                name: column.as_ref().to_string(),
                matched: ColumnMatch::Keyword(*keyword),
            });
        }
    }

    Some(ColumnRef {
        index: 0,
        name: first.as_ref().to_string(),
        matched: ColumnMatch::Fallback,
    })
}
