pub mod column;
pub mod extract;

pub use column::{find_phone_column, ColumnMatch, ColumnRef, PHONE_COLUMN_KEYWORDS};
pub use extract::{
    dedupe_addresses, extract_phones, Extraction, DEFAULT_SAMPLE_LIMIT, MAX_SAMPLE_LIMIT,
};
