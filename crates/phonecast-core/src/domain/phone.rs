use crate::domain::cell::RawCell;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dialing code of the supported region, without the leading `+`.
pub const COUNTRY_CODE: &str = "966";

const SUBSCRIBER_DIGITS: usize = 9;
const MIN_INTERNATIONAL_LEN: usize = 10;

/// A phone number in canonical international form (`+<country><subscriber>`).
///
/// Values are only produced by [`normalize_phone`], so every instance is either
/// `+966` followed by nine digits or another `+`-prefixed international number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneAddress(String);

impl PhoneAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// True for the strict `+966` shape, false for the generic `+` fallback.
    pub fn is_regional(&self) -> bool {
        self.0
            .strip_prefix('+')
            .and_then(|rest| rest.strip_prefix(COUNTRY_CODE))
            .is_some_and(|subscriber| subscriber.len() == SUBSCRIBER_DIGITS)
    }
}

impl fmt::Display for PhoneAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PhoneAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

struct Rule {
    prefix: &'static str,
    accept: fn(&str) -> bool,
    rewrite: fn(&str) -> String,
}

// Ordered strict-to-lenient. The first rule whose prefix matches decides the
// outcome; a failed check never falls through to a later rule.
const RULES: &[Rule] = &[
    Rule {
        prefix: "+966",
        accept: is_full_international,
        rewrite: keep,
    },
    Rule {
        prefix: "966",
        accept: is_bare_international,
        rewrite: add_plus,
    },
    Rule {
        prefix: "05",
        accept: is_trunk_mobile,
        rewrite: replace_trunk_zero,
    },
    Rule {
        prefix: "5",
        accept: is_subscriber,
        rewrite: add_country_code,
    },
    Rule {
        prefix: "+",
        accept: is_long_enough,
        rewrite: keep,
    },
];

fn is_full_international(value: &str) -> bool {
    value.len() == 13 && all_digits(&value[4..])
}

fn is_bare_international(value: &str) -> bool {
    value.len() == 12 && all_digits(&value[3..])
}

fn is_trunk_mobile(value: &str) -> bool {
    value.len() == 10 && all_digits(value)
}

fn is_subscriber(value: &str) -> bool {
    value.len() == SUBSCRIBER_DIGITS && all_digits(value)
}

// Minimal check; other country codes are passed through as-is.
fn is_long_enough(value: &str) -> bool {
    value.len() >= MIN_INTERNATIONAL_LEN
}

fn keep(value: &str) -> String {
    value.to_string()
}

fn add_plus(value: &str) -> String {
    format!("+{value}")
}

fn replace_trunk_zero(value: &str) -> String {
    add_country_code(&value[1..])
}

fn add_country_code(value: &str) -> String {
    format!("+{COUNTRY_CODE}{value}")
}

/// Normalizes free-form phone text into a [`PhoneAddress`].
///
/// Returns `None` for blank input or anything that does not match a known
/// shape. Rejection is an expected outcome, not an error.
pub fn normalize_phone(raw: &str) -> Option<PhoneAddress> {
    let cleaned = clean(raw.trim())?;
    if cleaned.is_empty() {
        return None;
    }

    let rule = RULES.iter().find(|rule| cleaned.starts_with(rule.prefix))?;
    if !(rule.accept)(&cleaned) {
        return None;
    }
    Some(PhoneAddress((rule.rewrite)(&cleaned)))
}

/// Normalizes a spreadsheet cell. Missing cells are rejected; cells that
/// cannot be read as text (error cells) are reported as errors.
pub fn normalize_cell(cell: &RawCell) -> Result<Option<PhoneAddress>, CoreError> {
    Ok(cell.to_text()?.as_deref().and_then(normalize_phone))
}

// Keeps a leading `+` and the digits. Arabic-Indic digits fold to ASCII; any
// other non-ASCII digit makes the whole value unreadable.
fn clean(value: &str) -> Option<String> {
    let mut chars = value
        .chars()
        .filter(|ch| !(ch.is_whitespace() || matches!(ch, '-' | '(' | ')' | '.' | '_')))
        .peekable();

    let mut out = String::with_capacity(value.len());
    if chars.next_if_eq(&'+').is_some() {
        out.push('+');
    }
    for ch in chars {
        match ascii_digit(ch) {
            Some(digit) => out.push(digit),
            None if ch.is_numeric() => return None,
            None => {}
        }
    }
    Some(out)
}

fn ascii_digit(ch: char) -> Option<char> {
    let offset = match ch {
        '0'..='9' => return Some(ch),
        '\u{0660}'..='\u{0669}' => ch as u32 - 0x0660,
        '\u{06F0}'..='\u{06F9}' => ch as u32 - 0x06F0,
        _ => return None,
    };
    char::from_digit(offset, 10)
}

fn all_digits(value: &str) -> bool {
    value.bytes().all(|byte| byte.is_ascii_digit())
}
