//! Lookup response shape
//!
//! A lookup that finds nothing is not an HTTP error: the response is still
//! `200 OK`, with a body of `{"error": "<message>"}` naming the key that
//! was requested.

use serde::Serialize;

/// Either the found payload or the not-found message
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Lookup<T> {
    Found(T),
    Missing { error: String },
}

impl<T> Lookup<T> {
    pub fn missing(message: impl Into<String>) -> Self {
        Lookup::Missing { error: message.into() }
    }

    /// `Found` when `items` is non-empty, otherwise `Missing` with `message()`
    pub fn from_matches<I>(
        items: Vec<I>,
        wrap: impl FnOnce(Vec<I>) -> T,
        message: impl FnOnce() -> String,
    ) -> Self {
        if items.is_empty() { Lookup::missing(message()) } else { Lookup::Found(wrap(items)) }
    }
}

/// Parse a numeric id from a path segment the way `parseInt` does
///
/// Leading whitespace and an optional sign are accepted, then the leading
/// run of digits is read and anything after it ignored (`"2abc"` is 2). A
/// `0x` prefix switches to hex. No leading digits, or a value outside `i64`,
/// yields `None`, which matches no record.
pub fn parse_id(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let (negative, text) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, text) = match text.get(..2) {
        Some("0x" | "0X") => (16, &text[2..]),
        _ => (10, text),
    };

    let end = text.find(|c: char| !c.is_digit(radix)).unwrap_or(text.len());
    let magnitude = i64::from_str_radix(&text[..end], radix).ok()?;

    Some(if negative { -magnitude } else { magnitude })
}
