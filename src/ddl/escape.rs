//! Identifier and string literal quoting.
//!
//! Every table, column and index name in generated DDL goes through
//! [`escape_name`], every text literal through [`escape_string`].

use alloc::string::String;

/// Quote a SQL identifier (table, column or index name) with double quotes.
///
/// Escapes any embedded double quotes by doubling them.
#[must_use]
pub fn escape_name(name: &str) -> String {
    quote(name, '"')
}

/// Quote a string literal with single quotes.
///
/// Escapes any embedded single quotes by doubling them.
#[must_use]
pub fn escape_string(value: &str) -> String {
    quote(value, '\'')
}

fn quote(value: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push(delimiter);
    for c in value.chars() {
        if c == delimiter {
            out.push(delimiter);
        }
        out.push(c);
    }
    out.push(delimiter);
    out
}
