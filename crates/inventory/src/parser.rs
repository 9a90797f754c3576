//! Lenient parser for pasted inventory text.
//!
//! Each line is expected to hold an item name and a quantity separated by a
//! tab or by two or more whitespace characters. Lines that cannot be read are
//! dropped rather than reported.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static FIELD_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\t+|\s{2,}").expect("field separator regex is valid"));

/// One `(name, quantity)` pair as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLine {
    pub name: String,
    pub quantity: i64,
}

/// Parse a whole block of inventory text, skipping unreadable lines.
pub fn parse_inventory(text: &str) -> Vec<InventoryLine> {
    text.trim().lines().filter_map(parse_line).collect()
}

/// Parse a single line.
///
/// Falls back to splitting on the last single space when no tab or wide gap
/// is present, but only if the trailing token is an integer.
pub fn parse_line(line: &str) -> Option<InventoryLine> {
    let mut fields: Vec<&str> = FIELD_SEPARATOR.split(line).map(str::trim).collect();

    if fields.len() == 1 {
        if let Some((name, quantity)) = split_trailing_quantity(fields[0]) {
            fields = vec![name, quantity];
        }
    }

    if fields.len() < 2 {
        return None;
    }

    let quantity = parse_integer(fields[1])?;
    Some(InventoryLine {
        name: fields[0].to_string(),
        quantity,
    })
}

fn split_trailing_quantity(text: &str) -> Option<(&str, &str)> {
    let idx = text.rfind(' ')?;
    if idx == 0 {
        return None;
    }

    let name = text[..idx].trim();
    let quantity = text[idx + 1..].trim();
    parse_integer(quantity)?;
    Some((name, quantity))
}

/// Read a leading integer: optional sign, then at least one ASCII digit.
///
/// Anything after the digits is ignored (`"3x"` is 3, `"2.5"` is 2).
/// Values that overflow `i64` are rejected.
pub(crate) fn parse_integer(token: &str) -> Option<i64> {
    let s = token.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}
