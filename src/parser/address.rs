use std::sync::LazyLock;

use regex::Regex;

static POSTCODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{4}\b").unwrap());

/// First standalone run of exactly four digits in `address`, if any.
///
/// Swiss postal codes are four digits. The word boundaries keep longer
/// digit runs and digits glued to letters from matching; later runs are
/// never considered. The match is returned as-is, leading zeros kept.
pub fn postal_code(address: &str) -> Option<String> {
    POSTCODE_RE.find(address).map(|m| m.as_str().to_string())
}

/// Last whitespace-delimited token of `address`, if any.
///
/// Directory addresses end in the city name ("Bahnhofstrasse 5, 8001
/// Zürich"). Empty or whitespace-only input yields `None`.
pub fn city(address: &str) -> Option<String> {
    address.split_whitespace().last().map(str::to_string)
}
