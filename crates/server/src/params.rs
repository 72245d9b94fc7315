//! Match request parameter coercion and validation

use crosswalk_common::config::DEFAULT_MATCH_COUNT;
use crosswalk_common::{CrosswalkError, Result};

use crate::types::{MatchQuery, MatchRequest};

pub const MAX_IDENTIFIER_LEN: usize = 128;

impl MatchQuery {
    /// Build from decoded query pairs, keeping the first value of each key.
    /// Unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "standard_id" => &mut query.standard_id,
                "jurisdiction_id" => &mut query.jurisdiction_id,
                "count" => &mut query.count,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

impl MatchRequest {
    /// Validate identifiers and coerce `count`
    pub fn from_query(query: &MatchQuery, max_count: usize) -> Result<Self> {
        Ok(Self {
            standard_id: validate_identifier("standard_id", query.standard_id.as_deref())?,
            jurisdiction_id: validate_identifier(
                "jurisdiction_id",
                query.jurisdiction_id.as_deref(),
            )?,
            count: parse_count(query.count.as_deref(), max_count),
        })
    }
}

/// Parse the requested match count.
///
/// Reads a leading integer (`"15"`, `" 7 "`, `"12abc"`). Missing,
/// non-numeric, zero and negative values fall back to the default; the
/// result never exceeds `max_count`.
pub fn parse_count(raw: Option<&str>, max_count: usize) -> usize {
    match raw.and_then(leading_integer) {
        Some(n) if n > 0 => usize::try_from(n).unwrap_or(usize::MAX).min(max_count),
        _ => DEFAULT_MATCH_COUNT.min(max_count),
    }
}

fn leading_integer(raw: &str) -> Option<i128> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // saturate on overflow
    let value = digits[..end].parse::<i128>().unwrap_or(i128::MAX);
    Some(if negative { -value } else { value })
}

/// Require a non-empty identifier of ASCII alphanumerics, `-`, `_`, `.`, `:`
pub fn validate_identifier(name: &str, raw: Option<&str>) -> Result<String> {
    let value = raw.map(str::trim).unwrap_or_default();

    if value.is_empty() {
        return Err(CrosswalkError::invalid_input(format!("{} is required", name)));
    }

    if value.len() > MAX_IDENTIFIER_LEN {
        return Err(CrosswalkError::invalid_input(format!(
            "{} exceeds {} characters",
            name, MAX_IDENTIFIER_LEN
        )));
    }

    let well_formed = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'));
    if !well_formed {
        return Err(CrosswalkError::invalid_input(format!(
            "{} contains unsupported characters",
            name
        )));
    }

    Ok(value.to_string())
}
