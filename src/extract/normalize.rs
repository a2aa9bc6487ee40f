//! Field normalization applied after a rule has matched.

use crate::types::MAX_BUDGET;

/// Capitalize each word of a captured place name, collapsing inner whitespace.
pub fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Multiplier implied by a marker such as "k", "thousand" or "lakh".
pub fn multiplier(marker: Option<&str>) -> u64 {
    match marker.map(|m| m.to_lowercase()) {
        Some(m) if m.starts_with("lakh") || m.starts_with("lac") => 100_000,
        Some(m) if m == "k" || m == "thousand" => 1_000,
        _ => 1,
    }
}

/// Turn a matched amount token into an integer.
///
/// Grouping characters are stripped before parsing ("25,000" → 25000). A
/// decimal part is honored once the multiplier applies ("2.5 lakh" → 250000)
/// and truncated otherwise ("1200.75" → 1200). Zero and anything above
/// [`MAX_BUDGET`] yield `None`.
pub fn parse_amount(token: &str, marker: Option<&str>) -> Option<u64> {
    let cleaned: String = token
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let (whole, fraction) = match cleaned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (cleaned.as_str(), ""),
    };

    let factor = multiplier(marker);
    let whole: u64 = whole.parse().ok()?;
    let mut value = whole.checked_mul(factor)?;

    let fraction: String = fraction
        .chars()
        .filter(char::is_ascii_digit)
        .take(6)
        .collect();
    if !fraction.is_empty() {
        let digits: u64 = fraction.parse().ok()?;
        let scale = 10u64.pow(fraction.len() as u32);
        value = value.checked_add(digits.checked_mul(factor)? / scale)?;
    }

    (value > 0 && value <= MAX_BUDGET).then_some(value)
}

/// Parse a captured count such as "5" from "5 days".
pub fn parse_count(token: &str) -> Option<u64> {
    token.trim().parse().ok()
}
