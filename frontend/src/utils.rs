//! Utility helpers shared across the WASM frontend.

use unicode_segmentation::UnicodeSegmentation;

use crate::constants::DEFAULT_STUDENT_GREETING_NAME;

/// First whitespace-separated word of a full name, used in greetings.
///
/// Falls back to the generic greeting when the name is blank.
pub fn first_name(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .next()
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_STUDENT_GREETING_NAME.to_string())
}

/// Avatar initials: first grapheme of every word, upper-cased.
/// Blank names render as `"U"`.
pub fn initials(full_name: &str) -> String {
    let letters: String = full_name
        .split_whitespace()
        .filter_map(|word| word.graphemes(true).next())
        .collect();

    if letters.is_empty() {
        "U".to_string()
    } else {
        letters.to_uppercase()
    }
}

/// Parse a decimal typed by the user. Accepts a comma as decimal separator
/// ("1,75") since that is what Brazilian keyboards produce.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let normalised = raw.trim().replace(',', ".");
    if normalised.is_empty() {
        return None;
    }
    normalised.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a strictly positive integer field (repetitions, series, age).
pub fn parse_positive_int(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|v| *v >= 1)
}

/// Format a value with a fixed number of decimals, e.g. `21.8` or `70.00`.
pub fn format_decimal(value: f64, places: usize) -> String {
    format!("{:.*}", places, value)
}

/// Escape text for interpolation into `inner_html` / SVG markup.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
