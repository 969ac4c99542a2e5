use itertools::Itertools;

use crate::search::Candidate;

/// digits after the decimal point in a numeric value as the user typed it.
pub fn decimal_places(text: &str) -> usize {
    match text.find('.') {
        Some(dot) => text.len() - dot - 1,
        None => 0,
    }
}

/// fixed-point rendering of a deviation. trailing zeros past the first
/// significant digit carry no information and are dropped; a value too small
/// to show any significant digit at this precision is left as printed, and
/// exact zero is just "0".
pub fn format_deviation(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return String::from("0");
    }
    let mut text = format!("{:.*}", precision, value);
    if let Some(dot) = text.find('.') {
        let has_significant_digit = text[dot + 1..].chars().any(|digit| digit != '0');
        if has_significant_digit {
            let kept = text.trim_end_matches('0').len();
            text.truncate(kept);
            if text.ends_with('.') {
                text.pop();
            }
        }
    }
    text
}

/// four right-aligned columns matching the console layout. the ratio column
/// gets one more fractional digit than the tolerance so the digit the
/// tolerance constrains always shows.
pub fn render_table(results: &[Candidate], tolerance_decimals: usize) -> String {
    let mut lines = Vec::with_capacity(results.len() + 2);
    lines.push(format!("{:>8}{:>8}{:>15}{:>15}", "a", "b", "a/b", "delta"));
    lines.push("=".repeat(47));
    for candidate in results {
        lines.push(format!(
            "{:>8}{:>8}{:>15.ratio_precision$}{:>15}",
            candidate.numerator,
            candidate.denominator,
            candidate.ratio(),
            format_deviation(candidate.deviation.abs(), tolerance_decimals),
            ratio_precision = tolerance_decimals + 1,
        ));
    }
    lines.iter().join("\n")
}
