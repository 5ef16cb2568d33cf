//! Price-string normalization
//!
//! Market price texts arrive formatted for the wallet currency: currency
//! symbols, thousands separators, and either comma- or dot-decimal
//! convention ("$12.94", "1.234,56€", "R$ 19,99").

/// Parses a formatted price text into a float. Never fails: empty or
/// unparseable input yields 0.0.
///
/// Separator handling:
/// - "1.234,56" -> 1234.56 (rightmost separator is the decimal point)
/// - "1,234.56" -> 1234.56
/// - "€19,99" -> 19.99 (a lone comma is a decimal point)
/// - "$12.94" -> 12.94
pub fn parse_price(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();

    let normalized = match (cleaned.rfind(','), cleaned.rfind('.')) {
        // Both separators present: the rightmost one is the decimal point
        (Some(comma), Some(dot)) if comma > dot => cleaned.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => cleaned.replace(',', ""),
        (Some(_), None) => cleaned.replace(',', "."),
        _ => cleaned,
    };

    match normalized.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            if !text.is_empty() {
                log::debug!("Unparseable price text {:?}, degrading to 0.0", text);
            }
            0.0
        }
    }
}

#[cfg(test)]
#[path = "price_tests.rs"]
mod tests;
