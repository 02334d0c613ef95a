use super::LangOptions;
use crate::domain::balance::{ChartPair, round_half_away};

const MAX_FRACTION_DIGITS: u32 = 3;

/// Locale-style number: grouped thousands, up to 3 fraction digits, no trailing zeros.
///
/// `1234.5` → `1,234.5`, `-1234567.891` → `-1,234,567.891`, `0.0001` → `0`.
pub fn format_number(value: f64, lang: &LangOptions) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    // Ties go away from zero on the decimal form, then the fixed formatting
    // only has to print a value that is already at 3 places.
    let rounded = round_half_away(value.abs(), MAX_FRACTION_DIGITS);
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS as usize, rounded);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(lang.thousands_sep);
        }
        grouped.push(digit);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let mut out = String::new();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push(lang.decimal_point);
        out.push_str(frac_part);
    }
    out
}

/// Tooltip value line: `$ 1,234.56`
pub fn format_currency(value: f64, lang: &LangOptions) -> String {
    format!("$ {}", format_number(value, lang))
}

/// Two-line tooltip: account name, then its value
pub fn tooltip_text(pair: &ChartPair, lang: &LangOptions) -> String {
    format!("{}\n{}", pair.label(), format_currency(pair.value(), lang))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang() -> LangOptions {
        LangOptions::default()
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(1234567.891, &lang()), "1,234,567.891");
        assert_eq!(format_number(999.0, &lang()), "999");
        assert_eq!(format_number(1000.0, &lang()), "1,000");
    }

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(format_number(1234.5, &lang()), "1,234.5");
        assert_eq!(format_number(12.10, &lang()), "12.1");
    }

    #[test]
    fn negative_and_zero() {
        assert_eq!(format_number(-1234.56, &lang()), "-1,234.56");
        assert_eq!(format_number(-0.0, &lang()), "0");
        assert_eq!(format_number(-0.0001, &lang()), "0");
    }

    #[test]
    fn third_decimal_tie_rounds_away_from_zero() {
        assert_eq!(format_number(1.0625, &lang()), "1.063");
        assert_eq!(format_number(-1.0625, &lang()), "-1.063");
        assert_eq!(format_number(2.0005, &lang()), "2.001");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_number(f64::NAN, &lang()), "NaN");
        assert_eq!(format_number(f64::INFINITY, &lang()), "∞");
        assert_eq!(format_number(f64::NEG_INFINITY, &lang()), "-∞");
    }

    #[test]
    fn honours_lang_symbols() {
        let lang = LangOptions { decimal_point: ',', thousands_sep: '.' };
        assert_eq!(format_number(1234.5, &lang), "1.234,5");
    }

    #[test]
    fn tooltip_has_name_and_currency() {
        let pair = ChartPair::new("Savings", 10250.75);
        assert_eq!(tooltip_text(&pair, &lang()), "Savings\n$ 10,250.75");
    }
}
