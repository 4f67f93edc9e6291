//! Pure formatting helpers for amount strings.

/// Remove thousands separators from a string.
pub(crate) fn strip_separators(s: &str) -> String {
    s.chars().filter(|&c| c != ',').collect()
}

/// Insert a `,` separator every three digits from the right.
///
/// Existing separators are stripped first, so the function is idempotent.
/// Strings shorter than four digits come back unchanged.
pub fn group_thousands(digits: &str) -> String {
    let digits = strip_separators(digits);
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Strip separators and parse an amount string as a decimal number.
///
/// Returns NaN only when the stripped string is not numeric; amount strings
/// produced by this crate always parse.
pub fn to_numeric(amount: &str) -> f64 {
    strip_separators(amount).parse().unwrap_or(f64::NAN)
}

/// Format a number with exactly `places` fraction digits, without grouping.
pub fn fixed_decimals(n: f64, places: usize) -> String {
    format!("{n:.places$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_every_three_digits_from_the_right() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn grouping_is_idempotent() {
        let once = group_thousands("1234567");
        assert_eq!(group_thousands(&once), once);
    }

    #[test]
    fn numeric_parse_ignores_separators() {
        assert_eq!(to_numeric("1,234.50"), 1234.50);
        assert_eq!(to_numeric("0.00"), 0.0);
        assert!(to_numeric("not a number").is_nan());
    }

    #[test]
    fn fixed_decimals_pads_and_rounds() {
        assert_eq!(fixed_decimals(5.0, 2), "5.00");
        assert_eq!(fixed_decimals(5.375, 2), "5.38");
        assert_eq!(fixed_decimals(1234.5, 2), "1234.50");
    }
}
