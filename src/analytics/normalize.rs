//! Field parsing shared by the aggregator and the filter engine.

/// Parse a stored ROI percentage.
///
/// Reads the longest decimal number at the start of the text after leading
/// whitespace, so `"12.5 p.a."` and `"15%"` both parse. Returns `None` when
/// no digits lead the text or the value is not finite.
pub fn parse_roi(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let end = leading_number_len(text.as_bytes());
    if end == 0 {
        return None;
    }
    text[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Byte length of the decimal prefix `[+-]digits[.digits][(e|E)[+-]digits]`,
/// or 0 when the mantissa has no digit.
fn leading_number_len(bytes: &[u8]) -> usize {
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_end = digits_from(i);
    let mut mantissa_digits = int_end - i;
    i = int_end;
    if bytes.get(i) == Some(&b'.') {
        let frac_end = digits_from(i + 1);
        mantissa_digits += frac_end - (i + 1);
        i = frac_end;
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            i = exp_end;
        }
    }
    i
}

/// `current / target`, with a missing current amount counted as 0.
///
/// A zero target yields `+inf` so that funding sorts stay total.
pub fn funding_ratio(current_amount: Option<i64>, target_amount: i64) -> f64 {
    if target_amount == 0 {
        return f64::INFINITY;
    }
    current_amount.unwrap_or(0) as f64 / target_amount as f64
}

/// `true` when a criterion value disables its filter (`"all"` or blank).
pub fn is_all(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all")
}
