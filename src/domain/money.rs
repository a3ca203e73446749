/// Formats a monetary amount as `R$ 1,234,567.89`.
pub fn format_brl(value: f64) -> String {
    format!("R$ {}", format_thousands(value, 2))
}

/// `{:,.Nf}`: comma-grouped integer part, fixed decimals.
pub fn format_thousands(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_like_python_grouping() {
        assert_eq!(format_brl(450_000.0), "R$ 450,000.00");
        assert_eq!(format_brl(1_234_567.891), "R$ 1,234,567.89");
        assert_eq!(format_brl(999.5), "R$ 999.50");
        assert_eq!(format_brl(0.0), "R$ 0.00");
    }

    #[test]
    fn negative_and_zero_decimals() {
        assert_eq!(format_thousands(-12_345.0, 0), "-12,345");
        assert_eq!(format_thousands(-0.001, 2), "0.00");
    }
}
