/// Format with at most two decimals and no trailing zeros ("3", "0.6", "66.67").
pub fn format_decimal(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    match trimmed {
        "-0" | "" => "0".to_string(),
        s => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_decimal_whole_numbers() {
        assert_eq!(format_decimal(3.0), "3");
        assert_eq!(format_decimal(100.0), "100");
        assert_eq!(format_decimal(0.0), "0");
    }

    #[test]
    fn test_format_decimal_fractions() {
        assert_eq!(format_decimal(0.6), "0.6");
        assert_eq!(format_decimal(66.666_666), "66.67");
        assert_eq!(format_decimal(1.2345), "1.23");
    }

    #[test]
    fn test_format_decimal_rounds_to_zero() {
        assert_eq!(format_decimal(0.001), "0");
        assert_eq!(format_decimal(-0.001), "0");
    }

    #[test]
    fn test_format_decimal_non_finite() {
        assert_eq!(format_decimal(f64::NAN), "0");
        assert_eq!(format_decimal(f64::INFINITY), "0");
    }
}
