//! Number formatting for tables and cards, Chilean conventions

/// Inserts `.` every three digits of the integer part
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_thousands(1234567), "1.234.567");
/// ```
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push('.');
        }
        result.push(c);
    }
    if value < 0 {
        format!("-{}", result)
    } else {
        result
    }
}

/// Chilean pesos without decimals: `$1.234.567`
pub fn format_clp(value: f64) -> String {
    let rounded = value.round() as i64;
    if rounded < 0 {
        format!("-${}", format_thousands(-rounded))
    } else {
        format!("${}", format_thousands(rounded))
    }
}

pub fn format_count(value: u64) -> String {
    format_thousands(value as i64)
}

/// One decimal with a comma: `12,5%`
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value).replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clp() {
        assert_eq!(format_clp(1234567.0), "$1.234.567");
        assert_eq!(format_clp(999.4), "$999");
        assert_eq!(format_clp(1000.0), "$1.000");
        assert_eq!(format_clp(0.0), "$0");
        assert_eq!(format_clp(-25000.0), "-$25.000");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(1), "1");
        assert_eq!(format_thousands(123456), "123.456");
        assert_eq!(format_thousands(-1234), "-1.234");
        assert_eq!(format_count(10_000_000), "10.000.000");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.54), "12,5%");
        assert_eq!(format_percent(0.0), "0,0%");
    }
}
