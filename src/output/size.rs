//! Human-readable byte sizes.

const UNITS: &[&str] = &["K", "M", "G"];

/// Format a byte count with a binary unit suffix
///
/// Below 1024 the exact integer is printed (unset `-1` values included).
/// Above, the first of K, M, G whose value is below 1024 is chosen, and T
/// beyond that. Values below 10 keep one decimal.
///
/// # Example
/// ```ignore
/// assert_eq!(format_size(3482), "3.4K");
/// assert_eq!(format_size(43008), "42K");
/// ```
pub fn format_size(number: i64) -> String {
    if number < 1024 {
        return number.to_string();
    }

    let mut value = number as f64;
    for unit in UNITS {
        value /= 1024.0;
        if value < 1024.0 {
            return with_suffix(value, unit);
        }
    }
    with_suffix(value / 1024.0, "T")
}

fn with_suffix(value: f64, suffix: &str) -> String {
    if value < 10.0 {
        format!("{:.1}{}", value, suffix)
    } else {
        format!("{}{}", value.trunc() as i64, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_bytes() {
        assert_eq!(format_size(0), "0");
        assert_eq!(format_size(512), "512");
        assert_eq!(format_size(1023), "1023");
        assert_eq!(format_size(-1), "-1");
    }

    #[test]
    fn test_kilobytes() {
        assert_eq!(format_size(1024), "1.0K");
        assert_eq!(format_size(3482), "3.4K");
        assert_eq!(format_size(10240), "10K");
        // Truncated, not rounded
        assert_eq!(format_size(44656), "43K");
    }

    #[test]
    fn test_larger_units() {
        assert_eq!(format_size(1 << 20), "1.0M");
        assert_eq!(format_size(500 << 20), "500M");
        assert_eq!(format_size(2 << 30), "2.0G");
        assert_eq!(format_size(3 << 40), "3.0T");
        assert_eq!(format_size(2048 << 40), "2048T");
    }
}
