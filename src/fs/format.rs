//! Display Formatting
//!
//! Human-readable rendering of sizes and permission modes, plus mode
//! validation for `chmod`.

use lazy_static::lazy_static;
use regex_lite::Regex;

lazy_static! {
    static ref MODE_RE: Regex = Regex::new(r"^[0-7]{3}$").unwrap();
}

/// Render a byte count as `B`, `KB`, or `MB` with one decimal place for
/// the scaled units.
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let kb = bytes as f64 / 1024.0;
    if kb < 1024.0 {
        return format!("{:.1} KB", kb);
    }
    let mb = kb / 1024.0;
    format!("{:.1} MB", mb)
}

/// Expand a 3-digit octal mode into its `rwx` triplets.
///
/// Digits outside the octal range (and missing digits) render as `---`.
pub fn format_permissions(mode: &str) -> String {
    let mut result = String::with_capacity(9);
    for i in 0..3 {
        let digit = mode
            .chars()
            .nth(i)
            .and_then(|c| c.to_digit(8))
            .unwrap_or(0);
        result.push(if digit & 4 != 0 { 'r' } else { '-' });
        result.push(if digit & 2 != 0 { 'w' } else { '-' });
        result.push(if digit & 1 != 0 { 'x' } else { '-' });
    }
    result
}

/// Whether `mode` is a valid 3-digit octal permission string.
pub fn is_valid_mode(mode: &str) -> bool {
    MODE_RE.is_match(mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(120), "120 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_kb() {
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(2450), "2.4 KB");
        assert_eq!(format_size(120240), "117.4 KB");
    }

    #[test]
    fn test_format_size_mb() {
        assert_eq!(format_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_size(500000 * 3), "1.4 MB");
    }

    #[test]
    fn test_format_permissions() {
        assert_eq!(format_permissions("755"), "rwxr-xr-x");
        assert_eq!(format_permissions("644"), "rw-r--r--");
        assert_eq!(format_permissions("600"), "rw-------");
        assert_eq!(format_permissions("700"), "rwx------");
        assert_eq!(format_permissions("000"), "---------");
    }

    #[test]
    fn test_format_permissions_malformed() {
        assert_eq!(format_permissions(""), "---------");
        assert_eq!(format_permissions("7"), "rwx------");
        assert_eq!(format_permissions("9x9"), "---------");
    }

    #[test]
    fn test_is_valid_mode() {
        assert!(is_valid_mode("755"));
        assert!(is_valid_mode("000"));
        assert!(is_valid_mode("777"));
        assert!(!is_valid_mode("78"));
        assert!(!is_valid_mode("7550"));
        assert!(!is_valid_mode("abc"));
        assert!(!is_valid_mode("85"));
    }
}
