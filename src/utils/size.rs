//! Human-readable sizes: `10K`, `1.5G` in; `1.50 GB` out. Binary units (1024).

use crate::error::TallyError;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Parse `<number>[unit]` into bytes.
///
/// Units are `B`, `K`/`KB`, `M`/`MB`, `G`/`GB`, `T`/`TB` in any case; no unit means bytes.
/// Fractional values are allowed and truncated to whole bytes. Whitespace between the
/// number and the unit is accepted.
pub fn parse_size(input: &str) -> Result<u64, TallyError> {
    let invalid = |reason: &str| TallyError::InvalidSize {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = input.trim();
    let split = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split);
    if number.is_empty() {
        return Err(invalid("expected a number"));
    }
    let value: f64 = number.parse().map_err(|_| invalid("expected a number"))?;

    let multiplier: u64 = match unit.trim().to_ascii_uppercase().as_str() {
        "" | "B" => 1,
        "K" | "KB" => 1 << 10,
        "M" | "MB" => 1 << 20,
        "G" | "GB" => 1 << 30,
        "T" | "TB" => 1 << 40,
        other => return Err(invalid(&format!("unknown unit '{other}'"))),
    };

    let bytes = value * multiplier as f64;
    if !bytes.is_finite() || bytes >= u64::MAX as f64 {
        return Err(invalid("value too large"));
    }
    Ok(bytes as u64)
}

/// Format bytes with two decimals and the largest unit that keeps the value below 1024.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", size, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_bytes() {
        assert_eq!(parse_size("0").unwrap(), 0);
        assert_eq!(parse_size("512").unwrap(), 512);
        assert_eq!(parse_size("512B").unwrap(), 512);
    }

    #[test]
    fn parse_units_case_insensitive() {
        assert_eq!(parse_size("10K").unwrap(), 10 * 1024);
        assert_eq!(parse_size("10kb").unwrap(), 10 * 1024);
        assert_eq!(parse_size("1m").unwrap(), 1024 * 1024);
        assert_eq!(parse_size("2GB").unwrap(), 2 * 1024 * 1024 * 1024);
        assert_eq!(parse_size("1T").unwrap(), 1 << 40);
    }

    #[test]
    fn parse_fraction_and_space() {
        assert_eq!(parse_size("1.5K").unwrap(), 1536);
        assert_eq!(parse_size("1.5 M").unwrap(), 1536 * 1024);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_size("").is_err());
        assert!(parse_size("abc").is_err());
        assert!(parse_size("-5K").is_err());
        assert!(parse_size("10X").is_err());
        assert!(parse_size("1.2.3K").is_err());
        assert!(parse_size("99999999999T").is_err());
    }

    #[test]
    fn format_picks_unit() {
        assert_eq!(format_size(0), "0.00 B");
        assert_eq!(format_size(1023), "1023.00 B");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(1 << 30), "1.00 GB");
        assert_eq!(format_size(1 << 50), "1024.00 TB");
    }
}
