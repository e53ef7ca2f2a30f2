//! TTL string parsing and formatting.

use anyhow::{bail, Result};
use std::time::Duration;

/// Parse a TTL string like `7d`, `24h`, `30m`, `45s`, or a bare number of seconds.
pub fn parse_ttl(ttl: &str) -> Result<Duration> {
    let ttl = ttl.trim().to_lowercase();
    if ttl.is_empty() {
        bail!("empty TTL");
    }

    let (digits, unit_secs) = if let Some(days) = ttl.strip_suffix('d') {
        (days, 86_400)
    } else if let Some(hours) = ttl.strip_suffix('h') {
        (hours, 3_600)
    } else if let Some(mins) = ttl.strip_suffix('m') {
        (mins, 60)
    } else if let Some(secs) = ttl.strip_suffix('s') {
        (secs, 1)
    } else {
        (ttl.as_str(), 1)
    };

    let n: u64 = digits
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("expected a number with optional d/h/m/s suffix"))?;
    Ok(Duration::from_secs(n.saturating_mul(unit_secs)))
}

/// Format a number of seconds in the largest whole unit.
pub fn format_duration(secs: u64) -> String {
    if secs >= 86_400 {
        format!("{}d", secs / 86_400)
    } else if secs >= 3_600 {
        format!("{}h", secs / 3_600)
    } else if secs >= 60 {
        format!("{}m", secs / 60)
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_units() {
        assert_eq!(parse_ttl("7d").unwrap(), Duration::from_secs(604_800));
        assert_eq!(parse_ttl("24h").unwrap(), Duration::from_secs(86_400));
        assert_eq!(parse_ttl("30m").unwrap(), Duration::from_secs(1_800));
        assert_eq!(parse_ttl("45s").unwrap(), Duration::from_secs(45));
        assert_eq!(parse_ttl("90").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_ttl(" 2H ").unwrap(), Duration::from_secs(7_200));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_ttl("").is_err());
        assert!(parse_ttl("soon").is_err());
        assert!(parse_ttl("-5m").is_err());
        assert!(parse_ttl("h").is_err());
    }

    #[test]
    fn formats_largest_unit() {
        assert_eq!(format_duration(172_800), "2d");
        assert_eq!(format_duration(7_200), "2h");
        assert_eq!(format_duration(120), "2m");
        assert_eq!(format_duration(5), "5s");
    }
}
