//! Human readable renderings used by the report tables.

use std::time::Duration;

const BYTE_UNITS: [&str; 6] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// `1234567` -> `1,234,567`
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// IEC units: `512 B`, `1.5 KiB`, `79 MiB`. One decimal is shown below ten.
pub fn format_bytes(bytes: i64) -> String {
    let sign = if bytes < 0 { "-" } else { "" };
    let bytes = bytes.unsigned_abs();
    if bytes < 1024 {
        return format!("{sign}{bytes} B");
    }

    let mut value = bytes as f64;
    let mut unit = BYTE_UNITS[0];
    for candidate in BYTE_UNITS {
        value /= 1024.0;
        unit = candidate;
        if value < 1024.0 {
            break;
        }
    }

    let value = (value * 10.0).round() / 10.0;
    if value < 10.0 {
        format!("{sign}{value:.1} {unit}")
    } else {
        format!("{sign}{value:.0} {unit}")
    }
}

pub fn format_cpu(percent: f64) -> String {
    format!("{percent:.0}")
}

/// Whole seconds, e.g. `3days 4h 1m 2s`.
pub fn format_uptime(uptime: Duration) -> String {
    humantime::format_duration(Duration::from_secs(uptime.as_secs())).to_string()
}

/// Rounded to the millisecond, e.g. `12ms` or `1s 500ms`.
pub fn format_rtt(rtt: Duration) -> String {
    let millis = (rtt.as_nanos() + 500_000) / 1_000_000;
    humantime::format_duration(Duration::from_millis(millis as u64)).to_string()
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_are_grouped_by_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
        assert_eq!(format_count(12_345_678), "12,345,678");
    }

    #[test]
    fn bytes_use_binary_units() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1000), "1000 B");
        assert_eq!(format_bytes(1536), "1.5 KiB");
        assert_eq!(format_bytes(79 * 1024 * 1024), "79 MiB");
        assert_eq!(format_bytes(3 * 1024 * 1024 * 1024), "3.0 GiB");
        assert_eq!(format_bytes(-2048), "-2.0 KiB");
        assert_eq!(format_bytes(i64::MIN), "-8.0 EiB");
    }

    #[test]
    fn cpu_is_rounded_to_an_integer() {
        assert_eq!(format_cpu(0.2), "0");
        assert_eq!(format_cpu(12.7), "13");
        assert_eq!(format_cpu(250.0), "250");
    }

    #[test]
    fn uptime_drops_fractions_of_a_second() {
        assert_eq!(format_uptime(Duration::ZERO), "0s");
        assert_eq!(format_uptime(Duration::from_millis(3_723_900)), "1h 2m 3s");
    }

    #[test]
    fn rtt_is_rounded_to_the_millisecond() {
        assert_eq!(format_rtt(Duration::from_micros(12_400)), "12ms");
        assert_eq!(format_rtt(Duration::from_micros(12_600)), "13ms");
        assert_eq!(format_rtt(Duration::from_millis(1_500)), "1s 500ms");
        assert_eq!(format_rtt(Duration::ZERO), "0s");
    }
}
