//! Human-readable formatting for crack times and large counts.

const INSTANT_THRESHOLD: f64 = 0.001;
const SECONDS_PER_MINUTE: f64 = 60.0;
const MINUTES_PER_HOUR: f64 = 60.0;
const HOURS_PER_DAY: f64 = 24.0;
const DAYS_PER_YEAR: f64 = 365.0;
const MILLION: f64 = 1_000_000.0;
const BILLION: f64 = 1_000_000_000.0;

pub const INSTANTLY: &str = "Instantly";
pub const FOREVER: &str = "Forever";
pub const UNKNOWN: &str = "Unknown";

/// Converts a number of seconds into the coarsest readable unit.
///
/// Each unit is derived from the previous one (seconds, minutes, hours, days,
/// years) and compared with a strict less-than against the next boundary.
/// Years are grouped with thousands separators and scaled to millions or
/// billions once they get large enough.
///
/// Negative input reads as "Instantly", `+inf` as "Forever" and NaN as
/// "Unknown"; this function never panics.
pub fn format_duration(seconds: f64) -> String {
    if seconds.is_nan() {
        return UNKNOWN.to_string();
    }
    if seconds < INSTANT_THRESHOLD {
        return INSTANTLY.to_string();
    }
    if seconds.is_infinite() {
        return FOREVER.to_string();
    }

    if seconds < SECONDS_PER_MINUTE {
        return format!("{:.2} seconds", seconds);
    }

    let minutes = seconds / SECONDS_PER_MINUTE;
    if minutes < MINUTES_PER_HOUR {
        return format!("{:.1} minutes", minutes);
    }

    let hours = minutes / MINUTES_PER_HOUR;
    if hours < HOURS_PER_DAY {
        return format!("{:.1} hours", hours);
    }

    let days = hours / HOURS_PER_DAY;
    if days < DAYS_PER_YEAR {
        return format!("{:.1} days", days);
    }

    let years = days / DAYS_PER_YEAR;
    if years < MILLION {
        return format!("{} years", separate_thousands(years, 1));
    }
    if years < BILLION {
        return format!("{} million years", separate_thousands(years / MILLION, 1));
    }
    format!("{} billion years", separate_thousands(years / BILLION, 1))
}

/// Formats `value` with `decimals` fractional digits and a `,` between every
/// group of three integer digits.
///
/// Non-finite values are rendered as-is (`inf`, `NaN`).
pub fn separate_thousands(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(formatted.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECONDS_PER_YEAR: f64 = 31_536_000.0;

    #[test]
    fn test_format_instantly() {
        assert_eq!(format_duration(0.0001), "Instantly");
        assert_eq!(format_duration(0.0), "Instantly");
    }

    #[test]
    fn test_format_instant_threshold_is_strict() {
        assert_eq!(format_duration(0.001), "0.00 seconds");
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_duration(30.0), "30.00 seconds");
        assert_eq!(format_duration(1.234), "1.23 seconds");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_duration(60.0), "1.0 minutes");
        assert_eq!(format_duration(90.0), "1.5 minutes");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_duration(3600.0), "1.0 hours");
        assert_eq!(format_duration(7200.0), "2.0 hours");
    }

    #[test]
    fn test_format_days() {
        assert_eq!(format_duration(86_400.0), "1.0 days");
        assert_eq!(format_duration(172_800.0), "2.0 days");
    }

    #[test]
    fn test_format_years() {
        assert_eq!(format_duration(SECONDS_PER_YEAR), "1.0 years");
        assert_eq!(format_duration(63_072_000.0), "2.0 years");
        assert_eq!(format_duration(1500.0 * SECONDS_PER_YEAR), "1,500.0 years");
    }

    #[test]
    fn test_format_million_years() {
        assert_eq!(
            format_duration(2_500_000.0 * SECONDS_PER_YEAR),
            "2.5 million years"
        );
    }

    #[test]
    fn test_format_billion_years() {
        assert_eq!(
            format_duration(4_000_000_000.0 * SECONDS_PER_YEAR),
            "4.0 billion years"
        );
    }

    #[test]
    fn test_format_astronomical_magnitudes_stay_numeric() {
        for seconds in [1e100, 1e300, f64::MAX] {
            let text = format_duration(seconds);
            assert!(text.ends_with(" billion years"), "got {}", text);
            assert!(text.contains(','));
            assert!(!text.contains("inf") && !text.contains("NaN"));
        }
    }

    #[test]
    fn test_format_non_finite_and_negative() {
        assert_eq!(format_duration(f64::INFINITY), "Forever");
        assert_eq!(format_duration(f64::NAN), "Unknown");
        assert_eq!(format_duration(-5.0), "Instantly");
        assert_eq!(format_duration(f64::NEG_INFINITY), "Instantly");
    }

    #[test]
    fn test_separate_thousands_integers() {
        assert_eq!(separate_thousands(2_176_782_336.0, 0), "2,176,782,336");
        assert_eq!(separate_thousands(150_000.0, 0), "150,000");
        assert_eq!(separate_thousands(1_100_000.0, 0), "1,100,000");
        assert_eq!(separate_thousands(1000.0, 0), "1,000");
        assert_eq!(separate_thousands(999.0, 0), "999");
        assert_eq!(separate_thousands(0.0, 0), "0");
    }

    #[test]
    fn test_separate_thousands_fractions_and_sign() {
        assert_eq!(separate_thousands(1500.0, 1), "1,500.0");
        assert_eq!(separate_thousands(0.5, 2), "0.50");
        assert_eq!(separate_thousands(-1_234_567.891, 2), "-1,234,567.89");
    }

    #[test]
    fn test_separate_thousands_non_finite() {
        assert_eq!(separate_thousands(f64::INFINITY, 0), "inf");
        assert_eq!(separate_thousands(f64::NAN, 1), "NaN");
    }
}
