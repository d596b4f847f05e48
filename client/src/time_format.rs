use chrono::DateTime;

use dossier_shared::decompose_seconds;

const DATE_FORMAT: &str = "%b %d, %Y %H:%M";

/// Format total in-game seconds the way the dossier header shows them.
pub fn format_play_time(total_secs: i64) -> String {
    let d = decompose_seconds(total_secs);
    format!(
        "{} days, {} h, {} m, {} s",
        d.days, d.hours, d.minutes, d.seconds
    )
}

/// Render a unix timestamp in the viewer's local time zone.
pub fn format_unix(secs: i64) -> String {
    format_unix_in(secs, &chrono::Local)
}

fn format_unix_in<Tz: chrono::TimeZone>(secs: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::from_timestamp(secs, 0) {
        Some(dt) => dt.with_timezone(tz).format(DATE_FORMAT).to_string(),
        None => "-".to_string(),
    }
}

/// Two-decimal kill/death display. Zero-death rows arrive as `inf`/`NaN`
/// and are rendered as such rather than special-cased.
pub fn format_kd(ratio: f64) -> String {
    format!("{ratio:.2}")
}

#[cfg(test)]
mod tests {
    use super::{format_kd, format_play_time, format_unix, format_unix_in};
    use chrono::Utc;

    #[test]
    fn formats_play_time_units() {
        assert_eq!(format_play_time(90_061), "1 days, 1 h, 1 m, 1 s");
        assert_eq!(format_play_time(0), "0 days, 0 h, 0 m, 0 s");
    }

    #[test]
    fn formats_known_timestamp_in_utc() {
        assert_eq!(format_unix_in(1_700_000_000, &Utc), "Nov 14, 2023 22:13");
    }

    #[test]
    fn out_of_range_timestamp_falls_back() {
        assert_eq!(format_unix(i64::MAX), "-");
    }

    #[test]
    fn formats_kd_ratio() {
        assert_eq!(format_kd(120.0 / 10.0), "12.00");
        assert_eq!(format_kd(7.0 / 3.0), "2.33");
    }

    #[test]
    fn zero_death_kd_renders_ieee_values() {
        assert_eq!(format_kd(12.0 / 0.0), "inf");
        assert_eq!(format_kd(0.0 / 0.0), "NaN");
    }
}
