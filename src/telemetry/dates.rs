use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// In-band strings the dashboard has historically stored for "no date".
const SENTINELS: [&str; 2] = ["null", "Invalid Date"];

const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    // Written by the ground-station subscriber.
    "%d/%m/%y_%H:%M:%S",
];

/// Parses a raw launch date. Absent markers and anything unparseable map
/// to `None`; naive date-times are taken as UTC.
pub fn parse_launch_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() || SENTINELS.contains(&raw) {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn sentinels_are_absent() {
        assert_eq!(parse_launch_date("null"), None);
        assert_eq!(parse_launch_date("Invalid Date"), None);
        assert_eq!(parse_launch_date(""), None);
        assert_eq!(parse_launch_date("   "), None);
    }

    #[test]
    fn rfc_shapes() {
        assert_eq!(
            parse_launch_date("2025-07-01T12:00:00+02:00"),
            Some(utc(2025, 7, 1, 10, 0, 0))
        );
        assert_eq!(
            parse_launch_date("Tue, 01 Jul 2025 12:00:00 GMT"),
            Some(utc(2025, 7, 1, 12, 0, 0))
        );
    }

    #[test]
    fn naive_shapes_are_utc() {
        assert_eq!(
            parse_launch_date("2025-07-01T12:30:15"),
            Some(utc(2025, 7, 1, 12, 30, 15))
        );
        assert_eq!(
            parse_launch_date("2025-07-01 12:30:15.250"),
            Some(utc(2025, 7, 1, 12, 30, 15) + chrono::Duration::milliseconds(250))
        );
        assert_eq!(parse_launch_date("2025-07-01"), Some(utc(2025, 7, 1, 0, 0, 0)));
        assert_eq!(
            parse_launch_date("16/10/26_08:15:00"),
            Some(utc(2026, 10, 16, 8, 15, 0))
        );
    }

    #[test]
    fn malformed_is_absent() {
        assert_eq!(parse_launch_date("yesterday"), None);
        assert_eq!(parse_launch_date("2025-13-45"), None);
        assert_eq!(parse_launch_date("32/01/25_10:00:00"), None);
    }
}
