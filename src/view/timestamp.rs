use std::fmt::Display;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};

const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";
pub const INVALID_DATE: &str = "Invalid Date";

/// Render a wire timestamp in the viewer's zone, `1/20/2025, 3:04:05 PM` style.
///
/// - with an explicit offset (`Z`, `+02:00`): converted to `tz`
/// - date and time without offset: read as wall time in `tz`
/// - date only: read as UTC midnight
///
/// The zone's offset is looked up per timestamp, so with [`chrono::Local`]
/// each value gets the daylight-saving offset of its own date. Anything else
/// renders as [`INVALID_DATE`].
pub fn format_created_at<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(tz).format(DISPLAY_FORMAT).to_string();
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            // ambiguous wall times take the earlier offset, skipped ones move past the gap
            let local = tz
                .from_local_datetime(&naive)
                .earliest()
                .or_else(|| tz.from_local_datetime(&(naive + TimeDelta::hours(1))).earliest());
            return match local {
                Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
                None => INVALID_DATE.to_string(),
            };
        }
    }

    if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return midnight
            .and_utc()
            .with_timezone(tz)
            .format(DISPLAY_FORMAT)
            .to_string();
    }

    INVALID_DATE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Local, Utc};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn formats_utc_timestamp() {
        assert_eq!(
            format_created_at("2024-01-01T00:00:00Z", &utc()),
            "1/1/2024, 12:00:00 AM"
        );
    }

    #[test]
    fn converts_into_viewer_offset() {
        let cest = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            format_created_at("2024-07-14T13:05:09Z", &cest),
            "7/14/2024, 3:05:09 PM"
        );
    }

    #[test]
    fn naive_timestamps_are_wall_time() {
        let est = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(
            format_created_at("2025-01-20T00:00:00", &est),
            "1/20/2025, 12:00:00 AM"
        );
        assert_eq!(
            format_created_at("2025-01-20T18:30:00.250", &utc()),
            "1/20/2025, 6:30:00 PM"
        );
    }

    #[test]
    fn date_only_is_utc_midnight() {
        let est = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(format_created_at("2024-03-02", &est), "3/1/2024, 7:00:00 PM");
    }

    #[test]
    fn garbage_is_invalid_date() {
        assert_eq!(format_created_at("yesterday", &utc()), INVALID_DATE);
        assert_eq!(format_created_at("", &utc()), INVALID_DATE);
    }

    #[test]
    fn local_zone_uses_offset_of_each_date() {
        for raw in ["2024-01-15T12:00:00Z", "2024-07-15T12:00:00Z"] {
            let expected = DateTime::parse_from_rfc3339(raw)
                .unwrap()
                .with_timezone(&Utc)
                .with_timezone(&Local)
                .format(DISPLAY_FORMAT)
                .to_string();
            assert_eq!(format_created_at(raw, &Local), expected);
        }
    }
}
