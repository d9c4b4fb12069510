use time::format_description::well_known::{Rfc2822, Rfc3339};

use crate::error::FormatError;
use crate::imports::*;

const SECONDS_PER_DAY: i64 = 86400;

const ISO8601_DATE_FORMAT: &TimeFormat = format_description!("[year]-[month]-[day]");

// Date-times without an offset, which are taken to be in UTC
const ISO8601_LOCAL_DATE_TIME_FORMATS: &[&TimeFormat] = &[
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]"),
];

#[cfg(not(all(target_arch = "wasm32", not(target_os = "wasi"), feature = "wasmbind")))]
pub fn now_utc() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

#[cfg(all(target_arch = "wasm32", not(target_os = "wasi"), feature = "wasmbind"))]
pub fn now_utc() -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp_nanos(1000000i128 * (js_sys::Date::now() as i128))
        .expect("current timestamp to convert to offset date/time")
}

/// Instants within a day of the supported date range can't be shifted into every time zone.
pub fn ensure_formattable(instant: OffsetDateTime) -> Result<OffsetDateTime, FormatError> {
    let min_timestamp = Date::MIN.midnight().assume_utc().unix_timestamp() + SECONDS_PER_DAY;
    let max_timestamp = Date::MAX.midnight().assume_utc().unix_timestamp();
    if (min_timestamp..max_timestamp).contains(&instant.unix_timestamp()) {
        Ok(instant)
    } else {
        Err(FormatError::InvalidInput(instant.to_string()))
    }
}

pub fn from_epoch_millis(millis: i64) -> Result<OffsetDateTime, FormatError> {
    OffsetDateTime::from_unix_timestamp_nanos(1000000i128 * millis as i128)
        .map_err(|_| FormatError::InvalidInput(millis.to_string()))
        .and_then(ensure_formattable)
}

fn is_epoch_millis(text: &str) -> bool {
    let digits = text.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(text);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Parses an instant from text: epoch milliseconds, RFC 3339, RFC 2822, or an ISO-8601 date-time
/// or date without an offset (which is taken to be UTC).
pub fn parse_instant(input: &str) -> Result<OffsetDateTime, FormatError> {
    parse_instant_text(input.trim())
        .ok_or_else(|| {
            debug!("Unparseable instant: {:?}", input);
            FormatError::InvalidInput(input.to_string())
        })
        .and_then(|instant| ensure_formattable(instant).map_err(|_| FormatError::InvalidInput(input.to_string())))
}

fn parse_instant_text(text: &str) -> Option<OffsetDateTime> {
    if is_epoch_millis(text) {
        let millis: i64 = text.parse().ok()?;
        return from_epoch_millis(millis).ok();
    }
    if let Ok(instant) = OffsetDateTime::parse(text, &Rfc3339) {
        return Some(instant);
    }
    if let Ok(instant) = OffsetDateTime::parse(text, &Rfc2822) {
        return Some(instant);
    }
    for format in ISO8601_LOCAL_DATE_TIME_FORMATS {
        if let Ok(date_time) = PrimitiveDateTime::parse(text, format) {
            return Some(date_time.assume_utc());
        }
    }
    Date::parse(text, ISO8601_DATE_FORMAT).ok().map(|date| date.midnight().assume_utc())
}

/// Formats a UTC offset the way browsers label zones without a well-known abbreviation.
pub fn format_gmt_offset(offset: UtcOffset) -> String {
    let (hours, minutes, seconds) = offset.as_hms();
    let sign = if offset.is_negative() { '-' } else { '+' };
    match (hours, minutes, seconds) {
        (0, 0, 0) => "GMT".to_string(),
        (hours, 0, 0) => format!("GMT{:+}", hours),
        (hours, minutes, 0) => format!("GMT{}{}:{:02}", sign, hours.abs(), minutes.abs()),
        // Local mean time offsets from before standard time zones
        (hours, minutes, seconds) => {
            format!("GMT{}{}:{:02}:{:02}", sign, hours.abs(), minutes.abs(), seconds.abs())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_instant_rfc3339() -> Result<()> {
        assert_eq!(parse_instant("2025-06-15T12:00:00Z")?, datetime!(2025-06-15 12:00 UTC));
        assert_eq!(parse_instant("2025-06-15T14:00:00+02:00")?, datetime!(2025-06-15 12:00 UTC));
        assert_eq!(parse_instant(" 2025-06-15T12:00:00.250Z ")?, datetime!(2025-06-15 12:00:00.25 UTC));
        Ok(())
    }

    #[test]
    fn test_parse_instant_epoch_millis() -> Result<()> {
        assert_eq!(parse_instant("1749988800000")?, datetime!(2025-06-15 12:00 UTC));
        assert_eq!(parse_instant("0")?, datetime!(1970-01-01 0:00 UTC));
        assert_eq!(parse_instant("-1000")?, datetime!(1969-12-31 23:59:59 UTC));
        assert_eq!(parse_instant("+1000")?, datetime!(1970-01-01 0:00:01 UTC));
        Ok(())
    }

    #[test]
    fn test_parse_instant_rfc2822() -> Result<()> {
        assert_eq!(parse_instant("Sun, 15 Jun 2025 12:00:00 +0000")?, datetime!(2025-06-15 12:00 UTC));
        Ok(())
    }

    #[test]
    fn test_parse_instant_without_offset_is_utc() -> Result<()> {
        assert_eq!(parse_instant("2025-06-15T12:00")?, datetime!(2025-06-15 12:00 UTC));
        assert_eq!(parse_instant("2025-06-15 12:00:30")?, datetime!(2025-06-15 12:00:30 UTC));
        assert_eq!(parse_instant("2025-06-15")?, datetime!(2025-06-15 0:00 UTC));
        Ok(())
    }

    #[test]
    fn test_parse_instant_invalid() {
        assert_eq!(parse_instant("not-a-date"), Err(FormatError::InvalidInput("not-a-date".to_string())));
        assert!(matches!(parse_instant(""), Err(FormatError::InvalidInput(_))));
        assert!(matches!(parse_instant("2025-13-40T12:00:00Z"), Err(FormatError::InvalidInput(_))));
        assert!(matches!(parse_instant("99999999999999999999999"), Err(FormatError::InvalidInput(_))));
    }

    #[test]
    fn test_instants_at_the_edge_of_the_date_range() -> Result<()> {
        assert_eq!(
            parse_instant("9999-12-31T23:00:00Z"),
            Err(FormatError::InvalidInput("9999-12-31T23:00:00Z".to_string()))
        );
        assert_eq!(parse_instant("9999-12-30T23:59:59Z")?, datetime!(9999-12-30 23:59:59 UTC));
        let min_millis = Date::MIN.midnight().assume_utc().unix_timestamp() * 1000;
        assert!(matches!(from_epoch_millis(min_millis), Err(FormatError::InvalidInput(_))));
        assert!(matches!(parse_instant(&(min_millis + 3600 * 1000).to_string()), Err(FormatError::InvalidInput(_))));
        assert!(from_epoch_millis(min_millis + SECONDS_PER_DAY * 1000).is_ok());
        Ok(())
    }

    #[test]
    fn test_format_gmt_offset() -> Result<()> {
        assert_eq!(format_gmt_offset(UtcOffset::from_hms(2, 0, 0)?), "GMT+2");
        assert_eq!(format_gmt_offset(UtcOffset::from_hms(-4, 0, 0)?), "GMT-4");
        assert_eq!(format_gmt_offset(UtcOffset::from_hms(5, 30, 0)?), "GMT+5:30");
        assert_eq!(format_gmt_offset(UtcOffset::from_hms(-3, -30, 0)?), "GMT-3:30");
        assert_eq!(format_gmt_offset(UtcOffset::from_hms(0, -30, 0)?), "GMT-0:30");
        assert_eq!(format_gmt_offset(UtcOffset::UTC), "GMT");
        assert_eq!(format_gmt_offset(UtcOffset::from_hms(0, 53, 28)?), "GMT+0:53:28");
        assert_eq!(format_gmt_offset(UtcOffset::from_hms(-4, -56, -2)?), "GMT-4:56:02");
        Ok(())
    }
}
