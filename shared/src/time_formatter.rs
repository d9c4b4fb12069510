use crate::constants::*;
use crate::error::FormatError;
use crate::host::HostEnvironment;
use crate::imports::*;
use crate::locale::Locale;
use crate::types::*;
use crate::utils::*;

const TWENTY_FOUR_HOUR_FORMAT: &TimeFormat = format_description!("[hour]:[minute]");
const TWELVE_HOUR_FORMAT: &TimeFormat = format_description!("[hour repr:12]:[minute] [period]");

pub fn resolve_time_zone(name: &str) -> Result<&'static Tz, FormatError> {
    timezones::get_by_name(name).ok_or_else(|| FormatError::UnknownTimezone(name.to_string()))
}

fn format_zone_label(instant: OffsetDateTime, time_zone: &Tz, zone_label: ZoneLabel) -> String {
    let offset = time_zone.get_offset_utc(&instant);
    let utc_offset = offset.to_utc();
    match zone_label {
        // Zones without an abbreviation have a numeric designation such as "-03"
        ZoneLabel::Abbreviation if !offset.name().starts_with(|c: char| c == '+' || c == '-') => offset.name().to_string(),
        _ if utc_offset.is_utc() && UTC_TIME_ZONE_NAMES.contains(time_zone.name()) => UTC_TIME_ZONE.to_string(),
        _ => format_gmt_offset(utc_offset),
    }
}

/// Formats the time of day of `instant` in `time_zone`, e.g. `14:05 GMT+2` or `02:05 PM GMT+2`.
pub fn format_short_time(instant: OffsetDateTime, time_zone: &Tz, locale: &Locale, zone_label: ZoneLabel) -> String {
    let format = match locale.hour_cycle() {
        HourCycle::H12 => TWELVE_HOUR_FORMAT,
        HourCycle::H23 => TWENTY_FOUR_HOUR_FORMAT,
    };
    let clock = instant.to_timezone(time_zone).format(format).expect("short time to format");
    format!("{} {}", clock, format_zone_label(instant, time_zone, zone_label))
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct TimeFormatter {
    pub zone_label: ZoneLabel,
}

impl TimeFormatter {
    pub fn new(zone_label: ZoneLabel) -> TimeFormatter {
        TimeFormatter { zone_label }
    }

    /// Formats an instant given as text for a stop's time zone and for the viewer's time zone.
    pub fn format_times<H: HostEnvironment + ?Sized>(
        &self,
        host: &H,
        instant: &str,
        stop_time_zone: Option<&str>,
    ) -> Result<TimeResult, FormatError> {
        let instant = parse_instant(instant)?;
        self.format_instant_times(host, instant, stop_time_zone)
    }

    /// A missing or blank `stop_time_zone` means the stop is in the viewer's time zone.
    pub fn format_instant_times<H: HostEnvironment + ?Sized>(
        &self,
        host: &H,
        instant: OffsetDateTime,
        stop_time_zone: Option<&str>,
    ) -> Result<TimeResult, FormatError> {
        let instant = ensure_formattable(instant)?;
        let locale = host.locale();
        let viewer_time_zone_name = host.time_zone();
        let stop_time_zone_name = match stop_time_zone.map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => viewer_time_zone_name.as_ref(),
        };
        let viewer_time_zone = resolve_time_zone(&viewer_time_zone_name)?;
        let stop_time_zone = resolve_time_zone(stop_time_zone_name)?;
        let times = TimeResult {
            stop_time: format_short_time(instant, stop_time_zone, &locale, self.zone_label),
            user_time: format_short_time(instant, viewer_time_zone, &locale, self.zone_label),
            show_both: stop_time_zone.name() != viewer_time_zone.name(),
        };
        debug!(
            "Formatted {} for stop {:?} and viewer {:?} ({}): {:?}",
            instant,
            stop_time_zone.name(),
            viewer_time_zone.name(),
            locale,
            times
        );
        Ok(times)
    }
}

pub fn format_times<H: HostEnvironment + ?Sized>(
    host: &H,
    instant: &str,
    stop_time_zone: Option<&str>,
) -> Result<TimeResult, FormatError> {
    TimeFormatter::default().format_times(host, instant, stop_time_zone)
}
