use crate::host::system_host;
use crate::imports::*;
use crate::types::TimesOptions;

pub fn render_times<H: HostEnvironment + ?Sized>(
    options: &TimesOptions,
    host: &H,
    now: OffsetDateTime,
) -> Result<String> {
    let formatter = TimeFormatter::new(options.zone_label);
    let stop_time_zone = options.stop_time_zone.as_deref();
    let times = match &options.instant {
        Some(instant) => formatter.format_times(host, instant, stop_time_zone),
        None => formatter.format_instant_times(host, now, stop_time_zone),
    }
    .context("Failed to format times")?;
    if options.json {
        serde_json::to_string_pretty(&times).context("Failed to serialize times to JSON")
    } else {
        Ok(times.to_string())
    }
}

pub fn print_times(options: &TimesOptions) -> Result<()> {
    let host = system_host(&options.host);
    println!("{}", render_times(options, &host, now_utc())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HostOptions;

    fn options(instant: Option<&str>, stop_time_zone: Option<&str>) -> TimesOptions {
        TimesOptions {
            instant: instant.map(String::from),
            stop_time_zone: stop_time_zone.map(String::from),
            host: HostOptions { time_zone: None, locale: None },
            zone_label: ZoneLabel::Offset,
            json: false,
        }
    }

    fn berlin() -> FixedHost {
        FixedHost::new("Europe/Berlin", Locale::parse("en-GB").expect("test locale to parse"))
    }

    #[test]
    fn test_render_times_both_zones() -> Result<()> {
        let output =
            render_times(&options(Some("2025-06-15T12:00:00Z"), Some("America/New_York")), &berlin(), now_utc())?;
        assert_eq!(output, "08:00 GMT-4 (14:00 GMT+2)");
        Ok(())
    }

    #[test]
    fn test_render_times_defaults_to_now() -> Result<()> {
        let output = render_times(&options(None, None), &berlin(), datetime!(2025-01-15 12:00 UTC))?;
        assert_eq!(output, "13:00 GMT+1");
        Ok(())
    }

    #[test]
    fn test_render_times_json() -> Result<()> {
        let options = TimesOptions { json: true, ..options(Some("1749988800000"), Some("America/New_York")) };
        let output = render_times(&options, &berlin(), now_utc())?;
        let times: TimeResult = serde_json::from_str(&output)?;
        assert_eq!(
            times,
            TimeResult { stop_time: "08:00 GMT-4".into(), user_time: "14:00 GMT+2".into(), show_both: true }
        );
        Ok(())
    }

    #[test]
    fn test_render_times_errors() {
        let err = render_times(&options(Some("not-a-date"), None), &berlin(), now_utc()).unwrap_err();
        assert_eq!(err.downcast_ref::<FormatError>(), Some(&FormatError::InvalidInput("not-a-date".to_string())));
        let err = render_times(&options(None, Some("Mars/Olympus_Mons")), &berlin(), now_utc()).unwrap_err();
        assert!(matches!(err.downcast_ref::<FormatError>(), Some(FormatError::UnknownTimezone(_))));
    }
}
