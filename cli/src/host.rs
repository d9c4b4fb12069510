use crate::imports::*;
use crate::types::HostOptions;

// Checked in order, as the C library does for LC_TIME
const LOCALE_ENV_VARS: &[&str] = &["LC_ALL", "LC_TIME", "LANG"];

fn env_time_zone() -> Option<String> {
    let value = env::var("TZ").ok()?;
    let name = value.strip_prefix(':').unwrap_or(&value);
    match resolve_time_zone(name) {
        Ok(time_zone) => Some(time_zone.name().to_string()),
        Err(err) => {
            warn!("Ignoring TZ environment variable: {}", err);
            None
        }
    }
}

fn system_time_zone() -> String {
    if let Some(time_zone) = env_time_zone() {
        return time_zone;
    }
    match time_tz::system::get_timezone() {
        Ok(time_zone) => time_zone.name().to_string(),
        Err(err) => {
            warn!("Could not detect system time zone, using {}: {:?}", UTC_TIME_ZONE, err);
            UTC_TIME_ZONE.to_string()
        }
    }
}

fn system_locale() -> Locale {
    for var in LOCALE_ENV_VARS {
        match env::var(var) {
            Ok(value) if !value.is_empty() => match Locale::parse(&value) {
                Ok(locale) => return locale,
                Err(err) => warn!("Ignoring {} environment variable: {:#}", var, err),
            },
            _ => {}
        }
    }
    Locale::default()
}

/// The local host, with time zone and locale from the options when given, otherwise from the
/// environment and the operating system.
pub fn system_host(options: &HostOptions) -> FixedHost {
    let time_zone = options.time_zone.clone().unwrap_or_else(system_time_zone);
    let locale = options.locale.clone().unwrap_or_else(system_locale);
    debug!("Local time zone: {:?}, locale: {}", time_zone, locale);
    FixedHost::new(time_zone, locale)
}
