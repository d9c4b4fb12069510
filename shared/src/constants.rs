use crate::imports::*;

pub const TRANSITOUS_BASE_URL: &str = "https://transitous.org";
pub const WIDGET_SCRIPT_URL: &str = concatcp!(TRANSITOUS_BASE_URL, "/embed.js");

// Name of the global object the widget script installs on `window`
pub const WIDGET_GLOBAL_NAME: &str = "TransitousWidget";
pub const DEFAULT_WIDGET_MOUNT_ID: &str = "transitous-widget";

pub const DEFAULT_LOCALE_TAG: &str = "en-US";
pub const UTC_TIME_ZONE: &str = "UTC";

pub static UTC_TIME_ZONE_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from_iter([
        "UTC",
        "UCT",
        "Universal",
        "Zulu",
        "Etc/UTC",
        "Etc/UCT",
        "Etc/Universal",
        "Etc/Zulu",
    ])
});

// Regions whose preferred clock is 12-hour (CLDR "h" time format)
pub static TWELVE_HOUR_REGIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from_iter([
        "AE", "AU", "BD", "CA", "CO", "EG", "IN", "JO", "KR", "MY", "NZ", "PH", "PK", "SA", "SV", "TW", "US",
    ])
});

// Languages whose default region uses a 12-hour clock, used when a locale has no region
pub static TWELVE_HOUR_LANGUAGES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from_iter(["ar", "bn", "en", "hi", "ko", "ur"]));
