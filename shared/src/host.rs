use crate::imports::*;
use crate::locale::Locale;

/// Ambient settings of the environment the viewer is running in.
pub trait HostEnvironment {
    /// IANA identifier of the viewer's time zone
    fn time_zone(&self) -> Cow<'_, str>;

    fn locale(&self) -> Locale;
}

/// A host with a fixed time zone and locale.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FixedHost {
    pub time_zone: String,
    pub locale: Locale,
}

impl FixedHost {
    pub fn new(time_zone: impl Into<String>, locale: Locale) -> FixedHost {
        FixedHost { time_zone: time_zone.into(), locale }
    }
}

impl HostEnvironment for FixedHost {
    fn time_zone(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.time_zone)
    }

    fn locale(&self) -> Locale {
        self.locale.clone()
    }
}

impl<H: HostEnvironment + ?Sized> HostEnvironment for &H {
    fn time_zone(&self) -> Cow<'_, str> {
        (**self).time_zone()
    }

    fn locale(&self) -> Locale {
        (**self).locale()
    }
}
