pub use ::anyhow::{anyhow, bail, ensure, Context, Result};
pub use ::const_format::concatcp;
pub use ::log::{debug, error, info, warn};
pub use ::once_cell::sync::Lazy;
pub use ::serde::{de::DeserializeOwned, Deserialize, Serialize};
pub use ::std::borrow::Cow;
pub use ::std::collections::HashSet;
pub use ::std::fmt;
pub use ::std::str::FromStr;
pub use ::strum_macros::{Display, EnumString};
pub use ::time::format_description::FormatItem;
pub use ::time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};
pub use ::time_macros::{date, datetime, format_description};
pub use ::time_tz::{timezones, Offset, OffsetDateTimeExt, TimeZone, Tz};

pub type TimeFormat = [FormatItem<'static>];
