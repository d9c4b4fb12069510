use crate::imports::*;

/// A formatted instant as seen from a stop and from the viewer.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeResult {
    pub stop_time: String,
    pub user_time: String,
    pub show_both: bool,
}

#[derive(Copy, Clone, Debug, Display, EnumString, Eq, Hash, PartialEq)]
#[strum(serialize_all = "kebab-case")]
pub enum ZoneLabel {
    /// `GMT+2`, `GMT-4`, `GMT+5:30`
    Offset,
    /// Time zone database abbreviation such as `CEST` or `EDT`
    Abbreviation,
}

#[derive(Copy, Clone, Debug, Display, EnumString, Eq, Hash, PartialEq)]
pub enum HourCycle {
    #[strum(to_string = "h12", serialize = "h11")]
    H12,
    #[strum(to_string = "h23", serialize = "h24")]
    H23,
}

impl Default for ZoneLabel {
    fn default() -> ZoneLabel {
        ZoneLabel::Offset
    }
}

impl fmt::Display for TimeResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.show_both {
            write!(f, "{} ({})", self.stop_time, self.user_time)
        } else {
            f.write_str(&self.stop_time)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_label_from_str() -> Result<()> {
        assert_eq!(ZoneLabel::from_str("offset")?, ZoneLabel::Offset);
        assert_eq!(ZoneLabel::from_str("abbreviation")?, ZoneLabel::Abbreviation);
        assert!(ZoneLabel::from_str("long").is_err());
        Ok(())
    }

    #[test]
    fn test_hour_cycle_from_str() -> Result<()> {
        assert_eq!(HourCycle::from_str("h11")?, HourCycle::H12);
        assert_eq!(HourCycle::from_str("h12")?, HourCycle::H12);
        assert_eq!(HourCycle::from_str("h23")?, HourCycle::H23);
        assert_eq!(HourCycle::from_str("h24")?, HourCycle::H23);
        assert_eq!(HourCycle::H12.to_string(), "h12");
        Ok(())
    }

    #[test]
    fn test_time_result_serializes_camel_case() -> Result<()> {
        let result = TimeResult { stop_time: "08:00 GMT-4".into(), user_time: "14:00 GMT+2".into(), show_both: true };
        let value = serde_json::to_value(&result)?;
        assert_eq!(value["stopTime"], "08:00 GMT-4");
        assert_eq!(value["userTime"], "14:00 GMT+2");
        assert_eq!(value["showBoth"], true);
        Ok(())
    }

    #[test]
    fn test_time_result_display() {
        let both = TimeResult { stop_time: "08:00 GMT-4".into(), user_time: "14:00 GMT+2".into(), show_both: true };
        assert_eq!(both.to_string(), "08:00 GMT-4 (14:00 GMT+2)");
        let one = TimeResult { stop_time: "14:00 GMT+2".into(), user_time: "14:00 GMT+2".into(), show_both: false };
        assert_eq!(one.to_string(), "14:00 GMT+2");
    }
}
