use crate::constants::*;
use crate::imports::*;
use crate::types::*;

/// The parts of a viewer's locale that affect how a short time is rendered.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Locale {
    tag: String,
    language: String,
    region: Option<String>,
    hour_cycle: HourCycle,
}

fn is_region_subtag(subtag: &str) -> bool {
    (subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic()))
        || (subtag.len() == 3 && subtag.chars().all(|c| c.is_ascii_digit()))
}

fn preferred_hour_cycle(language: &str, region: Option<&str>) -> HourCycle {
    let twelve_hour = match region {
        Some(region) => TWELVE_HOUR_REGIONS.contains(region),
        None => TWELVE_HOUR_LANGUAGES.contains(language),
    };
    if twelve_hour {
        HourCycle::H12
    } else {
        HourCycle::H23
    }
}

impl Locale {
    /// Parses a BCP 47 language tag (`en-US`, `en-GB-u-hc-h12`) or a POSIX locale name
    /// (`de_DE.UTF-8`, `C`).
    pub fn parse(text: &str) -> Result<Locale> {
        let inner = || {
            // POSIX names may carry a codeset and a modifier: "de_DE.UTF-8@euro"
            let text = text.trim().split(|c: char| c == '.' || c == '@').next().unwrap_or_default();
            ensure!(!text.is_empty(), "Empty locale");
            if text == "C" || text == "POSIX" {
                return Locale::parse(DEFAULT_LOCALE_TAG);
            }
            let tag = text.replace('_', "-");
            let mut subtags = tag.split('-');
            let language = subtags.next().unwrap_or_default().to_ascii_lowercase();
            ensure!(
                (2..=8).contains(&language.len()) && language.chars().all(|c| c.is_ascii_alphabetic()),
                "Invalid language subtag: {:?}",
                language
            );
            let mut region = None;
            let mut explicit_hour_cycle = None;
            let mut singleton: Option<String> = None;
            let mut extension_key: Option<String> = None;
            for subtag in subtags {
                ensure!(
                    !subtag.is_empty() && subtag.len() <= 8 && subtag.chars().all(|c| c.is_ascii_alphanumeric()),
                    "Invalid subtag: {:?}",
                    subtag
                );
                let subtag = subtag.to_ascii_lowercase();
                if subtag.len() == 1 {
                    singleton = Some(subtag);
                    extension_key = None;
                    continue;
                }
                match singleton.as_deref() {
                    None => {
                        if region.is_none() && is_region_subtag(&subtag) {
                            region = Some(subtag.to_ascii_uppercase());
                        }
                    }
                    Some("u") if subtag.len() == 2 => extension_key = Some(subtag),
                    Some("u") if extension_key.as_deref() == Some("hc") => {
                        explicit_hour_cycle = Some(
                            HourCycle::from_str(&subtag)
                                .with_context(|| format!("Invalid hour cycle: {:?}", subtag))?,
                        );
                    }
                    Some(_) => {}
                }
            }
            let hour_cycle =
                explicit_hour_cycle.unwrap_or_else(|| preferred_hour_cycle(&language, region.as_deref()));
            Ok(Locale { tag, language, region, hour_cycle })
        };
        inner().with_context(|| format!("Failed to parse locale: {:?}", text))
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn hour_cycle(&self) -> HourCycle {
        self.hour_cycle
    }

    pub fn with_hour_cycle(self, hour_cycle: HourCycle) -> Locale {
        Locale { hour_cycle, ..self }
    }
}

impl Default for Locale {
    fn default() -> Locale {
        Locale {
            tag: DEFAULT_LOCALE_TAG.to_string(),
            language: "en".to_string(),
            region: Some("US".to_string()),
            hour_cycle: HourCycle::H12,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Locale> {
        Locale::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bcp47() -> Result<()> {
        let locale = Locale::parse("en-US")?;
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.region(), Some("US"));
        assert_eq!(locale.hour_cycle(), HourCycle::H12);
        let locale = Locale::parse("de-DE")?;
        assert_eq!(locale.region(), Some("DE"));
        assert_eq!(locale.hour_cycle(), HourCycle::H23);
        let locale = Locale::parse("zh-Hant-TW")?;
        assert_eq!(locale.language(), "zh");
        assert_eq!(locale.region(), Some("TW"));
        assert_eq!(Locale::parse("es-419")?.region(), Some("419"));
        Ok(())
    }

    #[test]
    fn test_parse_posix() -> Result<()> {
        let locale = Locale::parse("de_DE.UTF-8")?;
        assert_eq!(locale.tag(), "de-DE");
        assert_eq!(locale.hour_cycle(), HourCycle::H23);
        assert_eq!(Locale::parse("fr_FR@euro")?.region(), Some("FR"));
        assert_eq!(Locale::parse("C")?, Locale::default());
        assert_eq!(Locale::parse("POSIX.UTF-8")?, Locale::default());
        Ok(())
    }

    #[test]
    fn test_hour_cycle_without_region() -> Result<()> {
        assert_eq!(Locale::parse("en")?.hour_cycle(), HourCycle::H12);
        assert_eq!(Locale::parse("de")?.hour_cycle(), HourCycle::H23);
        assert_eq!(Locale::parse("en-GB")?.hour_cycle(), HourCycle::H23);
        Ok(())
    }

    #[test]
    fn test_hour_cycle_extension() -> Result<()> {
        assert_eq!(Locale::parse("en-US-u-hc-h23")?.hour_cycle(), HourCycle::H23);
        assert_eq!(Locale::parse("de-DE-u-ca-gregory-hc-h12")?.hour_cycle(), HourCycle::H12);
        assert_eq!(Locale::parse("ja-JP-u-hc-h11")?.hour_cycle(), HourCycle::H12);
        assert!(Locale::parse("en-US-u-hc-h99").is_err());
        // Private use subtags are not regions or extensions
        assert_eq!(Locale::parse("en-x-hc-h23")?.hour_cycle(), HourCycle::H12);
        Ok(())
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Locale::parse("").is_err());
        assert!(Locale::parse("  ").is_err());
        assert!(Locale::parse("e").is_err());
        assert!(Locale::parse("en--US").is_err());
        assert!(Locale::parse("12-US").is_err());
    }

    #[test]
    fn test_with_hour_cycle() -> Result<()> {
        let locale = Locale::parse("en-US")?.with_hour_cycle(HourCycle::H23);
        assert_eq!(locale.hour_cycle(), HourCycle::H23);
        assert_eq!(locale.to_string(), "en-US");
        Ok(())
    }
}
