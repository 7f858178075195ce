//! Pure conversion functions: config and CLI strings -> library types.

use anyhow::{Context, Result, bail};
use chrono::{Datelike, NaiveDate};

use ethcal_calendar::{Calendar, CalendarDate, Era};

use crate::config::{DisplayToml, EthiopicToml};
use crate::display::{DateFormat, DisplayOptions, Script};

/// Parses a calendar name into the corresponding enum variant.
pub fn parse_calendar(s: &str) -> Result<Calendar> {
    match s.to_lowercase().as_str() {
        "ethiopic" | "ethiopian" | "eth" | "et" => Ok(Calendar::Ethiopic),
        "coptic" | "cop" => Ok(Calendar::Coptic),
        "gregorian" | "greg" | "gc" => Ok(Calendar::Gregorian),
        other => bail!("unknown calendar: {other:?}"),
    }
}

/// Parses an Ethiopic era name. `auto` means no explicit era.
pub fn parse_era(s: &str) -> Result<Option<Era>> {
    match s.to_lowercase().as_str() {
        "auto" => Ok(None),
        "amete-mihret" | "mihret" | "am" => Ok(Some(Era::AmeteMihret)),
        "amete-alem" | "alem" | "aa" => Ok(Some(Era::AmeteAlem)),
        other => bail!("unknown era: {other:?}"),
    }
}

/// Parses an output format name into the corresponding enum variant.
pub fn parse_format(s: &str) -> Result<DateFormat> {
    match s.to_lowercase().as_str() {
        "slash" => Ok(DateFormat::Slash),
        "short" => Ok(DateFormat::Short),
        "long" => Ok(DateFormat::Long),
        "month-year" => Ok(DateFormat::MonthYear),
        other => bail!("unknown format: {other:?}"),
    }
}

/// Parses a script name into the corresponding enum variant.
pub fn parse_script(s: &str) -> Result<Script> {
    match s.to_lowercase().as_str() {
        "geez" | "ethiopic" => Ok(Script::Geez),
        "latin" => Ok(Script::Latin),
        other => bail!("unknown script: {other:?}"),
    }
}

/// Parses a `day/month/year` date argument.
pub fn parse_date(s: &str) -> Result<CalendarDate> {
    s.parse::<CalendarDate>()
        .with_context(|| format!("invalid date argument {s:?}, expected day/month/year"))
}

/// Resolves the Ethiopic era: the CLI flag wins over the config file.
pub fn resolve_era(ethiopic: &EthiopicToml, cli_era: Option<&str>) -> Result<Option<Era>> {
    parse_era(cli_era.unwrap_or(&ethiopic.era))
}

/// Builds [`DisplayOptions`] from the config, with an optional format
/// override from the command line.
pub fn build_display_options(
    display: &DisplayToml,
    format_override: Option<&str>,
) -> Result<DisplayOptions> {
    let format = parse_format(format_override.unwrap_or(&display.format))?;
    let script = parse_script(&display.script)?;
    Ok(DisplayOptions { format, script })
}

/// Carries a chrono date into the library as a Gregorian triple.
pub fn gregorian_from_naive(date: NaiveDate) -> CalendarDate {
    CalendarDate::new(i64::from(date.year()), date.month() as u8, date.day() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendars() {
        assert_eq!(parse_calendar("Ethiopic").unwrap(), Calendar::Ethiopic);
        assert_eq!(parse_calendar("et").unwrap(), Calendar::Ethiopic);
        assert_eq!(parse_calendar("COPTIC").unwrap(), Calendar::Coptic);
        assert_eq!(parse_calendar("gc").unwrap(), Calendar::Gregorian);
        assert!(parse_calendar("julian").is_err());
    }

    #[test]
    fn eras() {
        assert_eq!(parse_era("auto").unwrap(), None);
        assert_eq!(parse_era("AM").unwrap(), Some(Era::AmeteMihret));
        assert_eq!(parse_era("amete-alem").unwrap(), Some(Era::AmeteAlem));
        let err = parse_era("coptic").unwrap_err();
        assert_eq!(err.to_string(), "unknown era: \"coptic\"");
    }

    #[test]
    fn formats_and_scripts() {
        assert_eq!(parse_format("long").unwrap(), DateFormat::Long);
        assert_eq!(parse_format("month-year").unwrap(), DateFormat::MonthYear);
        assert!(parse_format("iso").is_err());
        assert_eq!(parse_script("Latin").unwrap(), Script::Latin);
        assert!(parse_script("cyrillic").is_err());
    }

    #[test]
    fn dates() {
        assert_eq!(parse_date("12/9/2015").unwrap(), CalendarDate::new(2015, 9, 12));
        let err = parse_date("2015-09-12").unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("expected day/month/year"), "{msg}");
        assert!(msg.contains("malformed date"), "{msg}");
    }

    #[test]
    fn cli_era_overrides_config() {
        let config = EthiopicToml {
            era: "amete-alem".to_string(),
        };
        assert_eq!(resolve_era(&config, None).unwrap(), Some(Era::AmeteAlem));
        assert_eq!(resolve_era(&config, Some("auto")).unwrap(), None);
        assert!(resolve_era(&config, Some("bogus")).is_err());
    }

    #[test]
    fn display_options_override() {
        let display = DisplayToml::default();
        let options = build_display_options(&display, None).unwrap();
        assert_eq!(options.format, DateFormat::Slash);
        assert_eq!(options.script, Script::Geez);
        let options = build_display_options(&display, Some("long")).unwrap();
        assert_eq!(options.format, DateFormat::Long);
    }

    #[test]
    fn naive_date_carrier() {
        let naive = NaiveDate::from_ymd_opt(2015, 9, 12).unwrap();
        assert_eq!(gregorian_from_naive(naive), CalendarDate::new(2015, 9, 12));
    }
}
