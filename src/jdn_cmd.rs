//! JDN commands: expose the interchange day number directly.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use ethcal_calendar::{Calendar, Era, Jdn, from_jdn, to_jdn};

use crate::cli::{FromJdnArgs, ToJdnArgs};
use crate::config::EthcalConfig;
use crate::convert;
use crate::display::{self, DisplayOptions};

/// Print the JDN of a date.
pub fn run_to_jdn(args: ToJdnArgs, config: &EthcalConfig) -> Result<()> {
    let _cmd = info_span!("to_jdn").entered();

    let calendar = convert::parse_calendar(&args.calendar)?;
    let era = convert::resolve_era(&config.ethiopic, args.era.as_deref())?;
    let date = convert::parse_date(&args.date)?;

    let jdn = to_jdn(calendar, date, era)
        .with_context(|| format!("cannot compute JDN of {calendar} date {date}"))?;
    info!(%calendar, %date, %jdn, "computed JDN");

    println!("{jdn}");
    Ok(())
}

/// Print the date of a JDN.
pub fn run_from_jdn(args: FromJdnArgs, config: &EthcalConfig) -> Result<()> {
    let _cmd = info_span!("from_jdn").entered();

    let calendar = convert::parse_calendar(&args.calendar)?;
    let era = convert::resolve_era(&config.ethiopic, args.era.as_deref())?;
    let options = convert::build_display_options(&config.display, args.format.as_deref())?;

    println!("{}", render_date(calendar, Jdn::new(args.jdn), era, &options)?);
    Ok(())
}

fn render_date(
    calendar: Calendar,
    jdn: Jdn,
    era: Option<Era>,
    options: &DisplayOptions,
) -> Result<String> {
    let date = from_jdn(calendar, jdn, era)
        .with_context(|| format!("cannot express JDN {jdn} in the {calendar} calendar"))?;
    info!(%calendar, %jdn, %date, "computed date");

    Ok(display::format_date(calendar, date, jdn, era, options))
}
