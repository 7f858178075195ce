//! Convert command: print a date in another calendar.

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use ethcal_calendar::{Calendar, CalendarDate, Era, from_jdn, to_jdn};

use crate::cli::ConvertArgs;
use crate::config::EthcalConfig;
use crate::convert as parse;
use crate::display::{self, DisplayOptions};

/// Run the conversion.
pub fn run(args: ConvertArgs, config: &EthcalConfig) -> Result<()> {
    let _cmd = info_span!("convert").entered();

    let source = parse::parse_calendar(&args.from)?;
    let target = parse::parse_calendar(&args.to)?;
    let era = parse::resolve_era(&config.ethiopic, args.era.as_deref())?;
    let options = parse::build_display_options(&config.display, args.format.as_deref())?;
    let date = parse::parse_date(&args.date)?;
    debug!(%source, %target, ?era, %date, "parsed arguments");

    println!("{}", render(source, target, date, era, &options)?);
    Ok(())
}

/// Converts `date` through its JDN and formats the result.
fn render(
    source: Calendar,
    target: Calendar,
    date: CalendarDate,
    era: Option<Era>,
    options: &DisplayOptions,
) -> Result<String> {
    let jdn = to_jdn(source, date, era)
        .with_context(|| format!("cannot compute JDN of {source} date {date}"))?;
    let result = from_jdn(target, jdn, era)
        .with_context(|| format!("cannot convert {date} from {source} to {target}"))?;
    info!(%jdn, %result, "converted");

    Ok(display::format_date(target, result, jdn, era, options))
}
