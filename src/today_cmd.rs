//! Today command: the current local date in any calendar.

use anyhow::Result;
use chrono::Local;
use tracing::{info, info_span};

use ethcal_calendar::{Calendar, Engine};

use crate::cli::TodayArgs;
use crate::config::EthcalConfig;
use crate::convert;
use crate::display::{self, DateFormat};

/// Print today's date.
pub fn run(args: TodayArgs, config: &EthcalConfig) -> Result<()> {
    let _cmd = info_span!("today").entered();

    let calendar = convert::parse_calendar(&args.calendar)?;
    let mut options = convert::build_display_options(&config.display, args.format.as_deref())?;
    if args.format.is_none() {
        options.format = DateFormat::Long;
    }

    let gregorian = convert::gregorian_from_naive(Local::now().date_naive());
    let engine = Engine::with_date(gregorian);
    let jdn = engine.current_to_jdn(Calendar::Gregorian)?;
    let date = engine.convert(Calendar::Gregorian, calendar)?;
    info!(%gregorian, %calendar, %date, "today");

    println!("{}", display::format_date(calendar, date, jdn, None, &options));
    Ok(())
}
