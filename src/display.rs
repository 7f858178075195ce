//! Human-readable date output: month, weekday and era names.

use ethcal_calendar::{Calendar, CalendarDate, Era, Jdn, floor_mod, guess_era_from_jdn};

/// How a converted date is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `day/month/year`, the form dates are read in.
    Slash,
    /// `day month year` with numeric month.
    Short,
    /// `weekday month-name day year era`.
    Long,
    /// `month-name year`.
    MonthYear,
}

/// Script used for Ethiopic names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// Ge'ez (fidel) script, e.g. `መስከረም`.
    Geez,
    /// Latin transliteration, e.g. `Meskerem`.
    Latin,
}

/// Output settings resolved from the config file and command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Layout of the printed date.
    pub format: DateFormat,
    /// Script for Ethiopic month, weekday and era names.
    pub script: Script,
}

#[rustfmt::skip]
const ETHIOPIC_MONTHS_GEEZ: [&str; 13] = [
    "መስከረም", "ጥቅምት", "ኅዳር", "ታህሣሥ", "ጥር", "የካቲት", "መጋቢት",
    "ሚያዝያ", "ግንቦት", "ሰኔ", "ሐምሌ", "ነሐሴ", "ጳጉሜ",
];

#[rustfmt::skip]
const ETHIOPIC_MONTHS_LATIN: [&str; 13] = [
    "Meskerem", "Tikimt", "Hidar", "Tahsas", "Tir", "Yekatit", "Megabit",
    "Miyazya", "Ginbot", "Sene", "Hamle", "Nehase", "Pagume",
];

#[rustfmt::skip]
const COPTIC_MONTHS: [&str; 13] = [
    "Thout", "Paopi", "Hathor", "Koiak", "Tobi", "Meshir", "Paremhat",
    "Parmouti", "Pashons", "Paoni", "Epip", "Mesori", "Pi Kogi Enavot",
];

#[rustfmt::skip]
const GREGORIAN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

// Sunday first.
const ETHIOPIC_WEEKDAYS_GEEZ: [&str; 7] = ["እሑድ", "ሰኞ", "ማክሰኞ", "ረቡዕ", "ሓሙስ", "ዓርብ", "ቅዳሜ"];
const ETHIOPIC_WEEKDAYS_LATIN: [&str; 7] =
    ["Ehud", "Segno", "Maksegno", "Rob", "Hamus", "Arb", "Kidame"];
const ENGLISH_WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Day of the week of `jdn`, 0 = Sunday.
pub fn weekday_index(jdn: Jdn) -> usize {
    floor_mod(jdn.get() + 1, 7) as usize
}

/// Name of `month` in `calendar`, or `None` if the month is out of range.
pub fn month_name(calendar: Calendar, month: u8, script: Script) -> Option<&'static str> {
    let index = usize::from(month).checked_sub(1)?;
    let table: &[&str] = match (calendar, script) {
        (Calendar::Ethiopic, Script::Geez) => &ETHIOPIC_MONTHS_GEEZ,
        (Calendar::Ethiopic, Script::Latin) => &ETHIOPIC_MONTHS_LATIN,
        (Calendar::Coptic, _) => &COPTIC_MONTHS,
        (Calendar::Gregorian, _) => &GREGORIAN_MONTHS,
    };
    table.get(index).copied()
}

/// Name of the weekday of `jdn`.
pub fn weekday_name(calendar: Calendar, jdn: Jdn, script: Script) -> &'static str {
    let index = weekday_index(jdn);
    match (calendar, script) {
        (Calendar::Ethiopic, Script::Geez) => ETHIOPIC_WEEKDAYS_GEEZ[index],
        (Calendar::Ethiopic, Script::Latin) => ETHIOPIC_WEEKDAYS_LATIN[index],
        _ => ENGLISH_WEEKDAYS[index],
    }
}

/// Era label printed after the year.
pub fn era_label(calendar: Calendar, era: Era, script: Script) -> &'static str {
    match (calendar, era, script) {
        (Calendar::Ethiopic, Era::AmeteAlem, Script::Geez) => "ዓ/ዓ",
        (Calendar::Ethiopic, Era::AmeteAlem, Script::Latin) => "Amete Alem",
        (Calendar::Ethiopic, _, Script::Geez) => "ዓ/ም",
        (Calendar::Ethiopic, _, Script::Latin) => "Amete Mihret",
        (Calendar::Coptic, _, _) => "A.M.",
        (Calendar::Gregorian, _, _) => "CE",
    }
}

/// Formats `date`, which falls on `jdn` in `calendar`.
///
/// `era` is the Ethiopic era the date was counted in; when `None` it is
/// guessed from `jdn` the same way the conversion guessed it.
pub fn format_date(
    calendar: Calendar,
    date: CalendarDate,
    jdn: Jdn,
    era: Option<Era>,
    options: &DisplayOptions,
) -> String {
    let month = || {
        month_name(calendar, date.month(), options.script)
            .map_or_else(|| date.month().to_string(), str::to_string)
    };
    match options.format {
        DateFormat::Slash => date.to_string(),
        DateFormat::Short => format!("{} {} {}", date.day(), date.month(), date.year()),
        DateFormat::MonthYear => format!("{} {}", month(), date.year()),
        DateFormat::Long => {
            let era = era.unwrap_or_else(|| guess_era_from_jdn(jdn));
            format!(
                "{} {} {} {} {}",
                weekday_name(calendar, jdn, options.script),
                month(),
                date.day(),
                date.year(),
                era_label(calendar, era, options.script)
            )
        }
    }
}
