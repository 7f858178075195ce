//! Checks the closed-form Gregorian formulas against a plain day-by-day walk.

use ethcal_calendar::{
    CalendarDate, JD_EPOCH_OFFSET_GREGORIAN, Jdn, gregorian_to_jdn, jdn_to_gregorian,
};

fn reference_leap(year: i64) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

fn reference_month_len(year: i64, month: u8) -> u8 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if reference_leap(year) => 29,
        2 => 28,
        _ => 31,
    }
}

#[test]
fn forward_walk_from_year_one_to_2800() {
    let (mut year, mut month, mut day) = (1i64, 1u8, 1u8);
    let mut jdn = Jdn::new(JD_EPOCH_OFFSET_GREGORIAN);
    let mut checked_y2k = false;

    while year <= 2800 {
        let expected = CalendarDate::new(year, month, day);
        assert_eq!(jdn_to_gregorian(jdn), expected, "JDN {jdn}");
        assert_eq!(gregorian_to_jdn(expected), jdn, "date {expected}");
        if expected == CalendarDate::new(2000, 1, 1) {
            assert_eq!(jdn.get(), 2451545);
            checked_y2k = true;
        }

        jdn = jdn.next();
        day += 1;
        if day > reference_month_len(year, month) {
            day = 1;
            month += 1;
            if month > 12 {
                month = 1;
                year += 1;
            }
        }
    }
    assert!(checked_y2k);
}

#[test]
fn backward_walk_over_two_cycles_before_epoch() {
    let (mut year, mut month, mut day) = (0i64, 12u8, 31u8);
    let mut jdn = Jdn::new(JD_EPOCH_OFFSET_GREGORIAN - 1);

    while year >= -800 {
        let expected = CalendarDate::new(year, month, day);
        assert_eq!(jdn_to_gregorian(jdn), expected, "JDN {jdn}");
        assert_eq!(gregorian_to_jdn(expected), jdn, "date {expected}");

        jdn = jdn.add_days(-1);
        if day > 1 {
            day -= 1;
        } else {
            if month > 1 {
                month -= 1;
            } else {
                month = 12;
                year -= 1;
            }
            day = reference_month_len(year, month);
        }
    }
}
