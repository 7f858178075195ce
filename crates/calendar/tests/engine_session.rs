use ethcal_calendar::{Calendar, CalendarDate, CalendarError, Engine, Era, Jdn};

#[test]
fn fresh_engine_rejects_implicit_date() {
    let mut engine = Engine::new();
    for (source, target) in [
        (Calendar::Ethiopic, Calendar::Gregorian),
        (Calendar::Gregorian, Calendar::Ethiopic),
        (Calendar::Coptic, Calendar::Gregorian),
        (Calendar::Gregorian, Calendar::Coptic),
    ] {
        assert_eq!(
            engine.convert(source, target),
            Err(CalendarError::UnsetDate),
            "{source} -> {target}"
        );
        assert_eq!(
            engine.convert_current_in_era(source, target, Era::AmeteMihret),
            Err(CalendarError::UnsetDate),
            "{source} -> {target} in era"
        );
        assert!(!engine.is_era_set());
    }
}

#[test]
fn three_call_shapes_agree() {
    let et = CalendarDate::new(2016, 4, 28);
    let gc = CalendarDate::new(2024, 1, 7);

    let mut engine = Engine::with_date(et);
    assert_eq!(engine.ethiopic_to_gregorian(), Ok(gc));
    assert_eq!(engine.ethiopic_to_gregorian_date(et), Ok(gc));
    assert_eq!(engine.ethiopic_to_gregorian_in_era(et, Era::AmeteMihret), Ok(gc));
    assert_eq!(
        engine.convert_current_in_era(Calendar::Ethiopic, Calendar::Gregorian, Era::AmeteMihret),
        Ok(gc)
    );

    engine.set_date(gc);
    assert_eq!(engine.gregorian_to_ethiopic(), Ok(et));
    assert_eq!(engine.gregorian_to_ethiopic_date(gc), Ok(et));
    assert_eq!(engine.gregorian_to_ethiopic_in_era(gc, Era::AmeteMihret), Ok(et));
}

#[test]
fn scoped_era_controls_ethiopic_output() {
    let mut engine = Engine::new();
    let gc = CalendarDate::new(2015, 9, 12);
    assert_eq!(
        engine.gregorian_to_ethiopic_in_era(gc, Era::AmeteAlem),
        Ok(CalendarDate::new(7508, 1, 1))
    );
    assert_eq!(engine.get_era(), None);
    assert_eq!(
        engine.gregorian_to_ethiopic_date(gc),
        Ok(CalendarDate::new(2008, 1, 1))
    );
}

#[test]
fn era_state_machine() {
    let mut engine = Engine::new();
    assert_eq!(engine.get_era(), None);

    engine.set_era(Era::AmeteAlem).unwrap();
    assert_eq!(engine.get_era(), Some(Era::AmeteAlem));

    engine.unset_era();
    assert_eq!(engine.get_era(), None);

    engine.set_era(Era::AmeteMihret).unwrap();
    assert_eq!(engine.get_era(), Some(Era::AmeteMihret));

    assert!(engine.set_era(Era::Gregorian).is_err());
    assert_eq!(engine.get_era(), Some(Era::AmeteMihret));

    engine.reset();
    assert_eq!(engine.get_era(), None);
    assert!(!engine.is_date_set());
}

#[test]
fn session_jdn_primitives() {
    let mut engine = Engine::new();
    engine
        .set_date_in_era(CalendarDate::new(2008, 1, 1), Era::AmeteMihret)
        .unwrap();
    let jdn = engine.current_to_jdn(Calendar::Ethiopic).unwrap();
    assert_eq!(jdn, Jdn::new(2457278));
    assert_eq!(
        engine.from_jdn(Calendar::Gregorian, jdn, None),
        Ok(CalendarDate::new(2015, 9, 12))
    );
    assert_eq!(
        engine.to_jdn(Calendar::Ethiopic, CalendarDate::new(2008, 1, 1), Some(Era::AmeteAlem)),
        Ok(Jdn::new(2457278 - 5500 * 365 - 1375))
    );
}

#[test]
fn coptic_calls_do_not_touch_era() {
    let mut engine = Engine::new();
    engine.set_era(Era::AmeteAlem).unwrap();
    let date = CalendarDate::new(1740, 1, 1);
    assert_eq!(
        engine.convert_date(Calendar::Coptic, Calendar::Gregorian, date),
        Ok(CalendarDate::new(2023, 9, 12))
    );
    assert_eq!(engine.get_era(), Some(Era::AmeteAlem));
}

#[test]
fn out_of_range_session_date_is_an_error() {
    let mut engine = Engine::with_date(CalendarDate::new(99_999_999_999_999_999, 1, 1));
    for result in [
        engine.gregorian_to_ethiopic(),
        engine.gregorian_to_coptic(),
        engine.ethiopic_to_gregorian_in_era(CalendarDate::new(i64::MAX, 13, 5), Era::AmeteAlem),
    ] {
        assert!(matches!(
            result,
            Err(CalendarError::OutOfRange { quantity: "year", .. })
        ));
    }
    assert!(!engine.is_era_set());
    assert!(matches!(
        engine.from_jdn(Calendar::Ethiopic, Jdn::new(i64::MAX), Some(Era::AmeteAlem)),
        Err(CalendarError::OutOfRange { quantity: "JDN", .. })
    ));
}
