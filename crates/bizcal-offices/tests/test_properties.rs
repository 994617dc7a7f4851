//! Property tests for holiday matching, business-day walks, and deadline
//! adjustment.

use bizcal_offices::{
    adjust_deadline, BusinessHours, EscalationRules, Holiday, HolidayType, OfficeLocation,
};
use bizcal_time::{Calendar, Date, TimeOfDay};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn mon_fri() -> BusinessHours {
    BusinessHours::standard_week(TimeOfDay::new(9, 0).unwrap(), TimeOfDay::new(17, 0).unwrap())
}

/// Monday–Friday office observing a handful of recurring holidays.
fn office(rules: EscalationRules) -> OfficeLocation {
    OfficeLocation::new("ldn", "London", mon_fri())
        .with_holiday(Holiday::recurring("ny", "New Year's Day", date(2020, 1, 1), HolidayType::National))
        .with_holiday(Holiday::recurring("may", "Labour Day", date(2020, 5, 1), HolidayType::National))
        .with_holiday(Holiday::recurring("xmas", "Christmas Day", date(2020, 12, 25), HolidayType::National))
        .with_holiday(Holiday::recurring("box", "Boxing Day", date(2020, 12, 26), HolidayType::National))
        .with_escalation_rules(rules)
}

fn any_date() -> impl Strategy<Value = Date> {
    (date(1950, 1, 1).serial()..=date(2150, 12, 31).serial())
        .prop_map(|s| Date::from_serial(s).unwrap())
}

fn any_rules() -> impl Strategy<Value = EscalationRules> {
    (any::<bool>(), any::<bool>(), 0u32..15).prop_map(|(w, h, max)| EscalationRules {
        extend_deadlines_on_weekends: w,
        extend_deadlines_on_holidays: h,
        max_extension_days: max,
        fallback_offices: Vec::new(),
    })
}

proptest! {
    #[test]
    fn seven_day_window_without_holidays_has_five_business_days(d in any_date()) {
        let plain = OfficeLocation::new("p", "Plain", mon_fri());
        prop_assert_eq!(plain.business_days_between(d, d + 6), 5);
    }

    #[test]
    fn recurring_holiday_is_year_invariant(y1 in 1901u16..2199, y2 in 1901u16..2199) {
        let office = office(EscalationRules::default());
        prop_assert_eq!(
            office.is_holiday(date(y1, 12, 25)),
            office.is_holiday(date(y2, 12, 25))
        );
        prop_assert!(office.is_holiday(date(y1, 12, 25)));
    }

    #[test]
    fn next_business_day_is_later_and_open(d in any_date()) {
        let office = office(EscalationRules::default());
        let next = office.next_business_day(d).unwrap();
        prop_assert!(next > d);
        prop_assert!(office.is_working_weekday(next) && !office.is_holiday(next));
        // Nothing in between is a business day
        prop_assert_eq!(office.business_days_between(d + 1, next), 1);
    }

    #[test]
    fn uncapped_adjustment_is_idempotent(d in any_date(), rules in any_rules()) {
        let office = office(rules);
        let once = office.adjust_deadline(d).unwrap();
        prop_assume!(!once.capped);
        let twice = office.adjust_deadline(once.date).unwrap();
        prop_assert_eq!(twice.date, once.date);
    }

    #[test]
    fn adjustment_never_exceeds_cap(d in any_date(), rules in any_rules()) {
        let max = rules.max_extension_days;
        let office = office(rules);
        let adj = office.adjust_deadline(d).unwrap();
        prop_assert!(adj.date >= d);
        prop_assert!(adj.days_extended <= max);
        prop_assert_eq!(d.days_between(adj.date) as u32, adj.days_extended);
        if !adj.capped {
            prop_assert!(adj.date == d || office.is_business_day(adj.date));
        }
    }

    #[test]
    fn no_flags_means_no_change(d in any_date(), max in 0u32..400) {
        let rules = EscalationRules { max_extension_days: max, ..EscalationRules::default() };
        let adj = adjust_deadline(d, &office(EscalationRules::default()), &rules).unwrap();
        prop_assert_eq!(adj.date, d);
        prop_assert!(!adj.capped);
    }
}

#[test]
fn long_holiday_run_beyond_cap_is_capped() {
    // Fri 2024-12-20 followed by a weekend and holidays on 23, 24, 25, 26
    let mut office = office(EscalationRules::extend_up_to(3));
    for (id, day) in [("c23", 23), ("c24", 24)] {
        office.holidays.push(Holiday::fixed(id, "Closure", date(2024, 12, day), HolidayType::Company));
    }
    let sat = date(2024, 12, 21);
    let adj = office.adjust_deadline(sat).unwrap();
    assert!(adj.capped);
    assert_eq!(adj.date, date(2024, 12, 24));
    assert_eq!(adj.days_extended, 3);

    office.escalation_rules.max_extension_days = 10;
    let adj = office.adjust_deadline(sat).unwrap();
    assert!(!adj.capped);
    assert_eq!(adj.date, date(2024, 12, 27));
}

#[test]
fn capped_deadline_moves_again_when_readjusted() {
    // Sat 2024-12-21, closures on Mon 23 and Tue 24, then Christmas and Boxing Day
    let mut office = office(EscalationRules::extend_up_to(3));
    for (id, day) in [("c23", 23), ("c24", 24)] {
        office.holidays.push(Holiday::fixed(id, "Closure", date(2024, 12, day), HolidayType::Company));
    }
    let once = office.adjust_deadline(date(2024, 12, 21)).unwrap();
    assert!(once.capped);
    assert_eq!(once.date, date(2024, 12, 24));
    assert!(!office.is_business_day(once.date));

    // A capped date is not a fixed point: a second pass walks on from it
    let twice = office.adjust_deadline(once.date).unwrap();
    assert!(!twice.capped);
    assert_eq!(twice.date, date(2024, 12, 27));
    assert_ne!(twice.date, once.date);
}
