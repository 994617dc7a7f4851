//! Integration tests for `Date`, `Weekday`, and the weekends-only calendar.

use bizcal_time::date::{days_in_month, is_leap_year};
use bizcal_time::{Calendar, Date, WeekendsOnly};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2023, 2), 28);
    assert_eq!(days_in_month(2023, 12), 31);
}

#[test]
fn consecutive_dates_walk_every_day_of_a_year() {
    let mut d = date(2024, 1, 1);
    let mut count = 1;
    while d < date(2024, 12, 31) {
        let next = d.succ().unwrap();
        assert_eq!(next - d, 1);
        d = next;
        count += 1;
    }
    assert_eq!(count, 366);
}

#[test]
fn serde_as_iso_string() {
    let d = date(2024, 1, 7);
    assert_eq!(serde_json::to_string(&d).unwrap(), "\"2024-01-07\"");
    let back: Date = serde_json::from_str("\"2024-01-07T00:00:00Z\"").unwrap();
    assert_eq!(back, d);
    assert!(serde_json::from_str::<Date>("\"2024-02-30\"").is_err());
}

#[cfg(feature = "chrono")]
#[test]
fn chrono_interop() {
    let d = date(2024, 2, 29);
    let naive: chrono::NaiveDate = d.into();
    assert_eq!(naive, chrono::NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    assert_eq!(Date::try_from(naive).unwrap(), d);
}

fn any_date() -> impl Strategy<Value = Date> {
    (Date::MIN.serial()..=Date::MAX.serial() - 14).prop_map(|s| Date::from_serial(s).unwrap())
}

proptest! {
    #[test]
    fn weekday_advances_by_one_each_day(d in any_date()) {
        let next = d.succ().unwrap();
        prop_assert_eq!(next.weekday().index(), (d.weekday().index() + 1) % 7);
    }

    #[test]
    fn week_after_has_same_weekday(d in any_date()) {
        prop_assert_eq!((d + 7).weekday(), d.weekday());
    }

    #[test]
    fn any_seven_days_hold_five_weekdays(d in any_date()) {
        prop_assert_eq!(WeekendsOnly.business_days_between(d, d + 6), 5);
    }

    #[test]
    fn display_then_parse_is_identity(d in any_date()) {
        prop_assert_eq!(d.to_string().parse::<Date>().unwrap(), d);
    }
}
