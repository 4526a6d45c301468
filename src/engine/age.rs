//! Age gate arithmetic.
//!
//! Age is the plain difference of calendar years: someone born on Dec 31 of
//! `today.year - 18` counts as 18 for the whole of `today.year`. No
//! day-of-year adjustment is applied.

use jiff::civil::Date;

pub const ADULT_AGE: i32 = 18;

pub fn age_in_calendar_years(dob: Date, today: Date) -> i32 {
    i32::from(today.year()) - i32::from(dob.year())
}

pub fn is_adult(dob: Date, today: Date) -> bool {
    age_in_calendar_years(dob, today) >= ADULT_AGE
}

/// Latest date of birth that still passes the gate: Dec 31, eighteen years
/// back. `None` only at the far edge of the supported calendar.
pub fn latest_adult_dob(today: Date) -> Option<Date> {
    let year = i32::from(today.year()) - ADULT_AGE;
    let year = i16::try_from(year).ok()?;
    Date::new(year, 12, 31).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn dec_31_eighteen_years_back_is_adult() {
        let today = date(2026, 1, 1);
        assert_eq!(age_in_calendar_years(date(2008, 12, 31), today), 18);
        assert!(is_adult(date(2008, 12, 31), today));
    }

    #[test]
    fn any_day_of_the_following_year_is_not() {
        let today = date(2026, 12, 31);
        assert!(!is_adult(date(2009, 1, 1), today));
        assert!(!is_adult(date(2009, 12, 31), today));
    }

    #[test]
    fn calendar_years_ignore_birthday_position() {
        // One day short of 18 full years, still 18 by calendar year.
        let today = date(2026, 3, 1);
        let dob = date(2008, 3, 2);
        assert!(is_adult(dob, today));
    }

    #[test]
    fn latest_adult_dob_is_year_end() {
        assert_eq!(latest_adult_dob(date(2026, 10, 18)), Some(date(2008, 12, 31)));
        let bound = latest_adult_dob(date(2026, 10, 18)).unwrap();
        assert!(is_adult(bound, date(2026, 10, 18)));
        assert!(!is_adult(bound.tomorrow().unwrap(), date(2026, 10, 18)));
    }

    #[test]
    fn future_birth_is_never_adult() {
        assert!(age_in_calendar_years(date(2030, 1, 1), date(2026, 10, 18)) < 0);
        assert!(!is_adult(date(2030, 1, 1), date(2026, 10, 18)));
    }
}
