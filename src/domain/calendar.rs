//! Calendar model: month table and leap-year arithmetic

use crate::error::{CalendarError, Result};
use chrono::NaiveDate;

/// Smallest year that can be generated
pub const MIN_YEAR: i32 = 1;

/// Largest year whose day files still carry a 4-digit year
pub const MAX_YEAR: i32 = 9999;

/// How many days a month has
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCount {
    /// Same length every year
    Fixed(u32),
    /// 28 or 29 depending on the year (February)
    LeapDependent,
}

/// A month of the Gregorian calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    pub number: u32,
    pub name: &'static str,
    pub day_count: DayCount,
}

pub static MONTHS: [Month; 12] = [
    Month::new(1, "January", DayCount::Fixed(31)),
    Month::new(2, "February", DayCount::LeapDependent),
    Month::new(3, "March", DayCount::Fixed(31)),
    Month::new(4, "April", DayCount::Fixed(30)),
    Month::new(5, "May", DayCount::Fixed(31)),
    Month::new(6, "June", DayCount::Fixed(30)),
    Month::new(7, "July", DayCount::Fixed(31)),
    Month::new(8, "August", DayCount::Fixed(31)),
    Month::new(9, "September", DayCount::Fixed(30)),
    Month::new(10, "October", DayCount::Fixed(31)),
    Month::new(11, "November", DayCount::Fixed(30)),
    Month::new(12, "December", DayCount::Fixed(31)),
];

impl Month {
    const fn new(number: u32, name: &'static str, day_count: DayCount) -> Self {
        Month {
            number,
            name,
            day_count,
        }
    }

    /// Look up a month by its number (1 = January)
    #[cfg(test)]
    pub fn from_number(number: u32) -> Option<&'static Month> {
        MONTHS.iter().find(|m| m.number == number)
    }

    /// Number of days this month has in the given year
    pub fn days_in(&self, year: i32) -> u32 {
        match self.day_count {
            DayCount::Fixed(days) => days,
            DayCount::LeapDependent => leap_year_days(year),
        }
    }

    /// Every date of this month in the given year, in order.
    ///
    /// The year must lie within `MIN_YEAR..=MAX_YEAR`.
    pub fn dates(&self, year: i32) -> Result<Vec<NaiveDate>> {
        (1..=self.days_in(year))
            .map(|day| {
                NaiveDate::from_ymd_opt(year, self.number, day).ok_or_else(|| {
                    CalendarError::InvalidYear(format!(
                        "{}-{:02}-{:02} is not a valid date",
                        year, self.number, day
                    ))
                })
            })
            .collect()
    }
}

/// Gregorian leap-year rule
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in February of the given year
pub fn leap_year_days(year: i32) -> u32 {
    if is_leap_year(year) {
        29
    } else {
        28
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_leap_year_rule() {
        assert_eq!(leap_year_days(2024), 29);
        assert_eq!(leap_year_days(2023), 28);
        assert_eq!(leap_year_days(1900), 28);
        assert_eq!(leap_year_days(2000), 29);
        assert_eq!(leap_year_days(2100), 28);
        assert_eq!(leap_year_days(4), 29);
        assert_eq!(leap_year_days(1), 28);
    }

    #[test]
    fn test_leap_year_matches_chrono() {
        for year in MIN_YEAR..=MAX_YEAR {
            let chrono_leap = NaiveDate::from_ymd_opt(year, 2, 29).is_some();
            assert_eq!(is_leap_year(year), chrono_leap, "year {}", year);
        }
    }

    #[test]
    fn test_month_table_order_and_names() {
        let names: Vec<&str> = MONTHS.iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            vec![
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December"
            ]
        );
        for (idx, month) in MONTHS.iter().enumerate() {
            assert_eq!(month.number as usize, idx + 1);
        }
    }

    #[test]
    fn test_only_february_is_leap_dependent() {
        let dependent: Vec<u32> = MONTHS
            .iter()
            .filter(|m| m.day_count == DayCount::LeapDependent)
            .map(|m| m.number)
            .collect();
        assert_eq!(dependent, vec![2]);
    }

    #[test]
    fn test_days_in_year_total() {
        let total_2023: u32 = MONTHS.iter().map(|m| m.days_in(2023)).sum();
        let total_2024: u32 = MONTHS.iter().map(|m| m.days_in(2024)).sum();
        assert_eq!(total_2023, 365);
        assert_eq!(total_2024, 366);
    }

    #[test]
    fn test_from_number() {
        assert_eq!(Month::from_number(9).unwrap().name, "September");
        assert!(Month::from_number(0).is_none());
        assert!(Month::from_number(13).is_none());
    }

    #[test]
    fn test_dates_cover_whole_month() {
        let february = Month::from_number(2).unwrap();
        let dates = february.dates(2024).unwrap();
        assert_eq!(dates.len(), 29);
        assert_eq!(dates.first().unwrap().day(), 1);
        assert_eq!(*dates.last().unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }
}
