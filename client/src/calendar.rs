//! Date arithmetic for the convenience fetches.

use chrono::{Datelike, Days, Local, Months, NaiveDate};

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Returns `base` shifted by `offset` days, or `None` past the calendar's end.
pub fn shift(base: NaiveDate, offset: i64) -> Option<NaiveDate> {
    let days = Days::new(offset.unsigned_abs());
    if offset >= 0 {
        base.checked_add_days(days)
    } else {
        base.checked_sub_days(days)
    }
}

/// Monday and Friday of the week containing `date`, or `None` past the
/// calendar's ends.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use schoolmeal_client::calendar::school_week;
///
/// let sunday = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
/// let (monday, friday) = school_week(sunday).unwrap();
/// assert_eq!(monday, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
/// assert_eq!(friday, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
/// ```
pub fn school_week(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let from_monday = u64::from(date.weekday().num_days_from_monday());
    let monday = date.checked_sub_days(Days::new(from_monday))?;
    let friday = monday.checked_add_days(Days::new(4))?;
    Some((monday, friday))
}

/// First and last day of the month containing `date`, or `None` past the
/// calendar's ends.
pub fn month_bounds(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let first = date.with_day(1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    Some((first, last))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_shift() {
        assert_eq!(shift(date(2024, 2, 28), 1), Some(date(2024, 2, 29)));
        assert_eq!(shift(date(2024, 3, 1), -1), Some(date(2024, 2, 29)));
        assert_eq!(shift(date(2024, 3, 1), 0), Some(date(2024, 3, 1)));
    }

    #[test]
    fn test_school_week_from_each_weekday() {
        for day in 11..=17 {
            assert_eq!(
                school_week(date(2024, 3, day)),
                Some((date(2024, 3, 11), date(2024, 3, 15)))
            );
        }
    }

    #[test]
    fn test_school_week_crosses_month() {
        assert_eq!(
            school_week(date(2024, 5, 1)),
            Some((date(2024, 4, 29), date(2024, 5, 3)))
        );
    }

    #[test]
    fn test_school_week_at_calendar_ends() {
        assert_eq!(school_week(NaiveDate::MAX), None);
        assert_eq!(school_week(NaiveDate::MIN), None);
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(
            month_bounds(date(2024, 2, 14)),
            Some((date(2024, 2, 1), date(2024, 2, 29)))
        );
        assert_eq!(
            month_bounds(date(2023, 2, 1)),
            Some((date(2023, 2, 1), date(2023, 2, 28)))
        );
        assert_eq!(
            month_bounds(date(2024, 12, 31)),
            Some((date(2024, 12, 1), date(2024, 12, 31)))
        );
    }

    #[test]
    fn test_month_bounds_at_calendar_end() {
        assert_eq!(month_bounds(NaiveDate::MAX), None);
    }
}
