//! Dish-listing parser.
//!
//! Turns a [`RawDayRecord`] into a [`DayMenu`]. The parser is stateless:
//! every function here is a pure transformation of its input.

use chrono::NaiveDate;
use tracing::debug;

use crate::brackets::{classify_last_group, extract_groups, strip_groups};
use crate::error::ParseError;
use crate::types::{DayMenu, DishEntry, RawDayRecord};

/// Parses a single dish line into a [`DishEntry`] with the given `id`.
///
/// Returns `None` when the line is blank after trimming.
pub fn parse_dish_line(id: usize, line: &str) -> Option<DishEntry> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let groups = extract_groups(trimmed);
    let split = classify_last_group(&groups);

    Some(DishEntry {
        id,
        name: strip_groups(trimmed),
        code: split.code.map(String::from),
        options: split.options.into_iter().map(String::from).collect(),
    })
}

/// Parses a newline-delimited dish listing.
///
/// Blank lines are skipped and do not consume an id, so ids always run
/// `1..=N` over the emitted entries.
///
/// # Examples
///
/// ```
/// use schoolmeal_core::parse_dishes;
///
/// let dishes = parse_dishes("김치 (5)\n\n된장국 (10.12)");
/// assert_eq!(dishes.len(), 2);
/// assert_eq!(dishes[1].id, 2);
/// assert_eq!(dishes[1].name, "된장국");
/// ```
pub fn parse_dishes(listing: &str) -> Vec<DishEntry> {
    let mut dishes = Vec::new();
    for line in listing.split('\n') {
        if let Some(dish) = parse_dish_line(dishes.len() + 1, line) {
            dishes.push(dish);
        }
    }
    dishes
}

/// Reformats a raw `YYYYMMDD` date as `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns [`ParseError::MalformedDate`] unless `raw` is exactly eight ASCII
/// digits forming a valid calendar date.
///
/// # Examples
///
/// ```
/// use schoolmeal_core::format_date;
///
/// assert_eq!(format_date("20240315").unwrap(), "2024-03-15");
/// assert!(format_date("2024-15").is_err());
/// assert!(format_date("20240230").is_err());
/// ```
pub fn format_date(raw: &str) -> Result<String, ParseError> {
    parse_raw_date(raw).map(|date| date.format("%Y-%m-%d").to_string())
}

/// Parses a raw `YYYYMMDD` date string.
///
/// # Errors
///
/// Returns [`ParseError::MalformedDate`] for anything that is not eight ASCII
/// digits naming a real day.
pub fn parse_raw_date(raw: &str) -> Result<NaiveDate, ParseError> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::MalformedDate(raw.to_string()));
    }
    NaiveDate::parse_from_str(raw, "%Y%m%d")
        .map_err(|_| ParseError::MalformedDate(raw.to_string()))
}

/// Parses one raw record into a [`DayMenu`].
///
/// # Errors
///
/// Returns [`ParseError::MissingDate`] or [`ParseError::MalformedDate`] when
/// the record should be skipped. Dish text never causes an error.
///
/// # Examples
///
/// ```
/// use schoolmeal_core::{parse_day, ParseError, RawDayRecord};
///
/// let menu = parse_day(&RawDayRecord::new("20240315", "백미밥\n계란국 (추가) (1.5.6.18)")).unwrap();
/// assert_eq!(menu.date, "2024-03-15");
/// assert_eq!(menu.meals[1].code.as_deref(), Some("1.5.6.18"));
///
/// let skipped = parse_day(&RawDayRecord::undated("백미밥"));
/// assert_eq!(skipped, Err(ParseError::MissingDate));
/// ```
pub fn parse_day(record: &RawDayRecord) -> Result<DayMenu, ParseError> {
    let raw_date = record
        .date
        .as_deref()
        .filter(|d| !d.is_empty())
        .ok_or(ParseError::MissingDate)?;
    let date = format_date(raw_date)?;

    Ok(DayMenu {
        date,
        meals: parse_dishes(&record.dish_listing),
    })
}

/// Parses every record, dropping the ones [`parse_day`] skips.
///
/// Output order follows input order; records are not re-sorted.
pub fn parse_batch(records: &[RawDayRecord]) -> Vec<DayMenu> {
    records
        .iter()
        .filter_map(|record| match parse_day(record) {
            Ok(menu) => Some(menu),
            Err(err) => {
                debug!(date = ?record.date, "skipping record: {err}");
                None
            }
        })
        .collect()
}
