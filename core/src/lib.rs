//! Core menu types and the dish-listing parser.
//!
//! This crate turns one day's raw meal record (a `YYYYMMDD` date plus a
//! newline-delimited dish listing) into a structured menu:
//!
//! - [`RawDayRecord`] — the record as the transport layer hands it over.
//! - [`DayMenu`] — the parsed day with its date reformatted as `YYYY-MM-DD`.
//! - [`DishEntry`] — one dish with its display name, optional allergen code,
//!   and descriptive options.
//!
//! Parsing ([`parse_day`], [`parse_batch`]) is pure and stateless. The bracket
//! helpers ([`extract_groups`], [`classify_last_group`], [`strip_groups`]) are
//! exported so each step can be checked on its own.
//!
//! # Example
//!
//! ```
//! use schoolmeal_core::*;
//!
//! let records = vec![
//!     RawDayRecord::new("20240315", "백미밥\n계란국 (추가) (1.5.6.18)\n  \n김치 (9.13)"),
//!     RawDayRecord::new("2024-15", "dropped"),
//! ];
//!
//! let menus = parse_batch(&records);
//! assert_eq!(menus.len(), 1);
//!
//! let day = &menus[0];
//! assert_eq!(day.date, "2024-03-15");
//! assert_eq!(day.meals.len(), 3);
//!
//! let soup = day.find_dish("계란국").unwrap();
//! assert_eq!(soup.code.as_deref(), Some("1.5.6.18"));
//! assert_eq!(soup.options, vec!["추가"]);
//! assert_eq!(day.meals[2].id, 3);
//! ```

mod brackets;
mod error;
mod output;
mod parser;
mod types;

pub use brackets::{BracketSplit, classify_last_group, extract_groups, is_code_group, strip_groups};
pub use error::ParseError;
pub use output::{OutputFormat, format_menus};
pub use parser::{
    format_date, parse_batch, parse_day, parse_dish_line, parse_dishes, parse_raw_date,
};
pub use types::*;
