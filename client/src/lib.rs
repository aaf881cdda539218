//! Blocking client for the NEIS school meal open-data API.
//!
//! This crate is the transport side of the menu pipeline: it builds a
//! per-call [`MealRequest`], issues the GET, and normalizes the answer into a
//! [`FetchOutcome`] holding [`RawDayRecord`](schoolmeal_core::RawDayRecord)s
//! ready for the parser in `schoolmeal-core`.
//!
//! # Quick start
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use schoolmeal_client::{ClientConfig, FetchOutcome, MealClient};
//!
//! let config = ClientConfig::new("my-key").with_school("B10", "7010536");
//! let client = MealClient::new(config).unwrap();
//!
//! let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! match client.fetch_day(day).unwrap() {
//!     FetchOutcome::Found(records) => println!("{} row(s)", records.len()),
//!     FetchOutcome::NotFound { message, .. } => println!("no meal: {message}"),
//! }
//! ```
//!
//! Responses saved to disk can be normalized without a network round trip
//! through [`normalize_response`].

pub mod calendar;
mod client;
mod config;
mod error;
mod request;
mod response;
mod transport;

pub use client::MealClient;
pub use config::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_OFFICE_CODE, DEFAULT_SCHOOL_CODE, DEFAULT_TIMEOUT_SECS,
};
pub use error::{ClientError, Result};
pub use request::{DateQuery, MealRequest};
pub use response::{FetchOutcome, NO_DATA_CODE, OK_CODE, normalize_response, replace_line_breaks};
pub use transport::{Transport, UreqTransport};
