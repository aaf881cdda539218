//! Meal API client with date-convenience fetches.
//!
//! Every fetch funnels into one of two primitives, [`MealClient::fetch_day`]
//! and [`MealClient::fetch_range`]. The week and month helpers additionally
//! sort rows by date, since the API does not guarantee an order.
//!
//! ```no_run
//! use schoolmeal_client::{ClientConfig, MealClient};
//!
//! let client = MealClient::new(ClientConfig::new("my-key")).unwrap();
//! let outcome = client.week(None).unwrap();
//! for menu in outcome.menus() {
//!     println!("{}: {} dishes", menu.date, menu.meals.len());
//! }
//! ```

use std::time::Duration;

use chrono::NaiveDate;
use tracing::info;

use crate::calendar;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::request::MealRequest;
use crate::response::{FetchOutcome, normalize_response};
use crate::transport::{Transport, UreqTransport};

/// Client bound to one school.
///
/// Holds only immutable settings; each call builds its own [`MealRequest`].
#[derive(Debug, Clone)]
pub struct MealClient<T = UreqTransport> {
    config: ClientConfig,
    transport: T,
}

impl MealClient<UreqTransport> {
    /// Creates a client that talks to the configured endpoint over HTTP.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidConfig`] if the config is incomplete.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = UreqTransport::new(Duration::from_secs(config.timeout_secs));
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> MealClient<T> {
    /// Creates a client with a custom transport.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidConfig`] if the config is incomplete.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends a request and normalizes the answer.
    pub fn execute(&self, request: &MealRequest) -> Result<FetchOutcome> {
        let query = request.query_pairs(&self.config.api_key);
        let body = self.transport.get(&self.config.base_url, &query)?;
        let outcome = normalize_response(&body)?;
        match &outcome {
            FetchOutcome::Found(records) => {
                info!(dates = ?request.dates, rows = records.len(), "fetched meal rows");
            }
            FetchOutcome::NotFound { code, message } => {
                info!(dates = ?request.dates, code = %code, message = %message, "no meal data");
            }
        }
        Ok(outcome)
    }

    /// Fetches the menu for a single date.
    pub fn fetch_day(&self, date: NaiveDate) -> Result<FetchOutcome> {
        self.execute(&MealRequest::day(&self.config, date))
    }

    /// Fetches every menu between `from` and `to`, inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidRange`] when `from` is after `to`.
    pub fn fetch_range(&self, from: NaiveDate, to: NaiveDate) -> Result<FetchOutcome> {
        self.execute(&MealRequest::range(&self.config, from, to)?)
    }

    pub fn today(&self) -> Result<FetchOutcome> {
        self.fetch_day(calendar::today())
    }

    /// Fetches the day after `base` (today if `None`).
    pub fn tomorrow(&self, base: Option<NaiveDate>) -> Result<FetchOutcome> {
        self.fetch_offset(base, 1)
    }

    /// Fetches the day before `base` (today if `None`).
    pub fn yesterday(&self, base: Option<NaiveDate>) -> Result<FetchOutcome> {
        self.fetch_offset(base, -1)
    }

    /// Fetches Monday through Friday of the week containing `base`, sorted
    /// by date.
    pub fn week(&self, base: Option<NaiveDate>) -> Result<FetchOutcome> {
        let base = base.unwrap_or_else(calendar::today);
        let (monday, friday) = calendar::school_week(base)
            .ok_or_else(|| ClientError::DateOutOfRange(format!("school week of {base}")))?;
        self.fetch_sorted(monday, friday)
    }

    /// Fetches every day of the month containing `base`, sorted by date.
    pub fn month(&self, base: Option<NaiveDate>) -> Result<FetchOutcome> {
        let base = base.unwrap_or_else(calendar::today);
        let (first, last) = calendar::month_bounds(base)
            .ok_or_else(|| ClientError::DateOutOfRange(format!("month of {base}")))?;
        self.fetch_sorted(first, last)
    }

    fn fetch_offset(&self, base: Option<NaiveDate>, offset: i64) -> Result<FetchOutcome> {
        let base = base.unwrap_or_else(calendar::today);
        let date = calendar::shift(base, offset).ok_or_else(|| {
            ClientError::DateOutOfRange(format!("{base} {offset:+} days"))
        })?;
        self.fetch_day(date)
    }

    fn fetch_sorted(&self, from: NaiveDate, to: NaiveDate) -> Result<FetchOutcome> {
        let mut outcome = self.fetch_range(from, to)?;
        outcome.sort_by_date();
        Ok(outcome)
    }
}
