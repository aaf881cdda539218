//! Per-call request values.
//!
//! A [`MealRequest`] is built fresh for every fetch and never mutated, so
//! parameters from one call cannot leak into the next.

use chrono::NaiveDate;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// Response type requested from the API.
const RESPONSE_TYPE: &str = "json";
const API_DATE_FORMAT: &str = "%Y%m%d";

/// The dates a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateQuery {
    /// A single serving date (`MLSV_YMD`).
    Day(NaiveDate),
    /// An inclusive range (`MLSV_FROM_YMD` / `MLSV_TO_YMD`).
    Range { from: NaiveDate, to: NaiveDate },
}

/// One meal-service query: which school, which dates.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use schoolmeal_client::{ClientConfig, MealRequest};
///
/// let config = ClientConfig::new("key");
/// let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let request = MealRequest::day(&config, day);
/// let pairs = request.query_pairs(&config.api_key);
/// assert!(pairs.contains(&("MLSV_YMD", "20240315".to_string())));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealRequest {
    pub office_code: String,
    pub school_code: String,
    pub dates: DateQuery,
}

impl MealRequest {
    /// Creates a single-day request for the configured school.
    pub fn day(config: &ClientConfig, date: NaiveDate) -> Self {
        Self {
            office_code: config.office_code.clone(),
            school_code: config.school_code.clone(),
            dates: DateQuery::Day(date),
        }
    }

    /// Creates an inclusive date-range request for the configured school.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidRange`] when `from` is after `to`.
    pub fn range(config: &ClientConfig, from: NaiveDate, to: NaiveDate) -> Result<Self> {
        if from > to {
            return Err(ClientError::InvalidRange { from, to });
        }
        Ok(Self {
            office_code: config.office_code.clone(),
            school_code: config.school_code.clone(),
            dates: DateQuery::Range { from, to },
        })
    }

    /// Builds the query-string parameters for this request.
    pub fn query_pairs(&self, api_key: &str) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("KEY", api_key.to_string()),
            ("Type", RESPONSE_TYPE.to_string()),
            ("ATPT_OFCDC_SC_CODE", self.office_code.clone()),
            ("SD_SCHUL_CODE", self.school_code.clone()),
        ];
        match self.dates {
            DateQuery::Day(date) => {
                pairs.push(("MLSV_YMD", date.format(API_DATE_FORMAT).to_string()));
            }
            DateQuery::Range { from, to } => {
                pairs.push(("MLSV_FROM_YMD", from.format(API_DATE_FORMAT).to_string()));
                pairs.push(("MLSV_TO_YMD", to.format(API_DATE_FORMAT).to_string()));
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_query_pairs() {
        let config = ClientConfig::new("secret").with_school("J10", "7530000");
        let pairs = MealRequest::day(&config, date(2024, 3, 5)).query_pairs(&config.api_key);
        assert_eq!(
            pairs,
            vec![
                ("KEY", "secret".to_string()),
                ("Type", "json".to_string()),
                ("ATPT_OFCDC_SC_CODE", "J10".to_string()),
                ("SD_SCHUL_CODE", "7530000".to_string()),
                ("MLSV_YMD", "20240305".to_string()),
            ]
        );
    }

    #[test]
    fn test_range_query_pairs_have_no_single_day() {
        let config = ClientConfig::new("k");
        let request = MealRequest::range(&config, date(2024, 3, 11), date(2024, 3, 15)).unwrap();
        let pairs = request.query_pairs("k");
        assert!(pairs.contains(&("MLSV_FROM_YMD", "20240311".to_string())));
        assert!(pairs.contains(&("MLSV_TO_YMD", "20240315".to_string())));
        assert!(!pairs.iter().any(|(name, _)| *name == "MLSV_YMD"));
    }

    #[test]
    fn test_range_rejects_reversed_dates() {
        let config = ClientConfig::new("k");
        let err = MealRequest::range(&config, date(2024, 3, 15), date(2024, 3, 11)).unwrap_err();
        assert!(matches!(err, ClientError::InvalidRange { .. }));
    }

    #[test]
    fn test_requests_are_independent() {
        let config = ClientConfig::new("k");
        let range = MealRequest::range(&config, date(2024, 1, 1), date(2024, 1, 31)).unwrap();
        let day = MealRequest::day(&config, date(2024, 2, 1));
        assert_eq!(range.query_pairs("k").len(), 6);
        assert_eq!(day.query_pairs("k").len(), 5);
    }
}
