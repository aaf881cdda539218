//! Response normalization.
//!
//! The meal API answers in one of two shapes. A populated answer nests the
//! rows under the service name:
//!
//! ```json
//! {"mealServiceDietInfo": [
//!   {"head": [{"list_total_count": 1},
//!             {"RESULT": {"CODE": "INFO-000", "MESSAGE": "정상 처리되었습니다."}}]},
//!   {"row": [{"MLSV_YMD": "20240315", "DDISH_NM": "백미밥<br/>계란국 (1.5.6)"}]}
//! ]}
//! ```
//!
//! Everything else is a bare result code:
//!
//! ```json
//! {"RESULT": {"CODE": "INFO-200", "MESSAGE": "해당하는 데이터가 없습니다."}}
//! ```
//!
//! [`normalize_response`] maps both onto [`FetchOutcome`] or a typed
//! [`ClientError`], always yielding a list of rows regardless of count.

use schoolmeal_core::{DayMenu, RawDayRecord, parse_batch};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};

const SERVICE_KEY: &str = "mealServiceDietInfo";
/// Result code for a normal answer.
pub const OK_CODE: &str = "INFO-000";
/// Result code for "no data matches the query".
pub const NO_DATA_CODE: &str = "INFO-200";

const LINE_BREAK_MARKUP: [&str; 3] = ["<br/>", "<br />", "<br>"];

/// Result of a fetch that reached the API and got a well-formed answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// One record per served day, in the order the API returned them.
    Found(Vec<RawDayRecord>),
    /// The API has no meals for the requested dates.
    NotFound { code: String, message: String },
}

impl FetchOutcome {
    /// Returns the fetched records, empty for [`FetchOutcome::NotFound`].
    pub fn records(&self) -> &[RawDayRecord] {
        match self {
            Self::Found(records) => records,
            Self::NotFound { .. } => &[],
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Sorts found records by their raw `YYYYMMDD` date.
    ///
    /// Records without a date sort first; the sort is stable.
    pub fn sort_by_date(&mut self) {
        if let Self::Found(records) = self {
            records.sort_by(|a, b| a.date.cmp(&b.date));
        }
    }

    /// Parses the records into menus, dropping ones with a bad date.
    pub fn menus(&self) -> Vec<DayMenu> {
        parse_batch(self.records())
    }
}

#[derive(Debug, Deserialize)]
struct ApiResult {
    #[serde(rename = "CODE")]
    code: String,
    #[serde(rename = "MESSAGE", default)]
    message: String,
}

/// One API row. Fields of the wrong JSON type read as absent so that a
/// single bad row is skipped by the parser instead of failing the batch.
#[derive(Debug, Deserialize)]
struct MealRow {
    #[serde(rename = "MLSV_YMD", default, deserialize_with = "string_or_none")]
    date: Option<String>,
    #[serde(rename = "DDISH_NM", default, deserialize_with = "string_or_none")]
    dishes: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Ok(Some(text)),
        _ => Ok(None),
    }
}

impl From<MealRow> for RawDayRecord {
    fn from(row: MealRow) -> Self {
        RawDayRecord {
            date: row.date,
            dish_listing: row.dishes.as_deref().map(replace_line_breaks).unwrap_or_default(),
        }
    }
}

/// Replaces HTML line-break markup with `\n`.
///
/// # Examples
///
/// ```
/// use schoolmeal_client::replace_line_breaks;
///
/// assert_eq!(replace_line_breaks("밥<br/>국<br>김치"), "밥\n국\n김치");
/// ```
pub fn replace_line_breaks(text: &str) -> String {
    LINE_BREAK_MARKUP
        .iter()
        .fold(text.to_string(), |acc, markup| acc.replace(markup, "\n"))
}

/// Maps a raw response body onto a [`FetchOutcome`].
///
/// # Errors
///
/// - [`ClientError::JsonError`] if `body` is not JSON.
/// - [`ClientError::Api`] for any result code other than success or
///   [`NO_DATA_CODE`].
/// - [`ClientError::MalformedResponse`] if the JSON does not have either
///   known layout.
pub fn normalize_response(body: &str) -> Result<FetchOutcome> {
    let value: Value = serde_json::from_str(body)?;

    if let Some(sections) = value.get(SERVICE_KEY) {
        return parse_sections(sections);
    }

    if let Some(result) = value.get("RESULT") {
        let result = parse_result(result)?;
        return classify_result(result);
    }

    Err(ClientError::MalformedResponse(format!(
        "expected `{SERVICE_KEY}` or `RESULT` at top level"
    )))
}

fn parse_result(value: &Value) -> Result<ApiResult> {
    ApiResult::deserialize(value)
        .map_err(|err| ClientError::MalformedResponse(format!("bad RESULT object: {err}")))
}

fn classify_result(result: ApiResult) -> Result<FetchOutcome> {
    match result.code.as_str() {
        NO_DATA_CODE => Ok(FetchOutcome::NotFound {
            code: result.code,
            message: result.message,
        }),
        OK_CODE => Err(ClientError::MalformedResponse(
            "success result without any rows".to_string(),
        )),
        _ => Err(ClientError::Api {
            code: result.code,
            message: result.message,
        }),
    }
}

fn parse_sections(sections: &Value) -> Result<FetchOutcome> {
    let sections = sections.as_array().ok_or_else(|| {
        ClientError::MalformedResponse(format!("`{SERVICE_KEY}` is not a list"))
    })?;

    let head = sections
        .iter()
        .find_map(|section| section.get("head"))
        .and_then(Value::as_array);
    if let Some(head) = head {
        if let Some(result) = head.iter().find_map(|entry| entry.get("RESULT")) {
            let result = parse_result(result)?;
            if result.code != OK_CODE {
                return classify_result(result);
            }
        }
        let total = head
            .iter()
            .find_map(|entry| entry.get("list_total_count"))
            .and_then(Value::as_u64);
        debug!(?total, "meal response head");
    }

    let rows = sections
        .iter()
        .find_map(|section| section.get("row"))
        .ok_or_else(|| ClientError::MalformedResponse("no `row` section".to_string()))?;
    let rows = Vec::<MealRow>::deserialize(rows)
        .map_err(|err| ClientError::MalformedResponse(format!("bad `row` section: {err}")))?;

    if rows.is_empty() {
        return Ok(FetchOutcome::NotFound {
            code: NO_DATA_CODE.to_string(),
            message: "response contained no rows".to_string(),
        });
    }

    Ok(FetchOutcome::Found(rows.into_iter().map(RawDayRecord::from).collect()))
}
