//! Menu type definitions.
//!
//! Raw records come from the transport layer; [`DayMenu`] and [`DishEntry`]
//! are what the parser produces. All types serialize with [`serde`] so they
//! can be written out as JSON or YAML unchanged.

use serde::{Deserialize, Serialize};

/// One day's record as returned by the meal API, before parsing.
///
/// The transport layer is expected to have replaced HTML line-break markup
/// in `dish_listing` with real newline characters.
///
/// # Examples
///
/// ```
/// use schoolmeal_core::RawDayRecord;
///
/// let record = RawDayRecord::new("20240315", "백미밥\n계란국 (추가) (1.5.6.18)");
/// assert_eq!(record.date.as_deref(), Some("20240315"));
/// assert_eq!(record.dish_listing.lines().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RawDayRecord {
    /// Serving date in `YYYYMMDD` form. Missing when the API omitted it.
    pub date: Option<String>,
    /// Newline-delimited dish listing, one dish per line.
    #[serde(default)]
    pub dish_listing: String,
}

impl RawDayRecord {
    /// Creates a record with a date and a dish listing.
    pub fn new(date: impl Into<String>, dish_listing: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            dish_listing: dish_listing.into(),
        }
    }

    /// Creates a record whose date field is absent.
    pub fn undated(dish_listing: impl Into<String>) -> Self {
        Self {
            date: None,
            dish_listing: dish_listing.into(),
        }
    }
}

/// A single dish parsed out of a dish listing line.
///
/// `code` and `options` partition the line's bracket groups: a trailing
/// group made only of digits and periods becomes `code`, everything else
/// lands in `options` in the order it appeared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishEntry {
    /// 1-based position among the non-blank lines of the listing.
    pub id: usize,
    /// Display name with every bracket group removed.
    pub name: String,
    /// Allergen/nutrient code list (e.g. `"1.5.6.18"`).
    pub code: Option<String>,
    /// Descriptive qualifiers (e.g. `"추가"`).
    #[serde(default)]
    pub options: Vec<String>,
}

impl DishEntry {
    /// Returns the allergen numbers listed in `code`, skipping empty
    /// segments such as the one after a trailing period.
    ///
    /// # Examples
    ///
    /// ```
    /// use schoolmeal_core::DishEntry;
    ///
    /// let dish = DishEntry {
    ///     id: 1,
    ///     name: "계란국".into(),
    ///     code: Some("1.5.6.".into()),
    ///     options: vec![],
    /// };
    /// assert_eq!(dish.allergens(), vec![1, 5, 6]);
    /// ```
    pub fn allergens(&self) -> Vec<u32> {
        self.code
            .as_deref()
            .map(|code| {
                code.split('.')
                    .filter_map(|segment| segment.parse().ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// A parsed day: the formatted date plus its dishes in listing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMenu {
    /// Serving date in `YYYY-MM-DD` form.
    pub date: String,
    pub meals: Vec<DishEntry>,
}

impl DayMenu {
    /// Returns `true` when every line of the listing was blank.
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Looks up a dish by its display name.
    pub fn find_dish(&self, name: &str) -> Option<&DishEntry> {
        self.meals.iter().find(|dish| dish.name == name)
    }
}
