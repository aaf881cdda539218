//! Client configuration.
//!
//! Holds the fixed identifying parameters every request carries: the API key,
//! the education office code, and the school code. Loaded from YAML; any
//! field left out takes its default.
//!
//! # Example YAML
//!
//! ```yaml
//! api_key: "0123456789abcdef"
//! base_url: "https://open.neis.go.kr/hub/mealServiceDietInfo"
//! office_code: "B10"
//! school_code: "7010536"
//! timeout_secs: 15
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Meal service endpoint of the NEIS open-data hub.
pub const DEFAULT_BASE_URL: &str = "https://open.neis.go.kr/hub/mealServiceDietInfo";
/// Seoul Metropolitan Office of Education.
pub const DEFAULT_OFFICE_CODE: &str = "B10";
pub const DEFAULT_SCHOOL_CODE: &str = "7010536";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Settings shared by every request a [`MealClient`](crate::MealClient) makes.
///
/// # Examples
///
/// ```
/// use schoolmeal_client::ClientConfig;
///
/// let config = ClientConfig::new("my-key");
/// assert_eq!(config.office_code, "B10");
/// assert!(config.validate().is_ok());
/// assert!(ClientConfig::default().validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Open-data API key, sent as `KEY`.
    pub api_key: String,
    /// Endpoint URL without a query string.
    pub base_url: String,
    /// Education office code, sent as `ATPT_OFCDC_SC_CODE`.
    pub office_code: String,
    /// School code, sent as `SD_SCHUL_CODE`.
    pub school_code: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            office_code: DEFAULT_OFFICE_CODE.to_string(),
            school_code: DEFAULT_SCHOOL_CODE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Creates a config with the given key and default everything else.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Replaces the office and school codes.
    pub fn with_school(
        mut self,
        office_code: impl Into<String>,
        school_code: impl Into<String>,
    ) -> Self {
        self.office_code = office_code.into();
        self.school_code = school_code.into();
        self
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](ClientError::IoError) if the file cannot be read,
    /// or [`YamlError`](ClientError::YamlError) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](ClientError::IoError) if the file cannot be
    /// written, or [`YamlError`](ClientError::YamlError) if serialization
    /// fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Checks that every value a request needs is present.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfig`](ClientError::InvalidConfig) naming the first
    /// empty field.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("api_key", &self.api_key),
            ("base_url", &self.base_url),
            ("office_code", &self.office_code),
            ("school_code", &self.school_code),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ClientError::InvalidConfig(format!("{field} is empty")));
            }
        }
        if self.timeout_secs == 0 {
            return Err(ClientError::InvalidConfig("timeout_secs must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_takes_defaults() {
        let yaml = "api_key: abc\nschool_code: \"7000001\"\n";
        let config: ClientConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.school_code, "7000001");
        assert_eq!(config.office_code, DEFAULT_OFFICE_CODE);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_validate_names_empty_field() {
        let err = ClientConfig::new("key").with_school(" ", "1").validate().unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(ref msg) if msg.contains("office_code")));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = ClientConfig::new("key");
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
