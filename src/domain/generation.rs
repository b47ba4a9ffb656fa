//! Request models accepted by the generators.
//!
//! Range and length rules are declared with `validator` and checked at the
//! HTTP boundary; an unknown platform literal already fails deserialization.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::platform::Platform;

pub const DEFAULT_NUM_CASES: u32 = 5;
pub const DEFAULT_MAX_CASES: usize = 200;
pub const MAX_CASES_LIMIT: usize = 1000;

fn default_num_cases() -> u32 {
    DEFAULT_NUM_CASES
}

fn default_max_cases() -> usize {
    DEFAULT_MAX_CASES
}

/// Input for the fixed four-case scenario generator.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct ScenarioRequest {
    #[validate(length(min = 3, message = "scenario must be at least 3 characters"))]
    pub scenario: String,
    #[serde(default)]
    pub platform: Platform,
    // Accepted for compatibility; the generator always returns four cases.
    #[serde(default = "default_num_cases")]
    #[validate(range(min = 1, max = 20))]
    pub num_cases: u32,
}

/// Input for combinational generation.
///
/// When both field lists are missing or empty the fields are detected from
/// the scenario name.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct CombinationRequest {
    #[validate(length(min = 3, message = "scenario must be at least 3 characters"))]
    pub scenario: String,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub text_fields: Option<Vec<String>>,
    #[serde(default)]
    pub binary_fields: Option<Vec<String>>,
    #[serde(default = "default_max_cases")]
    #[validate(range(min = 1, max = 1000))]
    pub max_cases: usize,
}

impl CombinationRequest {
    pub fn for_scenario(scenario: impl Into<String>, platform: Platform, max_cases: usize) -> Self {
        Self {
            scenario: scenario.into(),
            platform,
            text_fields: None,
            binary_fields: None,
            max_cases,
        }
    }
}

/// Query string of the Markdown download endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct DownloadQuery {
    #[validate(length(min = 3, message = "scenario must be at least 3 characters"))]
    pub scenario: String,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default = "default_max_cases")]
    #[validate(range(min = 1, max = 1000))]
    pub max_cases: usize,
}

impl From<DownloadQuery> for CombinationRequest {
    fn from(query: DownloadQuery) -> Self {
        CombinationRequest::for_scenario(query.scenario, query.platform, query.max_cases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combination_request_defaults() {
        let req: CombinationRequest = serde_json::from_str(r#"{"scenario":"login"}"#).unwrap();
        assert_eq!(req.platform, Platform::Web);
        assert_eq!(req.max_cases, DEFAULT_MAX_CASES);
        assert!(req.text_fields.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_short_scenario_is_rejected() {
        let req = CombinationRequest::for_scenario("ab", Platform::Api, 10);
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("scenario"));
    }

    #[test]
    fn test_max_cases_range_is_enforced() {
        let zero = CombinationRequest::for_scenario("checkout", Platform::Web, 0);
        assert!(zero.validate().is_err());

        let over = CombinationRequest::for_scenario("checkout", Platform::Web, MAX_CASES_LIMIT + 1);
        assert!(over.validate().is_err());

        let edge = CombinationRequest::for_scenario("checkout", Platform::Web, MAX_CASES_LIMIT);
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn test_scenario_request_num_cases_range() {
        let req: ScenarioRequest =
            serde_json::from_str(r#"{"scenario":"logout","num_cases":21}"#).unwrap();
        assert!(req.validate().is_err());

        let req: ScenarioRequest = serde_json::from_str(r#"{"scenario":"logout"}"#).unwrap();
        assert_eq!(req.num_cases, DEFAULT_NUM_CASES);
        assert!(req.validate().is_ok());
    }
}
