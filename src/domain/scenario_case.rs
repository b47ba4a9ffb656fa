use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

/// One readable test case produced by the scenario generator.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub id: String,
    pub title: String,
    pub preconditions: Vec<String>,
    pub steps: Vec<String>,
    pub expected_result: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ScenarioResponse {
    pub scenario: String,
    pub platform: String,
    pub test_cases: Vec<TestCase>,
}
