use tracing::info;

use crate::domain::generation::ScenarioRequest;
use crate::domain::scenario_case::{Priority, ScenarioResponse, TestCase};
use crate::shared::text::scenario_id_prefix;

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn tags(kinds: &[&str], platform: &str) -> Vec<String> {
    kinds
        .iter()
        .map(|kind| kind.to_string())
        .chain(std::iter::once(platform.to_string()))
        .collect()
}

fn happy_path(scenario: &str, prefix: &str, platform: &str) -> TestCase {
    TestCase {
        id: format!("{}-001", prefix),
        title: format!("{} - happy path", scenario),
        preconditions: lines(&[
            "System is available and responsive.",
            "All required preconditions for the scenario are fulfilled (data, configuration, permissions).",
        ]),
        steps: vec![
            format!("Open the application or module where '{}' is performed.", scenario),
            format!("Navigate to the screen or API endpoint responsible for '{}'.", scenario),
            "Provide all required inputs with valid and typical data values.".to_string(),
            format!(
                "Trigger the main action to execute '{}' (e.g. click button, call API).",
                scenario
            ),
            "Wait for the system to process the request.".to_string(),
            "Observe the UI, logs, or API response returned by the system.".to_string(),
        ],
        expected_result: format!(
            "The system successfully completes '{}' without errors. \
             The expected UI changes, data updates, or API responses are visible, \
             and logs show no critical errors.",
            scenario
        ),
        priority: Priority::High,
        tags: tags(&["happy_path"], platform),
    }
}

fn missing_required_data(scenario: &str, prefix: &str, platform: &str) -> TestCase {
    TestCase {
        id: format!("{}-002", prefix),
        title: format!("{} - missing required data", scenario),
        preconditions: lines(&["System is available."]),
        steps: vec![
            format!(
                "Open the part of the application where '{}' would normally be executed.",
                scenario
            ),
            "Identify fields or parameters that are mandatory according to the specification."
                .to_string(),
            "Leave one or more mandatory fields empty or unset.".to_string(),
            format!(
                "Attempt to execute '{}' (e.g. click save/submit or call API).",
                scenario
            ),
            "Observe any validation messages or error indicators.".to_string(),
        ],
        expected_result: "The system does not proceed with the operation. \
             Clear validation messages are displayed for all missing required fields, \
             indicating what needs to be provided. No data is saved and no partial \
             or corrupted state is created."
            .to_string(),
        priority: Priority::Medium,
        tags: tags(&["validation", "negative"], platform),
    }
}

fn invalid_data_values(scenario: &str, prefix: &str, platform: &str) -> TestCase {
    TestCase {
        id: format!("{}-003", prefix),
        title: format!("{} - invalid data values", scenario),
        preconditions: lines(&["System is available."]),
        steps: vec![
            format!("Open the screen or endpoint where '{}' is performed.", scenario),
            "Identify input fields or parameters that have format or range constraints."
                .to_string(),
            "Enter invalid, out-of-range, or syntactically incorrect values \
             (e.g. wrong format, too long, negative where not allowed)."
                .to_string(),
            format!("Attempt to execute '{}' with these invalid values.", scenario),
            "Observe the system response and any messages shown to the user or API client."
                .to_string(),
        ],
        expected_result: "The system rejects invalid data inputs. User-friendly error or validation \
             messages are displayed, no data corruption occurs, and the system remains \
             stable without crashes or unhandled exceptions."
            .to_string(),
        priority: Priority::High,
        tags: tags(&["negative", "data_validation"], platform),
    }
}

fn boundary_conditions(scenario: &str, prefix: &str, platform: &str) -> TestCase {
    TestCase {
        id: format!("{}-004", prefix),
        title: format!("{} - boundary and edge conditions", scenario),
        preconditions: lines(&[
            "System is available.",
            "Boundary values and limits for inputs are known (e.g. min/max length, numeric ranges).",
        ]),
        steps: vec![
            format!("Open the relevant part of the application for '{}'.", scenario),
            "Identify fields or parameters with defined limits (length, range, list size, etc.)."
                .to_string(),
            "Test with minimum allowed values.".to_string(),
            "Test with maximum allowed values.".to_string(),
            "If applicable, test just-below-minimum and just-above-maximum values.".to_string(),
            format!("Attempt to perform '{}' with each of these values.", scenario),
        ],
        expected_result: "The system correctly enforces boundary conditions. \
             Values within the allowed range are accepted and processed correctly, \
             while values outside the allowed range are rejected with appropriate messages. \
             System stability is maintained throughout testing."
            .to_string(),
        priority: Priority::Medium,
        tags: tags(&["boundary", "edge_case"], platform),
    }
}

/// Fixed four-case generator: happy path, missing data, invalid data, boundary.
pub struct ScenarioUseCase;

impl ScenarioUseCase {
    /// Always returns four cases; `num_cases` does not change the output.
    pub fn execute(request: &ScenarioRequest) -> ScenarioResponse {
        let scenario = request.scenario.trim();
        let platform = request.platform.as_str();
        let prefix = scenario_id_prefix(scenario);

        let test_cases = vec![
            happy_path(scenario, &prefix, platform),
            missing_required_data(scenario, &prefix, platform),
            invalid_data_values(scenario, &prefix, platform),
            boundary_conditions(scenario, &prefix, platform),
        ];

        info!(
            scenario = %scenario,
            platform = %platform,
            count = test_cases.len(),
            "Generated scenario test cases"
        );

        ScenarioResponse {
            scenario: request.scenario.clone(),
            platform: platform.to_string(),
            test_cases,
        }
    }
}
