//! Narrative Renderer
//!
//! Turns a classified combination into JIRA-style steps, an expected-result
//! paragraph and a Markdown block. Output is byte-for-byte reproducible from
//! the same inputs.

use crate::domain::category::Category;
use crate::domain::field_model::{FieldState, StateAssignment};
use crate::domain::platform::Platform;
use crate::shared::text::capitalize;

/// Which expected-result paragraph a combination gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedOutcome {
    Success,
    ValidationRejection,
    SecurityRejection,
    Rejection,
    Compliant,
}

impl ExpectedOutcome {
    /// First matching variant in precedence order; total over all label sets.
    pub fn for_categories(categories: &[Category]) -> Self {
        let has = |category: Category| categories.contains(&category);

        if has(Category::Positive) && !has(Category::Negative) && !has(Category::Validation) {
            ExpectedOutcome::Success
        } else if has(Category::Validation) || has(Category::Edge) {
            ExpectedOutcome::ValidationRejection
        } else if has(Category::Security) {
            ExpectedOutcome::SecurityRejection
        } else if has(Category::Negative) {
            ExpectedOutcome::Rejection
        } else {
            ExpectedOutcome::Compliant
        }
    }

    pub fn render(&self, scenario: &str) -> String {
        match self {
            ExpectedOutcome::Success => format!(
                "The system successfully completes the '{}' operation. The expected UI changes, data updates, \
                 and/or API responses are produced without errors. No validation or error messages are displayed, \
                 and the system state is consistent and correct.",
                scenario
            ),
            ExpectedOutcome::ValidationRejection => "The system does not proceed with the main operation. \
                 Clear and descriptive validation messages are displayed or returned for all fields that are \
                 empty or invalid. No partial data is stored, no corrupted state is created, and any previously \
                 valid data remains unchanged."
                .to_string(),
            ExpectedOutcome::SecurityRejection => "The system protects against unauthorized or suspicious usage \
                 of the scenario. Login or privileged operations are rejected, error messages remain generic \
                 (no sensitive information leakage), and no user session or privileged access is granted. Any \
                 relevant security/audit logs are created as per policy."
                .to_string(),
            ExpectedOutcome::Rejection => "The system rejects the operation for this combination of inputs. \
                 Appropriate error or validation messages are displayed or returned, and the system remains \
                 stable without crashes or unhandled exceptions."
                .to_string(),
            ExpectedOutcome::Compliant => format!(
                "The system handles the '{}' operation in accordance with the specification for this input \
                 combination, without compromising stability, data integrity, or security.",
                scenario
            ),
        }
    }
}

fn opening_steps(platform: Platform) -> [&'static str; 2] {
    match platform {
        Platform::Web => [
            "Launch a supported web browser (e.g. latest Chrome or Firefox).",
            "Navigate to the application's URL and ensure the page loads without errors.",
        ],
        Platform::Mobile => [
            "Launch the mobile application on a supported device/emulator.",
            "Ensure the app loads to the main screen without crashes.",
        ],
        Platform::Api => [
            "Prepare an API client (e.g. Postman, curl, or automated test).",
            "Ensure the target environment and endpoint are reachable.",
        ],
        Platform::Desktop => [
            "Launch the desktop application on a supported operating system.",
            "Ensure the application starts successfully without error dialogs.",
        ],
        Platform::Automotive => [
            "Ensure the test vehicle or HIL/SIL environment is powered on and in a safe state.",
            "Connect diagnostic/tools to the in-vehicle network or test bench as required.",
        ],
        Platform::Generic => [
            "Open the system under test using the appropriate client or interface.",
            "Navigate to the relevant module for this scenario.",
        ],
    }
}

fn field_step(field: &str, state: FieldState, scenario: &str) -> String {
    match state {
        FieldState::Valid => format!(
            "Enter a valid value into '{}' (e.g. a correctly formatted and allowed {}).",
            field,
            field.to_lowercase()
        ),
        FieldState::Invalid => format!(
            "Enter an invalid or not allowed value into '{}' \
             (e.g. wrong format, out-of-range value, or disallowed characters).",
            field
        ),
        FieldState::Empty => format!(
            "Leave the '{}' field empty or do not provide this parameter in the request.",
            field
        ),
        FieldState::Checked => format!(
            "Ensure the '{}' option is enabled/checked before executing the '{}' operation.",
            field, scenario
        ),
        FieldState::Unchecked => format!(
            "Ensure the '{}' option is disabled/unchecked before executing the '{}' operation.",
            field, scenario
        ),
    }
}

/// Ordered steps: platform opening, navigation, one per field, trigger, observe.
pub fn build_steps(
    scenario: &str,
    platform: Platform,
    combination: &StateAssignment,
) -> Vec<String> {
    let scenario = scenario.trim();
    let mut steps: Vec<String> = opening_steps(platform)
        .iter()
        .map(|step| step.to_string())
        .collect();

    steps.push(format!(
        "Navigate to the part of the system where the '{}' operation is performed \
         (screen, API endpoint, or flow).",
        scenario
    ));

    steps.extend(
        combination
            .iter()
            .map(|(field, state)| field_step(field, state, scenario)),
    );

    steps.push(format!(
        "Trigger the '{}' operation (e.g. click the corresponding button, submit the form, \
         or send the API request).",
        scenario
    ));
    steps.push(
        "Observe the system behaviour in the UI, logs, and/or API response, including status codes \
         and returned data."
            .to_string(),
    );

    steps
}

pub fn build_expected_result(scenario: &str, categories: &[Category]) -> String {
    ExpectedOutcome::for_categories(categories).render(scenario.trim())
}

/// Everything the Markdown block is rendered from.
pub struct CaseNarrative<'a> {
    pub case_id: &'a str,
    pub scenario: &'a str,
    pub categories: &'a [Category],
    pub combination: &'a StateAssignment,
    pub steps: &'a [String],
    pub expected_result: &'a str,
}

impl CaseNarrative<'_> {
    /// Markdown block for one case; always ends with a newline.
    pub fn to_markdown(&self) -> String {
        let categories = if self.categories.is_empty() {
            "Unclassified".to_string()
        } else {
            self.categories
                .iter()
                .map(Category::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };

        let mut lines: Vec<String> = Vec::new();
        lines.push(format!(
            "### {} — {} Combination Test",
            self.case_id,
            capitalize(self.scenario)
        ));
        lines.push(format!("**Category:** {}", categories));
        lines.push("**Combination:**".to_string());
        for (field, state) in self.combination.iter() {
            lines.push(format!("- **{}**: {}", field, state));
        }

        lines.push(String::new());
        lines.push("**Steps:**".to_string());
        for (idx, step) in self.steps.iter().enumerate() {
            lines.push(format!("{}. {}", idx + 1, step));
        }

        lines.push(String::new());
        lines.push("**Expected Result:**".to_string());
        lines.push(format!("- {}", self.expected_result));
        lines.push(String::new());

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Category::*;

    fn sample_combination() -> StateAssignment {
        [
            ("username", FieldState::Valid),
            ("password", FieldState::Empty),
            ("remember_me", FieldState::Checked),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_steps_follow_field_order() {
        let steps = build_steps(" login ", Platform::Web, &sample_combination());
        assert_eq!(steps.len(), 2 + 1 + 3 + 2);
        assert!(steps[0].starts_with("Launch a supported web browser"));
        assert!(steps[2].contains("'login' operation is performed"));
        assert!(steps[3].starts_with("Enter a valid value into 'username'"));
        assert!(steps[3].ends_with("allowed username)."));
        assert!(steps[4].starts_with("Leave the 'password' field empty"));
        assert_eq!(
            steps[5],
            "Ensure the 'remember_me' option is enabled/checked before executing the 'login' operation."
        );
        assert!(steps[6].starts_with("Trigger the 'login' operation"));
        assert!(steps[7].starts_with("Observe the system behaviour"));
    }

    #[test]
    fn test_each_platform_has_distinct_opening() {
        let platforms = [
            Platform::Web,
            Platform::Mobile,
            Platform::Api,
            Platform::Desktop,
            Platform::Automotive,
            Platform::Generic,
        ];
        let openings: Vec<[&str; 2]> = platforms.iter().map(|p| opening_steps(*p)).collect();
        for (i, a) in openings.iter().enumerate() {
            for b in openings.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_invalid_and_unchecked_wording() {
        let combination: StateAssignment = [
            ("cvv", FieldState::Invalid),
            ("accept_terms", FieldState::Unchecked),
        ]
        .into_iter()
        .collect();
        let steps = build_steps("checkout", Platform::Api, &combination);
        assert!(steps[3].starts_with("Enter an invalid or not allowed value into 'cvv'"));
        assert!(steps[4].contains("'accept_terms' option is disabled/unchecked"));
    }

    #[test]
    fn test_expected_outcome_precedence() {
        assert_eq!(ExpectedOutcome::for_categories(&[Positive]), ExpectedOutcome::Success);
        assert_eq!(
            ExpectedOutcome::for_categories(&[Negative, Validation, Edge, Security]),
            ExpectedOutcome::ValidationRejection
        );
        assert_eq!(
            ExpectedOutcome::for_categories(&[Negative, Security]),
            ExpectedOutcome::SecurityRejection
        );
        assert_eq!(ExpectedOutcome::for_categories(&[Negative]), ExpectedOutcome::Rejection);
        assert_eq!(ExpectedOutcome::for_categories(&[]), ExpectedOutcome::Compliant);
        assert_eq!(
            ExpectedOutcome::for_categories(&[Positive, Security]),
            ExpectedOutcome::Success
        );
    }

    #[test]
    fn test_success_narrative_names_scenario() {
        let text = build_expected_result("  checkout ", &[Positive]);
        assert!(text.starts_with("The system successfully completes the 'checkout' operation."));
        assert!(text.contains("and/or API responses are produced without errors."));
    }

    #[test]
    fn test_security_narrative_mentions_no_session() {
        let text = build_expected_result("login", &[Negative, Security]);
        assert!(text.contains("no user session or privileged access is granted"));
    }

    #[test]
    fn test_markdown_block_layout() {
        let combination: StateAssignment = [("otp", FieldState::Empty)].into_iter().collect();
        let steps = vec!["First.".to_string(), "Second.".to_string()];
        let categories = [Negative, Validation, Edge];
        let block = CaseNarrative {
            case_id: "LOGIN-0001",
            scenario: "login FLOW",
            categories: &categories,
            combination: &combination,
            steps: &steps,
            expected_result: "Rejected.",
        }
        .to_markdown();

        let expected = "### LOGIN-0001 — Login flow Combination Test\n\
                        **Category:** Negative, Validation, Edge\n\
                        **Combination:**\n\
                        - **otp**: Empty\n\
                        \n\
                        **Steps:**\n\
                        1. First.\n\
                        2. Second.\n\
                        \n\
                        **Expected Result:**\n\
                        - Rejected.\n";
        assert_eq!(block, expected);
    }

    #[test]
    fn test_markdown_without_categories_is_unclassified() {
        let combination = StateAssignment::new();
        let block = CaseNarrative {
            case_id: "SCEN-0001",
            scenario: "",
            categories: &[],
            combination: &combination,
            steps: &[],
            expected_result: "",
        }
        .to_markdown();
        assert!(block.contains("**Category:** Unclassified"));
    }
}
