//! Combinational test case generation.
//!
//! Resolves the field model, enumerates combinations up to the requested cap
//! and assembles one [`CombinationCase`] per combination plus a single
//! combined Markdown document.

use tracing::{debug, info};

use crate::application::use_cases::classifier::categorize_combination;
use crate::application::use_cases::enumerator::{enumerate_combinations, total_combinations};
use crate::application::use_cases::field_detector::resolve_field_model;
use crate::application::use_cases::narrative::{build_expected_result, build_steps, CaseNarrative};
use crate::domain::combination::{CombinationCase, CombinationResponse};
use crate::domain::field_model::{FieldModel, StateAssignment};
use crate::domain::generation::CombinationRequest;
use crate::domain::platform::Platform;
use crate::shared::text::{combination_case_id, combination_id_prefix};

/// Builds one case record for the `sequence`-th emitted combination.
pub fn build_case(
    scenario: &str,
    platform: Platform,
    id_prefix: &str,
    sequence: usize,
    combination: StateAssignment,
) -> CombinationCase {
    let id = combination_case_id(id_prefix, sequence);
    let category = categorize_combination(scenario, &combination);
    let steps = build_steps(scenario, platform, &combination);
    let expected_result = build_expected_result(scenario, &category);
    let markdown = CaseNarrative {
        case_id: &id,
        scenario,
        categories: &category,
        combination: &combination,
        steps: &steps,
        expected_result: &expected_result,
    }
    .to_markdown();

    CombinationCase {
        id,
        category,
        combination,
        steps,
        expected_result,
        markdown,
    }
}

/// Runs enumeration, classification and rendering for an already resolved model.
pub fn assemble(
    scenario: &str,
    platform: Platform,
    model: FieldModel,
    max_cases: usize,
) -> CombinationResponse {
    let scenario = scenario.trim();
    let id_prefix = combination_id_prefix(scenario);
    let total = total_combinations(&model);

    let cases: Vec<CombinationCase> = enumerate_combinations(&model, max_cases)
        .enumerate()
        .map(|(idx, combination)| build_case(scenario, platform, &id_prefix, idx + 1, combination))
        .collect();

    let combined_markdown = cases
        .iter()
        .map(|case| case.markdown.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let returned_count = cases.len();
    let FieldModel {
        text_fields,
        binary_fields,
    } = model;

    CombinationResponse {
        scenario: scenario.to_string(),
        platform,
        text_fields,
        binary_fields,
        total_combinations: total,
        returned_count,
        page: 1,
        page_size: returned_count,
        pages_total: 1,
        cases,
        combined_markdown,
    }
}

/// Entry point used by the HTTP layer.
pub struct CombinationUseCase {
    fallback_text_field: Option<String>,
}

impl CombinationUseCase {
    /// `fallback_text_field` is injected when neither the caller nor the
    /// profile table supplies any field; `None` keeps the model empty.
    pub fn new(fallback_text_field: Option<String>) -> Self {
        Self {
            fallback_text_field: fallback_text_field.filter(|name| !name.trim().is_empty()),
        }
    }

    pub fn resolve_fields(&self, request: &CombinationRequest) -> FieldModel {
        let model = resolve_field_model(
            &request.scenario,
            request.text_fields.as_deref(),
            request.binary_fields.as_deref(),
        );

        match (&self.fallback_text_field, model.is_empty()) {
            (Some(fallback), true) => {
                debug!(
                    scenario = %request.scenario,
                    fallback = %fallback,
                    "No fields resolved, using fallback text field"
                );
                FieldModel::new(vec![fallback.clone()], Vec::new())
            }
            _ => model,
        }
    }

    pub fn execute(&self, request: &CombinationRequest) -> CombinationResponse {
        let model = self.resolve_fields(request);
        let response = assemble(&request.scenario, request.platform, model, request.max_cases);

        info!(
            scenario = %response.scenario,
            platform = %response.platform,
            text_fields = response.text_fields.len(),
            binary_fields = response.binary_fields.len(),
            total_combinations = %response.total_combinations,
            returned_count = response.returned_count,
            "Generated combinational test cases"
        );

        response
    }
}
