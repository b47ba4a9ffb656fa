use num_bigint::BigUint;
use serde::{Serialize, Serializer};

use crate::domain::category::Category;
use crate::domain::field_model::StateAssignment;
use crate::domain::platform::Platform;

/// One combinational test case: structured data plus its Markdown block.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CombinationCase {
    pub id: String,
    pub category: Vec<Category>,
    pub combination: StateAssignment,
    pub steps: Vec<String>,
    pub expected_result: String,
    pub markdown: String,
}

/// Result of a combinational generation request.
///
/// `page`, `page_size` and `pages_total` always describe a single page holding
/// every returned case.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CombinationResponse {
    pub scenario: String,
    pub platform: Platform,
    pub text_fields: Vec<String>,
    pub binary_fields: Vec<String>,
    #[serde(serialize_with = "serialize_exact_count")]
    pub total_combinations: BigUint,
    pub returned_count: usize,
    pub page: usize,
    pub page_size: usize,
    pub pages_total: usize,
    pub cases: Vec<CombinationCase>,
    pub combined_markdown: String,
}

// Written as a JSON number of any magnitude, not as a digit array.
fn serialize_exact_count<S: Serializer>(
    count: &BigUint,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let number: serde_json::Number = count
        .to_str_radix(10)
        .parse()
        .map_err(serde::ser::Error::custom)?;
    number.serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with_total(total: BigUint) -> CombinationResponse {
        CombinationResponse {
            scenario: "login".to_string(),
            platform: Platform::Web,
            text_fields: vec![],
            binary_fields: vec![],
            total_combinations: total,
            returned_count: 0,
            page: 1,
            page_size: 0,
            pages_total: 1,
            cases: vec![],
            combined_markdown: String::new(),
        }
    }

    #[test]
    fn test_total_combinations_serializes_as_number() {
        let json = serde_json::to_value(response_with_total(BigUint::from(108u32))).unwrap();
        assert_eq!(json["total_combinations"], 108);
        assert_eq!(json["platform"], "web");
    }

    #[test]
    fn test_huge_total_stays_exact() {
        let total = BigUint::from(3u32).pow(60);
        let expected = total.to_str_radix(10);
        let json = serde_json::to_string(&response_with_total(total)).unwrap();
        assert!(json.contains(&format!("\"total_combinations\":{}", expected)));
    }
}
