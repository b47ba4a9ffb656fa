//! Classifier
//!
//! Assigns category labels to one combination by folding an ordered list of
//! rules over it. Rules only ever add labels, and a label is added once.

use crate::domain::category::Category;
use crate::domain::field_model::{FieldState, StateAssignment};
use crate::shared::text::{hyphens_to_spaces, normalize_scenario};

const SENSITIVE_FIELDS: [&str; 3] = ["password", "otp", "token"];
const AUTH_KEYWORDS: [&str; 2] = ["login", "auth"];
const BRUTE_FORCE_INVALID_THRESHOLD: usize = 2;

/// Immutable view a rule is evaluated against.
pub struct ClassificationContext<'a> {
    pub assignment: &'a StateAssignment,
    pub is_auth_scenario: bool,
    text_states: Vec<FieldState>,
}

impl<'a> ClassificationContext<'a> {
    pub fn new(scenario: &str, assignment: &'a StateAssignment) -> Self {
        let normalized = normalize_scenario(scenario);
        let is_auth_scenario = AUTH_KEYWORDS
            .iter()
            .any(|keyword| normalized.contains(keyword))
            || hyphens_to_spaces(&normalized).contains("sign in");
        Self {
            assignment,
            is_auth_scenario,
            text_states: assignment.text_states().collect(),
        }
    }

    fn count_text(&self, state: FieldState) -> usize {
        self.text_states.iter().filter(|s| **s == state).count()
    }

    fn all_text_valid(&self) -> bool {
        !self.text_states.is_empty() && self.text_states.iter().all(|s| *s == FieldState::Valid)
    }
}

type Rule = fn(&ClassificationContext<'_>, &mut Vec<Category>);

fn push_once(labels: &mut Vec<Category>, category: Category) {
    if !labels.contains(&category) {
        labels.push(category);
    }
}

fn all_valid_is_positive(ctx: &ClassificationContext<'_>, labels: &mut Vec<Category>) {
    if ctx.all_text_valid() {
        push_once(labels, Category::Positive);
    }
}

fn empty_is_validation_edge(ctx: &ClassificationContext<'_>, labels: &mut Vec<Category>) {
    if ctx.count_text(FieldState::Empty) > 0 {
        push_once(labels, Category::Negative);
        push_once(labels, Category::Validation);
        push_once(labels, Category::Edge);
    }
}

fn invalid_is_negative(ctx: &ClassificationContext<'_>, labels: &mut Vec<Category>) {
    if ctx.count_text(FieldState::Invalid) > 0 {
        push_once(labels, Category::Negative);
    }
}

fn auth_security(ctx: &ClassificationContext<'_>, labels: &mut Vec<Category>) {
    if !ctx.is_auth_scenario {
        return;
    }

    let sensitive_broken = ctx.assignment.iter().any(|(field, state)| {
        SENSITIVE_FIELDS.contains(&field.to_lowercase().as_str())
            && matches!(state, FieldState::Invalid | FieldState::Empty)
    });
    // Several invalid inputs at once look like a brute-force attempt.
    let many_invalid = ctx.count_text(FieldState::Invalid) >= BRUTE_FORCE_INVALID_THRESHOLD;

    if sensitive_broken || many_invalid {
        push_once(labels, Category::Security);
    }
}

fn default_positive(_ctx: &ClassificationContext<'_>, labels: &mut Vec<Category>) {
    if labels.is_empty() {
        labels.push(Category::Positive);
    }
}

const RULES: [Rule; 5] = [
    all_valid_is_positive,
    empty_is_validation_edge,
    invalid_is_negative,
    auth_security,
    default_positive,
];

/// Ordered, duplicate-free, never-empty labels for one combination.
pub fn categorize_combination(scenario: &str, assignment: &StateAssignment) -> Vec<Category> {
    let ctx = ClassificationContext::new(scenario, assignment);
    RULES.iter().fold(Vec::new(), |mut labels, rule| {
        rule(&ctx, &mut labels);
        labels
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use Category::*;
    use FieldState::{Checked, Empty, Invalid, Unchecked, Valid};

    fn login_assignment(
        username: FieldState,
        password: FieldState,
        otp: FieldState,
    ) -> StateAssignment {
        [
            ("username", username),
            ("password", password),
            ("otp", otp),
            ("remember_me", Checked),
            ("show_password", Unchecked),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_login_empty_password_is_security_edge() {
        let assignment = login_assignment(Valid, Empty, Valid);
        let labels = categorize_combination("login", &assignment);
        assert_eq!(labels, vec![Negative, Validation, Edge, Security]);
        assert!(!labels.contains(&Positive));
    }

    #[test]
    fn test_checkout_all_valid_is_positive_only() {
        let assignment: StateAssignment = [
            ("shipping_address", Valid),
            ("zipcode", Valid),
            ("card_number", Valid),
            ("cvv", Valid),
            ("save_address", Unchecked),
            ("accept_terms", Checked),
        ]
        .into_iter()
        .collect();
        assert_eq!(categorize_combination("checkout", &assignment), vec![Positive]);
    }

    #[test]
    fn test_invalid_adds_negative_once() {
        let assignment: StateAssignment =
            [("email", Invalid), ("otp", Empty)].into_iter().collect();
        let labels = categorize_combination("reset password", &assignment);
        assert_eq!(labels, vec![Negative, Validation, Edge]);
    }

    #[test]
    fn test_two_invalid_fields_signal_brute_force() {
        let assignment = login_assignment(Invalid, Valid, Invalid);
        let labels = categorize_combination("login", &assignment);
        // otp Invalid already triggers; two invalids keep a single label.
        assert_eq!(labels, vec![Negative, Security]);

        let assignment: StateAssignment =
            [("username", Invalid), ("region", Invalid)].into_iter().collect();
        assert_eq!(
            categorize_combination("user authentication", &assignment),
            vec![Negative, Security]
        );
    }

    #[test]
    fn test_security_only_for_auth_scenarios() {
        let assignment: StateAssignment =
            [("password", Invalid), ("email", Valid)].into_iter().collect();
        assert_eq!(categorize_combination("registration", &assignment), vec![Negative]);
        assert_eq!(
            categorize_combination("Sign-In page", &assignment),
            vec![Negative, Security]
        );
    }

    #[test]
    fn test_sensitive_field_match_is_case_insensitive() {
        let assignment: StateAssignment = [("Token", Empty)].into_iter().collect();
        let labels = categorize_combination("oauth token refresh", &assignment);
        assert!(labels.contains(&Security));
    }

    #[test]
    fn test_empty_assignment_defaults_to_positive() {
        let assignment = StateAssignment::new();
        assert_eq!(categorize_combination("xyzzy operation", &assignment), vec![Positive]);
    }

    #[test]
    fn test_binary_only_assignment_defaults_to_positive() {
        let assignment: StateAssignment =
            [("is_hotspot_enabled", Unchecked)].into_iter().collect();
        assert_eq!(categorize_combination("hotspot", &assignment), vec![Positive]);
    }

    #[test]
    fn test_labels_are_never_empty_or_duplicated() {
        let states = [Valid, Invalid, Empty];
        for a in states {
            for b in states {
                for c in states {
                    let assignment = login_assignment(a, b, c);
                    let labels = categorize_combination("login", &assignment);
                    assert!(!labels.is_empty());
                    let unique: HashSet<Category> = labels.iter().copied().collect();
                    assert_eq!(unique.len(), labels.len());
                    assert_eq!(labels, categorize_combination("login", &assignment));
                }
            }
        }
    }
}
