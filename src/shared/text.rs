//! Pure string transforms shared by the generators.
//!
//! These produce identifiers, titles and filenames that clients match on, so
//! their exact output must not drift.

const COMBINATION_ID_PREFIX_LEN: usize = 8;
const COMBINATION_ID_FALLBACK: &str = "SCEN";
const SCENARIO_ID_PREFIX_LEN: usize = 10;
const SCENARIO_ID_FALLBACK: &str = "SCENARIO";
const DOWNLOAD_FALLBACK_STEM: &str = "test_cases";
const DOWNLOAD_SUFFIX: &str = "_test_cases.md";

/// Trimmed, lower-cased scenario used for keyword matching.
pub fn normalize_scenario(scenario: &str) -> String {
    scenario.trim().to_lowercase()
}

/// Treats "sign-in" and "sign in" alike.
pub fn hyphens_to_spaces(text: &str) -> String {
    text.replace('-', " ")
}

/// Title-case form of the Latin digraph letters (DŽ, LJ, NJ, DZ), which
/// differs from their upper-case form. Other characters use `to_uppercase`.
fn titlecase_digraph(ch: char) -> Option<char> {
    match ch {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        _ => None,
    }
}

/// Title-cases the first character and lower-cases the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = match titlecase_digraph(first) {
        Some(title) => title.to_string(),
        None => first.to_uppercase().collect(),
    };
    out.extend(chars.flat_map(char::to_lowercase));
    out
}

/// Prefix for combinational case ids, e.g. "bluetooth pairing" -> "BLUETOOT".
pub fn combination_id_prefix(scenario: &str) -> String {
    let prefix: String = scenario
        .trim()
        .to_uppercase()
        .replace(' ', "_")
        .chars()
        .take(COMBINATION_ID_PREFIX_LEN)
        .collect();
    if prefix.is_empty() {
        COMBINATION_ID_FALLBACK.to_string()
    } else {
        prefix
    }
}

pub fn combination_case_id(prefix: &str, sequence: usize) -> String {
    format!("{}-{:04}", prefix, sequence)
}

/// Prefix for scenario-mode case ids: alphanumerics only, e.g. "add-to cart" -> "ADDTOCART".
pub fn scenario_id_prefix(scenario: &str) -> String {
    let cleaned: String = scenario
        .trim()
        .to_uppercase()
        .chars()
        .filter(|ch| ch.is_alphanumeric())
        .take(SCENARIO_ID_PREFIX_LEN)
        .collect();
    if cleaned.is_empty() {
        SCENARIO_ID_FALLBACK.to_string()
    } else {
        cleaned
    }
}

/// Attachment filename for the combined Markdown download.
pub fn download_filename(scenario: &str) -> String {
    let stem: String = scenario
        .trim()
        .to_lowercase()
        .chars()
        .map(|ch| if ch == ' ' || ch.is_control() { '_' } else { ch })
        .collect();
    let stem = if stem.is_empty() {
        DOWNLOAD_FALLBACK_STEM
    } else {
        stem.as_str()
    };
    format!("{}{}", stem, DOWNLOAD_SUFFIX)
}
