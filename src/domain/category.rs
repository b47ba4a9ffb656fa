use serde::{Deserialize, Serialize};

/// Intent label attached to a generated combination.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Positive,
    Negative,
    Validation,
    Edge,
    Security,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Positive => "Positive",
            Category::Negative => "Negative",
            Category::Validation => "Validation",
            Category::Edge => "Edge",
            Category::Security => "Security",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
