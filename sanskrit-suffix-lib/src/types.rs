use serde::{Deserialize, Serialize};

/// Stem reported when the matched suffix consumes the whole word.
pub const NO_STEM: &str = "(no stem)";

/// A known suffix and the grammatical category it marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixEntry {
    /// Trailing character sequence, matched byte-for-byte (e.g., "asya").
    pub suffix: String,
    /// Free-text description (e.g., "Genitive singular (e.g. 'devasya')").
    pub category: String,
}

impl SuffixEntry {
    pub fn new(suffix: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            category: category.into(),
        }
    }
}

/// A word split into stem + suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub word: String,
    /// Literal prefix of `word`, or [`NO_STEM`].
    pub stem: String,
    pub suffix: String,
    pub category: String,
}

impl Analysis {
    /// True if the suffix covered the entire word.
    pub fn has_stem(&self) -> bool {
        self.stem != NO_STEM
    }
}

/// Result of analysing a non-empty word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    Match(Analysis),
    NoMatch { word: String },
}

impl AnalysisOutcome {
    pub fn word(&self) -> &str {
        match self {
            AnalysisOutcome::Match(a) => &a.word,
            AnalysisOutcome::NoMatch { word } => word,
        }
    }

    pub fn as_match(&self) -> Option<&Analysis> {
        match self {
            AnalysisOutcome::Match(a) => Some(a),
            AnalysisOutcome::NoMatch { .. } => None,
        }
    }
}

/// An analysis together with every suffix that matched, longest first.
#[derive(Debug, Clone, Serialize)]
pub struct DetailedAnalysis {
    #[serde(flatten)]
    pub outcome: AnalysisOutcome,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub candidates: Vec<SuffixEntry>,
}
