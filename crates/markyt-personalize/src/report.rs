//! Resolution accounting for authoring and preview.

use serde::Serialize;

/// Similarity floor for unknown-token suggestions.
const SUGGESTION_THRESHOLD: f64 = 0.85;

/// The outcome of a reported render.
///
/// Built for authoring tools: alongside the personalized output it
/// carries which tokens were replaced, which remain in the text, and
/// the likely intended name for each unknown token.
#[derive(Debug, Clone, Serialize)]
pub struct RenderReport {
    /// The personalized text.
    pub output: String,

    /// Names of tokens whose spans were replaced (fallback text
    /// included), in first-seen order, deduplicated.
    pub resolved: Vec<String>,

    /// Names of tokens still present in the output, in first-seen
    /// order, deduplicated.
    pub unresolved: Vec<String>,

    /// `(unknown token, nearest known token)` pairs for likely
    /// misspellings.
    pub suggestions: Vec<(String, String)>,
}

impl RenderReport {
    /// Returns `true` if every scanned token was replaced.
    pub fn is_fully_resolved(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Picks the closest known token name by Jaro-Winkler similarity.
pub(crate) fn suggest(unknown: &str, candidates: &[String]) -> Option<String> {
    candidates
        .iter()
        .map(|candidate| (strsim::jaro_winkler(unknown, candidate), candidate))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, candidate)| candidate.clone())
}
