//! Message analyzer: keyword scoring plus indicator extraction.
//!
//! [`analyze`] is a pure function. It never fails, never logs and holds no
//! state beyond the constant keyword table and compiled patterns in
//! [`rules`], so it can be called from any number of handlers at once.

pub mod model;
pub mod rules;

pub use model::{AnalysisRequest, AnalysisResult, ExtractedIntelligence, PERSONA};
pub use rules::{SCAM_KEYWORDS, SCAM_THRESHOLD, ScamScore};

/// Stand-in analyzed when the message is blank after trimming.
pub const PLACEHOLDER_MESSAGE: &str = "test message";

/// Trim and lowercase a message, substituting [`PLACEHOLDER_MESSAGE`] if
/// nothing is left.
pub fn normalize(message: &str) -> String {
    let normalized = message.trim().to_lowercase();
    if normalized.is_empty() {
        PLACEHOLDER_MESSAGE.to_string()
    } else {
        normalized
    }
}

/// Score a message and extract its indicators.
pub fn analyze(message: &str) -> AnalysisResult {
    let normalized = normalize(message);
    let score = ScamScore::of(&normalized);

    AnalysisResult {
        is_scam: score.is_scam(),
        confidence_score: score.rounded_confidence(),
        persona_used: PERSONA.to_string(),
        extracted_intelligence: rules::extract(&normalized),
    }
}
