//! Request and result types for message analysis.

use serde::{Deserialize, Serialize};

/// Persona label reported with every result.
pub const PERSONA: &str = "Non-technical UPI user";

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Free-text message to inspect. Absent means empty.
    #[serde(default)]
    pub message: String,
}

/// Verdict plus indicators for one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Two or more distinct scam keywords were found.
    pub is_scam: bool,
    /// Keyword density in `[0.0, 1.0]`, rounded to two decimals.
    pub confidence_score: f64,
    /// Always [`PERSONA`].
    pub persona_used: String,
    /// Indicators pulled out of the message text.
    pub extracted_intelligence: ExtractedIntelligence,
}

/// Indicators found in a message, each in order of appearance.
///
/// Duplicates are kept: a handle mentioned twice is listed twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedIntelligence {
    /// `http://` / `https://` URLs up to the next whitespace.
    pub links: Vec<String>,
    /// Full `local@provider` payment handles.
    pub upi_ids: Vec<String>,
    /// Standalone 9–18 digit runs.
    pub bank_accounts: Vec<String>,
}

impl ExtractedIntelligence {
    /// Total number of indicators across all categories.
    pub fn len(&self) -> usize {
        self.links.len() + self.upi_ids.len() + self.bank_accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
