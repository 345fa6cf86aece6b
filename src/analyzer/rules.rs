//! Keyword scoring and indicator patterns.
//!
//! Everything here operates on already-normalized (trimmed, lowercased) text.

use std::sync::LazyLock;

use regex::Regex;

use super::model::ExtractedIntelligence;

/// Scam-indicator keywords, matched as plain substrings.
pub const SCAM_KEYWORDS: [&str; 10] = [
    "win", "winner", "won", "urgent", "click", "otp", "kyc", "lottery", "refund", "prize",
];

/// Number of distinct hits that saturates the score at 1.0.
const HITS_FOR_FULL_CONFIDENCE: f64 = 5.0;

/// Minimum unrounded confidence for a scam verdict.
pub const SCAM_THRESHOLD: f64 = 0.3;

// Word boundaries are ASCII: `[A-Za-z0-9_]` against everything else.
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("link pattern is valid"));

static UPI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)[A-Za-z0-9_.\-]+@(?:upi|paytm|phonepe|ybl)(?-u:\b)")
        .expect("upi pattern is valid")
});

static BANK_ACCOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)[0-9]{9,18}(?-u:\b)").expect("bank account pattern is valid")
});

/// Keyword score for one message.
#[derive(Debug, Clone, PartialEq)]
pub struct ScamScore {
    /// Keywords present in the message, in [`SCAM_KEYWORDS`] order.
    pub hits: Vec<&'static str>,
    /// Unrounded confidence.
    pub confidence: f64,
}

impl ScamScore {
    /// Score a normalized message.
    pub fn of(normalized: &str) -> Self {
        let hits: Vec<&'static str> = SCAM_KEYWORDS
            .iter()
            .copied()
            .filter(|keyword| normalized.contains(keyword))
            .collect();
        let confidence = (hits.len() as f64 / HITS_FOR_FULL_CONFIDENCE).min(1.0);
        Self { hits, confidence }
    }

    pub fn is_scam(&self) -> bool {
        self.confidence >= SCAM_THRESHOLD
    }

    /// Confidence rounded to two decimals for output.
    pub fn rounded_confidence(&self) -> f64 {
        (self.confidence * 100.0).round() / 100.0
    }
}

/// Pull links, payment handles and account numbers out of a normalized message.
pub fn extract(normalized: &str) -> ExtractedIntelligence {
    ExtractedIntelligence {
        links: find_all(&LINK_PATTERN, normalized),
        upi_ids: find_all(&UPI_PATTERN, normalized),
        bank_accounts: find_all(&BANK_ACCOUNT_PATTERN, normalized),
    }
}

fn find_all(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_distinct_keywords_not_occurrences() {
        let score = ScamScore::of("urgent urgent urgent");
        assert_eq!(score.hits, vec!["urgent"]);
        assert!(!score.is_scam());
    }

    #[test]
    fn keywords_match_inside_words() {
        // "winner" also contains "win"
        let score = ScamScore::of("you are a winner");
        assert_eq!(score.hits, vec!["win", "winner"]);
        assert!(score.is_scam());

        assert_eq!(ScamScore::of("what a wonderful window").hits, vec!["win", "won"]);
    }

    #[test]
    fn threshold_sits_between_one_and_two_hits() {
        assert!(!ScamScore::of("otp").is_scam());
        assert!(ScamScore::of("otp kyc").is_scam());
    }

    #[test]
    fn confidence_caps_at_one() {
        let score = ScamScore::of("win winner won urgent click otp kyc lottery refund prize");
        assert_eq!(score.hits.len(), 10);
        assert_eq!(score.confidence, 1.0);
        assert_eq!(score.rounded_confidence(), 1.0);
    }

    #[test]
    fn rounded_confidence_has_two_decimals() {
        for n in 0..=SCAM_KEYWORDS.len() {
            let text = SCAM_KEYWORDS[..n].join(" ");
            let rounded = ScamScore::of(&text).rounded_confidence();
            assert!((0.0..=1.0).contains(&rounded));
            assert_eq!((rounded * 100.0).round() / 100.0, rounded);
        }
    }

    #[test]
    fn links_run_to_next_whitespace() {
        let intel = extract("go to http://a.example/x?y=1, then https://b.example\tnow");
        assert_eq!(
            intel.links,
            vec!["http://a.example/x?y=1,", "https://b.example"]
        );
    }

    #[test]
    fn ftp_is_not_a_link() {
        assert!(extract("ftp://files.example").links.is_empty());
    }

    #[test]
    fn upi_ids_keep_full_handle() {
        let intel = extract("pay ravi.k-99@paytm or shop@ybl or me@phonepe");
        assert_eq!(intel.upi_ids, vec!["ravi.k-99@paytm", "shop@ybl", "me@phonepe"]);
    }

    #[test]
    fn upi_ids_require_known_provider_and_boundary() {
        let intel = extract("mail john@gmail.com or john@upiexample or john@upi_x");
        assert!(intel.upi_ids.is_empty());
    }

    #[test]
    fn upi_ids_keep_duplicates_in_order() {
        let intel = extract("a@upi b@ybl a@upi");
        assert_eq!(intel.upi_ids, vec!["a@upi", "b@ybl", "a@upi"]);
    }

    #[test]
    fn bank_accounts_respect_length_bounds() {
        let intel = extract("12345678 123456789 123456789012345678 1234567890123456789");
        assert_eq!(
            intel.bank_accounts,
            vec!["123456789", "123456789012345678"]
        );
    }

    #[test]
    fn bank_accounts_ignore_digits_inside_tokens() {
        let intel = extract("ref abc123456789012 and 123456789012x and _123456789012");
        assert!(intel.bank_accounts.is_empty());
    }

    #[test]
    fn bank_accounts_split_on_punctuation() {
        let intel = extract("acc:123456789012,ifsc-987654321");
        assert_eq!(intel.bank_accounts, vec!["123456789012", "987654321"]);
    }

    #[test]
    fn non_ascii_letters_are_not_word_characters() {
        let intel = extract("é123456789é");
        assert_eq!(intel.bank_accounts, vec!["123456789"]);
    }
}
