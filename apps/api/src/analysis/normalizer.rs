//! Response Normalizer — turns an arbitrary model reply into a valid
//! `AnalysisResult`, never failing outward.
//!
//! Models reliably produce content *resembling* JSON but not always valid or
//! fence-free JSON, so parsing runs as an ordered fallback chain ending in a
//! fixed sentinel record rather than an error.

use serde::{Deserialize, Serialize};

use crate::model_client::ProviderError;

/// The analysis shape returned to callers. The serde renames are the external
/// JSON contract; all three fields are always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "JD Match")]
    pub jd_match: String,
    #[serde(rename = "MissingKeywords")]
    pub missing_keywords: Vec<String>,
    #[serde(rename = "Profile Summary")]
    pub profile_summary: String,
}

impl AnalysisResult {
    /// Sentinel record returned when the model reply cannot be parsed at all.
    pub fn parse_failure() -> Self {
        Self {
            jd_match: "N/A".to_string(),
            missing_keywords: vec!["Could not parse response".to_string()],
            profile_summary: "The system encountered an error analyzing your resume. \
                Please try again."
                .to_string(),
        }
    }

    /// Record returned when the provider call itself failed (auth, quota,
    /// transport). The request was valid, so the caller still gets an
    /// analysis-shaped body.
    pub fn provider_failure(err: &ProviderError) -> Self {
        Self {
            jd_match: "0%".to_string(),
            missing_keywords: vec!["API error occurred".to_string()],
            profile_summary: format!("Unable to analyze resume: {err}. Please try again later."),
        }
    }
}

/// How the normalizer arrived at its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The trimmed reply parsed as-is.
    Direct,
    /// The reply parsed after stripping code-fence markers.
    FenceStripped,
    /// Nothing parsed; the sentinel record was substituted.
    Fallback,
}

/// A normalized reply tagged with how it was obtained, so the handler can log
/// degraded parses without the result type carrying error states.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedReply {
    pub result: AnalysisResult,
    pub outcome: ParseOutcome,
}

/// Normalizes a raw model reply. Total: every input yields a valid result.
///
/// Chain: direct JSON parse → fence-stripped parse → sentinel fallback.
/// A parse only succeeds if the reply is a JSON object carrying all three
/// expected keys (missing keys fall through the chain).
pub fn normalize_reply(raw: &str) -> NormalizedReply {
    let trimmed = raw.trim();

    if let Ok(result) = serde_json::from_str::<AnalysisResult>(trimmed) {
        return NormalizedReply {
            result,
            outcome: ParseOutcome::Direct,
        };
    }

    let stripped = strip_reply_fences(trimmed);
    if let Ok(result) = serde_json::from_str::<AnalysisResult>(stripped) {
        return NormalizedReply {
            result,
            outcome: ParseOutcome::FenceStripped,
        };
    }

    NormalizedReply {
        result: AnalysisResult::parse_failure(),
        outcome: ParseOutcome::Fallback,
    }
}

/// Strips a leading ```` ```json ```` marker and a trailing ```` ``` ```` marker,
/// each independently if present. Only the literal lowercase `json` tag is
/// recognized; any other fence variant falls through to the caller's fallback.
fn strip_reply_fences(text: &str) -> &str {
    let text = text.strip_prefix("```json").unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}
