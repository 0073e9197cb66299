/*!
 * Tagged outcome of validating one OCR candidate.
 *
 * A `ValidationResult` is ordinary data: a constructed validator never
 * raises for string input, rejections are always returned to the caller.
 */

use serde::Serialize;

/// Why a candidate was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectReason {
    /// Nothing left after normalization
    Empty,
    /// Characters outside the jurisdiction's allowed set
    ForbiddenCharacters,
    /// Shorter than the jurisdiction's minimum length
    TooShort,
    /// Longer than the jurisdiction's maximum length
    TooLong,
    /// Candidate equals a configured stop word
    StopWord,
    /// Three or more identical characters and nothing else
    UniformSequence,
    /// Monotonic digit run like "1234" or "9876"
    DigitCounterSequence,
    /// No format of the jurisdiction matched
    NoFormatMatched,
    /// Jurisdictions rejected for diverging reasons
    NoJurisdictionMatched,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            RejectReason::Empty => "empty",
            RejectReason::ForbiddenCharacters => "forbidden characters",
            RejectReason::TooShort => "too short",
            RejectReason::TooLong => "too long",
            RejectReason::StopWord => "stop word",
            RejectReason::UniformSequence => "uniform sequence",
            RejectReason::DigitCounterSequence => "digit counter sequence",
            RejectReason::NoFormatMatched => "no format matched",
            RejectReason::NoJurisdictionMatched => "no jurisdiction matched",
        };
        write!(f, "{}", text)
    }
}

/// Result of validating a single candidate
///
/// Invariant, enforced by the constructors: an accepted result carries
/// country/format attribution (or neither, for the degenerate
/// no-rules-configured pass-through) and no reason; a rejected result
/// carries exactly one reason and no attribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    /// Canonical normalized form of the candidate
    pub normalized_text: String,
    /// The candidate exactly as supplied by the recognizer
    pub raw_text: String,
    /// Whether the candidate is a plausible plate
    pub accepted: bool,
    /// Code of the jurisdiction that accepted the candidate
    pub country_code: Option<String>,
    /// Name of the jurisdiction that accepted the candidate
    pub country_name: Option<String>,
    /// Name of the format that matched
    pub format_name: Option<String>,
    /// Why the candidate was rejected
    pub reason: Option<RejectReason>,
}

impl ValidationResult {
    /// Create an accepting result attributed to a jurisdiction and format
    pub fn accepted(
        normalized: String,
        raw: &str,
        country_code: &str,
        country_name: &str,
        format_name: &str,
    ) -> Self {
        Self {
            normalized_text: normalized,
            raw_text: raw.to_string(),
            accepted: true,
            country_code: Some(country_code.to_string()),
            country_name: Some(country_name.to_string()),
            format_name: Some(format_name.to_string()),
            reason: None,
        }
    }

    /// Create an accepting result with no jurisdiction attached.
    ///
    /// Used only when zero jurisdictions are configured ("rules disabled"
    /// mode): any non-empty candidate passes through unjudged.
    pub fn accepted_unchecked(raw: &str) -> Self {
        Self {
            normalized_text: raw.to_string(),
            raw_text: raw.to_string(),
            accepted: true,
            country_code: None,
            country_name: None,
            format_name: None,
            reason: None,
        }
    }

    /// Create a rejecting result
    pub fn rejected(normalized: String, raw: &str, reason: RejectReason) -> Self {
        Self {
            normalized_text: normalized,
            raw_text: raw.to_string(),
            accepted: false,
            country_code: None,
            country_name: None,
            format_name: None,
            reason: Some(reason),
        }
    }
}
