/*!
 * Single-jurisdiction rule sets.
 *
 * A `JurisdictionRuleSet` holds one country/region's immutable rule
 * bundle and judges candidates against it: multi-stage normalization
 * (case folding, separator stripping, OCR-confusion corrections,
 * charset filtering) followed by an ordered, short-circuiting
 * acceptance pipeline.
 */

use std::collections::{HashMap, HashSet};

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::rule_config::{CorrectionPair, JurisdictionConfig};

use super::format::FormatRule;
use super::result::{RejectReason, ValidationResult};

/// Separators stripped before any other normalization step
static SEPARATOR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s\-\.]+").unwrap()
});

/// Uppercase `raw` and strip whitespace, hyphens and periods.
///
/// Shared by per-jurisdiction normalization and the aggregate vote key.
pub(crate) fn fold_and_strip(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    SEPARATOR_PATTERN.replace_all(&upper, "").into_owned()
}

/// Minimum run length for the uniform-sequence and digit-counter filters
const MIN_SEQUENCE_LENGTH: usize = 3;

/// One jurisdiction's full rule bundle, immutable after construction
#[derive(Debug, Clone)]
pub struct JurisdictionRuleSet {
    /// Human-readable jurisdiction name
    name: String,
    /// Jurisdiction code, uppercased
    code: String,
    /// Resolution priority; lower values are consulted first
    priority: i32,
    /// Valid plate layouts, tried in declared order
    formats: Vec<FormatRule>,
    /// Union of the jurisdiction's letter and digit classes
    allowed_chars: HashSet<char>,
    /// Stop words, uppercased for case-insensitive comparison
    stop_words: HashSet<String>,
    /// Per-character OCR-confusion corrections
    translation_map: HashMap<char, String>,
    /// Minimum normalized length, unset means unbounded
    min_length: Option<usize>,
    /// Maximum normalized length, unset means unbounded
    max_length: Option<usize>,
    /// Whether this jurisdiction's plates use a native (non-Latin) script
    uses_native_script: bool,
    /// Whether monotonic digit runs are acceptable plates
    allow_sequences: bool,
}

impl JurisdictionRuleSet {
    /// Build a rule set from an already-validated configuration record.
    ///
    /// A format entry whose regex fails to compile (or is empty) is
    /// dropped with a warning; the rest of the jurisdiction stays usable.
    /// Jurisdiction-level validity (non-empty code, sane length bounds)
    /// is the loader's responsibility.
    pub fn from_config(config: &JurisdictionConfig) -> Self {
        let mut formats = Vec::with_capacity(config.formats.len());
        for entry in &config.formats {
            if entry.regex.is_empty() {
                warn!(
                    "Jurisdiction '{}': dropping format '{}' with empty pattern",
                    config.code, entry.name
                );
                continue;
            }
            match FormatRule::compile(&entry.name, &entry.regex, &entry.description) {
                Ok(rule) => formats.push(rule),
                Err(err) => {
                    warn!(
                        "Jurisdiction '{}': dropping format '{}' with invalid pattern: {}",
                        config.code, entry.name, err
                    );
                }
            }
        }

        let allowed_chars: HashSet<char> = config
            .valid_characters
            .letters
            .chars()
            .chain(config.valid_characters.digits.chars())
            .collect();

        let stop_words: HashSet<String> =
            config.stop_words.iter().map(|w| w.to_uppercase()).collect();

        let correction_tables = config
            .corrections
            .common_mistakes
            .iter()
            .chain(config.corrections.latin_to_native.iter())
            .chain(config.corrections.native_to_latin.iter());
        let translation_map = build_translation_map(correction_tables);

        Self {
            name: config.name.clone(),
            code: config.code.trim().to_uppercase(),
            priority: config.priority,
            formats,
            allowed_chars,
            stop_words,
            translation_map,
            min_length: config.min_length,
            max_length: config.max_length,
            uses_native_script: config.uses_native_script,
            allow_sequences: config.allow_sequences,
        }
    }

    /// Normalize a raw candidate into canonical comparable form.
    ///
    /// Uppercases, strips whitespace/hyphens/periods, then applies the
    /// per-character correction map. With `aggressive` every remaining
    /// character outside the jurisdiction's charset is dropped as well;
    /// the non-aggressive form keeps all characters and feeds vote-key
    /// normalization. Aggressive normalization is idempotent.
    pub fn normalize(&self, raw: &str, aggressive: bool) -> String {
        let stripped = fold_and_strip(raw);

        let mut translated = String::with_capacity(stripped.len());
        for ch in stripped.chars() {
            match self.translation_map.get(&ch) {
                Some(replacement) => translated.push_str(replacement),
                None => translated.push(ch),
            }
        }

        if aggressive {
            translated
                .chars()
                .filter(|ch| self.allowed_chars.contains(ch))
                .collect()
        } else {
            translated
        }
    }

    /// Judge a raw candidate against this jurisdiction's rules.
    ///
    /// The pipeline is ordered and short-circuiting: emptiness, charset,
    /// length bounds, stop words, repeated-character runs, digit counters,
    /// and only then format matching. A stop word that happens to match a
    /// format regex is therefore still rejected.
    pub fn validate(&self, raw: &str) -> ValidationResult {
        let normalized = self.normalize(raw, true);

        if normalized.is_empty() {
            return ValidationResult::rejected(normalized, raw, RejectReason::Empty);
        }

        // Defensive: aggressive normalization already filtered the charset,
        // this only fires for degenerate empty-charset configurations.
        if normalized.chars().any(|ch| !self.allowed_chars.contains(&ch)) {
            return ValidationResult::rejected(normalized, raw, RejectReason::ForbiddenCharacters);
        }

        let length = normalized.chars().count();

        if let Some(min) = self.min_length {
            if length < min {
                return ValidationResult::rejected(normalized, raw, RejectReason::TooShort);
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return ValidationResult::rejected(normalized, raw, RejectReason::TooLong);
            }
        }

        if self.stop_words.contains(&normalized) {
            return ValidationResult::rejected(normalized, raw, RejectReason::StopWord);
        }

        if is_uniform_sequence(&normalized) {
            return ValidationResult::rejected(normalized, raw, RejectReason::UniformSequence);
        }

        if !self.allow_sequences && is_digit_counter(&normalized) {
            return ValidationResult::rejected(normalized, raw, RejectReason::DigitCounterSequence);
        }

        for format in &self.formats {
            if format.is_match(&normalized) {
                debug!(
                    "Candidate '{}' accepted by {} format '{}'",
                    normalized,
                    self.code,
                    format.name()
                );
                return ValidationResult::accepted(
                    normalized,
                    raw,
                    &self.code,
                    &self.name,
                    format.name(),
                );
            }
        }

        ValidationResult::rejected(normalized, raw, RejectReason::NoFormatMatched)
    }

    /// Jurisdiction code, uppercased
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable jurisdiction name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolution priority; lower values are consulted first
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Compiled formats, in declared order
    pub fn formats(&self) -> &[FormatRule] {
        &self.formats
    }

    /// Per-character correction map, for the aggregate vote-key merge
    pub fn translation_map(&self) -> &HashMap<char, String> {
        &self.translation_map
    }

    /// Whether this jurisdiction's plates use a native (non-Latin) script
    pub fn uses_native_script(&self) -> bool {
        self.uses_native_script
    }

    /// Whether monotonic digit runs are acceptable plates
    pub fn allow_sequences(&self) -> bool {
        self.allow_sequences
    }
}

/// Build the per-character correction map from ordered correction pairs.
///
/// Each `(from, to)` pair contributes two entries, uppercase(from) and
/// lowercase(from), both mapping to uppercase(to): matching is
/// case-insensitive on input, output is always canonical uppercase.
/// Pairs with an empty side are skipped. A later pair overwrites an
/// earlier one for the same source character.
fn build_translation_map<'a, I>(pairs: I) -> HashMap<char, String>
where
    I: Iterator<Item = &'a CorrectionPair>,
{
    let mut mapping = HashMap::new();
    for pair in pairs {
        let source = match pair.from.chars().next() {
            Some(ch) => ch,
            None => continue,
        };
        if pair.to.is_empty() {
            continue;
        }
        let destination = pair.to.to_uppercase();

        let upper = source.to_uppercase().next().unwrap_or(source);
        let lower = source.to_lowercase().next().unwrap_or(source);
        mapping.insert(upper, destination.clone());
        mapping.insert(lower, destination);
    }
    mapping
}

/// Three or more identical characters and nothing else, e.g. "AAAA"
fn is_uniform_sequence(text: &str) -> bool {
    let mut chars = text.chars();
    let first = match chars.next() {
        Some(ch) => ch,
        None => return false,
    };
    text.chars().count() >= MIN_SEQUENCE_LENGTH && chars.all(|ch| ch == first)
}

/// Monotonic digit run with a constant step of +1 or -1, e.g. "1234"
fn is_digit_counter(text: &str) -> bool {
    let digits: Option<Vec<i32>> = text.chars().map(|ch| ch.to_digit(10).map(|d| d as i32)).collect();
    let digits = match digits {
        Some(values) => values,
        None => return false,
    };
    if digits.len() < MIN_SEQUENCE_LENGTH {
        return false;
    }

    let deltas: HashSet<i32> = digits.windows(2).map(|pair| pair[1] - pair[0]).collect();
    deltas.len() == 1 && deltas.iter().all(|delta| delta.abs() == 1)
}
