/*!
 * Aggregate validation across all configured jurisdictions.
 *
 * The `AggregateValidator` composes jurisdiction rule sets in ascending
 * priority order, resolves each OCR candidate against them, and exposes
 * the lighter cross-jurisdiction `normalize_for_vote` used by external
 * multi-frame consensus grouping.
 *
 * All rule data is immutable after construction, so concurrent calls
 * need no locking. Configuration reload is modeled by `ValidatorHandle`:
 * build a new validator, swap the snapshot reference, and let outgoing
 * instances finish serving in-flight calls.
 */

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use super::jurisdiction::{fold_and_strip, JurisdictionRuleSet};
use super::result::{RejectReason, ValidationResult};

/// Stop words applied when the caller supplies none
const DEFAULT_STOP_WORDS: &[&str] = &["TEST", "SAMPLE"];

/// Resolves candidates against every configured jurisdiction
#[derive(Debug, Clone)]
pub struct AggregateValidator {
    /// Rule sets, ascending by priority
    jurisdictions: Vec<JurisdictionRuleSet>,
    /// Values rejected before any jurisdiction is consulted, uppercased
    global_stop_words: HashSet<String>,
    /// Union of every jurisdiction's correction map, for vote keys.
    /// On a colliding source character the later-loaded jurisdiction
    /// (higher priority value) wins.
    merged_translation_map: HashMap<char, String>,
}

impl AggregateValidator {
    /// Compose rule sets with an explicit global stop-word list.
    ///
    /// The list may be empty; pass-through of stop-word filtering is the
    /// caller's choice. Rule sets are re-sorted ascending by priority in
    /// case the caller assembled them by hand.
    pub fn new<S: AsRef<str>>(
        mut jurisdictions: Vec<JurisdictionRuleSet>,
        global_stop_words: &[S],
    ) -> Self {
        jurisdictions.sort_by_key(|rules| rules.priority());

        let global_stop_words: HashSet<String> = global_stop_words
            .iter()
            .map(|word| word.as_ref().to_uppercase())
            .collect();

        let mut merged_translation_map = HashMap::new();
        for rules in &jurisdictions {
            for (source, destination) in rules.translation_map() {
                merged_translation_map.insert(*source, destination.clone());
            }
        }

        Self {
            jurisdictions,
            global_stop_words,
            merged_translation_map,
        }
    }

    /// Compose rule sets with the default global stop words (TEST, SAMPLE)
    pub fn with_default_stop_words(jurisdictions: Vec<JurisdictionRuleSet>) -> Self {
        Self::new(jurisdictions, DEFAULT_STOP_WORDS)
    }

    /// Resolve a candidate against every configured jurisdiction.
    ///
    /// Global stop words reject immediately, before any jurisdiction is
    /// consulted. Otherwise jurisdictions are tried in ascending priority
    /// order and the first acceptance wins. With zero jurisdictions
    /// configured the engine degrades to a pass-through: any non-empty
    /// candidate is accepted with no country attached. When every
    /// jurisdiction rejects, the last jurisdiction's result is returned
    /// if all rejection reasons agree, otherwise a generic
    /// `NoJurisdictionMatched`.
    pub fn validate(&self, raw: &str) -> ValidationResult {
        if self.global_stop_words.contains(&raw.trim().to_uppercase()) {
            return ValidationResult::rejected(
                raw.trim().to_uppercase(),
                raw,
                RejectReason::StopWord,
            );
        }

        if self.jurisdictions.is_empty() {
            return if raw.is_empty() {
                ValidationResult::rejected(String::new(), raw, RejectReason::Empty)
            } else {
                ValidationResult::accepted_unchecked(raw)
            };
        }

        let mut last_result: Option<ValidationResult> = None;
        let mut reasons_agree = true;

        for rules in &self.jurisdictions {
            let result = rules.validate(raw);
            if result.accepted {
                return result;
            }
            if let Some(previous) = &last_result {
                if previous.reason != result.reason {
                    reasons_agree = false;
                }
            }
            last_result = Some(result);
        }

        debug!("Candidate '{}' rejected by all jurisdictions", raw);

        match last_result {
            Some(result) if reasons_agree => result,
            _ => ValidationResult::rejected(
                fold_and_strip(raw),
                raw,
                RejectReason::NoJurisdictionMatched,
            ),
        }
    }

    /// Normalize a candidate into the vote key used for consensus grouping.
    ///
    /// Uppercases, strips separators and applies the merged correction map
    /// of all jurisdictions. Out-of-charset characters are kept: two OCR
    /// readings of the same physical plate should group together even when
    /// neither would pass final acceptance.
    pub fn normalize_for_vote(&self, raw: &str) -> String {
        let stripped = fold_and_strip(raw);

        let mut key = String::with_capacity(stripped.len());
        for ch in stripped.chars() {
            match self.merged_translation_map.get(&ch) {
                Some(replacement) => key.push_str(replacement),
                None => key.push(ch),
            }
        }
        key
    }

    /// Configured rule sets, ascending by priority
    pub fn jurisdictions(&self) -> &[JurisdictionRuleSet] {
        &self.jurisdictions
    }

    /// Whether no jurisdiction is configured (pass-through mode)
    pub fn is_empty(&self) -> bool {
        self.jurisdictions.is_empty()
    }

    /// Merged vote-key correction map
    pub fn merged_translation_map(&self) -> &HashMap<char, String> {
        &self.merged_translation_map
    }
}

/// Atomically swappable snapshot reference to the active validator.
///
/// Reload never mutates rule data in place: build a new
/// `AggregateValidator` and `swap` it in. Snapshots obtained through
/// `current` before the swap remain fully usable, so in-flight calls
/// need no coordination with the reload.
pub struct ValidatorHandle {
    inner: RwLock<Arc<AggregateValidator>>,
}

impl ValidatorHandle {
    /// Wrap an initial validator snapshot
    pub fn new(validator: AggregateValidator) -> Self {
        Self {
            inner: RwLock::new(Arc::new(validator)),
        }
    }

    /// The currently active snapshot
    pub fn current(&self) -> Arc<AggregateValidator> {
        self.inner.read().clone()
    }

    /// Replace the active snapshot, returning the outgoing one
    pub fn swap(&self, validator: AggregateValidator) -> Arc<AggregateValidator> {
        let mut guard = self.inner.write();
        std::mem::replace(&mut *guard, Arc::new(validator))
    }
}
