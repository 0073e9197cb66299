use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Jurisdiction configuration module
/// This module defines the strongly-typed configuration records consumed by
/// the rule set loader. File discovery and YAML/JSON parsing mechanics live
/// outside this crate; callers hand over already-parsed records, or use the
/// thin JSON adapters at the bottom of this module.
/// Represents one named plate-format entry within a jurisdiction record
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FormatConfig {
    /// Format name, e.g. "standard" or "trailer"
    #[serde(default = "default_format_name")]
    pub name: String,

    /// Regular expression the normalized plate must fully match
    #[serde(default = "String::new")]
    pub regex: String,

    /// Human-readable description of the layout
    #[serde(default = "String::new")]
    pub description: String,
}

/// One OCR-confusion correction pair
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CorrectionPair {
    /// Source character as recognized
    #[serde(default = "String::new")]
    pub from: String,

    /// Canonical replacement
    #[serde(default = "String::new")]
    pub to: String,
}

/// Character classes a jurisdiction's plates may contain
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CharsetConfig {
    /// Letters valid on this jurisdiction's plates
    #[serde(default = "String::new")]
    pub letters: String,

    /// Digits valid on this jurisdiction's plates
    #[serde(default = "default_digits")]
    pub digits: String,
}

impl Default for CharsetConfig {
    fn default() -> Self {
        Self {
            letters: String::new(),
            digits: default_digits(),
        }
    }
}

/// The three ordered correction tables of a jurisdiction
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CorrectionsConfig {
    /// Corrections applied regardless of script, e.g. "0" for "O"
    #[serde(default)]
    pub common_mistakes: Vec<CorrectionPair>,

    /// Latin glyphs mapped to their native-script lookalikes
    #[serde(default)]
    pub latin_to_native: Vec<CorrectionPair>,

    /// Native-script glyphs mapped back to Latin lookalikes
    #[serde(default)]
    pub native_to_latin: Vec<CorrectionPair>,
}

/// Represents one jurisdiction's full configuration record
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JurisdictionConfig {
    /// Human-readable jurisdiction name
    #[serde(default = "String::new")]
    pub name: String,

    /// Jurisdiction code, e.g. "RU" or "KZ"; required, uppercased at load
    #[serde(default = "String::new")]
    pub code: String,

    /// Resolution priority; lower values are consulted first
    #[serde(default = "default_priority")]
    pub priority: i32,

    /// Valid plate layouts, tried in declared order
    #[serde(default)]
    pub formats: Vec<FormatConfig>,

    /// Valid character classes
    #[serde(default)]
    pub valid_characters: CharsetConfig,

    /// Values that are never plates (case-insensitive), e.g. "TEST"
    #[serde(default)]
    pub stop_words: Vec<String>,

    /// OCR-confusion correction tables
    #[serde(default)]
    pub corrections: CorrectionsConfig,

    /// Minimum normalized length, unset means unbounded
    #[serde(default)]
    pub min_length: Option<usize>,

    /// Maximum normalized length, unset means unbounded
    #[serde(default)]
    pub max_length: Option<usize>,

    /// Whether this jurisdiction's plates use a native (non-Latin) script
    #[serde(default = "default_true")]
    pub uses_native_script: bool,

    /// Whether monotonic digit runs like "1234" are acceptable plates
    #[serde(default)]
    pub allow_sequences: bool,
}

fn default_format_name() -> String {
    "unknown".to_string()
}

fn default_digits() -> String {
    "0123456789".to_string()
}

fn default_priority() -> i32 {
    10
}

fn default_true() -> bool {
    true
}

impl Default for JurisdictionConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            code: String::new(),
            priority: default_priority(),
            formats: Vec::new(),
            valid_characters: CharsetConfig::default(),
            stop_words: Vec::new(),
            corrections: CorrectionsConfig::default(),
            min_length: None,
            max_length: None,
            uses_native_script: default_true(),
            allow_sequences: false,
        }
    }
}

impl JurisdictionConfig {
    /// Validate the record at jurisdiction granularity.
    ///
    /// Format-level problems (an uncompilable regex) are not checked here;
    /// the loader degrades those at format granularity instead.
    pub fn validate(&self) -> Result<()> {
        if self.code.trim().is_empty() {
            return Err(anyhow!(
                "Jurisdiction record '{}' is missing a code",
                self.name
            ));
        }

        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(anyhow!(
                    "Jurisdiction '{}' has min_length {} > max_length {}",
                    self.code,
                    min,
                    max
                ));
            }
        }

        Ok(())
    }

    /// Parse a single record from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

/// Parse an ordered collection of records from a JSON array string
pub fn configs_from_json_str(json: &str) -> Result<Vec<JurisdictionConfig>> {
    let configs: Vec<JurisdictionConfig> = serde_json::from_str(json)?;
    Ok(configs)
}
