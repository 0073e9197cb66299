/*!
 * Compiled plate-format rules.
 *
 * A format rule is one named regular expression describing a valid plate
 * layout within a jurisdiction. Matching is full-string: the configured
 * pattern is anchored at compile time, so "[АВ]\d{3}" matches "А123" and
 * nothing longer, regardless of how the config author anchored it.
 */

use regex::Regex;

/// One named pattern describing a valid plate layout
#[derive(Debug, Clone)]
pub struct FormatRule {
    /// Format name, e.g. "standard" or "trailer"
    name: String,
    /// Anchored, compiled pattern
    pattern: Regex,
    /// Human-readable description of the layout
    description: String,
}

impl FormatRule {
    /// Compile a format rule from its configured pattern.
    ///
    /// Returns the regex error on failure so the loader can drop the
    /// single entry and keep the rest of the jurisdiction.
    pub fn compile(name: &str, pattern: &str, description: &str) -> Result<Self, regex::Error> {
        let anchored = format!("^(?:{})$", pattern);
        let compiled = Regex::new(&anchored)?;
        Ok(Self {
            name: name.to_string(),
            pattern: compiled,
            description: description.to_string(),
        })
    }

    /// Whether the whole of `text` matches this format
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Format name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description
    pub fn description(&self) -> &str {
        &self.description
    }
}
