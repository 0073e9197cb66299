/*!
 * Rule set loader.
 *
 * Turns external configuration records into immutable jurisdiction rule
 * sets, optionally filtered to an allow-list of codes. Errors here are
 * jurisdiction-level and block the whole load: the validator must never
 * enter service partially configured. Format-level problems degrade at
 * format granularity inside `JurisdictionRuleSet::from_config`.
 */

use std::collections::HashSet;

use log::debug;

use crate::errors::ConfigError;
use crate::rule_config::JurisdictionConfig;

use super::jurisdiction::JurisdictionRuleSet;

/// Materialize rule sets from configuration records.
///
/// `allow_list` restricts which codes are kept (case-insensitive);
/// unlisted codes are dropped entirely, not merely deprioritized.
/// The result is sorted ascending by priority, stable for ties.
pub fn load_rule_sets<S: AsRef<str>>(
    records: &[JurisdictionConfig],
    allow_list: Option<&[S]>,
) -> Result<Vec<JurisdictionRuleSet>, ConfigError> {
    let allowed: Option<HashSet<String>> = allow_list.map(|codes| {
        codes
            .iter()
            .map(|code| code.as_ref().trim().to_uppercase())
            .collect()
    });

    let mut rule_sets = Vec::new();

    for record in records {
        let code = record.code.trim().to_uppercase();
        if code.is_empty() {
            return Err(ConfigError::MissingCode {
                name: record.name.clone(),
            });
        }

        if let (Some(min), Some(max)) = (record.min_length, record.max_length) {
            if min > max {
                return Err(ConfigError::InvalidLengthBounds { code, min, max });
            }
        }

        if let Some(allowed) = &allowed {
            if !allowed.contains(&code) {
                debug!("Jurisdiction '{}' not in allow-list, skipping", code);
                continue;
            }
        }

        rule_sets.push(JurisdictionRuleSet::from_config(record));
    }

    rule_sets.sort_by_key(|rules| rules.priority());

    debug!("Loaded {} jurisdiction rule set(s)", rule_sets.len());
    Ok(rule_sets)
}
