/*!
 * Common test utilities shared across the platecheck test suite.
 */

use platecheck::rule_config::configs_from_json_str;
use platecheck::{load_rule_sets, AggregateValidator, JurisdictionConfig};

/// A realistic two-jurisdiction configuration: Russia (priority 1,
/// Cyrillic charset, Latin-to-Cyrillic corrections) and Kazakhstan
/// (priority 2, Latin charset).
pub const TWO_JURISDICTIONS_JSON: &str = r#"[
  {
    "name": "Russia",
    "code": "RU",
    "priority": 1,
    "formats": [
      {
        "name": "standard",
        "regex": "^[АВЕКМНОРСТУХ]\\d{3}[АВЕКМНОРСТУХ]{2}\\d{2,3}$",
        "description": "Private vehicle plate"
      },
      {
        "name": "taxi",
        "regex": "^[АВЕКМНОРСТУХ]{2}\\d{5,6}$",
        "description": "Taxi and route transport"
      }
    ],
    "valid_characters": {
      "letters": "АВЕКМНОРСТУХ",
      "digits": "0123456789"
    },
    "stop_words": ["ТАКСИ"],
    "corrections": {
      "latin_to_native": [
        { "from": "A", "to": "А" },
        { "from": "B", "to": "В" },
        { "from": "C", "to": "С" },
        { "from": "E", "to": "Е" },
        { "from": "H", "to": "Н" },
        { "from": "K", "to": "К" },
        { "from": "M", "to": "М" },
        { "from": "O", "to": "О" },
        { "from": "P", "to": "Р" },
        { "from": "T", "to": "Т" },
        { "from": "X", "to": "Х" },
        { "from": "Y", "to": "У" }
      ]
    },
    "min_length": 7,
    "max_length": 9
  },
  {
    "name": "Kazakhstan",
    "code": "KZ",
    "priority": 2,
    "formats": [
      {
        "name": "standard",
        "regex": "^\\d{3}[A-Z]{3}\\d{2}$",
        "description": "Private vehicle plate"
      }
    ],
    "valid_characters": {
      "letters": "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
      "digits": "0123456789"
    },
    "corrections": {
      "common_mistakes": [
        { "from": "О", "to": "O" }
      ]
    },
    "uses_native_script": false
  }
]"#;

/// Parse the shared two-jurisdiction fixture into configuration records
pub fn two_jurisdiction_records() -> Vec<JurisdictionConfig> {
    configs_from_json_str(TWO_JURISDICTIONS_JSON).expect("fixture must parse")
}

/// Build a ready-to-use validator over the shared fixture
pub fn two_jurisdiction_validator() -> AggregateValidator {
    let rule_sets =
        load_rule_sets::<&str>(&two_jurisdiction_records(), None).expect("fixture must load");
    AggregateValidator::with_default_stop_words(rule_sets)
}
