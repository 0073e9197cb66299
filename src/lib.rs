/*!
 * # platecheck
 *
 * A Rust library for rule-based normalization and acceptance of recognized
 * vehicle license-plate text.
 *
 * ## Features
 *
 * - Multi-stage text normalization (case folding, separator stripping,
 *   OCR-confusion correction tables)
 * - Priority-ordered multi-jurisdiction format matching
 * - Heuristic false-positive filters (stop words, repeated-character runs,
 *   monotonic digit counters)
 * - Cross-jurisdiction vote-key normalization for multi-frame consensus
 * - Immutable rule snapshots with an atomically swappable handle for reload
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `rule_config`: Strongly-typed configuration records for jurisdictions
 * - `validation`: Normalization and acceptance engine:
 *   - `validation::format`: Compiled per-format plate patterns
 *   - `validation::jurisdiction`: Single-jurisdiction rule sets
 *   - `validation::loader`: Configuration records to rule sets
 *   - `validation::aggregate`: Priority-ordered multi-jurisdiction resolution
 *   - `validation::result`: Tagged validation outcomes
 * - `errors`: Custom error types for the library
 *
 * Upstream recognition and tracking pipelines call
 * `AggregateValidator::validate` once per OCR candidate and
 * `AggregateValidator::normalize_for_vote` for consensus grouping.
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod errors;
pub mod rule_config;
pub mod validation;

// Re-export main types for easier usage
pub use errors::ConfigError;
pub use rule_config::JurisdictionConfig;
pub use validation::aggregate::{AggregateValidator, ValidatorHandle};
pub use validation::jurisdiction::JurisdictionRuleSet;
pub use validation::loader::load_rule_sets;
pub use validation::result::{RejectReason, ValidationResult};
