/*!
 * Validation module for license-plate acceptance.
 *
 * This module decides, per OCR candidate, whether it represents a
 * plausible license plate, under which jurisdiction's format it fits,
 * and what its canonical normalized form is:
 * - Format matching (full-string, priority-ordered regex schemas)
 * - Jurisdiction rule sets (normalization, corrections, heuristics)
 * - Aggregate resolution across jurisdictions
 * - Vote-key normalization for multi-frame consensus grouping
 *
 * # Architecture
 *
 * - `format`: Compiled per-format plate patterns
 * - `jurisdiction`: Single-jurisdiction normalization and acceptance
 * - `loader`: Configuration records to immutable rule sets
 * - `aggregate`: Priority-ordered multi-jurisdiction resolution
 * - `result`: Tagged validation outcomes
 */

pub mod format;
pub mod jurisdiction;
pub mod loader;
pub mod aggregate;
pub mod result;

// Re-export main types
pub use aggregate::{AggregateValidator, ValidatorHandle};
pub use jurisdiction::JurisdictionRuleSet;
pub use result::{RejectReason, ValidationResult};
