/*!
 * Error types for the platecheck library.
 *
 * This module contains custom error types for configuration loading,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when materializing jurisdiction rule sets
/// from configuration records.
///
/// These are jurisdiction-level failures: a single malformed format
/// pattern inside an otherwise valid record is dropped at format
/// granularity by the loader and never surfaces here.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration record is missing its jurisdiction code
    #[error("jurisdiction record '{name}' has no code")]
    MissingCode {
        /// Human-readable jurisdiction name from the record, if any
        name: String,
    },

    /// A record declares contradictory length bounds
    #[error("jurisdiction '{code}' has min_length {min} greater than max_length {max}")]
    InvalidLengthBounds {
        /// Jurisdiction code from the record
        code: String,
        /// Configured minimum normalized length
        min: usize,
        /// Configured maximum normalized length
        max: usize,
    },
}
