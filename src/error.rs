//! Error types for repeat-features.
//!
//! Recoverable anomalies (unmapped positions, rejected custom bounds) never
//! surface here; they are absorbed by the conversion layer or reported through
//! the warning sink. Errors are reserved for structurally invalid input and
//! serialization failures.

use thiserror::Error;

/// Main error type for repeat-features operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeatureError {
    /// Chain metadata violates the `ref_start <= ref_end` precondition.
    ///
    /// Inverted bounds would silently produce wrong clipped coordinates, so
    /// they are rejected up front instead of being trusted like the rest of
    /// the upstream data.
    #[error(
        "invalid chain bounds for {structure_id}-{chain_id}: ref_start {ref_start} > ref_end {ref_end}"
    )]
    InvalidChainBounds {
        structure_id: String,
        chain_id: String,
        ref_start: u64,
        ref_end: u64,
    },

    /// JSON serialization error.
    #[error("JSON error: {msg}")]
    Json { msg: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_chain_bounds_display() {
        let err = FeatureError::InvalidChainBounds {
            structure_id: "2xqz".to_string(),
            chain_id: "A".to_string(),
            ref_start: 50,
            ref_end: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("2xqz-A"));
        assert!(msg.contains("ref_start 50"));
        assert!(msg.contains("ref_end 10"));
    }

    #[test]
    fn errors_are_comparable() {
        let a = FeatureError::Json {
            msg: "truncated".to_string(),
        };
        let b = a.clone();
        assert_eq!(a, b);
    }
}
