//! Author-to-reference bound resolution.
//!
//! A single author-numbered position resolves against a chain's lookup table
//! to either a reference coordinate or one of two unmapped outcomes. The two
//! unmapped cases behave identically for range conversion but are kept
//! distinguishable for diagnostics.

use crate::model::{Chain, MappedValue};

/// Outcome of resolving one author-numbered position against a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The position maps to this reference coordinate (1-based).
    Mapped(u64),
    /// The position exists in the chain but maps outside the reference span.
    OutOfBoundary,
    /// The position is not part of the chain's known mapping at all.
    Unknown,
}

impl Resolution {
    /// True for both unmapped outcomes.
    #[inline]
    pub fn is_unmapped(self) -> bool {
        !matches!(self, Resolution::Mapped(_))
    }

    /// The reference coordinate, if mapped.
    #[inline]
    pub fn mapped(self) -> Option<u64> {
        match self {
            Resolution::Mapped(pos) => Some(pos),
            _ => None,
        }
    }
}

/// Resolve a single author-numbered position.
///
/// Pure function of its two inputs; no side effects.
pub fn resolve_bound(pos: i64, chain: &Chain) -> Resolution {
    match chain.author_to_ref.get(&pos) {
        None => Resolution::Unknown,
        Some(MappedValue::OutOfBoundary(_)) => Resolution::OutOfBoundary,
        Some(MappedValue::Reference(mapped)) => Resolution::Mapped(*mapped),
    }
}
