//! Input data model: chains, regions, and author-numbered entities.
//!
//! These types mirror what the upstream data provider hands the core per
//! request. They are read-only for the duration of a build/export call and
//! are never mutated by it.
//!
//! # Numbering Systems
//!
//! | Field | Numbering | Notes |
//! |-------|-----------|-------|
//! | `Entity::start` / `Entity::end` | author | chain-intrinsic, may have gaps |
//! | `Chain::ref_start` / `Chain::ref_end` | reference | 1-based, closed span |
//! | `Chain::author_to_ref` keys | author | every position the chain contains |
//!
//! Conversion between the two systems lives in [`crate::coords`] and
//! [`crate::convert`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::FeatureError;

/// Value an author-numbered position maps to.
///
/// Source mappings mix numeric reference coordinates with a non-numeric
/// sentinel for positions the chain structurally contains but the reference
/// sequence does not cover, e.g. `{"1": 10, "2": 11, "3": "out"}`. The
/// untagged representation round-trips that shape directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MappedValue {
    /// The position maps to this reference coordinate (1-based).
    Reference(u64),
    /// The position exists in the chain but falls outside the reference span.
    /// The sentinel text is kept for diagnostics only.
    OutOfBoundary(String),
}

/// An author-numbered range supplied by the upstream data provider.
///
/// `start`/`end` ordering is produced upstream and not validated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub start: i64,
    pub end: i64,
}

impl Entity {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

/// A classified grouping of repeat units and insertions within one chain.
///
/// Units and insertions are converted independently but reported together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub classification: String,
    #[serde(default)]
    pub units: Vec<Entity>,
    #[serde(default)]
    pub insertions: Vec<Entity>,
}

/// One structural chain mapped onto the reference numbering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    /// Chain identifier within its structure (e.g. `"A"`).
    pub id: String,
    /// First reference position this chain is known to cover.
    pub ref_start: u64,
    /// Last reference position this chain is known to cover.
    pub ref_end: u64,
    /// Author position -> reference coordinate or out-of-boundary sentinel.
    #[serde(default)]
    pub author_to_ref: BTreeMap<i64, MappedValue>,
    #[serde(default)]
    pub regions: Vec<Region>,
}

impl Chain {
    /// Check the `ref_start <= ref_end` precondition.
    ///
    /// Everything else about upstream data is taken on trust; inverted
    /// reference bounds are the one defect that would corrupt every clipped
    /// coordinate downstream, so the entry points reject it with a typed
    /// error.
    pub fn validate(&self, structure_id: &str) -> Result<(), FeatureError> {
        if self.ref_start > self.ref_end {
            return Err(FeatureError::InvalidChainBounds {
                structure_id: structure_id.to_string(),
                chain_id: self.id.clone(),
                ref_start: self.ref_start,
                ref_end: self.ref_end,
            });
        }
        Ok(())
    }

    /// All author positions this chain is known to contain, ascending.
    pub fn author_positions(&self) -> Vec<i64> {
        self.author_to_ref.keys().copied().collect()
    }
}

/// One structure and the chains it contributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    /// Structure identifier (e.g. a PDB id).
    pub id: String,
    pub chains: Vec<Chain>,
}
