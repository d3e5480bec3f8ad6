//! Export assembly for the download boundary.
//!
//! Walks every structure and chain associated with one reference sequence and
//! produces a single normalized [`ExportRecord`], sharing conversion semantics
//! with the display path so exported and displayed coordinates never diverge.
//! The record only needs to be JSON-serializable; turning it into a
//! downloadable resource is the caller's concern.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::convert::{convert_entities, ConvertedRange};
use crate::error::FeatureError;
use crate::model::{Chain, Region, Structure};
use crate::Result;

/// Reference sequence identity included in an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceRecord {
    pub id: String,
    pub seq: String,
}

/// One region after conversion to reference numbering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionRecord {
    pub classification: String,
    /// Converted units, in conversion order. Never empty; regions whose
    /// units all fall outside the reference are not attached at all.
    pub units: Vec<ConvertedRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insertions: Option<Vec<ConvertedRange>>,
    /// First unit's `x`.
    pub start: u64,
    /// Last unit's `y`.
    pub end: u64,
}

/// Per-chain slice of an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainRecord {
    pub ref_start: u64,
    pub ref_end: u64,
    /// Author positions the chain covers, ascending.
    pub author_positions: Vec<i64>,
    /// Converted regions; absent for chains without convertible regions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<RegionRecord>>,
}

/// Normalized export for one reference sequence and its structures.
///
/// Rebuilt wholesale on every call; carries no ids or timestamps beyond its
/// inputs, so identical input yields structurally identical output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    pub reference: ReferenceRecord,
    /// Structure id -> chain id -> chain record.
    pub structures: BTreeMap<String, BTreeMap<String, ChainRecord>>,
}

impl ExportRecord {
    /// Serialize for the download boundary.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| FeatureError::Json { msg: e.to_string() })
    }
}

/// Assemble the export record for one reference sequence.
///
/// Caller-supplied input is never mutated.
pub fn build_export(ref_id: &str, sequence: &str, structures: &[Structure]) -> Result<ExportRecord> {
    let mut out = BTreeMap::new();

    for structure in structures {
        let mut chains = BTreeMap::new();
        for chain in &structure.chains {
            chain.validate(&structure.id)?;
            chains.insert(chain.id.clone(), chain_record(chain));
        }
        out.insert(structure.id.clone(), chains);
    }

    Ok(ExportRecord {
        reference: ReferenceRecord {
            id: ref_id.to_string(),
            seq: sequence.to_string(),
        },
        structures: out,
    })
}

/// Pass-through packaging for a multi-sequence text blob.
///
/// Delivered to the download boundary unchanged; exists so both export paths
/// go through the same seam.
pub fn multi_sequence_text(text: &str) -> String {
    text.to_string()
}

fn chain_record(chain: &Chain) -> ChainRecord {
    let regions: Vec<RegionRecord> = chain
        .regions
        .iter()
        .filter_map(|region| region_record(region, chain))
        .collect();

    ChainRecord {
        ref_start: chain.ref_start,
        ref_end: chain.ref_end,
        author_positions: chain.author_positions(),
        regions: if regions.is_empty() {
            None
        } else {
            Some(regions)
        },
    }
}

/// Convert one region; regions with zero convertible units contribute
/// nothing to the export.
fn region_record(region: &Region, chain: &Chain) -> Option<RegionRecord> {
    let units = convert_entities(&region.units, chain).ranges;
    let (first, last) = match (units.first(), units.last()) {
        (Some(first), Some(last)) => (first.x, last.y),
        _ => return None,
    };

    let insertions = convert_entities(&region.insertions, chain).ranges;
    Some(RegionRecord {
        classification: region.classification.clone(),
        start: first,
        end: last,
        units,
        insertions: if insertions.is_empty() {
            None
        } else {
            Some(insertions)
        },
    })
}
