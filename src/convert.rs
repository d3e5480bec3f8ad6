//! Range conversion from author numbering to reference numbering.
//!
//! Each entity's bounds resolve independently through [`crate::coords`]; the
//! clipping policy then decides per entity:
//!
//! | start | end | result |
//! |-------|-----|--------|
//! | mapped | mapped | emitted unchanged |
//! | unmapped | mapped | start clipped to `chain.ref_start`, flag set |
//! | mapped | unmapped | end clipped to `chain.ref_end`, flag set |
//! | unmapped | unmapped | dropped, flag set, no output record |
//!
//! Output preserves input order. Dropped entities leave no gap marker, so
//! callers must not assume positional alignment between input and output.

use serde::{Deserialize, Serialize};

use crate::coords::resolve_bound;
use crate::model::{Chain, Entity};

/// A range in reference numbering (1-based, closed).
///
/// `x <= y` is expected from valid input but not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertedRange {
    pub x: u64,
    pub y: u64,
}

/// Result of converting one list of entities against a chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    /// Converted ranges, in input order.
    pub ranges: Vec<ConvertedRange>,
    /// True if any entity was clipped to a chain boundary or dropped.
    pub any_clipped_or_dropped: bool,
}

/// Convert an ordered list of author-numbered entities to reference ranges.
///
/// Pure apart from debug-level log lines for clipped and dropped entities;
/// anomalies never abort the conversion.
pub fn convert_entities(entities: &[Entity], chain: &Chain) -> Conversion {
    let mut result = Conversion::default();

    for entity in entities {
        let start = resolve_bound(entity.start, chain).mapped();
        let end = resolve_bound(entity.end, chain).mapped();

        let range = match (start, end) {
            (Some(x), Some(y)) => ConvertedRange { x, y },
            (None, Some(y)) => {
                log::debug!(
                    "entity {}..{} on chain {}: start outside reference, clipped to {}",
                    entity.start,
                    entity.end,
                    chain.id,
                    chain.ref_start
                );
                result.any_clipped_or_dropped = true;
                ConvertedRange {
                    x: chain.ref_start,
                    y,
                }
            }
            (Some(x), None) => {
                log::debug!(
                    "entity {}..{} on chain {}: end outside reference, clipped to {}",
                    entity.start,
                    entity.end,
                    chain.id,
                    chain.ref_end
                );
                result.any_clipped_or_dropped = true;
                ConvertedRange {
                    x,
                    y: chain.ref_end,
                }
            }
            (None, None) => {
                log::debug!(
                    "entity {}..{} on chain {}: entirely outside reference, dropped",
                    entity.start,
                    entity.end,
                    chain.id
                );
                result.any_clipped_or_dropped = true;
                continue;
            }
        };
        result.ranges.push(range);
    }

    result
}
