//! repeat-features: coordinate mapping and feature assembly for protein
//! repeat annotations.
//!
//! Structural chains carry their own per-chain residue numbering ("author
//! numbering"); annotations expressed in it must be displayed and exported
//! against a single reference sequence numbering. This crate translates
//! author-numbered ranges through a per-chain lookup table, clips or drops
//! ranges that fall partially or entirely outside the mapped span, and
//! assembles the results into feature tracks for a viewer and into a JSON
//! export record. Rendering, download packaging, and data fetching stay
//! outside the crate.
//!
//! # Example
//!
//! ```
//! use repeat_features::{
//!     convert_entities, Chain, Entity, FeatureBuilder, MappedValue, ViewerConfig,
//! };
//! use std::collections::BTreeMap;
//!
//! // Author positions 1, 2, 4 map onto the reference; 3 sits outside it.
//! let mut author_to_ref = BTreeMap::new();
//! author_to_ref.insert(1, MappedValue::Reference(10));
//! author_to_ref.insert(2, MappedValue::Reference(11));
//! author_to_ref.insert(3, MappedValue::OutOfBoundary("out".to_string()));
//! author_to_ref.insert(4, MappedValue::Reference(13));
//! let chain = Chain {
//!     id: "A".to_string(),
//!     ref_start: 10,
//!     ref_end: 50,
//!     author_to_ref,
//!     regions: Vec::new(),
//! };
//!
//! // The entity's end resolves to the sentinel, so it clips to ref_end.
//! let conversion = convert_entities(&[Entity::new(2, 4)], &chain);
//! assert_eq!(conversion.ranges[0].x, 11);
//! assert_eq!(conversion.ranges[0].y, 13);
//!
//! let builder = FeatureBuilder::new(ViewerConfig::default());
//! let feature = builder.chain_feature("2xqz", &chain).unwrap();
//! assert_eq!(feature.id, "c-2xqz-A");
//! ```

pub mod config;
pub mod convert;
pub mod coords;
pub mod error;
pub mod export;
pub mod features;
pub mod model;
pub mod sink;

// Re-export commonly used types
pub use config::{Links, Palette, ViewerConfig};
pub use convert::{convert_entities, Conversion, ConvertedRange};
pub use coords::{resolve_bound, Resolution};
pub use error::FeatureError;
pub use export::{build_export, multi_sequence_text, ChainRecord, ExportRecord, RegionRecord};
pub use features::{Feature, FeatureBuilder, FeatureKind, FeatureRange, RegionFeatures};
pub use model::{Chain, Entity, MappedValue, Region, Structure};
pub use sink::{CollectSink, LogSink, Severity, WarningSink};

/// Result type alias for repeat-features operations
pub type Result<T> = std::result::Result<T, FeatureError>;
