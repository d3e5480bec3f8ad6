//! Feature assembly for the timeline viewer.
//!
//! A [`Feature`] is a normalized, colorable, labeled range-set record. The
//! builder turns chain metadata and converted coordinates into one feature
//! per role; the rendering layer draws them as tracks and treats the sidebar
//! content as opaque markup.

use serde::Serialize;

use crate::config::ViewerConfig;
use crate::convert::{convert_entities, ConvertedRange};
use crate::error::FeatureError;
use crate::model::{Chain, Region};
use crate::sink::{LogSink, Severity, WarningSink};
use crate::Result;

/// Role of a feature track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureKind {
    ReferenceSequence,
    Chain,
    RegionUnits,
    RegionInsertions,
    Custom,
}

/// One colorable range within a feature track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureRange {
    pub x: u64,
    pub y: u64,
    /// Hex color; `None` renders with the track default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Label shown on the range itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Sidebar entry attached to a feature. `content` is markup the core
/// generates but never interprets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarEntry {
    pub id: String,
    pub tooltip: String,
    pub content: String,
}

/// A normalized feature record consumed by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub kind: FeatureKind,
    pub label: String,
    pub id: String,
    pub data: Vec<FeatureRange>,
    pub is_open: bool,
    pub sidebar: Vec<SidebarEntry>,
}

/// Features built from one chain's regions, plus the aggregate flag telling
/// whether any range was clipped or dropped on the way.
#[derive(Debug, Clone, Default)]
pub struct RegionFeatures {
    pub features: Vec<Feature>,
    pub any_clipped_or_dropped: bool,
}

/// Builds feature records from chain metadata and converted coordinates.
///
/// Holds the presentation configuration and the warning sink; every build
/// method is otherwise a pure function of its arguments.
pub struct FeatureBuilder<S = LogSink> {
    config: ViewerConfig,
    sink: S,
}

impl FeatureBuilder<LogSink> {
    /// Builder with the given configuration, reporting through `log`.
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            sink: LogSink,
        }
    }
}

impl<S: WarningSink> FeatureBuilder<S> {
    /// Builder with a caller-supplied warning sink.
    pub fn with_sink(config: ViewerConfig, sink: S) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Full-span track for the reference sequence itself.
    pub fn reference_feature(&self, ref_id: &str, sequence_length: u64) -> Feature {
        Feature {
            kind: FeatureKind::ReferenceSequence,
            label: ref_id.to_string(),
            id: format!("p-{ref_id}"),
            data: vec![FeatureRange {
                x: 1,
                y: sequence_length,
                color: Some(self.config.palette.reference.clone()),
                label: None,
            }],
            is_open: false,
            sidebar: vec![SidebarEntry {
                id: "MyHtml".to_string(),
                tooltip: format!("UniProt {ref_id}"),
                content: format!(
                    r#"<a target="_blank" href="{}{ref_id}"><i class="fa fa-link" aria-hidden="true"></i></a>"#,
                    self.config.links.reference_url
                ),
            }],
        }
    }

    /// Track covering the span of the reference a chain is mapped onto.
    pub fn chain_feature(&self, structure_id: &str, chain: &Chain) -> Result<Feature> {
        chain.validate(structure_id)?;

        let name = format!("{structure_id}-{}", chain.id);
        Ok(Feature {
            kind: FeatureKind::Chain,
            label: name.clone(),
            id: format!("c-{name}"),
            data: vec![FeatureRange {
                x: chain.ref_start,
                y: chain.ref_end,
                color: Some(self.config.palette.chains.clone()),
                label: None,
            }],
            is_open: true,
            sidebar: vec![
                SidebarEntry {
                    id: "MyHtml".to_string(),
                    tooltip: name.clone(),
                    content: r#"<a style="width: 16px;"></a>"#.to_string(),
                },
                SidebarEntry {
                    id: "MyHtml".to_string(),
                    tooltip: format!("PDB {name}"),
                    content: format!(
                        r#"<a target="_blank" href="{}{structure_id}"><i style="margin-top:5px;" class="fa fa-external-link-square" aria-hidden="true"></i></a>"#,
                        self.config.links.structure_url
                    ),
                },
            ],
        })
    }

    /// Unit and insertion tracks for all of a chain's regions.
    ///
    /// Units from every region are concatenated into one track, insertions
    /// into another; either track is omitted when it would be empty. The
    /// aggregate flag is set when any range across all regions was clipped
    /// or dropped.
    pub fn region_features(
        &self,
        structure_id: &str,
        chain: &Chain,
        regions: &[Region],
    ) -> Result<RegionFeatures> {
        chain.validate(structure_id)?;

        let mut units = Vec::new();
        let mut insertions = Vec::new();
        let mut any_clipped_or_dropped = false;

        for region in regions {
            let converted = convert_entities(&region.units, chain);
            any_clipped_or_dropped |= converted.any_clipped_or_dropped;
            units.extend(converted.ranges);

            let converted = convert_entities(&region.insertions, chain);
            any_clipped_or_dropped |= converted.any_clipped_or_dropped;
            insertions.extend(converted.ranges);
        }

        let mut features = Vec::new();
        if !units.is_empty() {
            features.push(self.entity_feature(
                FeatureKind::RegionUnits,
                structure_id,
                &chain.id,
                &units,
            )?);
        }
        if !insertions.is_empty() {
            features.push(self.entity_feature(
                FeatureKind::RegionInsertions,
                structure_id,
                &chain.id,
                &insertions,
            )?);
        }

        Ok(RegionFeatures {
            features,
            any_clipped_or_dropped,
        })
    }

    /// Caller-defined range over the reference sequence.
    ///
    /// Bounds arrive as raw strings from the UI. Non-numeric, out-of-bounds,
    /// or inverted input is reported to the warning sink and produces no
    /// feature; the rest of the batch is unaffected.
    pub fn custom_feature(
        &self,
        start: &str,
        end: &str,
        sequence_length: u64,
        label: &str,
    ) -> Option<Feature> {
        let (Ok(x), Ok(y)) = (start.trim().parse::<u64>(), end.trim().parse::<u64>()) else {
            self.sink
                .report(Severity::Warning, "non-numeric bound for custom feature");
            return None;
        };

        if x < 1 || y > sequence_length {
            self.sink
                .report(Severity::Warning, "out-of-bounds custom feature");
            return None;
        }

        if x >= y {
            self.sink
                .report(Severity::Warning, "custom feature start is after its end");
            return None;
        }

        Some(Feature {
            kind: FeatureKind::Custom,
            label: "custom".to_string(),
            id: "custom".to_string(),
            data: vec![FeatureRange {
                x,
                y,
                color: Some(self.config.palette.custom.clone()),
                label: Some(label.to_string()),
            }],
            is_open: true,
            sidebar: vec![SidebarEntry {
                id: "MyCust".to_string(),
                tooltip: label.to_string(),
                content: r#"<a id="usr" target="_blank"></a>"#.to_string(),
            }],
        })
    }

    /// Assemble one units or insertions track.
    ///
    /// Insertions always take the insertion color. Units alternate between
    /// the dark and light shades when there is more than one range, which
    /// distinguishes adjacent repeats; a single range stays neutral and gets
    /// no paint-selection affordance.
    fn entity_feature(
        &self,
        kind: FeatureKind,
        structure_id: &str,
        chain_id: &str,
        ranges: &[ConvertedRange],
    ) -> Result<Feature> {
        let insertions = kind == FeatureKind::RegionInsertions;
        let prefix = if insertions { 'i' } else { 'u' };
        let label = format!("{prefix}-{structure_id}-{chain_id}");

        let data: Vec<FeatureRange> = ranges
            .iter()
            .enumerate()
            .map(|(i, range)| {
                let color = if insertions {
                    Some(self.config.palette.insertions.clone())
                } else if ranges.len() > 1 {
                    if i % 2 == 0 {
                        Some(self.config.palette.units_dark.clone())
                    } else {
                        Some(self.config.palette.units_light.clone())
                    }
                } else {
                    None
                };
                FeatureRange {
                    x: range.x,
                    y: range.y,
                    color,
                    label: None,
                }
            })
            .collect();

        // The paint brush lets the user recolor multi-range tracks; it
        // carries the range payload in a data attribute.
        let first = if !insertions && data.len() > 1 {
            let payload = serde_json::to_string(&data).map_err(|e| FeatureError::Json {
                msg: e.to_string(),
            })?;
            SidebarEntry {
                id: "MyHtml".to_string(),
                tooltip: format!("{structure_id}-{chain_id}"),
                content: format!(
                    r#"<a target="_blank"><i data-pdb="{label}" data-xy='{payload}' class="fa fa-paint-brush" aria-hidden="true"></i></a>"#
                ),
            }
        } else {
            SidebarEntry {
                id: "MyHtml".to_string(),
                tooltip: format!("{structure_id}-{chain_id}"),
                content: r#"<a target="_blank" style="width: 16px;"></a>"#.to_string(),
            }
        };

        Ok(Feature {
            kind,
            label: label.clone(),
            id: label,
            data,
            is_open: true,
            sidebar: vec![
                first,
                SidebarEntry {
                    id: "MyHtml".to_string(),
                    tooltip: format!("RepeatsDB {structure_id}-{chain_id}"),
                    content: format!(
                        r#"<a target="_blank" href="{}{structure_id}{chain_id}"><i class="fa fa-external-link" aria-hidden="true"></i></a>"#,
                        self.config.links.repeat_db_url
                    ),
                },
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entity, MappedValue};
    use crate::sink::CollectSink;
    use std::collections::BTreeMap;

    fn builder() -> FeatureBuilder {
        FeatureBuilder::new(ViewerConfig::default())
    }

    fn test_chain() -> Chain {
        let mut author_to_ref = BTreeMap::new();
        for pos in 1..=30 {
            author_to_ref.insert(pos, MappedValue::Reference(pos as u64 + 9));
        }
        Chain {
            id: "A".to_string(),
            ref_start: 10,
            ref_end: 39,
            author_to_ref,
            regions: Vec::new(),
        }
    }

    fn region(units: Vec<Entity>, insertions: Vec<Entity>) -> Region {
        Region {
            classification: "III.3".to_string(),
            units,
            insertions,
        }
    }

    #[test]
    fn reference_feature_spans_whole_sequence() {
        let feature = builder().reference_feature("P12345", 120);

        assert_eq!(feature.kind, FeatureKind::ReferenceSequence);
        assert_eq!(feature.id, "p-P12345");
        assert_eq!(feature.label, "P12345");
        assert_eq!(feature.data.len(), 1);
        assert_eq!(feature.data[0].x, 1);
        assert_eq!(feature.data[0].y, 120);
        assert_eq!(feature.data[0].color.as_deref(), Some("#70B77E"));
        assert!(feature.sidebar[0].content.contains("P12345"));
    }

    #[test]
    fn chain_feature_uses_reference_bounds() {
        let feature = builder().chain_feature("2xqz", &test_chain()).unwrap();

        assert_eq!(feature.kind, FeatureKind::Chain);
        assert_eq!(feature.id, "c-2xqz-A");
        assert_eq!(feature.data, vec![FeatureRange {
            x: 10,
            y: 39,
            color: Some("#D62839".to_string()),
            label: None,
        }]);
        assert!(feature.is_open);
        assert_eq!(feature.sidebar.len(), 2);
    }

    #[test]
    fn chain_feature_rejects_inverted_bounds() {
        let mut chain = test_chain();
        chain.ref_start = 100;
        assert!(builder().chain_feature("2xqz", &chain).is_err());
    }

    #[test]
    fn unit_colors_alternate_dark_light() {
        let chain = test_chain();
        let regions = [region(
            vec![
                Entity::new(1, 5),
                Entity::new(6, 10),
                Entity::new(11, 15),
                Entity::new(16, 20),
            ],
            vec![],
        )];
        let built = builder().region_features("2xqz", &chain, &regions).unwrap();

        assert_eq!(built.features.len(), 1);
        let colors: Vec<_> = built.features[0]
            .data
            .iter()
            .map(|r| r.color.as_deref().unwrap())
            .collect();
        assert_eq!(colors, vec!["#03256C", "#00709B", "#03256C", "#00709B"]);
        assert!(!built.any_clipped_or_dropped);
    }

    #[test]
    fn single_unit_stays_neutral_without_paint_brush() {
        let chain = test_chain();
        let regions = [region(vec![Entity::new(1, 5)], vec![])];
        let built = builder().region_features("2xqz", &chain, &regions).unwrap();

        let feature = &built.features[0];
        assert_eq!(feature.data[0].color, None);
        assert!(!feature.sidebar[0].content.contains("fa-paint-brush"));
    }

    #[test]
    fn insertions_always_get_insertion_color() {
        let chain = test_chain();
        let regions = [region(
            vec![],
            vec![Entity::new(1, 3), Entity::new(4, 6), Entity::new(7, 9)],
        )];
        let built = builder().region_features("2xqz", &chain, &regions).unwrap();

        let feature = &built.features[0];
        assert_eq!(feature.kind, FeatureKind::RegionInsertions);
        assert_eq!(feature.id, "i-2xqz-A");
        assert!(feature
            .data
            .iter()
            .all(|r| r.color.as_deref() == Some("#F2BB05")));
    }

    #[test]
    fn empty_tracks_are_omitted() {
        let chain = test_chain();
        let built = builder()
            .region_features("2xqz", &chain, &[region(vec![], vec![])])
            .unwrap();
        assert!(built.features.is_empty());
        assert!(!built.any_clipped_or_dropped);
    }

    #[test]
    fn units_concatenate_across_regions() {
        let chain = test_chain();
        let regions = [
            region(vec![Entity::new(1, 5)], vec![]),
            region(vec![Entity::new(6, 10)], vec![Entity::new(11, 12)]),
        ];
        let built = builder().region_features("2xqz", &chain, &regions).unwrap();

        assert_eq!(built.features.len(), 2);
        assert_eq!(built.features[0].kind, FeatureKind::RegionUnits);
        assert_eq!(built.features[0].data.len(), 2);
        assert_eq!(built.features[1].kind, FeatureKind::RegionInsertions);
        assert_eq!(built.features[1].data.len(), 1);
    }

    #[test]
    fn insertion_clipping_sets_aggregate_flag() {
        let chain = test_chain();
        // Insertion end 99 is not in the mapping; units convert cleanly.
        let regions = [region(vec![Entity::new(1, 5)], vec![Entity::new(6, 99)])];
        let built = builder().region_features("2xqz", &chain, &regions).unwrap();
        assert!(built.any_clipped_or_dropped);
    }

    #[test]
    fn custom_feature_accepts_valid_bounds() {
        let feature = builder().custom_feature("2", "8", 10, "2xqz").unwrap();

        assert_eq!(feature.kind, FeatureKind::Custom);
        assert_eq!(feature.data[0].x, 2);
        assert_eq!(feature.data[0].y, 8);
        assert_eq!(feature.data[0].color.as_deref(), Some("#1C7C54"));
        assert_eq!(feature.data[0].label.as_deref(), Some("2xqz"));
    }

    #[test]
    fn custom_feature_rejects_bad_input() {
        let sink = CollectSink::new();
        let builder = FeatureBuilder::with_sink(ViewerConfig::default(), sink);

        assert!(builder.custom_feature("x", "5", 10, "q").is_none());
        assert!(builder.custom_feature(r#""5""#, "8", 10, "q").is_none());
        assert!(builder.custom_feature("0", "5", 10, "q").is_none());
        assert!(builder.custom_feature("2", "11", 10, "q").is_none());
        assert!(builder.custom_feature("10", "5", 10, "q").is_none());
        assert!(builder.custom_feature("5", "5", 10, "q").is_none());

        assert_eq!(builder.sink.reports().len(), 6);
    }
}
