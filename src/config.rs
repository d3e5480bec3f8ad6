//! Presentation configuration for feature building.
//!
//! Colors and link bases are injected into [`crate::features::FeatureBuilder`]
//! as one immutable value per build call; there is no shared global table.
//! Defaults match the palette the viewer ships with. Callers can deserialize
//! overrides from their own configuration source.

use serde::Deserialize;

/// Hex color for each feature role.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Full-span reference sequence track.
    pub reference: String,
    /// Chain coverage track.
    pub chains: String,
    /// Darker of the two alternating repeat-unit shades.
    pub units_dark: String,
    /// Lighter of the two alternating repeat-unit shades.
    pub units_light: String,
    /// Insertions, regardless of count.
    pub insertions: String,
    /// Caller-defined custom ranges.
    pub custom: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            reference: "#70B77E".to_string(),
            chains: "#D62839".to_string(),
            units_dark: "#03256C".to_string(),
            units_light: "#00709B".to_string(),
            insertions: "#F2BB05".to_string(),
            custom: "#1C7C54".to_string(),
        }
    }
}

/// Link bases used when generating sidebar anchor markup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Links {
    /// Reference sequence entry page, suffixed with the reference id.
    pub reference_url: String,
    /// Structure entry page, suffixed with the structure id.
    pub structure_url: String,
    /// Repeat database protein page, suffixed with structure id + chain id.
    pub repeat_db_url: String,
}

impl Default for Links {
    fn default() -> Self {
        Self {
            reference_url: "https://www.uniprot.org/uniprot/".to_string(),
            structure_url: "http://www.rcsb.org/structure/".to_string(),
            repeat_db_url: "http://repeatsdb.bio.unipd.it/protein/".to_string(),
        }
    }
}

/// Immutable presentation configuration for one build call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub palette: Palette,
    pub links: Links,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_palette() {
        let config = ViewerConfig::default();
        assert_eq!(config.palette.reference, "#70B77E");
        assert_eq!(config.palette.insertions, "#F2BB05");
        assert_eq!(config.links.reference_url, "https://www.uniprot.org/uniprot/");
    }

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let config: ViewerConfig = serde_json::from_str(
            r##"{"palette": {"custom": "#000000"}}"##,
        )
        .unwrap();
        assert_eq!(config.palette.custom, "#000000");
        assert_eq!(config.palette.chains, "#D62839");
        assert_eq!(config.links, Links::default());
    }
}
