use serde::{Deserialize, Serialize};

use crate::state::color::Color;

/// Per-series comparison options.
///
/// `reference_index` is the position of the reference series in the full
/// series list. It is read from `seriesIndex` (or `referenceIndex`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompareConfig {
    pub enabled: bool,
    #[serde(rename = "seriesIndex", alias = "referenceIndex")]
    pub reference_index: usize,
    pub color_above: Color,
    pub color_below: Color,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            reference_index: 0,
            color_above: Color::RED,
            color_below: Color::GREEN,
        }
    }
}

impl CompareConfig {
    pub fn against(reference_index: usize) -> Self {
        Self {
            enabled: true,
            reference_index,
            ..Default::default()
        }
    }

    pub fn with_colors(mut self, above: Color, below: Color) -> Self {
        self.color_above = above;
        self.color_below = below;
        self
    }

    /// Copy of these options that can never trigger another partition.
    pub fn disabled(&self) -> Self {
        Self {
            enabled: false,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_options() {
        let c = CompareConfig::default();
        assert!(!c.enabled);
        assert_eq!(c.reference_index, 0);
        assert_eq!(c.color_above, Color::RED);
        assert_eq!(c.color_below, Color::GREEN);
    }

    #[test]
    fn reads_series_index_and_alias() {
        let c: CompareConfig = serde_json::from_str(r#"{"enabled": true, "seriesIndex": 2}"#).unwrap();
        assert_eq!(c.reference_index, 2);
        let c: CompareConfig =
            serde_json::from_str(r##"{"referenceIndex": 3, "colorBelow": "#00f"}"##).unwrap();
        assert_eq!(c.reference_index, 3);
        assert_eq!(c.color_below, Color::rgb(0, 0, 255));
        assert_eq!(c.color_above, Color::RED);
    }

    #[test]
    fn disabled_keeps_colors() {
        let c = CompareConfig::against(1).with_colors(Color::rgb(1, 1, 1), Color::rgb(2, 2, 2));
        let d = c.disabled();
        assert!(!d.enabled);
        assert_eq!(d.reference_index, 1);
        assert_eq!(d.color_above, Color::rgb(1, 1, 1));
    }
}
