//! Registration surface for data-processing hooks.

use serde_json::{json, Value};

use crate::processing::comparator::partition_with_format;
use crate::processing::datapoints::PointFormat;
use crate::state::compare_config::CompareConfig;
use crate::state::data_series::Series;

/// What a plugin registers with the host: its name, version and the default
/// option object merged beneath user options.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub options: Value,
}

pub trait Plugin {
    fn info(&self) -> PluginInfo;

    /// Called once per series, in series order, before anything is drawn.
    /// `position` is the series' index in `series`, which already holds
    /// whatever earlier hooks appended.
    fn process_raw_data(&self, series: &mut Vec<Series>, position: usize, format: &PointFormat);
}

/// Splits opted-in series into above/below series against a reference.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparePlugin;

impl ComparePlugin {
    pub const NAME: &'static str = "compare";
    pub const VERSION: &'static str = "1.0";
}

impl Plugin for ComparePlugin {
    fn info(&self) -> PluginInfo {
        let defaults = CompareConfig::default();
        PluginInfo {
            name: Self::NAME,
            version: Self::VERSION,
            options: json!({
                "series": {
                    "compare": {
                        "enabled": defaults.enabled,
                        "seriesIndex": defaults.reference_index,
                        "colorAbove": "red",
                        "colorBelow": "green"
                    }
                }
            }),
        }
    }

    fn process_raw_data(&self, series: &mut Vec<Series>, position: usize, format: &PointFormat) {
        partition_with_format(series, position, format);
    }
}
