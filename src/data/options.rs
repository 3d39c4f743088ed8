use serde_json::{Map, Value};

use crate::plugin::Plugin;
use crate::state::data_series::Series;

/// Merges `incoming` into `base`: objects merge key by key, anything else
/// replaces what was there.
pub fn deep_merge_value(base: &mut Value, incoming: &Value) {
    match (base, incoming) {
        (Value::Object(base_map), Value::Object(in_map)) => {
            for (key, in_value) in in_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge_value(base_value, in_value),
                    None => {
                        base_map.insert(key.clone(), in_value.clone());
                    }
                }
            }
        }
        (base_slot, in_value) => {
            *base_slot = in_value.clone();
        }
    }
}

/// Series option defaults, layered lowest first: plugin defaults, then the
/// chart-wide `series` options. Each series' own object goes on top.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesDefaults(Value);

impl Default for SeriesDefaults {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

impl SeriesDefaults {
    pub fn from_plugins(plugins: &[&dyn Plugin]) -> Self {
        let mut defaults = Self::default();
        for plugin in plugins {
            if let Some(series) = plugin.info().options.get("series") {
                defaults.merge(series);
            }
        }
        defaults
    }

    pub fn merge(&mut self, options: &Value) {
        let mut layer = options.clone();
        canonicalize_keys(&mut layer);
        deep_merge_value(&mut self.0, &layer);
    }

    pub fn with_global(mut self, options: &Value) -> Self {
        self.merge(options);
        self
    }

    /// Applies the defaults beneath one series object. A bare array is
    /// taken as the series' data.
    pub fn resolve(&self, raw: &Value) -> Result<Series, serde_json::Error> {
        let mut merged = self.0.clone();
        match raw {
            Value::Array(_) => {
                let mut wrapped = Map::new();
                wrapped.insert("data".to_string(), raw.clone());
                deep_merge_value(&mut merged, &Value::Object(wrapped));
            }
            other => {
                let mut layer = other.clone();
                canonicalize_keys(&mut layer);
                deep_merge_value(&mut merged, &layer);
            }
        }
        serde_json::from_value(merged)
    }
}

/// Renames `compare.referenceIndex` to `compare.seriesIndex` so a layer
/// using the alias overrides the default instead of sitting beside it.
fn canonicalize_keys(layer: &mut Value) {
    let Some(compare) = layer.get_mut("compare").and_then(Value::as_object_mut) else {
        return;
    };
    if let Some(index) = compare.remove("referenceIndex") {
        compare.insert("seriesIndex".to_string(), index);
    }
}
