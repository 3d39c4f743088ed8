use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::data::options::SeriesDefaults;
use crate::plugin::Plugin;
use crate::state::chart_state::ChartState;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("chart document must be an object with a `series` array, or an array of series")]
    InvalidDocument,

    #[error("series {index}: {source}")]
    Series {
        index: usize,
        source: serde_json::Error,
    },
}

/// Parses a chart document, layering plugin defaults and the chart-wide
/// `options.series` object beneath each series.
///
/// Accepted shapes: `{"options": {"series": {...}}, "series": [...]}` or a
/// bare array of series.
pub fn parse_chart(text: &str, plugins: &[&dyn Plugin]) -> Result<ChartState, ChartError> {
    let document: Value = serde_json::from_str(text)?;
    chart_from_value(&document, plugins)
}

pub fn read_chart(mut reader: impl Read, plugins: &[&dyn Plugin]) -> Result<ChartState, ChartError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_chart(&text, plugins)
}

pub fn load_chart(path: &Path, plugins: &[&dyn Plugin]) -> Result<ChartState, ChartError> {
    let text = std::fs::read_to_string(path)?;
    let chart = parse_chart(&text, plugins)?;
    tracing::info!("Loaded {} series from {:?}", chart.series().len(), path);
    Ok(chart)
}

pub fn chart_from_value(document: &Value, plugins: &[&dyn Plugin]) -> Result<ChartState, ChartError> {
    let mut defaults = SeriesDefaults::from_plugins(plugins);
    let raw_series = match document {
        Value::Array(items) => items,
        Value::Object(map) => {
            if let Some(global) = map.get("options").and_then(|o| o.get("series")) {
                defaults.merge(global);
            }
            match map.get("series") {
                Some(Value::Array(items)) => items,
                _ => return Err(ChartError::InvalidDocument),
            }
        }
        _ => return Err(ChartError::InvalidDocument),
    };

    let series = raw_series
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            defaults
                .resolve(raw)
                .map_err(|source| ChartError::Series { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ChartState::new(series))
}
