use serde::{Deserialize, Serialize};

use crate::processing::datapoints::PointFormat;
use crate::state::color::Color;
use crate::state::compare_config::CompareConfig;

static NEXT_SERIES_ID: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

pub fn next_series_id() -> u64 {
    NEXT_SERIES_ID.fetch_add(1, std::sync::atomic::Ordering::Relaxed)
}

/// A raw data tuple: horizontal coordinate, vertical coordinate, then any
/// further fields the series layout uses (e.g. a bar's bottom).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Point(Vec<f64>);

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point(vec![x, y])
    }

    pub fn with_extra(x: f64, y: f64, extra: &[f64]) -> Self {
        let mut values = Vec::with_capacity(2 + extra.len());
        values.push(x);
        values.push(y);
        values.extend_from_slice(extra);
        Point(values)
    }

    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    pub fn extra(&self) -> &[f64] {
        &self.0[2..]
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Number of fields in the raw tuple.
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    /// `(key, value)` under the given orientation.
    pub fn key_value(&self, orientation: Orientation) -> (f64, f64) {
        match orientation {
            Orientation::Vertical => (self.x(), self.y()),
            Orientation::Horizontal => (self.y(), self.x()),
        }
    }
}

impl TryFrom<Vec<f64>> for Point {
    type Error = String;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        if values.len() < 2 {
            return Err(format!(
                "point needs at least 2 coordinates, got {}",
                values.len()
            ));
        }
        Ok(Point(values))
    }
}

impl From<Point> for Vec<f64> {
    fn from(point: Point) -> Self {
        point.0
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Which coordinate is the lookup key. Vertical layouts key on the
/// horizontal coordinate; horizontal bars swap the roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Vertical => "Vertical",
            Orientation::Horizontal => "Horizontal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineOptions {
    pub show: bool,
    pub line_width: f32,
    pub fill: bool,
    pub steps: bool,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            show: true,
            line_width: 2.0,
            fill: false,
            steps: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarOptions {
    pub show: bool,
    pub bar_width: f64,
    pub align: BarAlign,
    pub horizontal: bool,
    pub fill: bool,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self {
            show: false,
            bar_width: 0.8,
            align: BarAlign::default(),
            horizontal: false,
            fill: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointSymbol {
    #[default]
    Circle,
    Square,
    Diamond,
    Triangle,
    Cross,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PointOptions {
    pub show: bool,
    pub radius: f32,
    pub symbol: PointSymbol,
}

impl Default for PointOptions {
    fn default() -> Self {
        Self {
            show: false,
            radius: 3.0,
            symbol: PointSymbol::default(),
        }
    }
}

/// Back-reference from a derived series to the subject it was split from.
/// Only read by hosts; partitioning never follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesOrigin {
    pub id: u64,
    pub position: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    #[serde(default = "next_series_id")]
    pub id: u64,
    #[serde(default)]
    pub data: Vec<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default)]
    pub lines: LineOptions,
    #[serde(default)]
    pub bars: BarOptions,
    #[serde(default)]
    pub points: PointOptions,
    #[serde(default = "default_axis")]
    pub xaxis: usize,
    #[serde(default = "default_axis")]
    pub yaxis: usize,
    #[serde(default = "default_shadow_size")]
    pub shadow_size: f32,
    #[serde(default)]
    pub compare: CompareConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<SeriesOrigin>,
    /// Tuple layout inherited from the subject; only set on derived series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<PointFormat>,
}

fn default_axis() -> usize {
    1
}

fn default_shadow_size() -> f32 {
    3.0
}

impl Series {
    pub fn new(label: impl Into<String>, data: Vec<Point>) -> Self {
        Self {
            id: next_series_id(),
            data,
            label: Some(label.into()),
            color: None,
            lines: LineOptions::default(),
            bars: BarOptions::default(),
            points: PointOptions::default(),
            xaxis: default_axis(),
            yaxis: default_axis(),
            shadow_size: default_shadow_size(),
            compare: CompareConfig::default(),
            origin: None,
            format: None,
        }
    }

    pub fn with_compare(mut self, compare: CompareConfig) -> Self {
        self.compare = compare;
        self
    }

    pub fn orientation(&self) -> Orientation {
        if self.bars.horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Whether any rendering mode is still switched on.
    pub fn is_visible(&self) -> bool {
        self.lines.show || self.bars.show || self.points.show
    }

    /// Turns off every rendering mode; the data stays in place.
    pub fn hide(&mut self) {
        self.lines.show = false;
        self.bars.show = false;
        self.points.show = false;
    }

    pub fn is_derived(&self) -> bool {
        self.origin.is_some()
    }

    pub fn point_count(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_rejects_short_tuples() {
        assert!(serde_json::from_str::<Point>("[1.0]").is_err());
        let p: Point = serde_json::from_str("[1.0, 2.0, 0.5]").unwrap();
        assert_eq!(p.extra(), &[0.5]);
        assert_eq!(p.arity(), 3);
    }

    #[test]
    fn key_value_swaps_for_horizontal() {
        let p = Point::new(1.0, 9.0);
        assert_eq!(p.key_value(Orientation::Vertical), (1.0, 9.0));
        assert_eq!(p.key_value(Orientation::Horizontal), (9.0, 1.0));
    }

    #[test]
    fn series_defaults_from_sparse_json() {
        let s: Series = serde_json::from_str(r#"{"data": [[1, 2]], "bars": {"horizontal": true}}"#).unwrap();
        assert_eq!(s.orientation(), Orientation::Horizontal);
        assert!(s.lines.show);
        assert!(!s.bars.show);
        assert_eq!(s.xaxis, 1);
        assert!(!s.compare.enabled);
        assert!(s.label.is_none());
    }

    #[test]
    fn hide_turns_off_every_mode() {
        let mut s = Series::new("a", vec![Point::new(0.0, 1.0)]);
        s.points.show = true;
        assert!(s.is_visible());
        s.hide();
        assert!(!s.is_visible());
        assert_eq!(s.point_count(), 1);
    }
}
