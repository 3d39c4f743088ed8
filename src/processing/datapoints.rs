use serde::{Deserialize, Serialize};

use crate::state::data_series::{Point, Series};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldRole {
    X,
    Y,
    /// Baseline of a bar.
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointField {
    pub role: FieldRole,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<f64>,
}

impl PointField {
    fn required(role: FieldRole) -> Self {
        Self {
            role,
            required: true,
            default_value: None,
        }
    }

    fn optional(role: FieldRole, default_value: f64) -> Self {
        Self {
            role,
            required: false,
            default_value: Some(default_value),
        }
    }
}

/// Tuple layout of a series' points: which field sits at which offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointFormat {
    pub fields: Vec<PointField>,
}

impl PointFormat {
    pub fn xy() -> Self {
        Self {
            fields: vec![
                PointField::required(FieldRole::X),
                PointField::required(FieldRole::Y),
            ],
        }
    }

    pub fn bars() -> Self {
        let mut format = Self::xy();
        format.fields.push(PointField::optional(FieldRole::Bottom, 0.0));
        format
    }

    /// Layout the host uses for a series: bar series carry a bottom field.
    /// A derived series reuses the layout of its subject.
    pub fn for_series(series: &Series) -> Self {
        if let Some(format) = &series.format {
            return format.clone();
        }
        if series.bars.show {
            Self::bars()
        } else {
            Self::xy()
        }
    }

    pub fn pointsize(&self) -> usize {
        self.fields.len()
    }

    /// Exactly `pointsize` numbers: missing optional fields take their
    /// default (NaN when none is declared), surplus fields are dropped.
    pub fn normalize(&self, point: &Point) -> Vec<f64> {
        self.fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                point
                    .values()
                    .get(i)
                    .copied()
                    .or(field.default_value)
                    .unwrap_or(f64::NAN)
            })
            .collect()
    }
}

/// Flat, fixed-stride point buffer handed to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoints {
    pub pointsize: usize,
    pub points: Vec<f64>,
}

impl DataPoints {
    pub fn from_series(series: &Series) -> Self {
        let format = PointFormat::for_series(series);
        let pointsize = format.pointsize();
        let mut points = Vec::with_capacity(series.data.len() * pointsize);
        for point in &series.data {
            points.extend(format.normalize(point));
        }
        Self { pointsize, points }
    }

    /// Number of tuples.
    pub fn len(&self) -> usize {
        if self.pointsize == 0 {
            0
        } else {
            self.points.len() / self.pointsize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.points.chunks_exact(self.pointsize.max(1))
    }
}
