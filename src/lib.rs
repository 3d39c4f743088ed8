//! Splits a chart series into "above" and "below" series against a
//! reference series, so hosts can colour the two parts differently.
//!
//! ```
//! use splitplot::{partition, CompareConfig, Point, Series};
//!
//! let mut series = vec![
//!     Series::new("reference", vec![Point::new(1.0, 5.0), Point::new(2.0, 4.0)]),
//!     Series::new("subject", vec![Point::new(1.0, 5.0), Point::new(2.0, 3.0)])
//!         .with_compare(CompareConfig::against(0)),
//! ];
//! partition(&mut series, 1);
//! assert_eq!(series.len(), 4);
//! assert_eq!(series[2].data, vec![Point::new(1.0, 5.0)]);
//! assert_eq!(series[3].data, vec![Point::new(2.0, 3.0)]);
//! ```

pub mod data;
pub mod plugin;
pub mod processing;
pub mod state;

pub use data::loader::{load_chart, parse_chart, read_chart, ChartError};
pub use plugin::{ComparePlugin, Plugin, PluginInfo};
pub use processing::comparator::{partition, partition_with_format, PartitionOutcome};
pub use processing::datapoints::{DataPoints, PointFormat};
pub use processing::derive::derive_series;
pub use processing::lookup::ReferenceLookup;
pub use state::chart_state::ChartState;
pub use state::color::{Color, ColorParseError};
pub use state::compare_config::CompareConfig;
pub use state::data_series::{Orientation, Point, Series, SeriesOrigin};
