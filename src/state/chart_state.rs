use crate::plugin::Plugin;
use crate::processing::datapoints::{DataPoints, PointFormat};
use crate::state::color::Color;
use crate::state::data_series::Series;

/// The series of one chart, as loaded and as processed.
///
/// `process` always starts again from the loaded series, so derived series
/// are rebuilt on each pass rather than carried over. Edits that should
/// survive a pass go through [`ChartState::source_mut`].
#[derive(Debug, Clone, Default)]
pub struct ChartState {
    source: Vec<Series>,
    series: Vec<Series>,
}

impl ChartState {
    pub fn new(mut series: Vec<Series>) -> Self {
        // Series without an explicit colour take one from the palette by position.
        for (index, s) in series.iter_mut().enumerate() {
            if s.color.is_none() {
                s.color = Some(Color::for_index(index));
            }
        }
        Self {
            source: series.clone(),
            series,
        }
    }

    /// The series as loaded, before any plugin ran.
    pub fn source(&self) -> &[Series] {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut Vec<Series> {
        &mut self.source
    }

    /// The series after the last `process` call, or as loaded before one.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Runs each plugin's data hook once per series, in series order, with
    /// the series' position passed explicitly. Series appended during the
    /// pass are visited as well.
    pub fn process(&mut self, plugins: &[&dyn Plugin]) {
        self.series = self.source.clone();
        let mut position = 0;
        while position < self.series.len() {
            let format = PointFormat::for_series(&self.series[position]);
            for plugin in plugins {
                plugin.process_raw_data(&mut self.series, position, &format);
            }
            position += 1;
        }
        tracing::debug!(
            loaded = self.source.len(),
            processed = self.series.len(),
            "processed chart series"
        );
    }

    pub fn visible_series(&self) -> impl Iterator<Item = &Series> {
        self.series.iter().filter(|s| s.is_visible())
    }

    /// Flat point buffers for every series that will be drawn.
    pub fn datapoints(&self) -> Vec<DataPoints> {
        self.visible_series().map(DataPoints::from_series).collect()
    }

    pub fn series_labels(&self) -> Vec<String> {
        self.series
            .iter()
            .map(|s| s.label.clone().unwrap_or_default())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::ComparePlugin;
    use crate::state::compare_config::CompareConfig;
    use crate::state::data_series::Point;

    fn chart() -> ChartState {
        ChartState::new(vec![
            Series::new("reference", vec![Point::new(1.0, 5.0), Point::new(2.0, 4.0)]),
            Series::new("subject", vec![Point::new(1.0, 6.0), Point::new(2.0, 1.0)])
                .with_compare(CompareConfig::against(0)),
        ])
    }

    #[test]
    fn assigns_palette_colors() {
        let chart = chart();
        assert_eq!(chart.series()[0].color, Some(Color::for_index(0)));
        assert_eq!(chart.series()[1].color, Some(Color::for_index(1)));
    }

    #[test]
    fn process_splits_and_hides_subject() {
        let mut chart = chart();
        chart.process(&[&ComparePlugin]);
        assert_eq!(chart.series().len(), 4);
        assert_eq!(chart.visible_series().count(), 3);
        assert_eq!(chart.series()[2].origin.map(|o| o.position), Some(1));
        assert_eq!(chart.datapoints().len(), 3);
        assert_eq!(chart.source().len(), 2);
    }

    #[test]
    fn reprocessing_rebuilds_instead_of_accumulating() {
        let mut chart = chart();
        chart.process(&[&ComparePlugin]);
        chart.process(&[&ComparePlugin]);
        assert_eq!(chart.series().len(), 4);
        assert!(chart.source()[1].is_visible());
    }

    #[test]
    fn source_edits_survive_processing() {
        let mut chart = chart();
        chart.source_mut()[1].compare.enabled = false;
        chart.process(&[&ComparePlugin]);
        assert_eq!(chart.series().len(), 2);
        assert!(chart.series()[1].is_visible());
    }

    #[test]
    fn no_plugins_leaves_series_alone() {
        let mut chart = chart();
        chart.process(&[]);
        assert_eq!(chart.series().len(), 2);
        assert_eq!(chart.series_labels(), vec!["reference", "subject"]);
    }
}
