use crate::processing::datapoints::PointFormat;
use crate::state::color::Color;
use crate::state::data_series::{next_series_id, Series, SeriesOrigin};

/// Builds an empty series that draws like `subject` in a single colour.
///
/// Each style group is cloned field by field into the new series, so later
/// edits to one derived series never reach its sibling or the subject. The
/// result has no label, no data and comparison switched off.
pub fn derive_series(subject: &Series, position: usize, color: Color, format: &PointFormat) -> Series {
    Series {
        id: next_series_id(),
        data: Vec::new(),
        label: None,
        color: Some(color),
        lines: subject.lines.clone(),
        bars: subject.bars.clone(),
        points: subject.points.clone(),
        xaxis: subject.xaxis,
        yaxis: subject.yaxis,
        shadow_size: subject.shadow_size,
        compare: subject.compare.disabled(),
        origin: Some(SeriesOrigin {
            id: subject.id,
            position,
        }),
        format: Some(format.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::compare_config::CompareConfig;
    use crate::state::data_series::Point;

    fn subject() -> Series {
        let mut s = Series::new("subject", vec![Point::new(1.0, 2.0)]).with_compare(CompareConfig::against(0));
        s.color = Some(Color::rgb(9, 9, 9));
        s.bars.show = true;
        s.points.radius = 7.0;
        s.yaxis = 2;
        s
    }

    #[test]
    fn copies_style_but_not_data_or_label() {
        let s = subject();
        let d = derive_series(&s, 4, Color::RED, &PointFormat::bars());
        assert!(d.data.is_empty());
        assert!(d.label.is_none());
        assert_eq!(d.color, Some(Color::RED));
        assert_eq!(d.bars, s.bars);
        assert_eq!(d.points.radius, 7.0);
        assert_eq!(d.yaxis, 2);
        assert!(!d.compare.enabled);
        assert_eq!(d.origin, Some(SeriesOrigin { id: s.id, position: 4 }));
        assert_eq!(d.format, Some(PointFormat::bars()));
        assert_ne!(d.id, s.id);
    }

    #[test]
    fn siblings_do_not_share_style() {
        let s = subject();
        let mut above = derive_series(&s, 0, Color::RED, &PointFormat::xy());
        let below = derive_series(&s, 0, Color::GREEN, &PointFormat::xy());
        above.lines.show = false;
        above.bars.bar_width = 0.1;
        assert!(below.lines.show);
        assert_eq!(below.bars.bar_width, s.bars.bar_width);
        assert!(s.lines.show);
    }
}
