use crate::processing::datapoints::PointFormat;
use crate::processing::derive::derive_series;
use crate::processing::lookup::ReferenceLookup;
use crate::state::data_series::Series;

/// What a call to [`partition`] did. Every variant except `Split` left the
/// series list untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionOutcome {
    /// No series at the given position.
    NoSubject,
    Disabled,
    SelfReference,
    MissingReference { reference_index: usize },
    Split { above: usize, below: usize },
}

impl PartitionOutcome {
    pub fn is_split(&self) -> bool {
        matches!(self, PartitionOutcome::Split { .. })
    }
}

/// Splits the series at `position` against its reference series, using the
/// subject's own tuple layout for the derived series.
pub fn partition(all_series: &mut Vec<Series>, position: usize) -> PartitionOutcome {
    let Some(subject) = all_series.get(position) else {
        return PartitionOutcome::NoSubject;
    };
    let format = PointFormat::for_series(subject);
    partition_with_format(all_series, position, &format)
}

/// Splits the series at `position` into an "above" series (value greater
/// than or equal to the reference value at the same key, or no reference
/// value at all) and a "below" series.
///
/// On a split the subject is hidden and the two derived series are pushed to
/// the end of `all_series`, above first. Points keep the subject's order.
/// Disabled comparison, self-reference and an out-of-range reference index
/// leave everything as it was.
///
/// Both series are read with the subject's orientation, even when the
/// reference is laid out differently.
pub fn partition_with_format(
    all_series: &mut Vec<Series>,
    position: usize,
    format: &PointFormat,
) -> PartitionOutcome {
    let Some(subject) = all_series.get(position) else {
        return PartitionOutcome::NoSubject;
    };
    let config = &subject.compare;
    if !config.enabled {
        return PartitionOutcome::Disabled;
    }
    if config.reference_index == position {
        tracing::debug!(position, "series compares against itself, skipping");
        return PartitionOutcome::SelfReference;
    }
    let Some(reference) = all_series.get(config.reference_index) else {
        tracing::debug!(
            position,
            reference_index = config.reference_index,
            series_count = all_series.len(),
            "reference series does not exist, skipping"
        );
        return PartitionOutcome::MissingReference {
            reference_index: config.reference_index,
        };
    };

    let orientation = subject.orientation();
    let lookup = ReferenceLookup::build(&reference.data, orientation);

    let mut above = derive_series(subject, position, config.color_above, format);
    let mut below = derive_series(subject, position, config.color_below, format);

    for point in &subject.data {
        let (key, value) = point.key_value(orientation);
        if lookup.is_below(key, value) {
            below.data.push(point.clone());
        } else {
            above.data.push(point.clone());
        }
    }

    let outcome = PartitionOutcome::Split {
        above: above.data.len(),
        below: below.data.len(),
    };
    tracing::debug!(
        position,
        reference_index = config.reference_index,
        orientation = orientation.label(),
        above = above.data.len(),
        below = below.data.len(),
        "partitioned series"
    );

    all_series[position].hide();
    all_series.push(above);
    all_series.push(below);
    outcome
}
